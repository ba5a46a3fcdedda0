//! Device metadata tables consumed by the descriptor and endpoint setup
//! code: per-endpoint config bytes, counts, buffer pool size and IAD
//! grouping.
//!
//! [`emit`] is a pure function of the resolved device. The endpoint table
//! covers `1..=num_endpoints`; entry 0 is endpoint 1.

use heapless::Vec;

use crate::config::{MAX_ENDPOINTS, MAX_INTERFACES};
use crate::device::ResolvedDevice;
use crate::endpoint::EndpointConfig;
use crate::interface::ClassCode;

/// An Interface Association Descriptor to emit ahead of a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IadGroup {
    pub first_interface: u8,
    pub interface_count: u8,
    pub class: ClassCode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceMetadata {
    /// Config of endpoints `1..=num_endpoints`.
    pub endpoint_configs: Vec<EndpointConfig, MAX_ENDPOINTS>,
    /// Buffer size per endpoint, parallel to `endpoint_configs`.
    pub buffer_sizes: Vec<u16, MAX_ENDPOINTS>,
    pub num_interfaces: u8,
    pub num_endpoints: u8,
    pub num_buffers: u16,
    /// Groups in interface order.
    pub iad_groups: Vec<IadGroup, MAX_INTERFACES>,
    /// Class of the only function, when the device has exactly one.
    pub sole_function: Option<ClassCode>,
    /// Microsoft OS descriptor compatible-ID sections: one per IAD group
    /// plus one per interface outside any group.
    pub num_compat_ids: u8,
}

impl DeviceMetadata {
    /// Register bytes of `endpoint_configs`.
    pub fn config_bytes(&self) -> Vec<u8, MAX_ENDPOINTS> {
        self.endpoint_configs.iter().map(|c| c.as_byte()).collect()
    }

    /// Config of endpoint `number`, `Unused` past `num_endpoints`.
    pub fn config(&self, number: u8) -> EndpointConfig {
        usize::from(number)
            .checked_sub(1)
            .and_then(|i| self.endpoint_configs.get(i))
            .copied()
            .unwrap_or(EndpointConfig::Unused)
    }

    /// Device descriptor class triad: the IAD composite triad when any
    /// group needs an association descriptor, the communications class
    /// for a lone CDC function, otherwise zeros (class defined per
    /// interface).
    pub fn device_class(&self) -> ClassCode {
        if !self.iad_groups.is_empty() {
            return ClassCode::MISC_IAD;
        }
        match self.sole_function {
            Some(class) if class.class == ClassCode::CDC.class => ClassCode::CDC,
            _ => ClassCode::NONE,
        }
    }
}

/// Build the metadata tables for `device`.
pub fn emit(device: &ResolvedDevice<'_>) -> DeviceMetadata {
    let active = device.active_configs();

    let mut endpoint_configs = Vec::new();
    let mut buffer_sizes = Vec::new();
    // Both tables hold at most MAX_ENDPOINTS entries, the size of `active`.
    for (i, &config) in active.iter().enumerate() {
        let _ = endpoint_configs.push(config);
        let _ = buffer_sizes.push(device.buffer_sizes[i]);
    }

    let mut iad_groups = Vec::new();
    let mut num_compat_ids: u8 = 0;
    for assignment in &device.interfaces {
        if assignment.needs_iad {
            let _ = iad_groups.push(IadGroup {
                first_interface: assignment.first,
                interface_count: assignment.count,
                class: assignment.class,
            });
            num_compat_ids = num_compat_ids.saturating_add(1);
        } else {
            num_compat_ids = num_compat_ids.saturating_add(assignment.count);
        }
    }

    let sole_function = match device.interfaces.as_slice() {
        [only] => Some(only.class),
        _ => None,
    };

    trace!(
        "{}: emitted {} endpoint(s), {} IAD group(s)",
        device.profile,
        endpoint_configs.len(),
        iad_groups.len()
    );

    DeviceMetadata {
        endpoint_configs,
        buffer_sizes,
        num_interfaces: device.num_interfaces,
        num_endpoints: device.num_endpoints,
        num_buffers: device.num_buffers,
        iad_groups,
        sole_function,
        num_compat_ids,
    }
}
