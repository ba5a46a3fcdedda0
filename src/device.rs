//! The resolved device: concrete interface and endpoint numbers.
//!
//! A [`ResolvedDevice`] is normally produced by [`crate::resolve`], but all
//! of its fields are public so that hand-declared tables can be expressed
//! in the same shape and checked by [`crate::validate`].

use heapless::Vec;

use crate::config::{MAX_ASSIGNMENTS, MAX_ENDPOINTS, MAX_ENDPOINT_NUMBER, MAX_INTERFACES};
use crate::endpoint::{EndpointConfig, EndpointRequirement};
use crate::interface::ClassCode;

/// Interface numbers owned by one functional interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterfaceAssignment<'a> {
    pub name: &'a str,
    /// First interface number of the range.
    pub first: u8,
    /// Length of the assigned range.
    pub count: u8,
    /// Group size the function asked for.
    pub group_size: u8,
    pub class: ClassCode,
    pub needs_iad: bool,
}

impl InterfaceAssignment<'_> {
    /// Interface numbers covered, widened so overflow cannot wrap.
    pub fn numbers(&self) -> core::ops::Range<u16> {
        let first = u16::from(self.first);
        first..first + u16::from(self.count)
    }
}

/// Endpoint number chosen for one requirement of one function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EndpointAssignment<'a> {
    pub interface: &'a str,
    /// Index of the requirement within its function.
    pub index: usize,
    pub number: u8,
    pub requirement: EndpointRequirement,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedDevice<'a> {
    pub profile: &'a str,
    pub interfaces: Vec<InterfaceAssignment<'a>, MAX_INTERFACES>,
    pub endpoints: Vec<EndpointAssignment<'a>, MAX_ASSIGNMENTS>,
    /// Merged config per endpoint number; index 0 is endpoint 1.
    pub configs: [EndpointConfig; MAX_ENDPOINTS],
    /// Shared buffer size per endpoint number; index 0 is endpoint 1.
    pub buffer_sizes: [u16; MAX_ENDPOINTS],
    pub num_interfaces: u8,
    /// Highest endpoint number in use.
    pub num_endpoints: u8,
    pub num_buffers: u16,
}

impl<'a> ResolvedDevice<'a> {
    /// Device with no interfaces or endpoints.
    pub fn new(profile: &'a str) -> Self {
        Self {
            profile,
            interfaces: Vec::new(),
            endpoints: Vec::new(),
            configs: [EndpointConfig::Unused; MAX_ENDPOINTS],
            buffer_sizes: [0; MAX_ENDPOINTS],
            num_interfaces: 0,
            num_endpoints: 0,
            num_buffers: 0,
        }
    }

    /// Config of endpoint `number`; `Unused` for 0 and out-of-range numbers.
    pub fn config(&self, number: u8) -> EndpointConfig {
        slot(number).map_or(EndpointConfig::Unused, |i| self.configs[i])
    }

    pub fn buffer_size(&self, number: u8) -> u16 {
        slot(number).map_or(0, |i| self.buffer_sizes[i])
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceAssignment<'a>> {
        self.interfaces.iter().find(|a| a.name == name)
    }

    /// Endpoint number assigned to requirement `index` of function `name`.
    pub fn endpoint(&self, name: &str, index: usize) -> Option<u8> {
        self.endpoints
            .iter()
            .find(|a| a.interface == name && a.index == index)
            .map(|a| a.number)
    }

    /// All claims on endpoint `number`.
    pub fn claims(&self, number: u8) -> impl Iterator<Item = &EndpointAssignment<'a>> {
        self.endpoints.iter().filter(move |a| a.number == number)
    }

    /// Configs of endpoints `1..=num_endpoints`.
    pub fn active_configs(&self) -> &[EndpointConfig] {
        let len = usize::from(self.num_endpoints).min(MAX_ENDPOINTS);
        &self.configs[..len]
    }

    /// Highest number any assignment claims, ignoring 0 and numbers past
    /// the architectural ceiling.
    pub fn highest_claimed(&self) -> u8 {
        self.endpoints
            .iter()
            .map(|a| a.number)
            .filter(|&n| slot(n).is_some())
            .max()
            .unwrap_or(0)
    }
}

/// Table slot of endpoint `number`, if it has one.
pub(crate) fn slot(number: u8) -> Option<usize> {
    if (1..=MAX_ENDPOINT_NUMBER).contains(&number) {
        Some(usize::from(number) - 1)
    } else {
        None
    }
}
