//! Platform ceilings and policy constants.
//!
//! Everything the resolver treats as "the platform" lives here so it can be
//! tuned in one place. Callers pass a [`Platform`] explicitly; there is no
//! global configuration.

use crate::endpoint::EndpointConfig;

// USB architecture

/// Highest endpoint number (4-bit endpoint address field).
pub const MAX_ENDPOINT_NUMBER: u8 = 15;

/// Number of assignable endpoint numbers (1..=15).
pub const MAX_ENDPOINTS: usize = MAX_ENDPOINT_NUMBER as usize;

/// Platform ceiling on interfaces per configuration.
pub const MAX_INTERFACES: usize = 15;

/// At most two complementary claims can share one endpoint number.
pub const MAX_ASSIGNMENTS: usize = 2 * MAX_ENDPOINTS;

/// Largest wMaxPacketSize any endpoint may declare.
pub const MAX_PACKET_SIZE: u16 = 1024;

// Buffer pool sizing

/// Buffers allocated per enabled direction (double-buffered).
pub const BUFFERS_PER_DIRECTION: u16 = 2;

/// Additional buffers per isochronous direction for DMA alignment.
pub const ISOCHRONOUS_EXTRA_BUFFERS: u16 = 0;

// Validation

/// Capacity of a validation report.
pub const MAX_VIOLATIONS: usize = 128;

/// How a requirement without a preferred number picks its endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Placement {
    /// Take the lowest number nobody has claimed yet.
    #[default]
    Exclusive,
    /// Take the lowest number whose current claim is complementary,
    /// sharing it when possible.
    ShareComplementary,
}

/// Buffer pool sizing policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BufferPolicy {
    pub per_direction: u16,
    pub isochronous_extra: u16,
}

impl BufferPolicy {
    pub const DEFAULT: Self = Self {
        per_direction: BUFFERS_PER_DIRECTION,
        isochronous_extra: ISOCHRONOUS_EXTRA_BUFFERS,
    };

    /// Buffers one endpoint number needs: 2 when unidirectional, 4 when
    /// bidirectional, plus the isochronous surcharge per direction.
    pub const fn buffers_for(&self, config: EndpointConfig) -> u16 {
        let directions = config.directions();
        let mut total = directions * self.per_direction;
        if config.is_isochronous() {
            total += directions * self.isochronous_extra;
        }
        total
    }

    /// Total pool size for a configuration table.
    pub fn pool_size(&self, configs: &[EndpointConfig]) -> u16 {
        configs
            .iter()
            .map(|&config| self.buffers_for(config))
            .fold(0u16, u16::saturating_add)
    }
}

impl Default for BufferPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The platform a profile is resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Platform {
    /// Highest endpoint number the peripheral implements.
    pub max_endpoint: u8,
    /// Highest number of interfaces the descriptor table may carry.
    pub max_interfaces: u8,
    /// Lowest number automatic placement considers.
    pub first_auto_endpoint: u8,
    pub placement: Placement,
    pub buffers: BufferPolicy,
}

impl Platform {
    pub const DEFAULT: Self = Self {
        max_endpoint: MAX_ENDPOINT_NUMBER,
        max_interfaces: MAX_INTERFACES as u8,
        first_auto_endpoint: 1,
        placement: Placement::Exclusive,
        buffers: BufferPolicy::DEFAULT,
    };

    /// Effective endpoint ceiling, never above the architectural limit.
    pub const fn endpoint_ceiling(&self) -> u8 {
        if self.max_endpoint < MAX_ENDPOINT_NUMBER {
            self.max_endpoint
        } else {
            MAX_ENDPOINT_NUMBER
        }
    }

    /// Effective interface ceiling, never above the storage capacity.
    pub const fn interface_ceiling(&self) -> u8 {
        if (self.max_interfaces as usize) < MAX_INTERFACES {
            self.max_interfaces
        } else {
            MAX_INTERFACES as u8
        }
    }

    /// First number automatic placement may use; endpoint 0 is never
    /// considered.
    pub const fn auto_start(&self) -> u8 {
        if self.first_auto_endpoint == 0 {
            1
        } else {
            self.first_auto_endpoint
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::DEFAULT
    }
}
