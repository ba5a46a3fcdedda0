//! Endpoint requirements and the per-number endpoint configuration.
//!
//! An [`EndpointConfig`] is the value the endpoint-control register of the
//! USB peripheral is programmed with. The encoding is a small bitfield:
//!
//! ```text
//! Bit 0: Handshake enable (clear for isochronous)
//! Bit 2: Transmit (IN) enable
//! Bit 3: Receive (OUT) enable
//! Bit 4: Control transfers disabled (set on every non-zero endpoint)
//! ```
//!
//! Only seven combinations are meaningful, so the config is a closed enum
//! and two claims on one number are combined with [`EndpointConfig::merge`]
//! rather than by OR-ing loose bits.

use core::fmt;

use crate::config::MAX_PACKET_SIZE;

const HANDSHAKE: u8 = 0x01;
const TX_ENABLE: u8 = 0x04;
const RX_ENABLE: u8 = 0x08;
const CONTROL_DISABLE: u8 = 0x10;

/// Direction of one endpoint requirement, seen from the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Device to host (IN).
    Transmit,
    /// Host to device (OUT).
    Receive,
    /// Both directions of one number claimed by a single requirement.
    TransmitReceive,
    /// Isochronous IN.
    TransmitIsochronous,
    /// Isochronous OUT.
    ReceiveIsochronous,
}

impl Direction {
    /// The endpoint config this direction occupies on its own.
    pub const fn config(self) -> EndpointConfig {
        match self {
            Direction::Transmit => EndpointConfig::TransmitOnly,
            Direction::Receive => EndpointConfig::ReceiveOnly,
            Direction::TransmitReceive => EndpointConfig::TransmitAndReceive,
            Direction::TransmitIsochronous => EndpointConfig::TransmitIsochronous,
            Direction::ReceiveIsochronous => EndpointConfig::ReceiveIsochronous,
        }
    }

    pub const fn is_isochronous(self) -> bool {
        matches!(
            self,
            Direction::TransmitIsochronous | Direction::ReceiveIsochronous
        )
    }
}

/// USB transfer type of an endpoint requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferType {
    Bulk,
    Interrupt,
    Isochronous,
}

/// One logical channel requested by a functional interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EndpointRequirement {
    pub direction: Direction,
    pub transfer: TransferType,
    /// wMaxPacketSize, 1..=1024.
    pub max_packet_size: u16,
    /// bInterval; required for interrupt and isochronous transfers only.
    pub poll_interval: Option<u8>,
    /// Endpoint number hint, 1..=15. Binding when present.
    pub preferred_number: Option<u8>,
}

impl EndpointRequirement {
    /// Bulk requirement without an interval.
    pub const fn bulk(direction: Direction, max_packet_size: u16) -> Self {
        Self {
            direction,
            transfer: TransferType::Bulk,
            max_packet_size,
            poll_interval: None,
            preferred_number: None,
        }
    }

    /// Interrupt requirement polled every `interval` frames.
    pub const fn interrupt(direction: Direction, max_packet_size: u16, interval: u8) -> Self {
        Self {
            direction,
            transfer: TransferType::Interrupt,
            max_packet_size,
            poll_interval: Some(interval),
            preferred_number: None,
        }
    }

    /// Isochronous requirement. `direction` should be one of the
    /// isochronous variants; anything else is reported as a transfer
    /// mismatch during resolution.
    pub const fn isochronous(direction: Direction, max_packet_size: u16, interval: u8) -> Self {
        Self {
            direction,
            transfer: TransferType::Isochronous,
            max_packet_size,
            poll_interval: Some(interval),
            preferred_number: None,
        }
    }

    /// Pin this requirement to endpoint `number`.
    pub const fn at(mut self, number: u8) -> Self {
        self.preferred_number = Some(number);
        self
    }

    /// Drop the poll interval.
    pub const fn without_interval(mut self) -> Self {
        self.poll_interval = None;
        self
    }

    pub const fn needs_interval(&self) -> bool {
        !matches!(self.transfer, TransferType::Bulk)
    }

    pub const fn missing_interval(&self) -> bool {
        self.needs_interval() && self.poll_interval.is_none()
    }

    pub const fn unexpected_interval(&self) -> bool {
        !self.needs_interval() && self.poll_interval.is_some()
    }

    pub const fn packet_size_valid(&self) -> bool {
        self.max_packet_size > 0 && self.max_packet_size <= MAX_PACKET_SIZE
    }

    /// Isochronous directions go with isochronous transfers and nothing else.
    pub const fn transfer_consistent(&self) -> bool {
        self.direction.is_isochronous() == matches!(self.transfer, TransferType::Isochronous)
    }
}

/// Configuration of one endpoint number.
///
/// Discriminants are the register bytes written into the endpoint
/// configuration table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EndpointConfig {
    #[default]
    Unused = 0x00,
    TransmitOnly = CONTROL_DISABLE | TX_ENABLE | HANDSHAKE,
    ReceiveOnly = CONTROL_DISABLE | RX_ENABLE | HANDSHAKE,
    TransmitAndReceive = CONTROL_DISABLE | TX_ENABLE | RX_ENABLE | HANDSHAKE,
    TransmitIsochronous = CONTROL_DISABLE | TX_ENABLE,
    ReceiveIsochronous = CONTROL_DISABLE | RX_ENABLE,
    TransmitAndReceiveIsochronous = CONTROL_DISABLE | TX_ENABLE | RX_ENABLE,
}

impl EndpointConfig {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Decode a register byte. Returns `None` for bit patterns outside the
    /// seven defined configurations.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(EndpointConfig::Unused),
            0x15 => Some(EndpointConfig::TransmitOnly),
            0x19 => Some(EndpointConfig::ReceiveOnly),
            0x1D => Some(EndpointConfig::TransmitAndReceive),
            0x14 => Some(EndpointConfig::TransmitIsochronous),
            0x18 => Some(EndpointConfig::ReceiveIsochronous),
            0x1C => Some(EndpointConfig::TransmitAndReceiveIsochronous),
            _ => None,
        }
    }

    /// Combine two claims on the same endpoint number.
    ///
    /// Only complementary halves combine: transmit with receive, and
    /// isochronous transmit with isochronous receive. Everything else,
    /// including a second claim of an already-claimed direction, is a
    /// conflict.
    pub const fn merge(self, other: Self) -> Option<Self> {
        use EndpointConfig::*;
        match (self, other) {
            (Unused, x) | (x, Unused) => Some(x),
            (TransmitOnly, ReceiveOnly) | (ReceiveOnly, TransmitOnly) => Some(TransmitAndReceive),
            (TransmitIsochronous, ReceiveIsochronous)
            | (ReceiveIsochronous, TransmitIsochronous) => Some(TransmitAndReceiveIsochronous),
            _ => None,
        }
    }

    pub const fn is_used(self) -> bool {
        !matches!(self, EndpointConfig::Unused)
    }

    pub const fn transmits(self) -> bool {
        self.as_byte() & TX_ENABLE != 0
    }

    pub const fn receives(self) -> bool {
        self.as_byte() & RX_ENABLE != 0
    }

    pub const fn is_isochronous(self) -> bool {
        self.is_used() && self.as_byte() & HANDSHAKE == 0
    }

    /// Number of enabled directions (0, 1 or 2).
    pub const fn directions(self) -> u16 {
        self.transmits() as u16 + self.receives() as u16
    }
}

impl fmt::Display for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EndpointConfig::Unused => "unused",
            EndpointConfig::TransmitOnly => "transmit-only",
            EndpointConfig::ReceiveOnly => "receive-only",
            EndpointConfig::TransmitAndReceive => "transmit-and-receive",
            EndpointConfig::TransmitIsochronous => "transmit-isochronous",
            EndpointConfig::ReceiveIsochronous => "receive-isochronous",
            EndpointConfig::TransmitAndReceiveIsochronous => "transmit-and-receive-isochronous",
        })
    }
}
