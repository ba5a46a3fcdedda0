//! Functional interfaces and profile specifications.

use crate::endpoint::EndpointRequirement;

/// USB class / subclass / protocol triad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassCode {
    pub class: u8,
    pub subclass: u8,
    pub protocol: u8,
}

impl ClassCode {
    pub const fn new(class: u8, subclass: u8, protocol: u8) -> Self {
        Self {
            class,
            subclass,
            protocol,
        }
    }

    /// Class defined per interface.
    pub const NONE: Self = Self::new(0x00, 0x00, 0x00);
    /// Audio Control (first interface of an audio function).
    pub const AUDIO: Self = Self::new(0x01, 0x01, 0x00);
    /// Audio / MIDI Streaming.
    pub const MIDI: Self = Self::new(0x01, 0x03, 0x00);
    /// Communications device class, at device level.
    pub const CDC: Self = Self::new(0x02, 0x00, 0x00);
    /// CDC Abstract Control Model, AT commands.
    pub const CDC_ACM: Self = Self::new(0x02, 0x02, 0x01);
    /// HID, no boot protocol.
    pub const HID: Self = Self::new(0x03, 0x00, 0x00);
    /// HID boot-protocol keyboard.
    pub const HID_BOOT_KEYBOARD: Self = Self::new(0x03, 0x01, 0x01);
    /// HID boot-protocol mouse.
    pub const HID_BOOT_MOUSE: Self = Self::new(0x03, 0x01, 0x02);
    /// Still Image class, PIMA 15740 (MTP).
    pub const MTP: Self = Self::new(0x06, 0x01, 0x01);
    /// Mass Storage, SCSI transparent, bulk-only.
    pub const MASS_STORAGE: Self = Self::new(0x08, 0x06, 0x50);
    /// Device class for composites that use interface association.
    pub const MISC_IAD: Self = Self::new(0xEF, 0x02, 0x01);
    /// Vendor-specific gamepad (XInput).
    pub const XINPUT: Self = Self::new(0xFF, 0x5D, 0x01);
}

/// A named capability the device exposes, e.g. "keyboard" or "serial".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FunctionalInterface<'a> {
    /// Unique within its profile.
    pub name: &'a str,
    pub class: ClassCode,
    /// Declaration order drives default endpoint numbering.
    pub endpoints: &'a [EndpointRequirement],
    /// Consecutive interface numbers this function occupies.
    pub group_size: u8,
    /// Group the interfaces under an Interface Association Descriptor.
    pub needs_iad: bool,
}

impl<'a> FunctionalInterface<'a> {
    /// Single-interface function.
    pub const fn new(name: &'a str, class: ClassCode, endpoints: &'a [EndpointRequirement]) -> Self {
        Self {
            name,
            class,
            endpoints,
            group_size: 1,
            needs_iad: false,
        }
    }

    /// Occupy `group_size` consecutive interfaces, optionally under an IAD.
    pub const fn grouped(mut self, group_size: u8, needs_iad: bool) -> Self {
        self.group_size = group_size;
        self.needs_iad = needs_iad;
        self
    }
}

/// One selectable device profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileSpec<'a> {
    pub name: &'a str,
    /// Declaration order drives interface numbering.
    pub interfaces: &'a [FunctionalInterface<'a>],
}

impl<'a> ProfileSpec<'a> {
    pub const fn new(name: &'a str, interfaces: &'a [FunctionalInterface<'a>]) -> Self {
        Self { name, interfaces }
    }

    pub fn function(&self, name: &str) -> Option<&FunctionalInterface<'a>> {
        self.interfaces.iter().find(|f| f.name == name)
    }

    /// Sum of all group sizes.
    pub fn interface_count(&self) -> usize {
        self.interfaces.iter().map(|f| f.group_size as usize).sum()
    }

    pub fn requirement_count(&self) -> usize {
        self.interfaces.iter().map(|f| f.endpoints.len()).sum()
    }
}
