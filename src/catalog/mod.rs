//! Built-in device profiles.
//!
//! Serial ports, HID (keyboard, mouse, joystick, media keys, touchscreen,
//! raw HID, flight sim), MIDI, MTP, audio and XInput, alone and in
//! composites. Every profile carries its hand-maintained [`DeclaredTable`]
//! so the two can be compared with [`crate::audit`].
//!
//! ```
//! use usb_profile::{build, catalog};
//!
//! let entry = catalog::find("serial_hid").unwrap();
//! let meta = build(&entry.spec).unwrap();
//! assert_eq!(meta.num_interfaces, 6);
//! assert_eq!(meta.num_endpoints, 7);
//! ```

#[macro_use]
mod functions;
mod profiles;

pub use profiles::*;

use crate::audit::DeclaredTable;
use crate::interface::ProfileSpec;

/// A profile and the table it used to be declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CatalogEntry {
    pub spec: ProfileSpec<'static>,
    pub declared: DeclaredTable<'static>,
}

impl CatalogEntry {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }
}

/// All profiles, in menu order.
pub static PROFILES: [CatalogEntry; 24] = [
    SERIAL,
    DUAL_SERIAL,
    TRIPLE_SERIAL,
    KEYBOARD_ONLY,
    HID,
    SERIAL_HID,
    TOUCHSCREEN,
    HID_TOUCHSCREEN,
    MIDI,
    MIDI4,
    MIDI16,
    MIDI_SERIAL,
    MIDI4_SERIAL,
    MIDI16_SERIAL,
    RAWHID,
    FLIGHTSIM,
    FLIGHTSIM_JOYSTICK,
    MTP_DISK,
    AUDIO,
    MIDI_AUDIO_SERIAL,
    MIDI16_AUDIO_SERIAL,
    EVERYTHING,
    XINPUT,
    XINPUT_KEYBOARD_MOUSE,
];

/// Look up a profile by name.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    PROFILES.iter().find(|entry| entry.spec.name == name)
}
