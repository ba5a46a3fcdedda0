//! The profile table.
//!
//! Each entry pairs a profile with the counts and endpoint table that were
//! maintained by hand before the resolver existed. Endpoint numbers and
//! interface order match those tables exactly; the resolver reproduces the
//! same layout from the preferred numbers.

use super::functions::*;
use super::CatalogEntry;
use crate::endpoint::EndpointConfig::{
    ReceiveIsochronous as RXI, ReceiveOnly as RX, TransmitAndReceive as TXRX,
    TransmitAndReceiveIsochronous as TXRXI, TransmitIsochronous as TXI, TransmitOnly as TX, Unused as OFF,
};

// ═══════════════════════════════════════════════════════════════════════════
// Serial
// ═══════════════════════════════════════════════════════════════════════════

pub const SERIAL: CatalogEntry = CatalogEntry {
    spec: profile!("serial", [cdc!("serial", 2, 3, 4, iad: false)]),
    declared: declared!(endpoints: 4, interfaces: 2, buffers: 12, [OFF, TX, RX, TX]),
};

pub const DUAL_SERIAL: CatalogEntry = CatalogEntry {
    spec: profile!(
        "dual_serial",
        [
            cdc!("serial", 2, 3, 4, iad: true),
            cdc!("serial2", 5, 6, 7, iad: true),
        ]
    ),
    declared: declared!(
        endpoints: 7, interfaces: 4, buffers: 22,
        [OFF, TX, RX, TX, TX, RX, TX]
    ),
};

pub const TRIPLE_SERIAL: CatalogEntry = CatalogEntry {
    spec: profile!(
        "triple_serial",
        [
            cdc!("serial", 2, 3, 4, iad: true),
            cdc!("serial2", 5, 6, 7, iad: true),
            cdc!("serial3", 8, 9, 10, iad: true),
        ]
    ),
    declared: declared!(
        endpoints: 10, interfaces: 6, buffers: 32,
        [OFF, TX, RX, TX, TX, RX, TX, TX, RX, TX]
    ),
};

// ═══════════════════════════════════════════════════════════════════════════
// HID
// ═══════════════════════════════════════════════════════════════════════════

/// The table configures endpoints 5 and 6 although nothing uses them and
/// `num_endpoints` stops at 4.
pub const KEYBOARD_ONLY: CatalogEntry = CatalogEntry {
    spec: profile!("keyboard_only", [keyboard!(3), seremu!(1, 2), keymedia!(4)]),
    declared: declared!(
        endpoints: 4, interfaces: 3, buffers: 14,
        [TX, RX, TX, TX, TX, TX]
    ),
};

pub const HID: CatalogEntry = CatalogEntry {
    spec: profile!(
        "hid",
        [
            keyboard!(3),
            mouse!(5, interval: 1),
            seremu!(1, 2),
            joystick!(4, interval: 2),
            keymedia!(6),
        ]
    ),
    declared: declared!(
        endpoints: 6, interfaces: 5, buffers: 24,
        [TX, RX, TX, TX, TX, TX]
    ),
};

pub const SERIAL_HID: CatalogEntry = CatalogEntry {
    spec: profile!(
        "serial_hid",
        [
            cdc!("serial", 2, 3, 4, iad: true),
            keyboard!(1),
            mouse!(5, interval: 2),
            joystick!(6, interval: 1),
            keymedia!(7),
        ]
    ),
    declared: declared!(
        endpoints: 7, interfaces: 6, buffers: 30,
        [TX, TX, RX, TX, TX, TX, TX]
    ),
};

pub const TOUCHSCREEN: CatalogEntry = CatalogEntry {
    spec: profile!(
        "touchscreen",
        [
            keyboard!(3),
            seremu!(1, 2),
            keymedia!(4),
            multitouch!(5, size: 16),
        ]
    ),
    declared: declared!(
        endpoints: 5, interfaces: 4, buffers: 15,
        [TX, RX, TX, TX, TX]
    ),
};

pub const HID_TOUCHSCREEN: CatalogEntry = CatalogEntry {
    spec: profile!(
        "hid_touchscreen",
        [
            keyboard!(3),
            mouse!(6, interval: 2),
            seremu!(1, 2),
            keymedia!(4),
            multitouch!(5, size: 16),
        ]
    ),
    declared: declared!(
        endpoints: 6, interfaces: 5, buffers: 20,
        [TX, RX, TX, TX, TX, TX]
    ),
};

pub const RAWHID: CatalogEntry = CatalogEntry {
    spec: profile!("rawhid", [rawhid!(3, 4), seremu!(1, 2)]),
    declared: declared!(endpoints: 4, interfaces: 2, buffers: 12, [TX, RX, TX, RX]),
};

pub const FLIGHTSIM: CatalogEntry = CatalogEntry {
    spec: profile!("flightsim", [flightsim!(3, 4), seremu!(1, 2)]),
    declared: declared!(endpoints: 4, interfaces: 2, buffers: 20, [TX, RX, TX, RX]),
};

pub const FLIGHTSIM_JOYSTICK: CatalogEntry = CatalogEntry {
    spec: profile!(
        "flightsim_joystick",
        [flightsim!(3, 4), seremu!(1, 2), joystick!(5, interval: 1)]
    ),
    declared: declared!(
        endpoints: 5, interfaces: 3, buffers: 20,
        [TX, RX, TX, RX, TX]
    ),
};

// ═══════════════════════════════════════════════════════════════════════════
// MIDI
// ═══════════════════════════════════════════════════════════════════════════

pub const MIDI: CatalogEntry = CatalogEntry {
    spec: profile!("midi", [midi!(3, 4), seremu!(1, 2)]),
    declared: declared!(endpoints: 4, interfaces: 2, buffers: 16, [TX, RX, TX, RX]),
};

pub const MIDI4: CatalogEntry = CatalogEntry {
    spec: profile!("midi4", [midi!(3, 4), seremu!(1, 2)]),
    declared: declared!(endpoints: 4, interfaces: 2, buffers: 16, [TX, RX, TX, RX]),
};

pub const MIDI16: CatalogEntry = CatalogEntry {
    spec: profile!("midi16", [midi!(3, 4), seremu!(1, 2)]),
    declared: declared!(endpoints: 4, interfaces: 2, buffers: 16, [TX, RX, TX, RX]),
};

pub const MIDI_SERIAL: CatalogEntry = CatalogEntry {
    spec: profile!("midi_serial", [cdc!("serial", 1, 2, 3, iad: true), midi!(4, 5)]),
    declared: declared!(
        endpoints: 5, interfaces: 3, buffers: 30,
        [TX, RX, TX, TX, RX]
    ),
};

pub const MIDI4_SERIAL: CatalogEntry = CatalogEntry {
    spec: profile!("midi4_serial", [cdc!("serial", 1, 2, 3, iad: true), midi!(4, 5)]),
    declared: declared!(
        endpoints: 5, interfaces: 3, buffers: 30,
        [TX, RX, TX, TX, RX]
    ),
};

pub const MIDI16_SERIAL: CatalogEntry = CatalogEntry {
    spec: profile!("midi16_serial", [cdc!("serial", 1, 2, 3, iad: true), midi!(4, 5)]),
    declared: declared!(
        endpoints: 5, interfaces: 3, buffers: 30,
        [TX, RX, TX, TX, RX]
    ),
};

// ═══════════════════════════════════════════════════════════════════════════
// Storage & Audio
// ═══════════════════════════════════════════════════════════════════════════

/// The table marks the event endpoint (4) receive-only; the event
/// endpoint transmits.
pub const MTP_DISK: CatalogEntry = CatalogEntry {
    spec: profile!("mtp_disk", [mtp!(3, 3, 4), seremu!(1, 2)]),
    declared: declared!(endpoints: 4, interfaces: 2, buffers: 20, [TX, RX, TXRX, RX]),
};

pub const AUDIO: CatalogEntry = CatalogEntry {
    spec: profile!("audio", [seremu!(1, 2), audio!(3, 4, 5)]),
    declared: declared!(
        endpoints: 5, interfaces: 4, buffers: 16,
        [TX, RX, TXI, RXI, TXI]
    ),
};

pub const MIDI_AUDIO_SERIAL: CatalogEntry = CatalogEntry {
    spec: profile!(
        "midi_audio_serial",
        [cdc!("serial", 1, 2, 3, iad: true), midi!(4, 5), audio!(6, 7, 8)]
    ),
    declared: declared!(
        endpoints: 8, interfaces: 6, buffers: 30,
        [TX, RX, TX, TX, RX, TXI, RXI, TXI]
    ),
};

pub const MIDI16_AUDIO_SERIAL: CatalogEntry = CatalogEntry {
    spec: profile!(
        "midi16_audio_serial",
        [cdc!("serial", 1, 2, 3, iad: true), midi!(4, 5), audio!(6, 7, 8)]
    ),
    declared: declared!(
        endpoints: 8, interfaces: 6, buffers: 30,
        [TX, RX, TX, TX, RX, TXI, RXI, TXI]
    ),
};

// ═══════════════════════════════════════════════════════════════════════════
// Composite
// ═══════════════════════════════════════════════════════════════════════════

/// Every class at once, with data endpoints doubled up to fit in 15.
///
/// The table still configures 7, 8 and 11 from an earlier layout (MTP
/// used 11) and its 31 buffers fall short of the 44 those configs need.
pub const EVERYTHING: CatalogEntry = CatalogEntry {
    spec: profile!(
        "everything",
        [
            cdc!("serial", 1, 2, 2, iad: true),
            midi!(3, 3),
            keyboard!(4),
            mouse!(5, interval: 2),
            rawhid!(6, 6),
            flightsim!(9, 9),
            joystick!(10, interval: 1),
            keymedia!(12),
            audio!(13, 13, 14),
            multitouch!(15, size: 8),
        ]
    ),
    declared: declared!(
        endpoints: 15, interfaces: 13, buffers: 31,
        [TX, TXRX, TXRX, TX, TX, TXRX, TXRX, TX, TXRX, TX, TXRX, TX, TXRXI, TXI, TX]
    ),
};

// ═══════════════════════════════════════════════════════════════════════════
// XInput
// ═══════════════════════════════════════════════════════════════════════════

/// The XInput interface must be interface 0 on endpoints 1 and 2.
pub const XINPUT: CatalogEntry = CatalogEntry {
    spec: profile!("xinput", [xinput!()]),
    declared: declared!(endpoints: 2, interfaces: 1, buffers: 24, [TX, RX]),
};

pub const XINPUT_KEYBOARD_MOUSE: CatalogEntry = CatalogEntry {
    spec: profile!(
        "xinput_keyboard_mouse",
        [xinput!(), keyboard!(3), mouse!(4, interval: 1)]
    ),
    declared: declared!(endpoints: 4, interfaces: 3, buffers: 24, [TX, RX, TX, TX]),
};
