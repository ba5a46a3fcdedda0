//! Building blocks for the catalog: one macro per class function.
//!
//! Every macro expands to a `FunctionalInterface` struct literal so that
//! the nested endpoint slices live in `'static` memory when used inside a
//! `const` item. Endpoint numbers are always explicit here since the
//! catalog reproduces existing layouts.

use crate::endpoint::{Direction, EndpointRequirement};

// Requirement templates, numbered at the use site with `.at(n)`.

pub(super) const SEREMU_TX: EndpointRequirement = EndpointRequirement::interrupt(Direction::Transmit, 64, 1);
pub(super) const SEREMU_RX: EndpointRequirement = EndpointRequirement::interrupt(Direction::Receive, 32, 2);

pub(super) const CDC_STATUS: EndpointRequirement = EndpointRequirement::interrupt(Direction::Transmit, 16, 64);
pub(super) const CDC_RX: EndpointRequirement = EndpointRequirement::bulk(Direction::Receive, 64);
pub(super) const CDC_TX: EndpointRequirement = EndpointRequirement::bulk(Direction::Transmit, 64);

pub(super) const MIDI_TX: EndpointRequirement = EndpointRequirement::bulk(Direction::Transmit, 64);
pub(super) const MIDI_RX: EndpointRequirement = EndpointRequirement::bulk(Direction::Receive, 64);

pub(super) const HID_TX_64: EndpointRequirement = EndpointRequirement::interrupt(Direction::Transmit, 64, 1);
pub(super) const HID_RX_64: EndpointRequirement = EndpointRequirement::interrupt(Direction::Receive, 64, 1);

pub(super) const MTP_TX: EndpointRequirement = EndpointRequirement::bulk(Direction::Transmit, 64);
pub(super) const MTP_RX: EndpointRequirement = EndpointRequirement::bulk(Direction::Receive, 64);
pub(super) const MTP_EVENT: EndpointRequirement = EndpointRequirement::interrupt(Direction::Transmit, 16, 10);

pub(super) const AUDIO_TX: EndpointRequirement =
    EndpointRequirement::isochronous(Direction::TransmitIsochronous, 180, 1);
pub(super) const AUDIO_RX: EndpointRequirement =
    EndpointRequirement::isochronous(Direction::ReceiveIsochronous, 180, 1);
pub(super) const AUDIO_SYNC: EndpointRequirement =
    EndpointRequirement::isochronous(Direction::TransmitIsochronous, 3, 1);

pub(super) const XINPUT_TX: EndpointRequirement = EndpointRequirement::interrupt(Direction::Transmit, 20, 4);
pub(super) const XINPUT_RX: EndpointRequirement = EndpointRequirement::interrupt(Direction::Receive, 8, 8);

/// Function literal with explicit grouping.
macro_rules! function {
    ($name:literal, $class:ident, [$($ep:expr),* $(,)?]) => {
        function!($name, $class, [$($ep),*], 1, false)
    };
    ($name:literal, $class:ident, [$($ep:expr),* $(,)?], $group:literal, $iad:literal) => {
        $crate::interface::FunctionalInterface {
            name: $name,
            class: $crate::interface::ClassCode::$class,
            endpoints: &[$($ep),*],
            group_size: $group,
            needs_iad: $iad,
        }
    };
}

/// Serial emulation over HID: transmit and receive interrupt endpoints.
macro_rules! seremu {
    ($tx:literal, $rx:literal) => {
        function!("seremu", HID, [SEREMU_TX.at($tx), SEREMU_RX.at($rx)])
    };
}

/// CDC ACM serial port: notification, data out and data in, over a
/// control and a data interface.
macro_rules! cdc {
    ($name:literal, $acm:literal, $rx:literal, $tx:literal, iad: $iad:literal) => {
        function!(
            $name,
            CDC_ACM,
            [CDC_STATUS.at($acm), CDC_RX.at($rx), CDC_TX.at($tx)],
            2,
            $iad
        )
    };
}

macro_rules! keyboard {
    ($ep:literal) => {
        function!(
            "keyboard",
            HID_BOOT_KEYBOARD,
            [$crate::endpoint::EndpointRequirement::interrupt(
                $crate::endpoint::Direction::Transmit,
                8,
                1
            )
            .at($ep)]
        )
    };
}

macro_rules! keymedia {
    ($ep:literal) => {
        function!(
            "keymedia",
            HID,
            [$crate::endpoint::EndpointRequirement::interrupt(
                $crate::endpoint::Direction::Transmit,
                8,
                4
            )
            .at($ep)]
        )
    };
}

macro_rules! mouse {
    ($ep:literal, interval: $interval:literal) => {
        function!(
            "mouse",
            HID,
            [$crate::endpoint::EndpointRequirement::interrupt(
                $crate::endpoint::Direction::Transmit,
                8,
                $interval
            )
            .at($ep)]
        )
    };
}

macro_rules! joystick {
    ($ep:literal, interval: $interval:literal) => {
        function!(
            "joystick",
            HID,
            [$crate::endpoint::EndpointRequirement::interrupt(
                $crate::endpoint::Direction::Transmit,
                12,
                $interval
            )
            .at($ep)]
        )
    };
}

macro_rules! multitouch {
    ($ep:literal, size: $size:literal) => {
        function!(
            "multitouch",
            HID,
            [$crate::endpoint::EndpointRequirement::interrupt(
                $crate::endpoint::Direction::Transmit,
                $size,
                1
            )
            .at($ep)]
        )
    };
}

macro_rules! midi {
    ($tx:literal, $rx:literal) => {
        function!("midi", MIDI, [MIDI_TX.at($tx), MIDI_RX.at($rx)])
    };
}

macro_rules! rawhid {
    ($tx:literal, $rx:literal) => {
        function!("rawhid", HID, [HID_TX_64.at($tx), HID_RX_64.at($rx)])
    };
}

macro_rules! flightsim {
    ($tx:literal, $rx:literal) => {
        function!("flightsim", HID, [HID_TX_64.at($tx), HID_RX_64.at($rx)])
    };
}

/// Media Transfer Protocol: bulk data both ways plus an event endpoint.
macro_rules! mtp {
    ($tx:literal, $rx:literal, $event:literal) => {
        function!("mtp", MTP, [MTP_TX.at($tx), MTP_RX.at($rx), MTP_EVENT.at($event)])
    };
}

/// USB audio: control interface plus one streaming interface per
/// direction, isochronous data and a feedback endpoint.
macro_rules! audio {
    ($tx:literal, $rx:literal, $sync:literal) => {
        function!(
            "audio",
            AUDIO,
            [AUDIO_TX.at($tx), AUDIO_RX.at($rx), AUDIO_SYNC.at($sync)],
            3,
            true
        )
    };
}

macro_rules! xinput {
    () => {
        function!("xinput", XINPUT, [XINPUT_TX.at(1), XINPUT_RX.at(2)])
    };
}

macro_rules! profile {
    ($name:literal, [$($function:expr),* $(,)?]) => {
        $crate::interface::ProfileSpec {
            name: $name,
            interfaces: &[$($function),*],
        }
    };
}

/// Hand-written counts and config table.
macro_rules! declared {
    (endpoints: $eps:literal, interfaces: $ifs:literal, buffers: $bufs:literal, [$($config:expr),* $(,)?]) => {
        $crate::audit::DeclaredTable {
            num_endpoints: $eps,
            num_interfaces: $ifs,
            num_buffers: $bufs,
            endpoint_configs: &[$($config),*],
        }
    };
}
