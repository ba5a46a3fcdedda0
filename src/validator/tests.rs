//! Validator tests.
//!
//! Each test resolves a small, known-good profile, breaks one thing in the
//! resolved tables and checks that exactly that thing is reported.

use super::{validate, validate_with, Violation};
use crate::config::Platform;
use crate::device::{EndpointAssignment, ResolvedDevice};
use crate::endpoint::{Direction, EndpointConfig, EndpointRequirement};
use crate::interface::{ClassCode, FunctionalInterface, ProfileSpec};
use crate::resolver::resolve;

static CDC: [EndpointRequirement; 3] = [
    EndpointRequirement::interrupt(Direction::Transmit, 16, 64),
    EndpointRequirement::bulk(Direction::Receive, 64),
    EndpointRequirement::bulk(Direction::Transmit, 64),
];

static KEYBOARD: [EndpointRequirement; 1] = [EndpointRequirement::interrupt(Direction::Transmit, 8, 1)];

static SERIAL: [FunctionalInterface<'static>; 1] =
    [FunctionalInterface::new("serial", ClassCode::CDC_ACM, &CDC).grouped(2, false)];

static SERIAL_KEYBOARD: [FunctionalInterface<'static>; 2] = [
    FunctionalInterface::new("serial", ClassCode::CDC_ACM, &CDC).grouped(2, false),
    FunctionalInterface::new("keyboard", ClassCode::HID_BOOT_KEYBOARD, &KEYBOARD),
];

/// serial on interfaces 0-1, endpoints 1 (status), 2 (rx), 3 (tx).
fn serial() -> ResolvedDevice<'static> {
    resolve(&ProfileSpec::new("serial", &SERIAL)).unwrap()
}

/// serial on 0-1, keyboard on 2 with endpoint 4.
fn serial_keyboard() -> ResolvedDevice<'static> {
    resolve(&ProfileSpec::new("serial_keyboard", &SERIAL_KEYBOARD)).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Clean Devices
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn resolved_devices_are_valid() {
    assert!(validate(&serial()).is_valid());
    assert!(validate(&serial_keyboard()).is_valid());
}

#[test]
fn oversized_buffer_pool_is_fine() {
    let mut device = serial();
    device.num_buffers = 20;
    assert!(validate(&device).is_valid());
}

#[test]
fn empty_device_is_valid() {
    assert!(validate(&ResolvedDevice::new("nothing")).is_valid());
}

// ═══════════════════════════════════════════════════════════════════════════
// Interface Numbering
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn gap_at_zero_is_reported() {
    let mut device = serial();
    device.interfaces[0].first = 1;

    let report = validate(&device);
    assert_eq!(report.as_slice(), &[Violation::InterfaceGap { number: 0 }]);
}

#[test]
fn overlapping_ranges_are_reported() {
    let mut device = serial_keyboard();
    device.interfaces[1].first = 0;

    let report = validate(&device);
    assert!(report.contains(&Violation::InterfaceOverlap {
        number: 0,
        interface: "keyboard",
    }));
    assert!(report.contains(&Violation::InterfaceGap { number: 2 }));
}

#[test]
fn interface_count_must_match_ranges() {
    let mut device = serial();
    device.num_interfaces = 3;

    let report = validate(&device);
    assert!(report.contains(&Violation::InterfaceCountMismatch { declared: 3, actual: 2 }));
    assert!(report.contains(&Violation::InterfaceGap { number: 2 }));
}

#[test]
fn range_past_ceiling_is_reported() {
    let mut device = serial_keyboard();
    let platform = Platform {
        max_interfaces: 2,
        ..Platform::DEFAULT
    };

    let report = validate_with(&device, &platform);
    assert!(report.contains(&Violation::InterfaceOutOfRange {
        interface: "keyboard",
        number: 2,
    }));

    device.interfaces[1].first = 14;
    device.interfaces[1].count = 2;
    device.interfaces[1].group_size = 2;
    let report = validate(&device);
    assert!(report.contains(&Violation::InterfaceOutOfRange {
        interface: "keyboard",
        number: 15,
    }));
}

#[test]
fn group_size_must_match_assigned_range() {
    let mut device = serial();
    device.interfaces[0].count = 1;

    let report = validate(&device);
    assert!(report.contains(&Violation::GroupSizeMismatch {
        interface: "serial",
        group_size: 2,
        assigned: 1,
    }));
    assert!(report.contains(&Violation::InterfaceGap { number: 1 }));
}

#[test]
fn function_without_interfaces_is_reported() {
    let mut device = serial_keyboard();
    device.interfaces[1].group_size = 0;
    device.interfaces[1].count = 0;
    device.num_interfaces = 2;

    let report = validate(&device);
    assert_eq!(report.as_slice(), &[Violation::InvalidGroupSize { interface: "keyboard" }]);
}

#[test]
fn iad_needs_a_group() {
    let mut device = serial_keyboard();
    device.interfaces[1].needs_iad = true;

    let report = validate(&device);
    assert_eq!(report.as_slice(), &[Violation::IadWithoutGroup { interface: "keyboard" }]);
}

#[test]
fn duplicate_names_are_reported() {
    let mut device = serial_keyboard();
    device.interfaces[1].name = "serial";

    let report = validate(&device);
    assert!(report.contains(&Violation::DuplicateName { interface: "serial" }));
    // keyboard's endpoint now points at a name that no longer exists
    assert!(report.contains(&Violation::UnknownInterface {
        interface: "keyboard",
        index: 0,
    }));
}

// ═══════════════════════════════════════════════════════════════════════════
// Endpoint Table
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn same_direction_on_one_number_conflicts() {
    let mut device = serial();
    // Bulk tx onto the status endpoint: both transmit.
    device.endpoints[2].number = 1;

    let report = validate(&device);
    assert!(report.contains(&Violation::DirectionConflict {
        endpoint: 1,
        interface: "serial",
        index: 2,
    }));
    assert!(report.contains(&Violation::UnclaimedEndpoint {
        endpoint: 3,
        config: EndpointConfig::TransmitOnly,
    }));
    assert!(report.contains(&Violation::EndpointCountMismatch { declared: 3, actual: 2 }));
}

#[test]
fn requirement_assigned_twice_is_reported() {
    let mut device = serial();
    // serial[1] (bulk rx) on endpoint 2 and again on 4, table kept consistent
    let mut again = device.endpoints[1];
    again.number = 4;
    device.endpoints.push(again).unwrap();
    device.configs[3] = EndpointConfig::ReceiveOnly;
    device.num_endpoints = 4;
    device.num_buffers = 8;

    let report = validate(&device);
    assert_eq!(
        report.as_slice(),
        &[Violation::DuplicateAssignment {
            interface: "serial",
            index: 1,
        }]
    );
}

#[test]
fn recorded_config_must_equal_merged_claims() {
    let mut device = serial();
    device.configs[1] = EndpointConfig::TransmitOnly;

    let report = validate(&device);
    assert_eq!(
        report.as_slice(),
        &[Violation::ConfigMismatch {
            endpoint: 2,
            expected: EndpointConfig::ReceiveOnly,
            found: EndpointConfig::TransmitOnly,
        }]
    );
}

#[test]
fn configured_number_without_claim_is_reported() {
    let mut device = serial();
    device.configs[4] = EndpointConfig::TransmitOnly;

    let report = validate(&device);
    assert_eq!(
        report.as_slice(),
        &[Violation::UnclaimedEndpoint {
            endpoint: 5,
            config: EndpointConfig::TransmitOnly,
        }]
    );
}

#[test]
fn endpoint_zero_is_reserved() {
    let mut device = serial();
    device.endpoints[0].number = 0;

    let report = validate(&device);
    assert!(report.contains(&Violation::ReservedEndpoint {
        interface: "serial",
        index: 0,
    }));
    assert!(report.contains(&Violation::UnclaimedEndpoint {
        endpoint: 1,
        config: EndpointConfig::TransmitOnly,
    }));
}

#[test]
fn endpoint_past_platform_ceiling_is_reported() {
    let platform = Platform {
        max_endpoint: 2,
        ..Platform::DEFAULT
    };

    let report = validate_with(&serial(), &platform);
    assert_eq!(
        report.as_slice(),
        &[Violation::EndpointOutOfRange {
            interface: "serial",
            index: 2,
            number: 3,
        }]
    );
}

#[test]
fn unknown_function_is_reported() {
    let mut device = serial();
    device.endpoints[0].interface = "ghost";

    let report = validate(&device);
    assert_eq!(
        report.as_slice(),
        &[Violation::UnknownInterface {
            interface: "ghost",
            index: 0,
        }]
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Counts
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn num_endpoints_must_be_highest_claimed() {
    let mut device = serial();
    device.num_endpoints = 5;

    let report = validate(&device);
    assert_eq!(
        report.as_slice(),
        &[Violation::EndpointCountMismatch { declared: 5, actual: 3 }]
    );
}

#[test]
fn undersized_buffer_pool_is_reported() {
    let mut device = serial();
    assert_eq!(device.num_buffers, 6);
    device.num_buffers = 5;

    let report = validate(&device);
    assert_eq!(
        report.as_slice(),
        &[Violation::UndersizedBufferPool { declared: 5, required: 6 }]
    );
}

#[test]
fn buffer_requirement_follows_platform_policy() {
    let device = serial();
    let mut platform = Platform::DEFAULT;
    platform.buffers.per_direction = 3;

    let report = validate_with(&device, &platform);
    assert!(report.contains(&Violation::UndersizedBufferPool { declared: 6, required: 9 }));
}

// ═══════════════════════════════════════════════════════════════════════════
// Requirement Rules
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn interval_rules_are_checked() {
    let mut device = serial();
    device.endpoints[0].requirement.poll_interval = None;
    device.endpoints[1].requirement.poll_interval = Some(1);

    let report = validate(&device);
    assert_eq!(report.len(), 2);
    assert!(report.contains(&Violation::MissingPollInterval {
        interface: "serial",
        index: 0,
    }));
    assert!(report.contains(&Violation::UnexpectedPollInterval {
        interface: "serial",
        index: 1,
    }));
}

#[test]
fn packet_size_is_checked() {
    let mut device = serial();
    device.endpoints[1].requirement.max_packet_size = 0;
    device.endpoints[2].requirement.max_packet_size = 1025;

    let report = validate(&device);
    assert!(report.contains(&Violation::InvalidPacketSize {
        interface: "serial",
        index: 1,
        size: 0,
    }));
    assert!(report.contains(&Violation::InvalidPacketSize {
        interface: "serial",
        index: 2,
        size: 1025,
    }));
}

#[test]
fn isochronous_direction_on_interrupt_transfer() {
    let mut device = serial();
    device.endpoints[0].requirement.direction = Direction::TransmitIsochronous;

    let report = validate(&device);
    assert!(report.contains(&Violation::TransferMismatch {
        interface: "serial",
        index: 0,
    }));
    assert!(report.contains(&Violation::ConfigMismatch {
        endpoint: 1,
        expected: EndpointConfig::TransmitIsochronous,
        found: EndpointConfig::TransmitOnly,
    }));
}

// ═══════════════════════════════════════════════════════════════════════════
// Report
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn all_findings_collected_in_one_pass() {
    let mut device = serial_keyboard();
    device.configs[1] = EndpointConfig::TransmitAndReceive;
    device.num_buffers = 1;
    device.interfaces[1].needs_iad = true;

    let report = validate(&device);
    assert_eq!(report.len(), 3);
    assert!(!report.is_valid());
    assert!(!report.is_truncated());
}

#[test]
fn report_truncates_when_full() {
    let mut device = ResolvedDevice::new("noise");
    let mut requirement = EndpointRequirement::bulk(Direction::TransmitIsochronous, 0);
    requirement.poll_interval = Some(1);

    // Five findings per assignment: unknown function, reserved number,
    // packet size, transfer mismatch, stray interval.
    for index in 0..30 {
        device
            .endpoints
            .push(EndpointAssignment {
                interface: "ghost",
                index,
                number: 0,
                requirement,
            })
            .unwrap();
    }

    let report = validate(&device);
    assert!(report.is_truncated());
    assert!(!report.is_valid());
    assert_eq!(report.len(), crate::config::MAX_VIOLATIONS);
}

#[test]
fn violation_display() {
    let v = Violation::ConfigMismatch {
        endpoint: 4,
        expected: EndpointConfig::TransmitOnly,
        found: EndpointConfig::ReceiveOnly,
    };
    assert_eq!(v.to_string(), "endpoint 4 configured receive-only, claims need transmit-only");

    let v = Violation::UndersizedBufferPool {
        declared: 31,
        required: 44,
    };
    assert_eq!(v.to_string(), "31 buffers, policy requires 44");
}
