//! Integration tests for usb-profile through the public API.

use usb_profile::catalog::{self, PROFILES};
use usb_profile::{
    audit, build, build_with, emit, resolve, resolve_with, validate, BuildError, ClassCode, Direction,
    EndpointConfig, EndpointRequirement, FunctionalInterface, Placement, Platform, ProfileSpec,
    ResolutionErrorKind, Violation,
};

const CDC: [EndpointRequirement; 3] = [
    EndpointRequirement::interrupt(Direction::Transmit, 16, 64),
    EndpointRequirement::bulk(Direction::Receive, 64),
    EndpointRequirement::bulk(Direction::Transmit, 64),
];

#[test]
fn single_serial_layout() {
    let functions = [FunctionalInterface::new("serial", ClassCode::CDC_ACM, &CDC).grouped(2, false)];
    let spec = ProfileSpec::new("serial", &functions);
    let platform = Platform {
        first_auto_endpoint: 2,
        ..Platform::DEFAULT
    };

    let meta = build_with(&spec, &platform).expect("serial should build");
    assert_eq!(meta.num_interfaces, 2);
    assert_eq!(meta.num_endpoints, 4);
    assert_eq!(meta.config(2), EndpointConfig::TransmitOnly);
    assert_eq!(meta.config(3), EndpointConfig::ReceiveOnly);
    assert_eq!(meta.config(4), EndpointConfig::TransmitOnly);

    // Default platform starts at endpoint 1.
    let device = resolve(&spec).unwrap();
    assert_eq!(
        [device.endpoint("serial", 0), device.endpoint("serial", 1), device.endpoint("serial", 2)],
        [Some(1), Some(2), Some(3)]
    );
}

#[test]
fn keyboard_and_mouse_preferred_numbers() {
    let kbd = [EndpointRequirement::interrupt(Direction::Transmit, 8, 1).at(3)];
    let mouse = [EndpointRequirement::interrupt(Direction::Transmit, 8, 1).at(5)];
    let functions = [
        FunctionalInterface::new("keyboard", ClassCode::HID_BOOT_KEYBOARD, &kbd),
        FunctionalInterface::new("mouse", ClassCode::HID_BOOT_MOUSE, &mouse),
    ];

    let device = resolve(&ProfileSpec::new("km", &functions)).unwrap();
    assert_eq!(device.endpoint("keyboard", 0), Some(3));
    assert_eq!(device.endpoint("mouse", 0), Some(5));
    assert!(validate(&device).is_valid());

    let clash = [EndpointRequirement::interrupt(Direction::Transmit, 8, 1).at(3)];
    let functions = [
        FunctionalInterface::new("keyboard", ClassCode::HID_BOOT_KEYBOARD, &kbd),
        FunctionalInterface::new("mouse", ClassCode::HID_BOOT_MOUSE, &clash),
    ];
    let err = resolve(&ProfileSpec::new("km", &functions)).unwrap_err();
    assert_eq!(err.kind, ResolutionErrorKind::EndpointConflict(3));
    assert_eq!(err.interface, "mouse");
}

#[test]
fn transmit_and_receive_share_a_number() {
    let eps = [
        EndpointRequirement::interrupt(Direction::Transmit, 64, 1).at(6),
        EndpointRequirement::interrupt(Direction::Receive, 64, 1).at(6),
    ];
    let functions = [FunctionalInterface::new("rawhid", ClassCode::HID, &eps)];

    let meta = build(&ProfileSpec::new("rawhid", &functions)).unwrap();
    assert_eq!(meta.config(6), EndpointConfig::TransmitAndReceive);
    assert_eq!(meta.num_buffers, 4);
}

#[test]
fn audio_streaming_endpoints() {
    let audio = [
        EndpointRequirement::isochronous(Direction::TransmitIsochronous, 180, 1),
        EndpointRequirement::isochronous(Direction::ReceiveIsochronous, 180, 1),
        EndpointRequirement::isochronous(Direction::TransmitIsochronous, 3, 1),
    ];
    let functions = [FunctionalInterface::new("audio", ClassCode::AUDIO, &audio).grouped(3, true)];

    let meta = build(&ProfileSpec::new("audio", &functions)).unwrap();
    assert_eq!(meta.num_interfaces, 3);
    assert_eq!(
        meta.config_bytes().as_slice(),
        &[0x14, 0x18, 0x14],
        "three distinct isochronous endpoints"
    );
    assert_eq!(meta.iad_groups.len(), 1);
    assert_eq!(meta.device_class(), ClassCode::MISC_IAD);

    let no_interval = [
        EndpointRequirement::isochronous(Direction::TransmitIsochronous, 180, 1),
        EndpointRequirement::isochronous(Direction::ReceiveIsochronous, 180, 1).without_interval(),
    ];
    let functions = [FunctionalInterface::new("audio", ClassCode::AUDIO, &no_interval).grouped(3, true)];
    let err = build(&ProfileSpec::new("audio", &functions)).unwrap_err();
    match err {
        BuildError::Resolution(e) => {
            assert_eq!(e.kind, ResolutionErrorKind::MissingPollInterval);
            assert_eq!(e.requirement, Some(1));
        }
        other => panic!("expected resolution error, got {other:?}"),
    }
}

#[test]
fn shared_placement_packs_endpoints() {
    let functions = [FunctionalInterface::new("serial", ClassCode::CDC_ACM, &CDC).grouped(2, false)];
    let platform = Platform {
        placement: Placement::ShareComplementary,
        ..Platform::DEFAULT
    };

    let device = resolve_with(&ProfileSpec::new("serial", &functions), &platform).unwrap();
    assert_eq!(device.num_endpoints, 2);
    assert_eq!(device.config(1), EndpointConfig::TransmitAndReceive);
    assert!(validate(&device).is_valid());
}

#[test]
fn interface_numbers_are_contiguous_for_every_profile() {
    for entry in &PROFILES {
        let device = resolve(&entry.spec).unwrap();
        let mut expected = 0u16;
        for assignment in &device.interfaces {
            assert_eq!(u16::from(assignment.first), expected, "{}", entry.name());
            expected += u16::from(assignment.count);
        }
        assert_eq!(expected, u16::from(device.num_interfaces), "{}", entry.name());
    }
}

#[test]
fn no_endpoint_carries_conflicting_claims() {
    for entry in &PROFILES {
        let device = resolve(&entry.spec).unwrap();
        for number in 1..=15u8 {
            let merged = device
                .claims(number)
                .try_fold(EndpointConfig::Unused, |acc, claim| {
                    acc.merge(claim.requirement.direction.config())
                });
            assert_eq!(merged, Some(device.config(number)), "{} ep{}", entry.name(), number);
        }
    }
}

#[test]
fn catalog_build_and_audit() {
    for entry in &PROFILES {
        let meta = build(&entry.spec).unwrap_or_else(|e| panic!("{}: {}", entry.name(), e));
        assert_eq!(meta, emit(&resolve(&entry.spec).unwrap()));
    }

    let entry = catalog::find("mtp_disk").unwrap();
    let report = audit(&entry.spec, &entry.declared).unwrap();
    assert!(report.contains(&Violation::ConfigMismatch {
        endpoint: 4,
        expected: EndpointConfig::TransmitOnly,
        found: EndpointConfig::ReceiveOnly,
    }));
}

#[test]
fn errors_display() {
    let functions = [
        FunctionalInterface::new("serial", ClassCode::CDC_ACM, &CDC),
        FunctionalInterface::new("serial", ClassCode::CDC_ACM, &CDC),
    ];
    let err = build(&ProfileSpec::new("twice", &functions)).unwrap_err();
    assert_eq!(err.to_string(), "resolution failed: serial: function name used twice");
}
