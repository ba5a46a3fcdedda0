//! Checks hand-declared descriptor tables against their profile.
//!
//! Firmware that predates the resolver carries its endpoint layout as
//! hand-written constants. [`assemble`] rebuilds a [`ResolvedDevice`] from
//! those constants without any merging or conflict detection, taking
//! every endpoint number from the requirement's preferred number and every
//! count and config from the declared table. [`audit`] then runs the
//! validator over it, so inconsistencies in the hand-written table come
//! out as ordinary violations.

use crate::config::{Platform, MAX_ENDPOINTS};
use crate::device::{slot, EndpointAssignment, ResolvedDevice};
use crate::endpoint::EndpointConfig;
use crate::error::{ResolutionError, ResolutionErrorKind};
use crate::interface::ProfileSpec;
use crate::resolver::assign_interfaces;
use crate::validator::{validate_with, ValidationReport};

/// Counts and endpoint configuration as written by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeclaredTable<'a> {
    pub num_endpoints: u8,
    pub num_interfaces: u8,
    pub num_buffers: u16,
    /// Config of endpoint 1 onwards. May run past `num_endpoints`.
    pub endpoint_configs: &'a [EndpointConfig],
}

/// Build a device verbatim from `spec`'s preferred numbers and `declared`.
///
/// Fails only when the spec cannot be laid out at all: a requirement
/// without a preferred number, or interface numbering errors.
pub fn assemble<'a>(
    spec: &ProfileSpec<'a>,
    declared: &DeclaredTable<'_>,
) -> Result<ResolvedDevice<'a>, ResolutionError<'a>> {
    assemble_with(spec, declared, &Platform::DEFAULT)
}

/// [`assemble`], numbering interfaces under `platform`'s ceiling.
pub fn assemble_with<'a>(
    spec: &ProfileSpec<'a>,
    declared: &DeclaredTable<'_>,
    platform: &Platform,
) -> Result<ResolvedDevice<'a>, ResolutionError<'a>> {
    let mut device = ResolvedDevice::new(spec.name);
    assign_interfaces(spec, platform, &mut device)?;

    for function in spec.interfaces {
        for (index, requirement) in function.endpoints.iter().enumerate() {
            let fail = |kind| ResolutionError::requirement(function.name, index, kind);

            let number = requirement
                .preferred_number
                .ok_or(fail(ResolutionErrorKind::MissingPreferredNumber))?;

            device
                .endpoints
                .push(EndpointAssignment {
                    interface: function.name,
                    index,
                    number,
                    requirement: *requirement,
                })
                .map_err(|_| fail(ResolutionErrorKind::TooManyEndpoints))?;

            if let Some(i) = slot(number) {
                let size = &mut device.buffer_sizes[i];
                *size = (*size).max(requirement.max_packet_size);
            }
        }
    }

    for (i, &config) in declared.endpoint_configs.iter().take(MAX_ENDPOINTS).enumerate() {
        device.configs[i] = config;
    }
    device.num_interfaces = declared.num_interfaces;
    device.num_endpoints = declared.num_endpoints;
    device.num_buffers = declared.num_buffers;

    Ok(device)
}

/// Validate the hand-declared table of `spec`.
pub fn audit<'a>(
    spec: &ProfileSpec<'a>,
    declared: &DeclaredTable<'_>,
) -> Result<ValidationReport<'a>, ResolutionError<'a>> {
    audit_with(spec, declared, &Platform::DEFAULT)
}

/// [`audit`] against `platform`'s ceilings and buffer policy.
pub fn audit_with<'a>(
    spec: &ProfileSpec<'a>,
    declared: &DeclaredTable<'_>,
    platform: &Platform,
) -> Result<ValidationReport<'a>, ResolutionError<'a>> {
    let device = assemble_with(spec, declared, platform)?;
    let report = validate_with(&device, platform);
    debug!("{}: audit found {} violation(s)", spec.name, report.len());
    Ok(report)
}
