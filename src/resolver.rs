//! Profile resolver: interface numbering, endpoint placement and merging.
//!
//! ## Algorithm
//!
//! 1. Interfaces are numbered in declaration order, each function taking
//!    `group_size` consecutive numbers starting right after the previous
//!    one. Numbering always starts at 0 and never leaves gaps.
//! 2. Requirements with a preferred number are placed first, in
//!    declaration order. A preferred number is binding: it either merges
//!    with what is already there or resolution fails.
//! 3. Remaining requirements take the lowest number allowed by the
//!    platform's [`Placement`] policy, again in declaration order.
//! 4. Claims sharing a number are merged into one [`EndpointConfig`]; the
//!    larger max packet size becomes the number's buffer size.
//!
//! Placing preferred numbers first means an automatically numbered
//! requirement can never steal a number another function pinned, whatever
//! the declaration order.
//!
//! Resolution is all-or-nothing: the first error aborts and no partial
//! device is returned.

use crate::config::{Placement, Platform};
use crate::device::{slot, EndpointAssignment, InterfaceAssignment, ResolvedDevice};
use crate::endpoint::{EndpointConfig, EndpointRequirement};
use crate::error::{ResolutionError, ResolutionErrorKind};
use crate::interface::ProfileSpec;

/// Resolve `spec` for the default platform.
pub fn resolve<'a>(spec: &ProfileSpec<'a>) -> Result<ResolvedDevice<'a>, ResolutionError<'a>> {
    resolve_with(spec, &Platform::DEFAULT)
}

/// Resolve `spec` for `platform`.
pub fn resolve_with<'a>(
    spec: &ProfileSpec<'a>,
    platform: &Platform,
) -> Result<ResolvedDevice<'a>, ResolutionError<'a>> {
    if spec.interfaces.is_empty() {
        return Err(ResolutionError::function(
            spec.name,
            ResolutionErrorKind::EmptyProfile,
        ));
    }

    let mut device = ResolvedDevice::new(spec.name);
    assign_interfaces(spec, platform, &mut device)?;

    for pass in [Pass::Preferred, Pass::Automatic] {
        for function in spec.interfaces {
            for (index, requirement) in function.endpoints.iter().enumerate() {
                if pass.covers(requirement) {
                    place(function.name, index, requirement, platform, &mut device)?;
                }
            }
        }
    }

    device.num_endpoints = device.highest_claimed();
    device.num_buffers = platform.buffers.pool_size(device.active_configs());

    debug!(
        "resolved {}: {} interfaces, {} endpoints, {} buffers",
        spec.name,
        device.num_interfaces,
        device.num_endpoints,
        device.num_buffers
    );

    Ok(device)
}

#[derive(Clone, Copy)]
enum Pass {
    Preferred,
    Automatic,
}

impl Pass {
    fn covers(self, requirement: &EndpointRequirement) -> bool {
        match self {
            Pass::Preferred => requirement.preferred_number.is_some(),
            Pass::Automatic => requirement.preferred_number.is_none(),
        }
    }
}

pub(crate) fn assign_interfaces<'a>(
    spec: &ProfileSpec<'a>,
    platform: &Platform,
    device: &mut ResolvedDevice<'a>,
) -> Result<(), ResolutionError<'a>> {
    let ceiling = u16::from(platform.interface_ceiling());
    let mut next: u16 = 0;

    for (position, function) in spec.interfaces.iter().enumerate() {
        let fail = |kind| ResolutionError::function(function.name, kind);

        if spec.interfaces[..position]
            .iter()
            .any(|earlier| earlier.name == function.name)
        {
            return Err(fail(ResolutionErrorKind::DuplicateName));
        }
        if function.group_size == 0 {
            return Err(fail(ResolutionErrorKind::InvalidGroupSize));
        }

        let end = next + u16::from(function.group_size);
        if end > ceiling {
            warn!("{}: interface {} exceeds ceiling {}", function.name, end, ceiling);
            return Err(fail(ResolutionErrorKind::TooManyInterfaces));
        }

        device
            .interfaces
            .push(InterfaceAssignment {
                name: function.name,
                // Both bounded by the ceiling, which fits in u8.
                first: next as u8,
                count: function.group_size,
                group_size: function.group_size,
                class: function.class,
                needs_iad: function.needs_iad,
            })
            .map_err(|_| fail(ResolutionErrorKind::TooManyInterfaces))?;

        trace!("{}: interfaces {}..{}", function.name, next, end);
        next = end;
    }

    device.num_interfaces = next as u8;
    Ok(())
}

/// Reject requirements that cannot be placed no matter which number they
/// get.
fn check_requirement(requirement: &EndpointRequirement) -> Result<(), ResolutionErrorKind> {
    if !requirement.packet_size_valid() {
        return Err(ResolutionErrorKind::InvalidPacketSize(
            requirement.max_packet_size,
        ));
    }
    if !requirement.transfer_consistent() {
        return Err(ResolutionErrorKind::TransferMismatch);
    }
    if requirement.missing_interval() {
        return Err(ResolutionErrorKind::MissingPollInterval);
    }
    if requirement.unexpected_interval() {
        return Err(ResolutionErrorKind::UnexpectedPollInterval);
    }
    Ok(())
}

fn place<'a>(
    interface: &'a str,
    index: usize,
    requirement: &EndpointRequirement,
    platform: &Platform,
    device: &mut ResolvedDevice<'a>,
) -> Result<(), ResolutionError<'a>> {
    let fail = |kind| ResolutionError::requirement(interface, index, kind);

    check_requirement(requirement).map_err(fail)?;

    let wanted = requirement.direction.config();
    let number = match requirement.preferred_number {
        Some(number) => choose_preferred(number, wanted, device, platform),
        None => choose_automatic(wanted, device, platform),
    }
    .map_err(fail)?;

    let i = slot(number).ok_or(fail(ResolutionErrorKind::TooManyEndpoints))?;
    let merged = device.configs[i]
        .merge(wanted)
        .ok_or(fail(ResolutionErrorKind::EndpointConflict(number)))?;

    device
        .endpoints
        .push(EndpointAssignment {
            interface,
            index,
            number,
            requirement: *requirement,
        })
        .map_err(|_| fail(ResolutionErrorKind::TooManyEndpoints))?;

    if device.configs[i].is_used() {
        trace!("{}[{}]: sharing endpoint {} -> {}", interface, index, number, merged);
    }
    device.configs[i] = merged;
    device.buffer_sizes[i] = device.buffer_sizes[i].max(requirement.max_packet_size);

    Ok(())
}

fn choose_preferred(
    number: u8,
    wanted: EndpointConfig,
    device: &ResolvedDevice<'_>,
    platform: &Platform,
) -> Result<u8, ResolutionErrorKind> {
    if number == 0 {
        return Err(ResolutionErrorKind::ReservedEndpoint);
    }
    if number > platform.endpoint_ceiling() {
        return Err(ResolutionErrorKind::TooManyEndpoints);
    }
    match device.config(number).merge(wanted) {
        Some(_) => Ok(number),
        None => {
            warn!("endpoint {} already {}, cannot add {}", number, device.config(number), wanted);
            Err(ResolutionErrorKind::EndpointConflict(number))
        }
    }
}

fn choose_automatic(
    wanted: EndpointConfig,
    device: &ResolvedDevice<'_>,
    platform: &Platform,
) -> Result<u8, ResolutionErrorKind> {
    (platform.auto_start()..=platform.endpoint_ceiling())
        .find(|&number| {
            let current = device.config(number);
            match platform.placement {
                Placement::Exclusive => !current.is_used(),
                Placement::ShareComplementary => current.merge(wanted).is_some(),
            }
        })
        .ok_or(ResolutionErrorKind::TooManyEndpoints)
}
