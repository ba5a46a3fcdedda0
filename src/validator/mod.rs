//! Structural validation of a resolved (or hand-declared) device.
//!
//! Every check runs independently and the report collects all findings in
//! one pass, so a hand-written table with several mistakes is diagnosed at
//! once instead of one rebuild per mistake.
//!
//! ## Checks
//!
//! - interfaces: unique names, ranges covering `[0, num_interfaces)` with
//!   no gaps or overlap, group sizes at least 1 and honoured, IAD only on
//!   groups
//! - endpoints: each requirement assigned once, never 0, within the ceiling, claims on one number are
//!   complementary, the recorded config equals the merge of the claims,
//!   no configured number without a claim
//! - counts: `num_interfaces`, `num_endpoints` and `num_buffers` agree
//!   with the assignment maps and the buffer policy
//! - requirements: packet size, transfer type and poll interval rules

#[cfg(test)]
mod tests;

use core::fmt;

use heapless::Vec;

use crate::config::{Platform, MAX_INTERFACES, MAX_VIOLATIONS};
use crate::device::ResolvedDevice;
use crate::endpoint::EndpointConfig;

/// One broken invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Violation<'a> {
    // Interfaces
    /// No function owns interface `number` although it is below the count.
    InterfaceGap { number: u8 },
    /// `interface` claims a number another function already owns.
    InterfaceOverlap { number: u8, interface: &'a str },
    /// `interface` extends past the platform's interface ceiling.
    InterfaceOutOfRange { interface: &'a str, number: u16 },
    /// `num_interfaces` disagrees with the assigned ranges.
    InterfaceCountMismatch { declared: u8, actual: u16 },
    /// Two functions share `interface` as their name.
    DuplicateName { interface: &'a str },
    /// IAD requested for a single-interface function.
    IadWithoutGroup { interface: &'a str },
    /// A function with no interface numbers at all.
    InvalidGroupSize { interface: &'a str },
    /// The assigned range does not match the function's group size.
    GroupSizeMismatch {
        interface: &'a str,
        group_size: u8,
        assigned: u8,
    },

    // Endpoints
    /// The same requirement of `interface` appears in more than one
    /// assignment.
    DuplicateAssignment { interface: &'a str, index: usize },
    /// Endpoint 0 handed to a requirement.
    ReservedEndpoint { interface: &'a str, index: usize },
    /// Endpoint number past the platform ceiling.
    EndpointOutOfRange {
        interface: &'a str,
        index: usize,
        number: u8,
    },
    /// An endpoint assignment names a function the device does not have.
    UnknownInterface { interface: &'a str, index: usize },
    /// This claim cannot be merged with the earlier claims on `endpoint`.
    DirectionConflict {
        endpoint: u8,
        interface: &'a str,
        index: usize,
    },
    /// The recorded config differs from what the claims add up to.
    ConfigMismatch {
        endpoint: u8,
        expected: EndpointConfig,
        found: EndpointConfig,
    },
    /// A number is configured but nothing claims it.
    UnclaimedEndpoint { endpoint: u8, config: EndpointConfig },
    /// `num_endpoints` is not the highest claimed number.
    EndpointCountMismatch { declared: u8, actual: u8 },
    /// Fewer buffers than the policy requires for the configured endpoints.
    UndersizedBufferPool { declared: u16, required: u16 },

    // Requirements
    MissingPollInterval { interface: &'a str, index: usize },
    UnexpectedPollInterval { interface: &'a str, index: usize },
    InvalidPacketSize {
        interface: &'a str,
        index: usize,
        size: u16,
    },
    TransferMismatch { interface: &'a str, index: usize },
}

impl fmt::Display for Violation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::InterfaceGap { number } => write!(f, "interface {number} is not assigned"),
            Violation::InterfaceOverlap { number, interface } => {
                write!(f, "{interface}: interface {number} already assigned")
            }
            Violation::InterfaceOutOfRange { interface, number } => {
                write!(f, "{interface}: interface {number} exceeds the ceiling")
            }
            Violation::InterfaceCountMismatch { declared, actual } => {
                write!(f, "num_interfaces is {declared}, assignments cover {actual}")
            }
            Violation::DuplicateName { interface } => write!(f, "{interface}: duplicate name"),
            Violation::IadWithoutGroup { interface } => {
                write!(f, "{interface}: IAD on a single interface")
            }
            Violation::InvalidGroupSize { interface } => {
                write!(f, "{interface}: owns no interface numbers")
            }
            Violation::GroupSizeMismatch {
                interface,
                group_size,
                assigned,
            } => write!(f, "{interface}: group of {group_size} assigned {assigned} interfaces"),
            Violation::DuplicateAssignment { interface, index } => {
                write!(f, "{interface}[{index}]: assigned more than once")
            }
            Violation::ReservedEndpoint { interface, index } => {
                write!(f, "{interface}[{index}]: endpoint 0 is reserved")
            }
            Violation::EndpointOutOfRange {
                interface,
                index,
                number,
            } => write!(f, "{interface}[{index}]: endpoint {number} exceeds the ceiling"),
            Violation::UnknownInterface { interface, index } => {
                write!(f, "{interface}[{index}]: no such function")
            }
            Violation::DirectionConflict {
                endpoint,
                interface,
                index,
            } => write!(f, "{interface}[{index}]: conflicting claim on endpoint {endpoint}"),
            Violation::ConfigMismatch {
                endpoint,
                expected,
                found,
            } => write!(f, "endpoint {endpoint} configured {found}, claims need {expected}"),
            Violation::UnclaimedEndpoint { endpoint, config } => {
                write!(f, "endpoint {endpoint} configured {config} but unclaimed")
            }
            Violation::EndpointCountMismatch { declared, actual } => {
                write!(f, "num_endpoints is {declared}, highest claimed is {actual}")
            }
            Violation::UndersizedBufferPool { declared, required } => {
                write!(f, "{declared} buffers, policy requires {required}")
            }
            Violation::MissingPollInterval { interface, index } => {
                write!(f, "{interface}[{index}]: missing poll interval")
            }
            Violation::UnexpectedPollInterval { interface, index } => {
                write!(f, "{interface}[{index}]: bulk endpoint with poll interval")
            }
            Violation::InvalidPacketSize {
                interface,
                index,
                size,
            } => write!(f, "{interface}[{index}]: max packet size {size} out of range"),
            Violation::TransferMismatch { interface, index } => {
                write!(f, "{interface}[{index}]: direction does not match transfer type")
            }
        }
    }
}

/// Findings of one validation pass. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidationReport<'a> {
    violations: Vec<Violation<'a>, MAX_VIOLATIONS>,
    truncated: bool,
}

impl<'a> ValidationReport<'a> {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty() && !self.truncated
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// More violations were found than the report can hold.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Violation<'a>> {
        self.violations.iter()
    }

    pub fn as_slice(&self) -> &[Violation<'a>] {
        &self.violations
    }

    pub fn contains(&self, violation: &Violation<'_>) -> bool {
        self.violations.iter().any(|v| v == violation)
    }

    fn push(&mut self, violation: Violation<'a>) {
        debug!("violation: {}", violation);
        if self.violations.push(violation).is_err() {
            self.truncated = true;
        }
    }
}

impl<'r, 'a> IntoIterator for &'r ValidationReport<'a> {
    type Item = &'r Violation<'a>;
    type IntoIter = core::slice::Iter<'r, Violation<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Validate `device` against the default platform.
pub fn validate<'a>(device: &ResolvedDevice<'a>) -> ValidationReport<'a> {
    validate_with(device, &Platform::DEFAULT)
}

/// Validate `device` against `platform`.
pub fn validate_with<'a>(device: &ResolvedDevice<'a>, platform: &Platform) -> ValidationReport<'a> {
    let mut report = ValidationReport::default();

    check_interfaces(device, platform, &mut report);
    check_requirements(device, platform, &mut report);
    check_endpoint_table(device, &mut report);
    check_counts(device, platform, &mut report);

    if !report.is_empty() {
        warn!("{}: {} violation(s)", device.profile, report.len());
    }
    report
}

fn check_interfaces<'a>(device: &ResolvedDevice<'a>, platform: &Platform, report: &mut ValidationReport<'a>) {
    let ceiling = u16::from(platform.interface_ceiling());
    let mut owned = [false; MAX_INTERFACES];

    for (position, assignment) in device.interfaces.iter().enumerate() {
        let name = assignment.name;

        if device.interfaces[..position].iter().any(|a| a.name == name) {
            report.push(Violation::DuplicateName { interface: name });
        }
        if assignment.group_size == 0 || assignment.count == 0 {
            report.push(Violation::InvalidGroupSize { interface: name });
        }
        if assignment.needs_iad && assignment.group_size <= 1 {
            report.push(Violation::IadWithoutGroup { interface: name });
        }
        if assignment.count != assignment.group_size {
            report.push(Violation::GroupSizeMismatch {
                interface: name,
                group_size: assignment.group_size,
                assigned: assignment.count,
            });
        }

        for number in assignment.numbers() {
            if number >= ceiling {
                report.push(Violation::InterfaceOutOfRange {
                    interface: name,
                    number,
                });
                break;
            }
            let i = usize::from(number);
            if owned[i] {
                report.push(Violation::InterfaceOverlap {
                    number: number as u8,
                    interface: name,
                });
            }
            owned[i] = true;
        }
    }

    let expected = u16::from(device.num_interfaces).min(ceiling);
    for number in 0..expected {
        if !owned[usize::from(number)] {
            report.push(Violation::InterfaceGap {
                number: number as u8,
            });
        }
    }
}

fn check_requirements<'a>(device: &ResolvedDevice<'a>, platform: &Platform, report: &mut ValidationReport<'a>) {
    let ceiling = platform.endpoint_ceiling();

    for (position, assignment) in device.endpoints.iter().enumerate() {
        let interface = assignment.interface;
        let index = assignment.index;
        let requirement = &assignment.requirement;

        if device.endpoints[..position]
            .iter()
            .any(|a| a.interface == interface && a.index == index)
        {
            report.push(Violation::DuplicateAssignment { interface, index });
        }
        if device.interface(interface).is_none() {
            report.push(Violation::UnknownInterface { interface, index });
        }
        if assignment.number == 0 {
            report.push(Violation::ReservedEndpoint { interface, index });
        } else if assignment.number > ceiling {
            report.push(Violation::EndpointOutOfRange {
                interface,
                index,
                number: assignment.number,
            });
        }

        if !requirement.packet_size_valid() {
            report.push(Violation::InvalidPacketSize {
                interface,
                index,
                size: requirement.max_packet_size,
            });
        }
        if !requirement.transfer_consistent() {
            report.push(Violation::TransferMismatch { interface, index });
        }
        if requirement.missing_interval() {
            report.push(Violation::MissingPollInterval { interface, index });
        }
        if requirement.unexpected_interval() {
            report.push(Violation::UnexpectedPollInterval { interface, index });
        }
    }
}

fn check_endpoint_table<'a>(device: &ResolvedDevice<'a>, report: &mut ValidationReport<'a>) {
    for (i, &found) in device.configs.iter().enumerate() {
        // Slot i holds endpoint i + 1; the table has at most 15 slots.
        let number = (i + 1) as u8;
        let mut merged = EndpointConfig::Unused;
        let mut conflicted = false;

        for claim in device.claims(number) {
            match merged.merge(claim.requirement.direction.config()) {
                Some(next) => merged = next,
                None => {
                    conflicted = true;
                    report.push(Violation::DirectionConflict {
                        endpoint: number,
                        interface: claim.interface,
                        index: claim.index,
                    });
                }
            }
        }

        if conflicted {
            continue;
        }
        if merged.is_used() && found != merged {
            report.push(Violation::ConfigMismatch {
                endpoint: number,
                expected: merged,
                found,
            });
        } else if !merged.is_used() && found.is_used() {
            report.push(Violation::UnclaimedEndpoint {
                endpoint: number,
                config: found,
            });
        }
    }
}

fn check_counts<'a>(device: &ResolvedDevice<'a>, platform: &Platform, report: &mut ValidationReport<'a>) {
    let covered: u16 = device.interfaces.iter().map(|a| u16::from(a.count)).sum();
    if covered != u16::from(device.num_interfaces) {
        report.push(Violation::InterfaceCountMismatch {
            declared: device.num_interfaces,
            actual: covered,
        });
    }

    let highest = device.highest_claimed();
    if highest != device.num_endpoints {
        report.push(Violation::EndpointCountMismatch {
            declared: device.num_endpoints,
            actual: highest,
        });
    }

    let required = platform.buffers.pool_size(device.active_configs());
    if device.num_buffers < required {
        report.push(Violation::UndersizedBufferPool {
            declared: device.num_buffers,
            required,
        });
    }
}

