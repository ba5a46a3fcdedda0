//! Error types for resolution and the build pipeline.
//!
//! We avoid `alloc` - every error carries only borrowed names and
//! fixed-size data. Implements `defmt::Format` behind the `defmt` feature.

use core::fmt;

use crate::validator::ValidationReport;

/// What went wrong while resolving a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResolutionErrorKind {
    // Endpoints
    /// The number is already held by a claim that cannot be merged.
    EndpointConflict(u8),

    /// No endpoint number within the platform ceiling is available, or a
    /// preferred number lies above it.
    TooManyEndpoints,

    /// A preferred number of 0 (reserved for control transfers).
    ReservedEndpoint,

    /// An interrupt or isochronous requirement without a poll interval.
    MissingPollInterval,

    /// A bulk requirement declaring a poll interval.
    UnexpectedPollInterval,

    /// wMaxPacketSize outside 1..=1024.
    InvalidPacketSize(u16),

    /// Isochronous direction on a non-isochronous transfer, or vice versa.
    TransferMismatch,

    /// A hand-declared table references a requirement with no number.
    MissingPreferredNumber,

    // Interfaces
    /// The running interface count would exceed the platform ceiling.
    TooManyInterfaces,

    /// A function with a group size of 0.
    InvalidGroupSize,

    /// Two functions share a name.
    DuplicateName,

    /// The profile lists no functions.
    EmptyProfile,
}

/// Resolution failure, attributed to the function (and requirement) that
/// caused it. Profile-level failures carry the profile name instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolutionError<'a> {
    pub kind: ResolutionErrorKind,
    pub interface: &'a str,
    pub requirement: Option<usize>,
}

impl<'a> ResolutionError<'a> {
    pub const fn function(interface: &'a str, kind: ResolutionErrorKind) -> Self {
        Self {
            kind,
            interface,
            requirement: None,
        }
    }

    pub const fn requirement(interface: &'a str, index: usize, kind: ResolutionErrorKind) -> Self {
        Self {
            kind,
            interface,
            requirement: Some(index),
        }
    }
}

impl fmt::Display for ResolutionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointConflict(n) => write!(f, "endpoint {n} already claimed by a conflicting direction"),
            Self::TooManyEndpoints => f.write_str("no endpoint number available within the platform ceiling"),
            Self::ReservedEndpoint => f.write_str("endpoint 0 is reserved for control transfers"),
            Self::MissingPollInterval => f.write_str("interrupt/isochronous endpoint without a poll interval"),
            Self::UnexpectedPollInterval => f.write_str("bulk endpoint with a poll interval"),
            Self::InvalidPacketSize(size) => write!(f, "max packet size {size} outside 1..=1024"),
            Self::TransferMismatch => f.write_str("direction does not match transfer type"),
            Self::MissingPreferredNumber => f.write_str("declared table needs an explicit endpoint number"),
            Self::TooManyInterfaces => f.write_str("interface count exceeds the platform ceiling"),
            Self::InvalidGroupSize => f.write_str("group size must be at least 1"),
            Self::DuplicateName => f.write_str("function name used twice"),
            Self::EmptyProfile => f.write_str("profile has no functions"),
        }
    }
}

impl fmt::Display for ResolutionError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.requirement {
            Some(index) => write!(f, "{}[{}]: {}", self.interface, index, self.kind),
            None => write!(f, "{}: {}", self.interface, self.kind),
        }
    }
}

impl core::error::Error for ResolutionError<'_> {}

/// Failure of the resolve → validate → emit pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuildError<'a> {
    /// The profile could not be resolved.
    Resolution(ResolutionError<'a>),
    /// The resolved device broke at least one structural invariant.
    Invalid(ValidationReport<'a>),
}

impl fmt::Display for BuildError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Resolution(e) => write!(f, "resolution failed: {e}"),
            BuildError::Invalid(report) => {
                write!(f, "{} violation(s)", report.len())?;
                if let Some(first) = report.iter().next() {
                    write!(f, ", first: {first}")?;
                }
                Ok(())
            }
        }
    }
}

impl core::error::Error for BuildError<'_> {}

// Convenience conversions

impl<'a> From<ResolutionError<'a>> for BuildError<'a> {
    fn from(e: ResolutionError<'a>) -> Self {
        BuildError::Resolution(e)
    }
}

impl<'a> From<ValidationReport<'a>> for BuildError<'a> {
    fn from(report: ValidationReport<'a>) -> Self {
        BuildError::Invalid(report)
    }
}
