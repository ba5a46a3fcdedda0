//! USB device profile resolver.
//!
//! A composite USB device is described as a [`ProfileSpec`]: an ordered
//! list of functions (serial port, keyboard, MIDI, audio, ...) each with
//! the endpoints it needs. This crate turns that description into the
//! numbers the descriptor tables and endpoint setup code need:
//!
//! - [`resolve`] assigns interface numbers and endpoint numbers, merging
//!   complementary directions that share a number
//! - [`validate`] checks a resolved (or hand-written) device against the
//!   structural rules and reports every violation at once
//! - [`emit`] produces the per-endpoint config bytes, counts, buffer pool
//!   size and IAD grouping as [`DeviceMetadata`]
//! - [`build`] runs all three
//!
//! [`catalog`] holds the built-in profiles and [`audit`] checks a profile's
//! hand-maintained table against the profile itself.
//!
//! Everything is `no_std` and allocation-free. Enable the `defmt` feature
//! for `defmt::Format` impls and resolver logging.
//!
//! ```
//! use usb_profile::{build, ClassCode, Direction, EndpointRequirement, FunctionalInterface, ProfileSpec};
//!
//! const SERIAL: [EndpointRequirement; 3] = [
//!     EndpointRequirement::interrupt(Direction::Transmit, 16, 64),
//!     EndpointRequirement::bulk(Direction::Receive, 64),
//!     EndpointRequirement::bulk(Direction::Transmit, 64),
//! ];
//! let functions = [FunctionalInterface::new("serial", ClassCode::CDC_ACM, &SERIAL).grouped(2, false)];
//!
//! let meta = build(&ProfileSpec::new("serial", &functions)).unwrap();
//! assert_eq!(meta.num_interfaces, 2);
//! assert_eq!(meta.config_bytes().as_slice(), &[0x15, 0x19, 0x15]);
//! ```

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod audit;
pub mod catalog;
pub mod config;
pub mod device;
pub mod emitter;
pub mod endpoint;
pub mod error;
pub mod interface;
pub mod pipeline;
pub mod resolver;
pub mod validator;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use audit::{assemble, assemble_with, audit, audit_with, DeclaredTable};
pub use catalog::CatalogEntry;
pub use config::{BufferPolicy, Placement, Platform};
pub use device::{EndpointAssignment, InterfaceAssignment, ResolvedDevice};
pub use emitter::{emit, DeviceMetadata, IadGroup};
pub use endpoint::{Direction, EndpointConfig, EndpointRequirement, TransferType};
pub use error::{BuildError, ResolutionError, ResolutionErrorKind};
pub use interface::{ClassCode, FunctionalInterface, ProfileSpec};
pub use pipeline::{build, build_with};
pub use resolver::{resolve, resolve_with};
pub use validator::{validate, validate_with, ValidationReport, Violation};
