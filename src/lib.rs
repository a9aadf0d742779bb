#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Access-Rights-Core turns legacy, rule-based rights grants on digital-library
//! objects into a canonical access/download policy.
//!
//! Resolution is pure decision logic: no I/O, no shared mutable state. Any
//! combination of inputs the rules do not cover is surfaced as a typed error
//! instead of being guessed, since a wrong default over- or under-exposes
//! restricted content.

// Module for the closed vocabularies (AccessLevel, DownloadLevel, NoDownload).
pub mod types;

// Module for the data model (RightsRepresentation, AccessDescriptor, Embargo).
pub mod primitives;

// Re-export the data model at the crate root.
pub use primitives::*;

// Module for access and download resolution.
pub mod resolve;

// Module for license URI resolution and vocabularies.
pub mod license;

// Module for the embargo overlay.
pub mod embargo;

// Module for per-file rights.
pub mod file;

// Module for release-date normalisation.
pub mod time;

// Module for error types.
pub mod error;

// Module for engine configuration.
pub mod config;

// Module for the engine facade.
pub mod engine;

// Collaborator traits (rights and embargo sources).
pub mod source_traits;

#[cfg(feature = "tracing-subscriber")]
pub mod telemetry;

pub use engine::Engine;
pub use error::{LicenseError, ResolutionError};
pub use types::{AccessLevel, DownloadLevel, EmbargoStatus, NoDownload};

pub use embargo::overlay_embargo;
pub use file::resolve_file_rights;
pub use license::resolve_license;
pub use resolve::resolve;
