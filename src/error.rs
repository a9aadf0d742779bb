//!
//! Defines error types for the rights engine.
//!
//! None of these are recovered locally: a resolution failure aborts the
//! enclosing operation instead of defaulting to a guessed policy.

use crate::primitives::RightsRepresentation;

/// Errors raised while resolving access, download or license.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// No access branch matched, or the representation is internally inconsistent
    /// (e.g. `dark` together with a granted scope).
    #[error("Unable to resolve access level: {reason}")]
    UnresolvableAccess {
        reason: String,
        rights: Box<RightsRepresentation>,
    },
    /// No download branch matched the combination of grants and rules.
    #[error("Unexpected download rights: {combination}")]
    UnexpectedDownloadRights {
        combination: String,
        rights: Box<RightsRepresentation>,
    },
    /// A legacy license code could not be mapped to a URI.
    #[error("License resolution failed: {0}")]
    UnknownLicenseCode(LicenseError),
    /// A license lookup table failed for a reason other than a missing code.
    #[error("License table unavailable: {0}")]
    LicenseTable(String),
}

impl From<LicenseError> for ResolutionError {
    fn from(err: LicenseError) -> Self {
        match err {
            LicenseError::UnknownCode { .. } => ResolutionError::UnknownLicenseCode(err),
            LicenseError::Table(msg) => ResolutionError::LicenseTable(msg),
        }
    }
}

/// Errors raised by license lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LicenseError {
    /// The code is not part of the vocabulary.
    #[error("Unknown {vocabulary} license code: {code}")]
    UnknownCode { vocabulary: String, code: String },
    /// A caller-supplied table could not be loaded.
    #[error("License table error: {0}")]
    Table(String),
}

/// Errors raised while reading embargo release dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),
}

/// Errors raised while loading engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid engine configuration: {0}")]
    Invalid(String),
}

/// Errors raised by the [`Engine`](crate::engine::Engine) facade, which also talks to collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    /// A rights or embargo source failed to produce its value.
    #[error("Source error: {0}")]
    Source(String),
}
