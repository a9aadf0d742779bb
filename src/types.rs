//!
//! Shared enumerations for the rights engine.
//!
//! These are the closed vocabularies the resolvers produce and consume. Every
//! resolver matches on them exhaustively; there is no "unknown" variant.

use std::fmt;

/// The discovery/visibility category of an object or file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    /// Readable by the unauthenticated world.
    World,
    /// Readable by the institution-affiliated group (also used for CDL).
    Stanford,
    /// Readable only at a named physical location.
    LocationBased,
    /// Discoverable, but nothing is readable.
    CitationOnly,
    /// Neither discoverable nor readable.
    Dark,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 5] = [
        AccessLevel::World,
        AccessLevel::Stanford,
        AccessLevel::LocationBased,
        AccessLevel::CitationOnly,
        AccessLevel::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::World => "world",
            AccessLevel::Stanford => "stanford",
            AccessLevel::LocationBased => "location-based",
            AccessLevel::CitationOnly => "citation-only",
            AccessLevel::Dark => "dark",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AccessLevel {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        AccessLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| format!("Invalid access level: {}", value))
    }
}

/// The category governing whether content bytes may be retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DownloadLevel {
    World,
    Stanford,
    LocationBased,
    None,
}

impl DownloadLevel {
    pub const ALL: [DownloadLevel; 4] = [
        DownloadLevel::World,
        DownloadLevel::Stanford,
        DownloadLevel::LocationBased,
        DownloadLevel::None,
    ];

    /// The download level that tracks an access level 1:1.
    ///
    /// Levels with nothing readable (`citation-only`, `dark`) map to `none`.
    pub fn mirroring(access: AccessLevel) -> Self {
        match access {
            AccessLevel::World => DownloadLevel::World,
            AccessLevel::Stanford => DownloadLevel::Stanford,
            AccessLevel::LocationBased => DownloadLevel::LocationBased,
            AccessLevel::CitationOnly | AccessLevel::Dark => DownloadLevel::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadLevel::World => "world",
            DownloadLevel::Stanford => "stanford",
            DownloadLevel::LocationBased => "location-based",
            DownloadLevel::None => "none",
        }
    }
}

impl fmt::Display for DownloadLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DownloadLevel {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DownloadLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| format!("Invalid download level: {}", value))
    }
}

/// A no-download rule attached to a scope.
///
/// The legacy format distinguishes a rule that was never written from one
/// that was written and does not forbid download. Download resolution
/// depends on that difference, so this is not a `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoDownload {
    /// No rule present on the scope.
    #[default]
    Unset,
    /// A rule is present and does not forbid download.
    Allowed,
    /// A `no-download` rule is present.
    Forbidden,
}

impl NoDownload {
    pub fn is_set(&self) -> bool {
        !matches!(self, NoDownload::Unset)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, NoDownload::Forbidden)
    }
}

impl From<Option<bool>> for NoDownload {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => NoDownload::Unset,
            Some(false) => NoDownload::Allowed,
            Some(true) => NoDownload::Forbidden,
        }
    }
}

impl fmt::Display for NoDownload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoDownload::Unset => f.write_str("unset"),
            NoDownload::Allowed => f.write_str("false"),
            NoDownload::Forbidden => f.write_str("true"),
        }
    }
}

/// Lifecycle state of an embargo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbargoStatus {
    Embargoed,
    Released,
}

impl TryFrom<&str> for EmbargoStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "embargoed" => Ok(EmbargoStatus::Embargoed),
            "released" => Ok(EmbargoStatus::Released),
            _ => Err(format!("Invalid embargo status: {}", value)),
        }
    }
}
