use chrono::{DateTime, FixedOffset, Utc};

use crate::license::LegacyLicenseEncoding;
use crate::types::{AccessLevel, DownloadLevel, EmbargoStatus, NoDownload};

// --- Scoped grants ----------------------------------------------------------

/// A read grant on a fixed scope (world or the institution group).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Grant {
    pub granted: bool,
    #[serde(default)]
    pub no_download: NoDownload,
}

impl Grant {
    pub fn granted() -> Self {
        Grant { granted: true, no_download: NoDownload::Unset }
    }

    pub fn granted_no_download() -> Self {
        Grant { granted: true, no_download: NoDownload::Forbidden }
    }
}

/// A grant tied to a named physical location (reading room, library).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LocationGrant {
    pub name: String,
    pub granted: bool,
    #[serde(default)]
    pub no_download: bool,
}

impl LocationGrant {
    pub fn new(name: impl Into<String>) -> Self {
        LocationGrant { name: name.into(), granted: true, no_download: false }
    }

    /// Granted and downloadable at the location.
    pub fn permits_download(&self) -> bool {
        self.granted && !self.no_download
    }
}

// --- Rights representation --------------------------------------------------

/// Normalized view of one legacy rights grant, independent of its wire form.
///
/// Built fresh for every resolution and never mutated afterwards. At most one
/// of the world, group and location grants drives the positive access branch;
/// `dark` and `citation_only` exclude every granted scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RightsRepresentation {
    pub discoverable: bool,
    #[serde(default)]
    pub world: Grant,
    #[serde(default)]
    pub group: Grant,
    #[serde(default)]
    pub location: Option<LocationGrant>,
    #[serde(default)]
    pub controlled_digital_lending: bool,
    #[serde(default)]
    pub citation_only: bool,
    #[serde(default)]
    pub dark: bool,
}

impl RightsRepresentation {
    /// Discoverable and readable by the world.
    pub fn world() -> Self {
        RightsRepresentation { discoverable: true, world: Grant::granted(), ..Default::default() }
    }

    /// Discoverable and readable by the institution group.
    pub fn stanford() -> Self {
        RightsRepresentation { discoverable: true, group: Grant::granted(), ..Default::default() }
    }

    /// Discoverable and readable at the named location only.
    pub fn location(name: impl Into<String>) -> Self {
        RightsRepresentation {
            discoverable: true,
            location: Some(LocationGrant::new(name)),
            ..Default::default()
        }
    }

    pub fn citation_only() -> Self {
        RightsRepresentation { discoverable: true, citation_only: true, ..Default::default() }
    }

    pub fn dark() -> Self {
        RightsRepresentation { dark: true, ..Default::default() }
    }

    pub fn with_world(mut self, grant: Grant) -> Self {
        self.world = grant;
        self
    }

    pub fn with_group(mut self, grant: Grant) -> Self {
        self.group = grant;
        self
    }

    pub fn with_location(mut self, location: LocationGrant) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_controlled_digital_lending(mut self) -> Self {
        self.controlled_digital_lending = true;
        self
    }

    /// True when the location grant exists and is granted.
    pub fn location_granted(&self) -> bool {
        self.location.as_ref().is_some_and(|loc| loc.granted)
    }

    /// True when any scope (or CDL) makes content readable.
    pub fn any_readable(&self) -> bool {
        self.world.granted || self.group.granted || self.location_granted() || self.controlled_digital_lending
    }
}

// --- Legacy use terms -------------------------------------------------------

/// Human-facing use terms carried next to the rights grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UseTerms {
    #[serde(default)]
    pub license: LegacyLicenseEncoding,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub use_and_reproduction_statement: Option<String>,
}

/// Item-level input: the rights grant plus its use terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemRights {
    pub rights: RightsRepresentation,
    #[serde(default)]
    pub terms: UseTerms,
}

// --- Resolved output --------------------------------------------------------

/// Canonical access/download policy for an object or file.
///
/// Never mutated once produced; changes in inputs yield a new descriptor.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDescriptor {
    pub access: AccessLevel,
    pub download: DownloadLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled_digital_lending: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_and_reproduction_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embargo: Option<EmbargoDescriptor>,
}

impl AccessDescriptor {
    /// A descriptor carrying only the access/download pair.
    pub fn new(access: AccessLevel, download: DownloadLevel) -> Self {
        AccessDescriptor {
            access,
            download,
            location: None,
            controlled_digital_lending: None,
            license: None,
            copyright: None,
            use_and_reproduction_statement: None,
            embargo: None,
        }
    }

    pub fn dark() -> Self {
        Self::new(AccessLevel::Dark, DownloadLevel::None)
    }

    /// Returns a copy with the embargo overlay attached (or cleared).
    pub fn with_embargo(&self, embargo: Option<EmbargoDescriptor>) -> Self {
        AccessDescriptor { embargo, ..self.clone() }
    }
}

// --- Embargoes --------------------------------------------------------------

/// An embargo record as yielded by the embargo provider.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Embargo {
    pub status: EmbargoStatus,
    /// Local-offset timestamp as recorded; normalized to UTC on overlay.
    pub release_date: DateTime<FixedOffset>,
    /// Rights that take effect on `release_date`.
    pub release_rights: RightsRepresentation,
    #[serde(default)]
    pub use_and_reproduction_statement: Option<String>,
}

/// The resolved rights an active embargo will release to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbargoDescriptor {
    /// UTC, truncated to whole seconds.
    pub release_date: DateTime<Utc>,
    pub access: AccessLevel,
    pub download: DownloadLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled_digital_lending: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_and_reproduction_statement: Option<String>,
}
