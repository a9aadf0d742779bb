//!
//! License resolution.
//!
//! A license URI is taken from the new-style field when present, otherwise
//! derived from the legacy encoding (use-license flag, machine-readable URIs,
//! Open Data Commons code, Creative Commons code, in that order). Code lookups
//! go through the [`LicenseLookup`] trait so callers can inject their own tables.

use crate::config::LicensePolicy;
use crate::error::LicenseError;

/// Trait for read-only code → URI vocabularies.
///
/// Implementations must not perform I/O on lookup; they are consulted on every
/// resolution and may be shared across threads.
pub trait LicenseLookup: Send + Sync {
    /// Name of the vocabulary, used in error messages.
    fn vocabulary(&self) -> &str;

    /// Maps a code to its canonical URI.
    fn lookup(&self, code: &str) -> Result<String, LicenseError>;
}

// Module for the bundled Open Data Commons vocabulary.
pub mod odc;
pub use odc::OpenDataCommons;

// Module for the bundled Creative Commons vocabulary.
pub mod cc;
pub use cc::CreativeCommons;

// Module for caller-supplied tables.
pub mod table;
pub use table::LicenseTable;

/// Sentinel URI for legacy objects explicitly marked as having no license.
pub const NO_LICENSE_URI: &str = "https://cocina.sul.stanford.edu/licenses/none";

/// License information as found on a legacy object.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LegacyLicenseEncoding {
    /// New-style explicit license URI.
    #[serde(default)]
    pub uri: Option<String>,
    /// Legacy "use license" flag; the literal `none` marks an unlicensed object.
    #[serde(default)]
    pub use_license: Option<String>,
    /// Machine-readable URI attributes, in document order.
    #[serde(default)]
    pub machine_uris: Vec<String>,
    #[serde(default)]
    pub open_data_commons: Option<String>,
    #[serde(default)]
    pub creative_commons: Option<String>,
    /// Human-readable label. Informational only.
    #[serde(default)]
    pub label: Option<String>,
}

/// Resolves license encodings against a pair of vocabularies.
#[derive(Clone, Copy)]
pub struct LicenseResolver<'a> {
    pub open_data_commons: &'a dyn LicenseLookup,
    pub creative_commons: &'a dyn LicenseLookup,
    pub no_license_uri: &'a str,
    pub policy: LicensePolicy,
}

impl<'a> LicenseResolver<'a> {
    /// A strict resolver using the standard no-license sentinel.
    pub fn new(open_data_commons: &'a dyn LicenseLookup, creative_commons: &'a dyn LicenseLookup) -> Self {
        LicenseResolver {
            open_data_commons,
            creative_commons,
            no_license_uri: NO_LICENSE_URI,
            policy: LicensePolicy::Strict,
        }
    }

    /// Returns the license URI, `None` when the object carries no license.
    pub fn resolve(&self, encoding: &LegacyLicenseEncoding) -> Result<Option<String>, LicenseError> {
        if let Some(uri) = non_blank(encoding.uri.as_deref()) {
            return Ok(Some(uri.to_string()));
        }

        if non_blank(encoding.use_license.as_deref()) == Some("none") {
            tracing::debug!("Legacy use license is 'none'");
            return Ok(Some(self.no_license_uri.to_string()));
        }

        if let Some(uri) = encoding.machine_uris.iter().find_map(|uri| non_blank(Some(uri.as_str()))) {
            return Ok(Some(uri.to_string()));
        }

        if let Some(code) = non_blank(encoding.open_data_commons.as_deref()) {
            return self.lookup(self.open_data_commons, code);
        }

        if let Some(code) = non_blank(encoding.creative_commons.as_deref()) {
            return self.lookup(self.creative_commons, code);
        }

        Ok(None)
    }

    fn lookup(&self, table: &dyn LicenseLookup, code: &str) -> Result<Option<String>, LicenseError> {
        match (table.lookup(code), self.policy) {
            (Ok(uri), _) => Ok(Some(uri)),
            (Err(err @ LicenseError::UnknownCode { .. }), LicensePolicy::Lenient) => {
                tracing::warn!(vocabulary = table.vocabulary(), code, error = %err, "Dropping unresolvable license code");
                Ok(None)
            }
            (Err(err), _) => Err(err),
        }
    }
}

impl std::fmt::Debug for LicenseResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseResolver")
            .field("open_data_commons", &self.open_data_commons.vocabulary())
            .field("creative_commons", &self.creative_commons.vocabulary())
            .field("no_license_uri", &self.no_license_uri)
            .field("policy", &self.policy)
            .finish()
    }
}

/// Resolves `encoding` with the bundled vocabularies and strict policy.
pub fn resolve_license(encoding: &LegacyLicenseEncoding) -> Result<Option<String>, LicenseError> {
    LicenseResolver::new(&OpenDataCommons, &CreativeCommons).resolve(encoding)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
