//! Engine configuration.

use crate::error::ConfigError;
use crate::license::NO_LICENSE_URI;

/// What to do with a legacy license code the vocabulary does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicensePolicy {
    /// Abort resolution with `UnknownLicenseCode`.
    #[default]
    Strict,
    /// Proceed without a license.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub license_policy: LicensePolicy,
    /// URI emitted for legacy objects whose use license is `none`.
    pub no_license_uri: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            license_policy: LicensePolicy::Strict,
            no_license_uri: NO_LICENSE_URI.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(s).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if config.no_license_uri.trim().is_empty() {
            return Err(ConfigError::Invalid("no_license_uri must not be blank".into()));
        }
        Ok(config)
    }
}
