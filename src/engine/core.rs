//!
//! The engine facade: configuration, license vocabularies and the resolvers
//! behind one value that can be shared across threads.

use crate::config::EngineConfig;
use crate::embargo;
use crate::error::{EngineError, LicenseError, ResolutionError};
use crate::file;
use crate::license::{CreativeCommons, LegacyLicenseEncoding, LicenseLookup, LicenseResolver, OpenDataCommons};
use crate::primitives::{AccessDescriptor, Embargo, ItemRights, RightsRepresentation};
use crate::resolve;
use crate::source_traits::{EmbargoSource, RightsSource};

/// Rights resolution engine, generic over its two license vocabularies.
///
/// Holds no mutable state; every method is a pure function of its inputs and
/// the configured tables.
#[derive(Debug, Clone)]
pub struct Engine<O: LicenseLookup = OpenDataCommons, C: LicenseLookup = CreativeCommons> {
    pub config: EngineConfig,
    open_data_commons: O,
    creative_commons: C,
}

impl<O, C> Engine<O, C>
where
    O: LicenseLookup,
    C: LicenseLookup,
{
    pub fn new(config: EngineConfig, open_data_commons: O, creative_commons: C) -> Self {
        Engine { config, open_data_commons, creative_commons }
    }

    /// License resolver borrowing this engine's tables and policy.
    pub fn license_resolver(&self) -> LicenseResolver<'_> {
        LicenseResolver {
            open_data_commons: &self.open_data_commons,
            creative_commons: &self.creative_commons,
            no_license_uri: &self.config.no_license_uri,
            policy: self.config.license_policy,
        }
    }

    pub fn resolve(&self, rights: &RightsRepresentation) -> Result<AccessDescriptor, ResolutionError> {
        resolve::resolve(rights)
    }

    pub fn resolve_license(&self, encoding: &LegacyLicenseEncoding) -> Result<Option<String>, LicenseError> {
        self.license_resolver().resolve(encoding)
    }

    pub fn resolve_item(&self, item: &ItemRights) -> Result<AccessDescriptor, ResolutionError> {
        resolve::resolve_item(item, &self.license_resolver())
    }

    pub fn resolve_collection(&self, rights: &RightsRepresentation) -> AccessDescriptor {
        resolve::resolve_collection(rights)
    }

    pub fn overlay_embargo(&self, embargo: &Embargo, base: &AccessDescriptor) -> Result<AccessDescriptor, ResolutionError> {
        embargo::overlay_embargo(embargo, base)
    }

    pub fn resolve_file_rights(
        &self,
        item: &AccessDescriptor,
        file: Option<&RightsRepresentation>,
    ) -> Result<AccessDescriptor, ResolutionError> {
        file::resolve_file_rights(item, file)
    }

    /// Resolves an item and, when an embargo is recorded, overlays it.
    pub fn resolve_with_embargo(
        &self,
        item: &ItemRights,
        embargo: Option<&Embargo>,
    ) -> Result<AccessDescriptor, ResolutionError> {
        let base = self.resolve_item(item)?;
        match embargo {
            Some(embargo) => self.overlay_embargo(embargo, &base),
            None => Ok(base),
        }
    }

    /// Full item-level resolution straight from the collaborators.
    pub fn resolve_object<S>(&self, source: &S) -> Result<AccessDescriptor, EngineError>
    where
        S: RightsSource + EmbargoSource,
    {
        let item = RightsSource::to_item_rights(source).map_err(|e| EngineError::Source(e.to_string()))?;
        let embargo = EmbargoSource::embargo(source).map_err(|e| EngineError::Source(e.to_string()))?;
        Ok(self.resolve_with_embargo(&item, embargo.as_ref())?)
    }

    /// Resolves one file against an already-resolved item descriptor.
    pub fn resolve_file<S: RightsSource>(
        &self,
        source: &S,
        item: &AccessDescriptor,
        file_name: &str,
    ) -> Result<AccessDescriptor, EngineError> {
        let file_rights = source.to_file_rights(file_name).map_err(|e| EngineError::Source(e.to_string()))?;
        tracing::debug!(file_name, has_override = file_rights.is_some(), "Resolving file rights");
        Ok(self.resolve_file_rights(item, file_rights.as_ref())?)
    }
}

impl Engine<OpenDataCommons, CreativeCommons> {
    /// Convenience constructor using the bundled vocabularies.
    pub fn with_bundled_tables(config: EngineConfig) -> Self {
        Self::new(config, OpenDataCommons, CreativeCommons)
    }
}

impl Default for Engine<OpenDataCommons, CreativeCommons> {
    fn default() -> Self {
        Self::with_bundled_tables(EngineConfig::default())
    }
}
