#![cfg(test)]

use crate::config::{EngineConfig, LicensePolicy};
use crate::engine::Engine;
use crate::error::{EngineError, LicenseError, ResolutionError};
use crate::license::{LegacyLicenseEncoding, LicenseLookup, LicenseTable, OpenDataCommons};
use crate::primitives::{Embargo, Grant, ItemRights, LocationGrant, RightsRepresentation, UseTerms};
use crate::source_traits::{EmbargoSource, RightsSource};
use crate::time::parse_release_date;
use crate::types::{AccessLevel, DownloadLevel, EmbargoStatus};

// --- Test Utilities ---

#[derive(Debug)]
struct MockSourceError(String);

impl std::fmt::Display for MockSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockSourceError: {}", self.0)
    }
}
impl std::error::Error for MockSourceError {}

/// Stands in for a parsed legacy grant.
#[derive(Debug, Clone, Default)]
struct MockSource {
    item: ItemRights,
    files: Vec<(String, RightsRepresentation)>,
    embargo: Option<Embargo>,
    broken: bool,
}

impl RightsSource for MockSource {
    type Error = MockSourceError;

    fn to_rights(&self) -> Result<RightsRepresentation, Self::Error> {
        if self.broken {
            return Err(MockSourceError("unparseable grant".into()));
        }
        Ok(self.item.rights.clone())
    }

    fn to_item_rights(&self) -> Result<ItemRights, Self::Error> {
        Ok(ItemRights { rights: self.to_rights()?, terms: self.item.terms.clone() })
    }

    fn to_file_rights(&self, file_name: &str) -> Result<Option<RightsRepresentation>, Self::Error> {
        Ok(self.files.iter().find(|(name, _)| name == file_name).map(|(_, rights)| rights.clone()))
    }
}

impl EmbargoSource for MockSource {
    type Error = MockSourceError;

    fn embargo(&self) -> Result<Option<Embargo>, Self::Error> {
        Ok(self.embargo.clone())
    }
}

/// A vocabulary whose backing store is unavailable.
#[derive(Debug, Clone, Copy)]
struct OfflineVocabulary;

impl LicenseLookup for OfflineVocabulary {
    fn vocabulary(&self) -> &str {
        "offline-cc"
    }

    fn lookup(&self, _code: &str) -> Result<String, LicenseError> {
        Err(LicenseError::Table("vocabulary store unreachable".into()))
    }
}

fn cc_item(rights: RightsRepresentation, code: &str) -> ItemRights {
    ItemRights {
        rights,
        terms: UseTerms {
            license: LegacyLicenseEncoding { creative_commons: Some(code.into()), ..Default::default() },
            copyright: Some("Copyright (c) 2021 The Authors".into()),
            use_and_reproduction_statement: Some("User agrees to cite the work.".into()),
        },
    }
}

// --- Tests ---

#[test]
fn item_resolution_merges_use_terms() {
    let engine = Engine::default();
    let descriptor = engine.resolve_item(&cc_item(RightsRepresentation::world(), "by-nc")).unwrap();

    assert_eq!(descriptor.access, AccessLevel::World);
    assert_eq!(descriptor.download, DownloadLevel::World);
    assert_eq!(descriptor.license.as_deref(), Some("https://creativecommons.org/licenses/by-nc/3.0/legalcode"));
    assert_eq!(descriptor.copyright.as_deref(), Some("Copyright (c) 2021 The Authors"));
    assert_eq!(descriptor.use_and_reproduction_statement.as_deref(), Some("User agrees to cite the work."));
}

#[test]
fn unknown_license_code_aborts_item_resolution() {
    let engine = Engine::default();
    let err = engine.resolve_item(&cc_item(RightsRepresentation::world(), "by-zz")).unwrap_err();
    assert!(matches!(err, ResolutionError::UnknownLicenseCode(LicenseError::UnknownCode { .. })));
}

#[test]
fn lenient_engine_drops_unknown_license_code() {
    let config = EngineConfig { license_policy: LicensePolicy::Lenient, ..Default::default() };
    let engine = Engine::with_bundled_tables(config);
    let descriptor = engine.resolve_item(&cc_item(RightsRepresentation::world(), "by-zz")).unwrap();
    assert_eq!(descriptor.license, None);
    assert_eq!(descriptor.access, AccessLevel::World);
}

#[test]
fn table_failure_is_not_reported_as_unknown_code() {
    let engine = Engine::new(EngineConfig::default(), OpenDataCommons, OfflineVocabulary);
    let err = engine.resolve_item(&cc_item(RightsRepresentation::world(), "by")).unwrap_err();
    assert_eq!(err, ResolutionError::LicenseTable("vocabulary store unreachable".into()));
}

#[test]
fn lenient_policy_does_not_hide_table_failures() {
    let config = EngineConfig { license_policy: LicensePolicy::Lenient, ..Default::default() };
    let engine = Engine::new(config, OpenDataCommons, OfflineVocabulary);
    let err = engine.resolve_item(&cc_item(RightsRepresentation::world(), "by")).unwrap_err();
    assert!(matches!(err, ResolutionError::LicenseTable(_)));
}

#[test]
fn configured_sentinel_is_used_for_use_license_none() {
    let config = EngineConfig { no_license_uri: "urn:example:no-license".into(), ..Default::default() };
    let engine = Engine::with_bundled_tables(config);
    let encoding = LegacyLicenseEncoding { use_license: Some("none".into()), ..Default::default() };
    assert_eq!(engine.resolve_license(&encoding).unwrap().as_deref(), Some("urn:example:no-license"));
}

#[test]
fn injected_table_replaces_bundled_vocabulary() {
    let cc = LicenseTable::from_pairs("local-cc", [("by", "https://creativecommons.org/licenses/by/4.0/")]);
    let engine = Engine::new(EngineConfig::default(), OpenDataCommons, cc);
    let encoding = LegacyLicenseEncoding { creative_commons: Some("by".into()), ..Default::default() };
    assert_eq!(
        engine.resolve_license(&encoding).unwrap().as_deref(),
        Some("https://creativecommons.org/licenses/by/4.0/")
    );
    let err = engine
        .resolve_license(&LegacyLicenseEncoding { creative_commons: Some("cc0".into()), ..Default::default() })
        .unwrap_err();
    assert_eq!(err, LicenseError::UnknownCode { vocabulary: "local-cc".into(), code: "cc0".into() });
}

#[test]
fn resolve_object_overlays_active_embargo() {
    let source = MockSource {
        item: cc_item(RightsRepresentation::stanford().with_group(Grant::granted_no_download()), "by"),
        embargo: Some(Embargo {
            status: EmbargoStatus::Embargoed,
            release_date: parse_release_date("2030-06-01T12:00:00+02:00").unwrap(),
            release_rights: RightsRepresentation::world(),
            use_and_reproduction_statement: None,
        }),
        ..Default::default()
    };

    let descriptor = Engine::default().resolve_object(&source).unwrap();
    assert_eq!(descriptor.access, AccessLevel::Stanford);
    assert_eq!(descriptor.download, DownloadLevel::None);
    let embargo = descriptor.embargo.unwrap();
    assert_eq!(embargo.access, AccessLevel::World);
    assert_eq!(embargo.release_date.to_rfc3339(), "2030-06-01T10:00:00+00:00");
}

#[test]
fn resolve_object_surfaces_source_failures() {
    let source = MockSource { broken: true, ..Default::default() };
    let err = Engine::default().resolve_object(&source).unwrap_err();
    assert!(matches!(err, EngineError::Source(msg) if msg.contains("unparseable grant")));
}

#[test]
fn resolve_file_uses_override_only_when_present() {
    let source = MockSource {
        item: ItemRights { rights: RightsRepresentation::citation_only(), terms: UseTerms::default() },
        files: vec![(
            "reading-room.pdf".into(),
            RightsRepresentation::location("ars").with_location(LocationGrant { no_download: true, ..LocationGrant::new("ars") }),
        )],
        ..Default::default()
    };
    let engine = Engine::default();
    let item = engine.resolve_object(&source).unwrap();
    assert_eq!(item.access, AccessLevel::CitationOnly);

    let plain = engine.resolve_file(&source, &item, "thumbnail.jp2").unwrap();
    assert_eq!((plain.access, plain.download), (AccessLevel::Dark, DownloadLevel::None));

    let overridden = engine.resolve_file(&source, &item, "reading-room.pdf").unwrap();
    assert_eq!(overridden.access, AccessLevel::LocationBased);
    assert_eq!(overridden.download, DownloadLevel::None);
    assert_eq!(overridden.location.as_deref(), Some("ars"));
}

#[test]
fn collections_are_world_or_dark() {
    let engine = Engine::default();
    assert_eq!(engine.resolve_collection(&RightsRepresentation::world()).access, AccessLevel::World);
    assert_eq!(engine.resolve_collection(&RightsRepresentation::stanford()).access, AccessLevel::Dark);
    assert_eq!(engine.resolve_collection(&RightsRepresentation::world()).download, DownloadLevel::None);
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(Engine::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.resolve(&RightsRepresentation::world()).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().access, AccessLevel::World);
    }
}
