#![no_main]

// Harness: resolve_rights
// Focus: every flag combination either resolves or fails with a typed error;
// never panics, and successful results satisfy the download invariants.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use access_rights_core::{resolve, AccessLevel, DownloadLevel, Grant, LocationGrant, NoDownload, RightsRepresentation};

#[derive(Arbitrary, Debug, Clone)]
pub struct RightsFrame {
    pub discoverable: bool,
    pub world: (bool, Option<bool>),
    pub group: (bool, Option<bool>),
    pub location: Option<(bool, bool)>,
    pub cdl: bool,
    pub citation_only: bool,
    pub dark: bool,
}

impl RightsFrame {
    pub fn to_rights(&self) -> RightsRepresentation {
        RightsRepresentation {
            discoverable: self.discoverable,
            world: Grant { granted: self.world.0, no_download: NoDownload::from(self.world.1) },
            group: Grant { granted: self.group.0, no_download: NoDownload::from(self.group.1) },
            location: self.location.map(|(granted, no_download)| LocationGrant {
                name: "spec".to_string(),
                granted,
                no_download,
            }),
            controlled_digital_lending: self.cdl,
            citation_only: self.citation_only,
            dark: self.dark,
        }
    }
}

fuzz_target!(|frame: RightsFrame| {
    let rights = frame.to_rights();
    let Ok(descriptor) = resolve(&rights) else { return };

    if matches!(descriptor.access, AccessLevel::CitationOnly | AccessLevel::Dark) || rights.controlled_digital_lending {
        assert_eq!(descriptor.download, DownloadLevel::None);
    }
    assert_eq!(descriptor, resolve(&rights).unwrap());
});
