#![no_main]

// Harness: file_rights
// Focus: inheritance never yields citation-only at file level; overrides
// match standalone resolution.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use access_rights_core::file::resolve_file_rights;
use access_rights_core::{resolve, AccessDescriptor, AccessLevel, DownloadLevel};

#[derive(Arbitrary, Debug, Clone)]
struct FileFrame {
    item_access: u8,
    item_download: u8,
    file: Option<(bool, bool, bool, bool, bool)>,
}

fuzz_target!(|frame: FileFrame| {
    let access = AccessLevel::ALL[frame.item_access as usize % AccessLevel::ALL.len()];
    let download = DownloadLevel::ALL[frame.item_download as usize % DownloadLevel::ALL.len()];
    let item = AccessDescriptor::new(access, download);

    let file_rights = frame.file.map(|(world, group, citation_only, dark, cdl)| access_rights_core::RightsRepresentation {
        discoverable: !dark,
        world: access_rights_core::Grant { granted: world, ..Default::default() },
        group: access_rights_core::Grant { granted: group, ..Default::default() },
        controlled_digital_lending: cdl,
        citation_only,
        dark,
        ..Default::default()
    });

    match (&file_rights, resolve_file_rights(&item, file_rights.as_ref())) {
        (None, Ok(file)) => assert_ne!(file.access, AccessLevel::CitationOnly),
        (None, Err(_)) => panic!("inheritance cannot fail"),
        (Some(rights), result) => assert_eq!(result, resolve(rights)),
    }
});
