use proptest::prelude::*;
use access_rights_core::resolve::resolve_download;
use access_rights_core::{resolve, AccessLevel, DownloadLevel, Grant, LocationGrant, NoDownload, RightsRepresentation};

fn unset_grant() -> impl Strategy<Value = Grant> {
    any::<bool>().prop_map(|granted| Grant { granted, no_download: NoDownload::Unset })
}

fn any_grant() -> impl Strategy<Value = Grant> {
    (any::<bool>(), prop_oneof![Just(NoDownload::Unset), Just(NoDownload::Allowed), Just(NoDownload::Forbidden)])
        .prop_map(|(granted, no_download)| Grant { granted, no_download })
}

fn location() -> impl Strategy<Value = Option<LocationGrant>> {
    proptest::option::of(
        (any::<bool>(), any::<bool>())
            .prop_map(|(granted, no_download)| LocationGrant { name: "spec".into(), granted, no_download }),
    )
}

proptest! {
    /// With no rule on world or group, download tracks access exactly
    /// (unless a granted location decides first).
    #[test]
    fn prop_unset_rules_mirror_access(world in unset_grant(), group in unset_grant(), location in location()) {
        let rights = RightsRepresentation { discoverable: true, world, group, location, ..Default::default() };
        prop_assume!(!rights.location_granted());
        prop_assume!(rights.world.granted || rights.group.granted || rights.location.is_some());
        let descriptor = resolve(&rights).unwrap();
        prop_assert_eq!(descriptor.download, DownloadLevel::mirroring(descriptor.access));
    }

    /// Nothing readable means nothing downloadable.
    #[test]
    fn prop_citation_and_dark_never_download(world in any_grant(), group in any_grant(), dark in any::<bool>()) {
        let rights = RightsRepresentation { world, group, dark, citation_only: !dark, ..Default::default() };
        let access = if dark { AccessLevel::Dark } else { AccessLevel::CitationOnly };
        prop_assert_eq!(resolve_download(&rights, access).map(|d| d.level), Ok(DownloadLevel::None));
    }

    /// CDL never downloads, whatever the other rules say.
    #[test]
    fn prop_cdl_never_downloads(world in any_grant(), group in any_grant(), location in location()) {
        let rights = RightsRepresentation { world, group, location, controlled_digital_lending: true, ..Default::default() };
        let descriptor = resolve(&rights).unwrap();
        prop_assert_eq!(descriptor.download, DownloadLevel::None);
        prop_assert_eq!(descriptor.controlled_digital_lending, Some(true));
    }

    /// A granted, open location yields location-based download whenever no
    /// earlier veto applies.
    #[test]
    fn prop_open_location_rescues_vetoes(world in any_grant(), group in any_grant()) {
        let rights = RightsRepresentation {
            discoverable: true,
            world,
            group,
            location: Some(LocationGrant::new("spec")),
            ..Default::default()
        };
        let descriptor = resolve(&rights).unwrap();
        prop_assert_eq!(descriptor.download, DownloadLevel::LocationBased);
        prop_assert_eq!(descriptor.location.as_deref(), Some("spec"));
    }

    /// Resolution either succeeds with a location exactly when something is
    /// location-scoped, or fails with a typed error.
    #[test]
    fn prop_location_reported_iff_location_scoped(world in any_grant(), group in any_grant(), location in location()) {
        let rights = RightsRepresentation { discoverable: true, world, group, location, ..Default::default() };
        if let Ok(descriptor) = resolve(&rights) {
            let scoped = descriptor.access == AccessLevel::LocationBased || descriptor.download == DownloadLevel::LocationBased;
            prop_assert_eq!(descriptor.location.is_some(), scoped);
        }
    }
}
