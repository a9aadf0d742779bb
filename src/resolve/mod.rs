//! The resolution pipeline.
//!
//! `RightsRepresentation` → access level → download policy → `AccessDescriptor`.
//! License and use terms are resolved independently and merged in by
//! [`resolve_item`].

pub mod access;
pub mod download;


pub use access::resolve_access;
pub use download::{resolve_download, DownloadDecision};

use crate::error::ResolutionError;
use crate::license::LicenseResolver;
use crate::primitives::{AccessDescriptor, ItemRights, RightsRepresentation};
use crate::types::{AccessLevel, DownloadLevel};

/// Resolves the access/download pair for one rights grant.
///
/// Pure and deterministic: equal inputs always give equal descriptors.
pub fn resolve(rights: &RightsRepresentation) -> Result<AccessDescriptor, ResolutionError> {
    let access = resolve_access(rights)?;
    let download = resolve_download(rights, access)?;

    let location = download.location.or_else(|| match access {
        AccessLevel::LocationBased => rights.location.as_ref().map(|loc| loc.name.clone()),
        _ => None,
    });

    Ok(AccessDescriptor {
        location,
        controlled_digital_lending: rights.controlled_digital_lending.then_some(true),
        ..AccessDescriptor::new(access, download.level)
    })
}

/// Resolves an item's rights and merges in its license and use terms.
pub fn resolve_item(
    item: &ItemRights,
    licenses: &LicenseResolver<'_>,
) -> Result<AccessDescriptor, ResolutionError> {
    let base = resolve(&item.rights)?;
    let license = licenses.resolve(&item.terms.license)?;

    Ok(AccessDescriptor {
        license,
        copyright: item.terms.copyright.clone(),
        use_and_reproduction_statement: item.terms.use_and_reproduction_statement.clone(),
        ..base
    })
}

/// Collections are either world-visible or dark; they have no download policy.
pub fn resolve_collection(rights: &RightsRepresentation) -> AccessDescriptor {
    if rights.world.granted {
        AccessDescriptor::new(AccessLevel::World, DownloadLevel::None)
    } else {
        AccessDescriptor::dark()
    }
}
