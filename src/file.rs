//! Per-file rights.
//!
//! Most files carry no rights of their own and inherit the item's descriptor.
//! A file with its own rights is resolved independently; nothing from the
//! item is merged in.

use crate::error::ResolutionError;
use crate::primitives::{AccessDescriptor, RightsRepresentation};
use crate::resolve;
use crate::types::{AccessLevel, DownloadLevel};

/// Resolves a file's descriptor from the item descriptor and optional file rights.
pub fn resolve_file_rights(
    item: &AccessDescriptor,
    file: Option<&RightsRepresentation>,
) -> Result<AccessDescriptor, ResolutionError> {
    match file {
        Some(rights) => resolve::resolve(rights),
        None => Ok(inherit(item)),
    }
}

/// Item-level `citation-only` has no file-level meaning: the file is dark.
fn inherit(item: &AccessDescriptor) -> AccessDescriptor {
    match item.access {
        AccessLevel::CitationOnly => {
            tracing::debug!("Citation-only item: file inherits as dark");
            AccessDescriptor {
                access: AccessLevel::Dark,
                download: DownloadLevel::None,
                ..item.clone()
            }
        }
        _ => item.clone(),
    }
}
