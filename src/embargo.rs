//! Embargo overlay.
//!
//! An active embargo carries the rights that take effect on its release date.
//! Those rights go through the same resolution pipeline as the base rights and
//! the result is attached to the base descriptor. Released embargoes are
//! already reflected in the base rights and contribute nothing.

use crate::error::ResolutionError;
use crate::primitives::{AccessDescriptor, Embargo, EmbargoDescriptor};
use crate::resolve;
use crate::time::normalize_release_date;
use crate::types::EmbargoStatus;

/// Resolves the release rights of an active embargo.
pub fn resolve_embargo(embargo: &Embargo) -> Result<Option<EmbargoDescriptor>, ResolutionError> {
    match embargo.status {
        EmbargoStatus::Released => {
            tracing::debug!(release_date = %embargo.release_date, "Embargo already released");
            Ok(None)
        }
        EmbargoStatus::Embargoed => {
            let released = resolve::resolve(&embargo.release_rights)?;
            let release_date = normalize_release_date(&embargo.release_date);
            tracing::debug!(%release_date, access = %released.access, download = %released.download, "Resolved embargo release rights");
            Ok(Some(EmbargoDescriptor {
                release_date,
                access: released.access,
                download: released.download,
                location: released.location,
                controlled_digital_lending: released.controlled_digital_lending,
                use_and_reproduction_statement: embargo.use_and_reproduction_statement.clone(),
            }))
        }
    }
}

/// Returns `base` with the embargo overlay attached.
///
/// A released embargo leaves `base` untouched.
pub fn overlay_embargo(embargo: &Embargo, base: &AccessDescriptor) -> Result<AccessDescriptor, ResolutionError> {
    match resolve_embargo(embargo)? {
        Some(overlay) => Ok(base.with_embargo(Some(overlay))),
        None => Ok(base.clone()),
    }
}
