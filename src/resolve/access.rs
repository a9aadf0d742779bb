//! Access-level resolution.
//!
//! Branches are evaluated in a fixed order and the first match wins. A
//! representation that matches none of them, or that mixes `dark` or
//! `citation_only` with a readable scope, is rejected rather than defaulted.

use crate::error::ResolutionError;
use crate::primitives::RightsRepresentation;
use crate::types::AccessLevel;

/// Computes the access category for `rights`.
pub fn resolve_access(rights: &RightsRepresentation) -> Result<AccessLevel, ResolutionError> {
    check_consistency(rights)?;

    let level = if rights.world.granted {
        AccessLevel::World
    } else if rights.group.granted || rights.controlled_digital_lending {
        AccessLevel::Stanford
    } else if rights.citation_only {
        AccessLevel::CitationOnly
    } else if rights.dark {
        AccessLevel::Dark
    } else if rights.location.is_some() {
        AccessLevel::LocationBased
    } else {
        return Err(unresolvable("no access branch matched", rights));
    };

    tracing::debug!(access = %level, "Resolved access level");
    Ok(level)
}

/// Rejects representations whose flags contradict each other.
fn check_consistency(rights: &RightsRepresentation) -> Result<(), ResolutionError> {
    if rights.dark && rights.citation_only {
        return Err(unresolvable("dark and citation-only are both set", rights));
    }
    if (rights.dark || rights.citation_only) && rights.any_readable() {
        let flag = if rights.dark { "dark" } else { "citation-only" };
        return Err(unresolvable(&format!("{flag} combined with a readable scope"), rights));
    }
    Ok(())
}

pub(crate) fn unresolvable(reason: &str, rights: &RightsRepresentation) -> ResolutionError {
    tracing::error!(?rights, reason, "Unresolvable access rights");
    ResolutionError::UnresolvableAccess {
        reason: reason.to_string(),
        rights: Box::new(rights.clone()),
    }
}
