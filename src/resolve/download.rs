//! Download-policy resolution.
//!
//! The branches below are terminal and evaluated strictly in order:
//!
//! 1. citation-only, dark or CDL never download.
//! 2. A group `no-download` rule vetoes, unless a granted location rescues it.
//! 3. A world-only `no-download` rule vetoes, unless the group or a granted
//!    location rescues it.
//! 4. A granted location with `no-download` vetoes.
//! 5. A granted, downloadable location yields `location-based`.
//! 6. With no rule written on world or group, download mirrors access.
//! 7. Group granted while the world carries `no-download` yields `stanford`.
//!
//! Anything else is an error naming the combination.

use crate::error::ResolutionError;
use crate::primitives::RightsRepresentation;
use crate::types::{AccessLevel, DownloadLevel};

/// A download level together with the location it is scoped to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadDecision {
    pub level: DownloadLevel,
    pub location: Option<String>,
}

impl DownloadDecision {
    fn level(level: DownloadLevel) -> Self {
        DownloadDecision { level, location: None }
    }

    fn at_location(name: &str) -> Self {
        DownloadDecision { level: DownloadLevel::LocationBased, location: Some(name.to_string()) }
    }
}

/// Computes the download category for `rights`, given its resolved `access`.
pub fn resolve_download(
    rights: &RightsRepresentation,
    access: AccessLevel,
) -> Result<DownloadDecision, ResolutionError> {
    let location_granted = rights.location_granted();

    // 1.
    if rights.citation_only || rights.dark || rights.controlled_digital_lending {
        tracing::debug!("Download none: citation-only, dark or CDL");
        return Ok(DownloadDecision::level(DownloadLevel::None));
    }

    // 2.
    if rights.group.granted && rights.group.no_download.is_forbidden() && !location_granted {
        tracing::debug!("Download none: group no-download");
        return Ok(DownloadDecision::level(DownloadLevel::None));
    }

    // 3.
    if rights.world.granted
        && rights.world.no_download.is_forbidden()
        && !rights.group.granted
        && !location_granted
    {
        tracing::debug!("Download none: world no-download");
        return Ok(DownloadDecision::level(DownloadLevel::None));
    }

    if let Some(loc) = rights.location.as_ref().filter(|loc| loc.granted) {
        // 5.
        if loc.permits_download() {
            tracing::debug!(location = %loc.name, "Download location-based");
            return Ok(DownloadDecision::at_location(&loc.name));
        }
        // 4.
        tracing::debug!(location = %loc.name, "Download none: location no-download");
        return Ok(DownloadDecision::level(DownloadLevel::None));
    }

    // 6.
    if !rights.world.no_download.is_set() && !rights.group.no_download.is_set() {
        let decision = match (access, rights.location.as_ref()) {
            (AccessLevel::LocationBased, Some(loc)) => DownloadDecision::at_location(&loc.name),
            _ => DownloadDecision::level(DownloadLevel::mirroring(access)),
        };
        tracing::debug!(download = %decision.level, "Download mirrors access");
        return Ok(decision);
    }

    // 7.
    if rights.group.granted && rights.world.no_download.is_forbidden() {
        tracing::debug!("Download stanford: group granted, world no-download");
        return Ok(DownloadDecision::level(DownloadLevel::Stanford));
    }

    let combination = describe_combination(rights);
    tracing::error!(?rights, %combination, "No download branch matched");
    Err(ResolutionError::UnexpectedDownloadRights {
        combination,
        rights: Box::new(rights.clone()),
    })
}

fn describe_combination(rights: &RightsRepresentation) -> String {
    let location = match &rights.location {
        Some(loc) => format!("{}(granted={}, noDownload={})", loc.name, loc.granted, loc.no_download),
        None => "none".to_string(),
    };
    format!(
        "world.granted={}, world.noDownload={}, group.granted={}, group.noDownload={}, location={}",
        rights.world.granted, rights.world.no_download, rights.group.granted, rights.group.no_download, location,
    )
}
