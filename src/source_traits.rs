//! Defines the collaborator seams the engine consumes.
//!
//! Parsing the legacy wire format and fetching embargo records happen outside
//! this crate. Implementors hand over already-normalized values.

use crate::primitives::{Embargo, ItemRights, RightsRepresentation};

/// A parsed legacy rights grant that can be normalized.
pub trait RightsSource {
    /// The error type raised when the grant cannot be normalized.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the rights representation for the object as a whole.
    fn to_rights(&self) -> Result<RightsRepresentation, Self::Error>;

    /// Builds the item rights including use terms. Defaults to no use terms.
    fn to_item_rights(&self) -> Result<ItemRights, Self::Error> {
        Ok(ItemRights { rights: self.to_rights()?, terms: Default::default() })
    }

    /// Builds the rights for a single file, if the grant carries file-scoped rules.
    fn to_file_rights(&self, file_name: &str) -> Result<Option<RightsRepresentation>, Self::Error>;
}

/// Provider of the embargo record for an object.
pub trait EmbargoSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the embargo, or `None` if the object was never embargoed.
    fn embargo(&self) -> Result<Option<Embargo>, Self::Error>;
}
