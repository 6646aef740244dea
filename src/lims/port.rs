use thiserror::Error;

use crate::core::entity::Entity;
use crate::core::types::{EntityType, IdentifierType};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Failed to read LIMS snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse LIMS snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LIMS lookup failed: {0}")]
    Unavailable(String),
}

/// Read access to an authoritative source of samples, libraries and studies
///
/// Implementations must be side-effect free from the caller's point of view
/// and must return an empty vec, not an error, when nothing matches. Retries
/// and timeouts, if any, belong to the implementation.
pub trait EntityLookupPort {
    /// Fetch every entity of `entity_type` whose `id_type` field equals one of
    /// `identifiers`. Entities that share a matching value are all returned.
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` if the source cannot be queried.
    fn fetch(
        &self,
        entity_type: EntityType,
        id_type: IdentifierType,
        identifiers: &[String],
    ) -> Result<Vec<Entity>, LookupError>;

    /// Fetch every entity of `member_type` belonging to the study identified
    /// by `group` (an internal id, name, or accession number).
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` if the source cannot be queried.
    fn fetch_members(
        &self,
        member_type: EntityType,
        group: &str,
    ) -> Result<Vec<Entity>, LookupError>;
}

impl<T: EntityLookupPort + ?Sized> EntityLookupPort for &T {
    fn fetch(
        &self,
        entity_type: EntityType,
        id_type: IdentifierType,
        identifiers: &[String],
    ) -> Result<Vec<Entity>, LookupError> {
        (**self).fetch(entity_type, id_type, identifiers)
    }

    fn fetch_members(
        &self,
        member_type: EntityType,
        group: &str,
    ) -> Result<Vec<Entity>, LookupError> {
        (**self).fetch_members(member_type, group)
    }
}
