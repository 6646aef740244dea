use crate::core::entity::Entity;
use crate::core::types::IdentifierType;

/// True when no entity has `id` as its `id_type` field
#[must_use]
pub fn is_id_missing(id: &str, id_type: IdentifierType, entities: &[Entity]) -> bool {
    !entities.iter().any(|entity| entity.matches(id_type, id))
}

/// True when two or more entities share `id` as their `id_type` field,
/// regardless of how their other fields differ
#[must_use]
pub fn is_id_duplicated(id: &str, id_type: IdentifierType, entities: &[Entity]) -> bool {
    entities
        .iter()
        .filter(|entity| entity.matches(id_type, id))
        .nth(1)
        .is_some()
}
