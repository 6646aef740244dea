use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

use crate::core::check::CheckResult;
use crate::core::entity::Entity;
use crate::core::types::{EntityType, IdentifierType, Severity};
use crate::identify::classifier::classify;
use crate::identify::partition::IdentifierPartition;
use crate::lims::port::{EntityLookupPort, LookupError};
use crate::reconcile::predicates::{is_id_duplicated, is_id_missing};

pub const SAME_ENTITIES_CHECK: &str = "Identifiers of different types resolve to the same entities";
pub const IDENTIFIERS_RESOLVE_CHECK: &str = "Identifiers resolve to exactly one LIMS entity";
pub const EXPECTED_GROUP_CHECK: &str = "Entities belong to the expected study";

/// Entities fetched per identifier type, iterated in canonical order
pub type EntitiesByIdType = BTreeMap<IdentifierType, Vec<Entity>>;

/// Entity sets obtained for the same logical identifiers through two
/// different identifier types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySetComparison {
    pub entity_type: EntityType,
    pub first_id_type: IdentifierType,
    pub first: BTreeSet<String>,
    pub second_id_type: IdentifierType,
    pub second: BTreeSet<String>,
}

impl EntitySetComparison {
    #[must_use]
    pub fn new(
        entity_type: EntityType,
        first: (IdentifierType, &[Entity]),
        second: (IdentifierType, &[Entity]),
    ) -> Self {
        let keys = |entities: &[Entity]| -> BTreeSet<String> {
            entities.iter().map(|e| e.key().to_string()).collect()
        };
        Self {
            entity_type,
            first_id_type: first.0,
            first: keys(first.1),
            second_id_type: second.0,
            second: keys(second.1),
        }
    }

    pub fn symmetric_difference(&self) -> impl Iterator<Item = &String> {
        self.first.symmetric_difference(&self.second)
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.symmetric_difference().next().is_none()
    }

    /// The violation describing this comparison, if the sets differ
    #[must_use]
    pub fn violation(&self) -> Option<CheckResult> {
        if self.is_consistent() {
            return None;
        }
        Some(CheckResult::fail(
            SAME_ENTITIES_CHECK,
            Severity::Critical,
            format!(
                "{} entities fetched by {} {} differ from those fetched by {} {}",
                self.entity_type,
                self.first_id_type,
                format_set(&self.first),
                self.second_id_type,
                format_set(&self.second),
            ),
        ))
    }
}

fn format_set(set: &BTreeSet<String>) -> String {
    format!("[{}]", set.iter().cloned().collect::<Vec<_>>().join(", "))
}

/// Compare entity sets fetched through different identifier types.
///
/// Empty buckets are skipped. Only adjacent non-empty buckets (in canonical
/// identifier-type order) are compared, so with all three populated,
/// internal id and accession number are never compared directly.
#[must_use]
pub fn check_same_entities(
    entities_by_id_type: &EntitiesByIdType,
    entity_type: EntityType,
) -> Vec<CheckResult> {
    let populated: Vec<(IdentifierType, &[Entity])> = entities_by_id_type
        .iter()
        .filter(|(_, entities)| !entities.is_empty())
        .map(|(&id_type, entities)| (id_type, entities.as_slice()))
        .collect();

    populated
        .windows(2)
        .filter_map(|pair| EntitySetComparison::new(entity_type, pair[0], pair[1]).violation())
        .collect()
}

/// Report identifiers that match no entity, or more than one, among the
/// entities fetched for their bucket
#[must_use]
pub fn find_unresolved_identifiers(
    identifiers_by_type: &IdentifierPartition,
    entities_by_id_type: &EntitiesByIdType,
    entity_type: EntityType,
) -> Vec<CheckResult> {
    let mut violations = Vec::new();

    for (id_type, ids) in identifiers_by_type.non_empty() {
        let entities = entities_by_id_type
            .get(&id_type)
            .map_or(&[][..], Vec::as_slice);
        let mut seen: HashSet<&str> = HashSet::new();

        for id in ids {
            if !seen.insert(id.trim()) {
                continue;
            }
            if is_id_missing(id, id_type, entities) {
                violations.push(CheckResult::fail(
                    IDENTIFIERS_RESOLVE_CHECK,
                    Severity::Important,
                    format!("{entity_type} {id_type} '{id}' is missing from the LIMS"),
                ));
            } else if is_id_duplicated(id, id_type, entities) {
                violations.push(CheckResult::fail(
                    IDENTIFIERS_RESOLVE_CHECK,
                    Severity::Important,
                    format!("{entity_type} {id_type} '{id}' matches more than one LIMS entity"),
                ));
            }
        }
    }

    violations
}

/// Drives reconciliation checks against one authoritative source
pub struct EntitySetReconciler<'a, L: EntityLookupPort + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: EntityLookupPort + ?Sized> EntitySetReconciler<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// One lookup per non-empty identifier bucket
    ///
    /// # Errors
    ///
    /// Propagates the first `LookupError` from the port.
    pub fn fetch_by_type(
        &self,
        identifiers_by_type: &IdentifierPartition,
        entity_type: EntityType,
    ) -> Result<EntitiesByIdType, LookupError> {
        let mut fetched = EntitiesByIdType::new();
        for (id_type, ids) in identifiers_by_type.non_empty() {
            let entities = self.lookup.fetch(entity_type, id_type, ids)?;
            debug!(
                entity_type = %entity_type,
                id_type = %id_type,
                identifiers = ids.len(),
                entities = entities.len(),
                "Resolved identifier group"
            );
            fetched.insert(id_type, entities);
        }
        Ok(fetched)
    }

    /// Fetch entities for every identifier bucket and compare the resulting
    /// sets. An empty result means the buckets agree.
    ///
    /// # Errors
    ///
    /// Propagates the first `LookupError` from the port.
    pub fn fetch_and_compare_entity_sets(
        &self,
        identifiers_by_type: &IdentifierPartition,
        entity_type: EntityType,
    ) -> Result<Vec<CheckResult>, LookupError> {
        let fetched = self.fetch_by_type(identifiers_by_type, entity_type)?;
        Ok(check_same_entities(&fetched, entity_type))
    }

    /// Report identifiers missing from, or duplicated in, the source
    ///
    /// # Errors
    ///
    /// Propagates the first `LookupError` from the port.
    pub fn check_identifiers_resolve(
        &self,
        identifiers_by_type: &IdentifierPartition,
        entity_type: EntityType,
    ) -> Result<Vec<CheckResult>, LookupError> {
        let fetched = self.fetch_by_type(identifiers_by_type, entity_type)?;
        Ok(find_unresolved_identifiers(
            identifiers_by_type,
            &fetched,
            entity_type,
        ))
    }

    /// Report each entity id that is not a member of `expected_group`.
    /// Each id is classified to decide which member field to match on.
    ///
    /// # Errors
    ///
    /// Propagates the `LookupError` from the port.
    pub fn check_entity_in_expected_group(
        &self,
        entity_type: EntityType,
        entity_ids: &[String],
        expected_group: &str,
    ) -> Result<Vec<CheckResult>, LookupError> {
        let members = self.lookup.fetch_members(entity_type, expected_group)?;
        debug!(
            entity_type = %entity_type,
            group = expected_group,
            members = members.len(),
            "Fetched group members"
        );

        Ok(entity_ids
            .iter()
            .filter(|id| {
                let id_type = classify(id);
                !members.iter().any(|member| member.matches(id_type, id))
            })
            .map(|id| {
                CheckResult::fail(
                    EXPECTED_GROUP_CHECK,
                    Severity::Important,
                    format!(
                        "{entity_type} {id} is not in expected study {expected_group}"
                    ),
                )
            })
            .collect())
    }
}
