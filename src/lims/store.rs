use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

use crate::core::entity::Entity;
use crate::core::types::{EntityType, IdentifierType};
use crate::lims::port::{EntityLookupPort, LookupError};
use crate::utils::io::read_text_file;

/// Serializable LIMS snapshot format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotData {
    #[serde(default)]
    pub samples: Vec<Entity>,
    #[serde(default)]
    pub libraries: Vec<Entity>,
    #[serde(default)]
    pub studies: Vec<Entity>,
}

/// In-memory, indexed copy of LIMS entities
///
/// Backs the CLI (loaded from a JSON snapshot) and serves as the lookup fake
/// in tests.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: HashMap<EntityType, Vec<Entity>>,

    /// Index: (entity type, identifier type, value) -> positions in `entities`
    id_index: HashMap<(EntityType, IdentifierType, String), Vec<usize>>,
}

impl EntityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from a JSON file (optionally gzipped)
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Io` if the file cannot be read or
    /// `LookupError::Parse` if it is not a valid snapshot.
    pub fn load_from_file(path: &Path) -> Result<Self, LookupError> {
        let content = read_text_file(path)?;
        Self::from_json(&content)
    }

    /// Parse a snapshot from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Parse` if the JSON is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, LookupError> {
        let data: SnapshotData = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(data))
    }

    #[must_use]
    pub fn from_snapshot(data: SnapshotData) -> Self {
        let mut store = Self::new();
        for (entity_type, entities) in [
            (EntityType::Sample, data.samples),
            (EntityType::Library, data.libraries),
            (EntityType::Study, data.studies),
        ] {
            for entity in entities {
                store.add_entity(entity_type, entity);
            }
        }
        debug!(
            samples = store.entities(EntityType::Sample).len(),
            libraries = store.entities(EntityType::Library).len(),
            studies = store.entities(EntityType::Study).len(),
            "Loaded LIMS snapshot"
        );
        store
    }

    /// Export as a snapshot JSON string
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String, LookupError> {
        let data = SnapshotData {
            samples: self.entities(EntityType::Sample).to_vec(),
            libraries: self.entities(EntityType::Library).to_vec(),
            studies: self.entities(EntityType::Study).to_vec(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Builder-style variant of [`EntityStore::add_entity`]
    #[must_use]
    pub fn with_entity(mut self, entity_type: EntityType, entity: Entity) -> Self {
        self.add_entity(entity_type, entity);
        self
    }

    pub fn add_entity(&mut self, entity_type: EntityType, entity: Entity) {
        let records = self.entities.entry(entity_type).or_default();
        let index = records.len();

        for id_type in IdentifierType::ALL {
            if let Some(value) = entity.field(id_type) {
                self.id_index
                    .entry((entity_type, id_type, value.to_string()))
                    .or_default()
                    .push(index);
            }
        }

        records.push(entity);
    }

    #[must_use]
    pub fn entities(&self, entity_type: EntityType) -> &[Entity] {
        self.entities.get(&entity_type).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn positions(&self, entity_type: EntityType, id_type: IdentifierType, id: &str) -> &[usize] {
        self.id_index
            .get(&(entity_type, id_type, id.trim().to_string()))
            .map_or(&[], Vec::as_slice)
    }

    /// All identifier values of the studies matching `group` on any field,
    /// plus `group` itself
    fn study_aliases(&self, group: &str) -> HashSet<String> {
        let mut aliases: HashSet<String> = HashSet::new();
        aliases.insert(group.trim().to_string());

        for id_type in IdentifierType::ALL {
            for &idx in self.positions(EntityType::Study, id_type, group) {
                let study = &self.entities(EntityType::Study)[idx];
                for alias_type in IdentifierType::ALL {
                    if let Some(value) = study.field(alias_type) {
                        aliases.insert(value.to_string());
                    }
                }
            }
        }

        aliases
    }
}

impl EntityLookupPort for EntityStore {
    fn fetch(
        &self,
        entity_type: EntityType,
        id_type: IdentifierType,
        identifiers: &[String],
    ) -> Result<Vec<Entity>, LookupError> {
        let records = self.entities(entity_type);
        let mut seen: HashSet<usize> = HashSet::new();
        let mut result = Vec::new();

        for id in identifiers {
            for &idx in self.positions(entity_type, id_type, id) {
                if seen.insert(idx) {
                    result.push(records[idx].clone());
                }
            }
        }

        debug!(
            entity_type = %entity_type,
            id_type = %id_type,
            requested = identifiers.len(),
            found = result.len(),
            "Fetched entities"
        );
        Ok(result)
    }

    fn fetch_members(
        &self,
        member_type: EntityType,
        group: &str,
    ) -> Result<Vec<Entity>, LookupError> {
        let aliases = self.study_aliases(group);
        Ok(self
            .entities(member_type)
            .iter()
            .filter(|entity| {
                entity
                    .studies
                    .iter()
                    .any(|study| aliases.contains(study.trim()))
            })
            .cloned()
            .collect())
    }
}
