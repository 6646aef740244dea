use serde::{Deserialize, Serialize};

use crate::core::identifier::Identifier;
use crate::core::types::IdentifierType;
use crate::identify::classifier::classify;

/// Identifiers grouped by classified type
///
/// Each bucket keeps identifiers in encounter order, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierPartition {
    pub internal_id: Vec<String>,
    pub name: Vec<String>,
    pub accession_number: Vec<String>,
}

impl IdentifierPartition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id_type: IdentifierType) -> &[String] {
        match id_type {
            IdentifierType::InternalId => &self.internal_id,
            IdentifierType::Name => &self.name,
            IdentifierType::AccessionNumber => &self.accession_number,
        }
    }

    fn bucket_mut(&mut self, id_type: IdentifierType) -> &mut Vec<String> {
        match id_type {
            IdentifierType::InternalId => &mut self.internal_id,
            IdentifierType::Name => &mut self.name,
            IdentifierType::AccessionNumber => &mut self.accession_number,
        }
    }

    /// Classify an identifier and append it to its bucket
    pub fn push(&mut self, identifier: impl Into<Identifier>) -> IdentifierType {
        let text = identifier.into().to_text();
        let id_type = classify(&text);
        self.bucket_mut(id_type).push(text);
        id_type
    }

    /// All buckets in canonical order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (IdentifierType, &[String])> {
        IdentifierType::ALL
            .into_iter()
            .map(move |id_type| (id_type, self.get(id_type)))
    }

    /// Non-empty buckets in canonical order
    pub fn non_empty(&self) -> impl Iterator<Item = (IdentifierType, &[String])> {
        self.iter().filter(|(_, ids)| !ids.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of identifiers across all buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.internal_id.len() + self.name.len() + self.accession_number.len()
    }

    /// Concatenation of all buckets in canonical order
    #[must_use]
    pub fn flatten(&self) -> Vec<&str> {
        self.iter()
            .flat_map(|(_, ids)| ids.iter().map(String::as_str))
            .collect()
    }
}

/// Group identifiers by classified type, preserving encounter order
pub fn separate_identifiers_by_type<I, T>(identifiers: I) -> IdentifierPartition
where
    I: IntoIterator<Item = T>,
    T: Into<Identifier>,
{
    let mut partition = IdentifierPartition::new();
    for identifier in identifiers {
        partition.push(identifier);
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separate_identifiers_by_type() {
        let partition = separate_identifiers_by_type(["123", "MYNAME", "ERP123"]);
        assert_eq!(partition.internal_id, vec!["123"]);
        assert_eq!(partition.name, vec!["MYNAME"]);
        assert_eq!(partition.accession_number, vec!["ERP123"]);
    }

    #[test]
    fn test_empty_input() {
        let partition = separate_identifiers_by_type(Vec::<String>::new());
        assert!(partition.is_empty());
        assert_eq!(partition.iter().count(), 3);
        assert_eq!(partition.non_empty().count(), 0);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let partition =
            separate_identifiers_by_type(["b", "2", "a", "1", "b", "EGAN2", "EGAN1", "2"]);
        assert_eq!(partition.name, vec!["b", "a", "b"]);
        assert_eq!(partition.internal_id, vec!["2", "1", "2"]);
        assert_eq!(partition.accession_number, vec!["EGAN2", "EGAN1"]);
        assert_eq!(partition.len(), 8);
    }

    #[test]
    fn test_integers_partitioned_as_internal_ids() {
        let partition = separate_identifiers_by_type([808_346_u64, 2278]);
        assert_eq!(partition.internal_id, vec!["808346", "2278"]);
    }

    #[test]
    fn test_repartition_is_stable() {
        let partition = separate_identifiers_by_type([
            "ERS179268",
            "2294STDY5395187",
            "808346",
            "123.",
            "EGAN00001033157",
            "sample one",
        ]);
        let again = separate_identifiers_by_type(partition.flatten());
        assert_eq!(partition, again);
    }

    #[test]
    fn test_serializes_as_map() {
        let partition = separate_identifiers_by_type(["1"]);
        let json = serde_json::to_value(&partition).unwrap();
        assert_eq!(json["internal_id"][0], "1");
        assert!(json["name"].as_array().unwrap().is_empty());
    }
}
