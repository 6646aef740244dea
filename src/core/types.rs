use serde::{Deserialize, Serialize};

/// Lexical kind of an entity identifier
///
/// The declaration order is the canonical bucket order used when comparing
/// entity sets fetched through different identifier types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierType {
    /// Numeric primary key local to the LIMS
    InternalId,
    /// Human-readable name
    Name,
    /// Public archive accession (EGA, ENA, SRA, DDBJ)
    AccessionNumber,
}

impl IdentifierType {
    /// All identifier types in canonical order
    pub const ALL: [Self; 3] = [Self::InternalId, Self::Name, Self::AccessionNumber];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InternalId => "internal_id",
            Self::Name => "name",
            Self::AccessionNumber => "accession_number",
        }
    }
}

impl std::fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of biological unit tracked by the LIMS
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Sample,
    Library,
    Study,
}

impl EntityType {
    pub const ALL: [Self; 3] = [Self::Sample, Self::Library, Self::Study];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Library => "library",
            Self::Study => "study",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How serious a failed check is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Informational,
    Important,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Informational => write!(f, "INFORMATIONAL"),
            Self::Important => write!(f, "IMPORTANT"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Pass/fail outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckOutcome {
    Pass,
    Fail,
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_type_canonical_order() {
        let mut sorted = IdentifierType::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, IdentifierType::ALL.to_vec());
        assert!(IdentifierType::InternalId < IdentifierType::AccessionNumber);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_string(&IdentifierType::AccessionNumber).unwrap(),
            "\"accession_number\""
        );
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"CRITICAL\""
        );
        assert_eq!(serde_json::to_string(&CheckOutcome::Fail).unwrap(), "\"FAIL\"");
    }

    #[test]
    fn test_display_matches_serialization() {
        for id_type in IdentifierType::ALL {
            assert_eq!(
                serde_json::to_string(&id_type).unwrap(),
                format!("\"{id_type}\"")
            );
        }
        for entity_type in EntityType::ALL {
            assert_eq!(
                serde_json::to_string(&entity_type).unwrap(),
                format!("\"{entity_type}\"")
            );
        }
    }
}
