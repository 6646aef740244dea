use serde::{Deserialize, Serialize};

use crate::core::identifier::deserialize_optional_text;
use crate::core::types::IdentifierType;

/// A sample, library, or study record as known to the LIMS
///
/// Entities are retrieved through an [`EntityLookupPort`](crate::lims::port::EntityLookupPort)
/// and held only for the duration of one reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Numeric primary key in the LIMS
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession_number: Option<String>,

    /// Identifiers (of any type) of the studies this entity belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub studies: Vec<String>,
}

impl Entity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_internal_id(mut self, id: impl Into<String>) -> Self {
        self.internal_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_accession_number(mut self, accession: impl Into<String>) -> Self {
        self.accession_number = Some(accession.into());
        self
    }

    #[must_use]
    pub fn with_study(mut self, study: impl Into<String>) -> Self {
        self.studies.push(study.into());
        self
    }

    /// Value of the field corresponding to an identifier type.
    /// Empty or whitespace-only values are treated as absent.
    #[must_use]
    pub fn field(&self, id_type: IdentifierType) -> Option<&str> {
        let value = match id_type {
            IdentifierType::InternalId => self.internal_id.as_deref(),
            IdentifierType::Name => self.name.as_deref(),
            IdentifierType::AccessionNumber => self.accession_number.as_deref(),
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether the field for `id_type` equals `id` (both trimmed)
    #[must_use]
    pub fn matches(&self, id_type: IdentifierType, id: &str) -> bool {
        self.field(id_type) == Some(id.trim())
    }

    /// Key used to compare entity sets: the first present of internal id,
    /// name, and accession number
    #[must_use]
    pub fn key(&self) -> &str {
        IdentifierType::ALL
            .iter()
            .find_map(|&id_type| self.field(id_type))
            .unwrap_or("")
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
