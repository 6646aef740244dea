use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Cannot classify '{0}': value is empty or marks an unspecified identifier")]
    Unclassifiable(String),

    #[error("Identifier must be a string or a non-negative integer, got {0}")]
    TypeMismatch(String),
}

/// A raw identifier as supplied by a caller, with no type tag
///
/// Integers are kept as numbers until classification, where they are
/// coerced to their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged, try_from = "serde_json::Value")]
pub enum Identifier {
    Text(String),
    Integer(u64),
}

impl Identifier {
    /// String form used for classification and matching
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Identifier {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Self::Integer(n)
    }
}

impl From<u32> for Identifier {
    fn from(n: u32) -> Self {
        Self::Integer(u64::from(n))
    }
}

impl TryFrom<serde_json::Value> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(Self::Text(s)),
            Value::Number(n) => n
                .as_u64()
                .map(Self::Integer)
                .ok_or_else(|| IdentifierError::TypeMismatch(format!("number {n}"))),
            Value::Bool(b) => Err(IdentifierError::TypeMismatch(format!("boolean {b}"))),
            Value::Null => Err(IdentifierError::TypeMismatch("null".to_string())),
            Value::Array(_) => Err(IdentifierError::TypeMismatch("array".to_string())),
            Value::Object(_) => Err(IdentifierError::TypeMismatch("object".to_string())),
        }
    }
}

/// Deserialize an optional identifier field that may be written as a string or number
///
/// # Errors
///
/// Returns a deserialization error for booleans, arrays, objects, and
/// negative or fractional numbers.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Identifier>::deserialize(deserializer)?;
    Ok(raw.map(|id| id.to_text()))
}
