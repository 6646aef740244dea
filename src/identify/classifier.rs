//! Pattern-based classification of identifier strings.
//!
//! Classification is a rule table evaluated in precedence order on the
//! trimmed string form; the first matching rule wins and anything left over
//! is a name. Classification never fails. [`classify_strict`] additionally
//! rejects empty and "not specified" values.

use crate::core::identifier::{Identifier, IdentifierError};
use crate::core::types::IdentifierType;

/// Values that mark an identifier as not specified
pub const UNSPECIFIED_VALUES: [&str; 4] = ["", "N/A", "undefined", "unspecified"];

/// Accession prefixes issued by the public archives (EGA, ENA, SRA, DDBJ)
pub const ACCESSION_PREFIXES: [&str; 4] = ["EGA", "ER", "SR", "DR"];

type Rule = (IdentifierType, fn(&str) -> bool);

/// Classification rules in precedence order
const RULES: [Rule; 2] = [
    (IdentifierType::AccessionNumber, is_accession_number),
    (IdentifierType::InternalId, is_internal_id),
];

/// Type of anything no rule matched
const FALLBACK: IdentifierType = IdentifierType::Name;

/// Check if a value is usable as an identifier of any type.
///
/// # Examples
///
/// ```
/// use meta_checker::identify::classifier::is_identifier;
///
/// assert!(is_identifier("123"));
/// assert!(!is_identifier("N/A"));
/// assert!(!is_identifier(""));
/// ```
#[must_use]
pub fn is_identifier(value: &str) -> bool {
    !UNSPECIFIED_VALUES.contains(&value.trim())
}

/// Archive prefix, at least two uppercase letters, then at least one digit.
/// Separators of any kind disqualify the value.
#[must_use]
pub fn is_accession_number(value: &str) -> bool {
    let value = value.trim();
    if !ACCESSION_PREFIXES
        .iter()
        .any(|prefix| value.starts_with(prefix))
    {
        return false;
    }

    let letters = value.bytes().take_while(u8::is_ascii_uppercase).count();
    let digits = &value[letters..];
    letters >= 2 && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[must_use]
pub fn is_internal_id(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Stricter than "not an internal id": digits with a single trailing dot
/// (`123.`) are rejected as well, so truncated numeric values don't pass as
/// names.
#[must_use]
pub fn is_name(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    let numeric_part = value.strip_suffix('.').unwrap_or(value);
    !is_internal_id(numeric_part)
}

/// Classify a value into exactly one identifier type
#[must_use]
pub fn classify(value: &str) -> IdentifierType {
    RULES
        .iter()
        .find(|(_, matches)| matches(value))
        .map_or(FALLBACK, |&(id_type, _)| id_type)
}

/// Classify a value, failing on empty or "not specified" values
///
/// # Errors
///
/// Returns `IdentifierError::Unclassifiable` if the value is empty or one of
/// [`UNSPECIFIED_VALUES`].
pub fn classify_strict(value: &str) -> Result<IdentifierType, IdentifierError> {
    if is_identifier(value) {
        Ok(classify(value))
    } else {
        Err(IdentifierError::Unclassifiable(value.to_string()))
    }
}

impl Identifier {
    /// Classify this identifier; integers are always internal ids
    #[must_use]
    pub fn classify(&self) -> IdentifierType {
        classify(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        for value in ["", "N/A", "undefined", "unspecified", "  N/A "] {
            assert!(!is_identifier(value), "{value:?} should not be an identifier");
        }
        assert!(is_identifier("123"));
        assert!(is_identifier("abc"));
        assert!(is_identifier("n/a-ish"));
    }

    #[test]
    fn test_classify_internal_id() {
        assert_eq!(classify("123"), IdentifierType::InternalId);
        assert_eq!(classify(" 2278 "), IdentifierType::InternalId);
        assert_eq!(
            Identifier::from(808_346_u64).classify(),
            IdentifierType::InternalId
        );
    }

    #[test]
    fn test_classify_accession_number() {
        for value in ["EGAN00001033157", "ERS179268", "ERP123", "EGAS00001000001", "SRS000001", "DRR1"] {
            assert_eq!(classify(value), IdentifierType::AccessionNumber, "{value}");
        }
    }

    #[test]
    fn test_classify_name() {
        assert_eq!(classify("2294STDY5395187"), IdentifierType::Name);
        assert_eq!(classify("MYNAME"), IdentifierType::Name);
        assert_eq!(classify("my sample 1"), IdentifierType::Name);
        // Prefix alone, lowercase, or embedded separators are not accessions
        assert_eq!(classify("EGAN"), IdentifierType::Name);
        assert_eq!(classify("egan0001"), IdentifierType::Name);
        assert_eq!(classify("ERS-179268"), IdentifierType::Name);
        assert_eq!(classify("ERS179268_b"), IdentifierType::Name);
        // Unknown archive prefix
        assert_eq!(classify("ABC123"), IdentifierType::Name);
    }

    #[test]
    fn test_trailing_dot_number_is_not_a_name() {
        assert!(!is_name("123."));
        assert!(!is_name("123"));
        assert!(!is_internal_id("123."));
        assert!(is_internal_id("123"));
        assert!(is_name("abc"));
        assert!(is_name("123.4a"));
        assert!(!is_name(""));
        assert!(!is_name("   "));
    }

    #[test]
    fn test_classify_is_deterministic() {
        for value in ["123", "ERS1", "abc", "123.", "  x y "] {
            let first = classify(value);
            for _ in 0..5 {
                assert_eq!(classify(value), first);
            }
        }
    }

    #[test]
    fn test_classify_strict() {
        assert_eq!(classify_strict("ERS179268"), Ok(IdentifierType::AccessionNumber));
        assert_eq!(classify_strict("abc"), Ok(IdentifierType::Name));
        assert!(matches!(
            classify_strict("unspecified"),
            Err(IdentifierError::Unclassifiable(_))
        ));
        assert!(classify_strict("").is_err());
    }
}
