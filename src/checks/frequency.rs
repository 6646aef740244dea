use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::avu::Avu;
use crate::core::check::CheckResult;
use crate::core::types::Severity;

pub const FREQUENCY_CHECK: &str = "Required attributes occur the expected number of times";

/// Attribute name -> number of AVUs carrying it
pub type FrequencyMap = BTreeMap<String, usize>;

/// How an actual attribute count is compared against its required count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyComparison {
    /// Count must equal the requirement
    #[default]
    Equal,
    /// Count must be at least the requirement
    AtLeast,
    /// Count must be at most the requirement
    AtMost,
}

impl FrequencyComparison {
    #[must_use]
    pub fn accepts(self, actual: usize, required: usize) -> bool {
        match self {
            Self::Equal => actual == required,
            Self::AtLeast => actual >= required,
            Self::AtMost => actual <= required,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Equal => "exactly",
            Self::AtLeast => "at least",
            Self::AtMost => "at most",
        }
    }
}

/// Count AVUs per attribute, regardless of value
#[must_use]
pub fn build_freq_dict_from_avus_list(avus: &[Avu]) -> FrequencyMap {
    let mut frequencies = FrequencyMap::new();
    for avu in avus {
        *frequencies.entry(avu.attribute.clone()).or_default() += 1;
    }
    frequencies
}

/// Compare actual attribute counts against required ones. Attributes absent
/// from `actual` count as zero; attributes not in `required` are ignored.
#[must_use]
pub fn check_attribute_frequencies(
    actual: &FrequencyMap,
    required: &FrequencyMap,
    comparison: FrequencyComparison,
) -> Vec<CheckResult> {
    required
        .iter()
        .filter_map(|(attribute, &threshold)| {
            let count = actual.get(attribute).copied().unwrap_or(0);
            if comparison.accepts(count, threshold) {
                return None;
            }
            Some(CheckResult::fail(
                FREQUENCY_CHECK,
                Severity::Important,
                format!(
                    "Attribute {attribute} appears {count} times, expected {} {threshold}",
                    comparison.describe()
                ),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(pairs: &[(&str, usize)]) -> FrequencyMap {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_build_freq_dict_from_avus_list() {
        let avus = vec![
            Avu::new("study_id", "2278"),
            Avu::new("sample", "A"),
            Avu::new("sample", "B"),
        ];
        assert_eq!(
            build_freq_dict_from_avus_list(&avus),
            freq(&[("study_id", 1), ("sample", 2)])
        );
    }

    #[test]
    fn test_build_freq_dict_order_independent() {
        let mut avus = vec![
            Avu::new("sample", "A"),
            Avu::new("study_id", "2278"),
            Avu::new("sample", "A"),
        ];
        let forward = build_freq_dict_from_avus_list(&avus);
        avus.reverse();
        assert_eq!(forward, build_freq_dict_from_avus_list(&avus));
        assert_eq!(forward["sample"], 2);
    }

    #[test]
    fn test_build_freq_dict_empty() {
        assert!(build_freq_dict_from_avus_list(&[]).is_empty());
    }

    #[test]
    fn test_check_equal() {
        let actual = freq(&[("study_id", 1), ("sample", 2), ("extra", 7)]);
        let required = freq(&[("study_id", 1), ("sample", 1), ("md5", 1)]);

        let violations =
            check_attribute_frequencies(&actual, &required, FrequencyComparison::Equal);
        assert_eq!(violations.len(), 2);

        let messages: Vec<&str> = violations
            .iter()
            .filter_map(|v| v.message.as_deref())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Attribute md5 appears 0 times, expected exactly 1",
                "Attribute sample appears 2 times, expected exactly 1",
            ]
        );
    }

    #[test]
    fn test_check_at_least_and_at_most() {
        let actual = freq(&[("sample", 2)]);
        let required = freq(&[("sample", 1)]);

        assert!(
            check_attribute_frequencies(&actual, &required, FrequencyComparison::AtLeast)
                .is_empty()
        );
        assert_eq!(
            check_attribute_frequencies(&actual, &required, FrequencyComparison::AtMost).len(),
            1
        );
    }

    #[test]
    fn test_zero_requirement() {
        let required = freq(&[("alignment_filter", 0)]);
        assert!(check_attribute_frequencies(
            &FrequencyMap::new(),
            &required,
            FrequencyComparison::default()
        )
        .is_empty());
    }
}
