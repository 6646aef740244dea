use std::collections::BTreeSet;

use crate::core::avu::FileMetadata;
use crate::core::check::CheckResult;
use crate::core::read_group::ReadGroup;
use crate::core::types::Severity;
use crate::identify::classifier::is_identifier;

pub const HEADER_SAMPLES_CHECK: &str = "Header read-group samples match catalog samples";
pub const HEADER_LIBRARIES_CHECK: &str = "Header read-group libraries match catalog libraries";

/// Catalog attribute compared with each read-group tag
const SAMPLE_ATTRIBUTE: &str = "sample";
const LIBRARY_ATTRIBUTE: &str = "library_id";

/// Compare the samples and libraries named in read groups against the
/// catalog metadata for the same file
#[must_use]
pub fn check_header_against_metadata(
    read_groups: &[ReadGroup],
    metadata: &FileMetadata,
) -> Vec<CheckResult> {
    let header_samples = collect(read_groups.iter().filter_map(|rg| rg.sample.as_deref()));
    let header_libraries = collect(read_groups.iter().filter_map(|rg| rg.library.as_deref()));

    vec![
        compare_value_sets(
            HEADER_SAMPLES_CHECK,
            &header_samples,
            &collect(metadata.values(SAMPLE_ATTRIBUTE)),
            SAMPLE_ATTRIBUTE,
        ),
        compare_value_sets(
            HEADER_LIBRARIES_CHECK,
            &header_libraries,
            &collect(metadata.values(LIBRARY_ATTRIBUTE)),
            LIBRARY_ATTRIBUTE,
        ),
    ]
}

/// Distinct usable values; unspecified placeholders are dropped
fn collect<'a>(values: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    values
        .filter(|v| is_identifier(v))
        .map(|v| v.trim().to_string())
        .collect()
}

fn compare_value_sets(
    check_name: &str,
    header: &BTreeSet<String>,
    catalog: &BTreeSet<String>,
    attribute: &str,
) -> CheckResult {
    if header.is_empty() || catalog.is_empty() {
        let missing = if header.is_empty() {
            "header has no read-group values"
        } else {
            "catalog has no values"
        };
        return CheckResult::not_executed(
            check_name,
            Severity::Critical,
            format!("Cannot compare {attribute}: {missing}"),
        );
    }

    if header == catalog {
        return CheckResult::pass(check_name, Severity::Critical);
    }

    let header_only: Vec<&str> = header.difference(catalog).map(String::as_str).collect();
    let catalog_only: Vec<&str> = catalog.difference(header).map(String::as_str).collect();
    CheckResult::fail(
        check_name,
        Severity::Critical,
        format!(
            "{attribute} differs: header only [{}], catalog only [{}]",
            header_only.join(", "),
            catalog_only.join(", ")
        ),
    )
}
