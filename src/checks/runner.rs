use std::path::PathBuf;

use tracing::{debug, info};

use crate::checks::checksum::check_md5;
use crate::checks::frequency::{
    build_freq_dict_from_avus_list, check_attribute_frequencies, FrequencyComparison,
    FrequencyMap, FREQUENCY_CHECK,
};
use crate::checks::header::{check_header_against_metadata, HEADER_SAMPLES_CHECK};
use crate::checks::lanelet::check_lanelet;
use crate::core::avu::FileMetadata;
use crate::core::check::{CheckReport, CheckResult};
use crate::core::read_group::ReadGroup;
use crate::core::types::{EntityType, Severity};
use crate::identify::classifier::is_identifier;
use crate::identify::partition::IdentifierPartition;
use crate::lims::port::{EntityLookupPort, LookupError};
use crate::reconcile::engine::{
    check_same_entities, find_unresolved_identifiers, EntitySetReconciler, EXPECTED_GROUP_CHECK,
    IDENTIFIERS_RESOLVE_CHECK, SAME_ENTITIES_CHECK,
};

/// Catalog attributes that carry identifiers for each entity type
const ENTITY_ATTRIBUTES: [(EntityType, &[&str]); 3] = [
    (
        EntityType::Sample,
        &["sample", "sample_id", "sample_accession_number"],
    ),
    (EntityType::Library, &["library", "library_id"]),
    (
        EntityType::Study,
        &["study", "study_id", "study_accession_number"],
    ),
];

/// Study attributes tried, in order, to name the expected study of a sample
const STUDY_GROUP_ATTRIBUTES: [&str; 3] = ["study_id", "study_accession_number", "study"];

/// Runs every applicable check for one catalogued file
pub struct CheckRunner<'a, L: EntityLookupPort + ?Sized> {
    reconciler: EntitySetReconciler<'a, L>,
    required_frequencies: Option<FrequencyMap>,
    comparison: FrequencyComparison,
    read_groups: Option<Vec<ReadGroup>>,
    data_file: Option<PathBuf>,
}

impl<'a, L: EntityLookupPort + ?Sized> CheckRunner<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self {
            reconciler: EntitySetReconciler::new(lookup),
            required_frequencies: None,
            comparison: FrequencyComparison::default(),
            read_groups: None,
            data_file: None,
        }
    }

    #[must_use]
    pub fn with_required_frequencies(mut self, required: FrequencyMap) -> Self {
        self.required_frequencies = Some(required);
        self
    }

    #[must_use]
    pub fn with_comparison(mut self, comparison: FrequencyComparison) -> Self {
        self.comparison = comparison;
        self
    }

    #[must_use]
    pub fn with_read_groups(mut self, read_groups: Vec<ReadGroup>) -> Self {
        self.read_groups = Some(read_groups);
        self
    }

    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// Run all checks against `metadata`
    ///
    /// # Errors
    ///
    /// Returns the first `LookupError` raised by the lookup port. Checks that
    /// lack inputs are reported as not executed rather than failing the run.
    pub fn run(&self, metadata: &FileMetadata) -> Result<CheckReport, LookupError> {
        let mut report = CheckReport::new(&metadata.subject);
        info!(subject = %metadata.subject, avus = metadata.avus.len(), "Checking file");

        let mut sample_ids = Vec::new();
        for (entity_type, attributes) in ENTITY_ATTRIBUTES {
            let partition = gather_identifiers(metadata, attributes);
            debug!(
                entity_type = %entity_type,
                identifiers = partition.len(),
                "Gathered identifiers"
            );
            if entity_type == EntityType::Sample {
                sample_ids = first_bucket(&partition);
            }
            self.reconcile(&mut report, &partition, entity_type)?;
        }

        self.check_membership(&mut report, metadata, &sample_ids)?;
        self.check_frequencies(&mut report, metadata);

        match &self.read_groups {
            Some(read_groups) => {
                for result in check_header_against_metadata(read_groups, metadata) {
                    report.push(result);
                }
            }
            None => report.push(CheckResult::not_executed(
                HEADER_SAMPLES_CHECK,
                Severity::Critical,
                "No header given",
            )),
        }

        report.push(check_md5(metadata, self.data_file.as_deref()));
        report.push(check_lanelet(metadata));

        info!(
            subject = %metadata.subject,
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Finished checks"
        );
        Ok(report)
    }

    fn reconcile(
        &self,
        report: &mut CheckReport,
        partition: &IdentifierPartition,
        entity_type: EntityType,
    ) -> Result<(), LookupError> {
        let resolve_name = format!("{IDENTIFIERS_RESOLVE_CHECK} ({entity_type})");
        let compare_name = format!("{SAME_ENTITIES_CHECK} ({entity_type})");

        if partition.is_empty() {
            let reason = format!("No {entity_type} identifiers in catalog");
            report.push(CheckResult::not_executed(
                resolve_name,
                Severity::Important,
                reason.clone(),
            ));
            report.push(CheckResult::not_executed(
                compare_name,
                Severity::Critical,
                reason,
            ));
            return Ok(());
        }

        let fetched = self.reconciler.fetch_by_type(partition, entity_type)?;

        let unresolved = find_unresolved_identifiers(partition, &fetched, entity_type);
        report.push(CheckResult::from_violations(
            resolve_name,
            Severity::Important,
            &unresolved,
        ));

        // Buckets that fetched nothing are skipped by the comparison, so
        // fewer than two resolved kinds means nothing was compared
        let unresolved_kinds: Vec<&str> = partition
            .non_empty()
            .filter(|(id_type, _)| fetched.get(id_type).map_or(true, Vec::is_empty))
            .map(|(id_type, _)| id_type.as_str())
            .collect();
        let resolved_kinds = fetched.values().filter(|e| !e.is_empty()).count();

        if partition.non_empty().count() < 2 {
            report.push(CheckResult::not_executed(
                compare_name,
                Severity::Critical,
                format!("Only one kind of {entity_type} identifier in catalog"),
            ));
        } else if resolved_kinds < 2 {
            report.push(CheckResult::not_executed(
                compare_name,
                Severity::Critical,
                format!(
                    "No {entity_type} entities found by {}",
                    unresolved_kinds.join(", ")
                ),
            ));
        } else {
            let differences = check_same_entities(&fetched, entity_type);
            report.push(CheckResult::from_violations(
                compare_name,
                Severity::Critical,
                &differences,
            ));
        }
        Ok(())
    }

    fn check_membership(
        &self,
        report: &mut CheckReport,
        metadata: &FileMetadata,
        sample_ids: &[String],
    ) -> Result<(), LookupError> {
        let groups = STUDY_GROUP_ATTRIBUTES
            .iter()
            .map(|attribute| usable_values(metadata, attribute))
            .find(|values| !values.is_empty())
            .unwrap_or_default();

        if groups.is_empty() || sample_ids.is_empty() {
            report.push(CheckResult::not_executed(
                EXPECTED_GROUP_CHECK,
                Severity::Important,
                "Catalog lacks sample or study identifiers",
            ));
            return Ok(());
        }

        let mut violations = Vec::new();
        for group in &groups {
            violations.extend(self.reconciler.check_entity_in_expected_group(
                EntityType::Sample,
                sample_ids,
                group,
            )?);
        }
        report.push(CheckResult::from_violations(
            EXPECTED_GROUP_CHECK,
            Severity::Important,
            &violations,
        ));
        Ok(())
    }

    fn check_frequencies(&self, report: &mut CheckReport, metadata: &FileMetadata) {
        let Some(required) = &self.required_frequencies else {
            report.push(CheckResult::not_executed(
                FREQUENCY_CHECK,
                Severity::Important,
                "No required attribute frequencies given",
            ));
            return;
        };
        let actual = build_freq_dict_from_avus_list(&metadata.avus);
        let violations = check_attribute_frequencies(&actual, required, self.comparison);
        report.push(CheckResult::from_violations(
            FREQUENCY_CHECK,
            Severity::Important,
            &violations,
        ));
    }
}

/// Distinct, usable values of one attribute in catalog order
fn usable_values(metadata: &FileMetadata, attribute: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in metadata.values(attribute).filter(|v| is_identifier(v)) {
        let value = value.trim().to_string();
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

fn gather_identifiers(metadata: &FileMetadata, attributes: &[&str]) -> IdentifierPartition {
    let mut partition = IdentifierPartition::new();
    for attribute in attributes {
        for value in usable_values(metadata, attribute) {
            partition.push(value);
        }
    }
    partition
}

fn first_bucket(partition: &IdentifierPartition) -> Vec<String> {
    partition
        .non_empty()
        .next()
        .map(|(_, ids)| ids.to_vec())
        .unwrap_or_default()
}
