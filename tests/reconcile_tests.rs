//! Reconciliation scenarios run through the public API with an in-memory LIMS

use meta_checker::core::avu::{Avu, FileMetadata};
use meta_checker::identify::classifier::classify;
use meta_checker::identify::partition::separate_identifiers_by_type;
use meta_checker::reconcile::engine::{check_same_entities, EntitiesByIdType};
use meta_checker::{
    CheckRunner, Entity, EntitySetReconciler, EntityStore, EntityType, IdentifierType, Severity,
};

fn lims() -> EntityStore {
    EntityStore::new()
        .with_entity(
            EntityType::Sample,
            Entity::new()
                .with_name("X")
                .with_accession_number("EGAN1")
                .with_study("2278"),
        )
        .with_entity(
            EntityType::Sample,
            Entity::new().with_name("Y").with_accession_number("EGAN2"),
        )
        .with_entity(
            EntityType::Study,
            Entity::new()
                .with_internal_id("2278")
                .with_accession_number("EGAS00001"),
        )
}

#[test]
fn test_same_sample_by_name_and_accession() {
    let x = Entity::new().with_name("X");
    let x_with_accession = Entity::new().with_name("X").with_accession_number("EGAN1");

    let mut fetched = EntitiesByIdType::new();
    fetched.insert(IdentifierType::Name, vec![x]);
    fetched.insert(IdentifierType::AccessionNumber, vec![x_with_accession]);

    assert!(check_same_entities(&fetched, EntityType::Sample).is_empty());
}

#[test]
fn test_accession_resolving_to_other_sample() {
    let mut fetched = EntitiesByIdType::new();
    fetched.insert(IdentifierType::Name, vec![Entity::new().with_name("X")]);
    fetched.insert(
        IdentifierType::AccessionNumber,
        vec![Entity::new().with_name("Y").with_accession_number("EGAN2")],
    );

    let violations = check_same_entities(&fetched, EntityType::Sample);
    assert_eq!(violations.len(), 1);

    let message = violations[0].message.as_deref().unwrap();
    assert!(message.contains("name [X]"));
    assert!(message.contains("accession_number [Y]"));
    assert_eq!(violations[0].severity, Severity::Critical);
}

#[test]
fn test_reconciler_against_store() {
    let store = lims();
    let reconciler = EntitySetReconciler::new(&store);

    let consistent = separate_identifiers_by_type(["X", "EGAN1"]);
    assert!(reconciler
        .fetch_and_compare_entity_sets(&consistent, EntityType::Sample)
        .unwrap()
        .is_empty());

    let divergent = separate_identifiers_by_type(["X", "EGAN2"]);
    assert_eq!(
        reconciler
            .fetch_and_compare_entity_sets(&divergent, EntityType::Sample)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_membership_through_study_accession() {
    let store = lims();
    let reconciler = EntitySetReconciler::new(&store);

    let ids = vec!["X".to_string(), "Y".to_string()];
    let violations = reconciler
        .check_entity_in_expected_group(EntityType::Sample, &ids, "EGAS00001")
        .unwrap();

    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].message.as_deref(),
        Some("sample Y is not in expected study EGAS00001")
    );
}

#[test]
fn test_repartition_is_stable() {
    let ids = ["808346", "2294STDY5395187", "EGAN00001033157", "123", "ERS179268"];
    let partition = separate_identifiers_by_type(ids);
    let again = separate_identifiers_by_type(partition.flatten());
    assert_eq!(partition, again);

    for id in ids {
        assert_eq!(classify(id), classify(id));
    }
}

#[test]
fn test_runner_report() {
    let store = lims();
    let metadata = FileMetadata::new(
        "/seq/5970/5970_1.bam",
        vec![
            Avu::new("sample", "X"),
            Avu::new("sample_accession_number", "EGAN2"),
            Avu::new("study_id", "2278"),
            Avu::new("id_run", "5970"),
            Avu::new("lane", "1"),
        ],
    );

    let report = CheckRunner::new(&store).run(&metadata).unwrap();
    assert!(report.has_violations());
    assert_eq!(report.failed(), 1);

    let failed = report.violations().next().unwrap();
    assert_eq!(
        failed.check_name,
        "Identifiers of different types resolve to the same entities (sample)"
    );
}
