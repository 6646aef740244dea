//! End-to-end tests of the meta-checker binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LIMS: &str = r#"{
    "samples": [
        {"internal_id": 808346, "name": "2294STDY5395187", "accession_number": "EGAN00001033157", "studies": ["2278"]},
        {"internal_id": 808347, "name": "2294STDY5395188", "accession_number": "EGAN00001033158"}
    ],
    "libraries": [
        {"internal_id": 9876543, "name": "LIB1"}
    ],
    "studies": [
        {"internal_id": 2278, "name": "Study X", "accession_number": "EGAS00001000123"}
    ]
}"#;

const METADATA: &str = r#"{
    "collection": "/seq/5970",
    "data_object": "5970_1#23.bam",
    "avus": [
        {"attribute": "sample_id", "value": "808346"},
        {"attribute": "sample", "value": "2294STDY5395187"},
        {"attribute": "sample_accession_number", "value": "EGAN00001033157"},
        {"attribute": "library_id", "value": "9876543"},
        {"attribute": "study_id", "value": "2278"},
        {"attribute": "id_run", "value": "5970"},
        {"attribute": "lane", "value": "1"},
        {"attribute": "tag_index", "value": "23"}
    ]
}"#;

fn meta_checker() -> Command {
    Command::cargo_bin("meta-checker").unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_classify_json() {
    let output = meta_checker()
        .args(["classify", "808346", "2294STDY5395187", "EGAN00001033157"])
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["identifiers"][0]["type"], "internal_id");
    assert_eq!(json["identifiers"][1]["type"], "name");
    assert_eq!(json["identifiers"][2]["type"], "accession_number");
    assert_eq!(json["partition"]["name"][0], "2294STDY5395187");
}

#[test]
fn test_classify_strict_rejects_unspecified() {
    meta_checker()
        .args(["classify", "--strict", "123", "N/A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("N/A"));

    meta_checker()
        .args(["classify", "N/A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name"));
}

#[test]
fn test_frequencies_with_config() {
    let dir = TempDir::new().unwrap();
    let metadata = write(dir.path(), "5970_1#23.bam.json", METADATA);
    let config = write(dir.path(), "required.txt", "study_id 1\nsample 1\nmd5 1\n");

    meta_checker()
        .arg("frequencies")
        .arg(&metadata)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Attribute md5 appears 0 times, expected exactly 1",
        ));

    meta_checker()
        .args(["frequencies", "--format", "tsv"])
        .arg(&metadata)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("study_id\t1\t1\ttrue"));
}

#[test]
fn test_frequencies_malformed_config() {
    let dir = TempDir::new().unwrap();
    let metadata = write(dir.path(), "5970_1#23.bam.json", METADATA);
    let config = write(dir.path(), "required.txt", "study_id 1 extra\n");

    meta_checker()
        .arg("frequencies")
        .arg(&metadata)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 1 has 3 tokens"));
}

#[test]
fn test_check_consistent_file() {
    let dir = TempDir::new().unwrap();
    let metadata = write(dir.path(), "5970_1#23.bam.json", METADATA);
    let lims = write(dir.path(), "lims.json", LIMS);
    let config = write(dir.path(), "required.txt", "study_id 1\nsample 1\n");

    let output = meta_checker()
        .args(["check", "--format", "json", "--fail-on-violation"])
        .arg(&metadata)
        .arg("--lims")
        .arg(&lims)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["subject"], "/seq/5970/5970_1#23.bam");
    let results = report["results"].as_array().unwrap();
    assert!(results.iter().all(|r| r["result"] == "PASS"));
    assert!(results.iter().any(|r| r["executed"] == false));
}

#[test]
fn test_check_reports_violation() {
    let dir = TempDir::new().unwrap();
    let divergent = METADATA.replace("EGAN00001033157", "EGAN00001033158");
    let metadata = write(dir.path(), "5970_1#23.bam.json", &divergent);
    let lims = write(dir.path(), "lims.json", LIMS);

    meta_checker()
        .args(["check", "--format", "tsv"])
        .arg(&metadata)
        .arg("--lims")
        .arg(&lims)
        .assert()
        .success()
        .stdout(predicate::str::contains("FAIL"));

    meta_checker()
        .args(["check", "--fail-on-violation"])
        .arg(&metadata)
        .arg("--lims")
        .arg(&lims)
        .assert()
        .failure()
        .stdout(predicate::str::contains("[FAIL]"))
        .stderr(predicate::str::contains("check(s) failed"));
}

#[test]
fn test_check_with_header_and_data_file() {
    let dir = TempDir::new().unwrap();
    let data = write(dir.path(), "5970_1#23.bam", "hello\n");
    let with_md5 = METADATA.replace(
        r#"{"attribute": "lane", "value": "1"},"#,
        r#"{"attribute": "lane", "value": "1"}, {"attribute": "md5", "value": "b1946ac92492d2347c6235b4d2611184"},"#,
    );
    let metadata = write(dir.path(), "5970_1#23.bam.json", &with_md5);
    let lims = write(dir.path(), "lims.json", LIMS);
    let header = write(
        dir.path(),
        "header.txt",
        "@HD\tVN:1.6\n@RG\tID:1#23\tSM:2294STDY5395187\tLB:9876543\n",
    );

    meta_checker()
        .arg("check")
        .arg(&metadata)
        .arg("--lims")
        .arg(&lims)
        .arg("--header")
        .arg(&header)
        .arg("--data-file")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS] Catalog md5 matches the data file"))
        .stdout(predicate::str::contains(
            "[PASS] Header read-group samples match catalog samples",
        ));
}
