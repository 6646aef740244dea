use crate::core::avu::FileMetadata;
use crate::core::check::CheckResult;
use crate::core::lanelet::Lanelet;
use crate::core::types::Severity;

pub const LANELET_CHECK: &str = "File name matches run, lane and tag metadata";

/// Compare the lanelet encoded in the file name with the one described by
/// the `id_run`, `lane` and `tag_index` attributes
#[must_use]
pub fn check_lanelet(metadata: &FileMetadata) -> CheckResult {
    let file_name = metadata.file_name();
    let Some(from_name) = Lanelet::from_file_name(file_name) else {
        return CheckResult::not_executed(
            LANELET_CHECK,
            Severity::Important,
            format!("File name {file_name} does not encode a lanelet"),
        );
    };
    let Some(from_metadata) = Lanelet::from_metadata(metadata) else {
        return CheckResult::not_executed(
            LANELET_CHECK,
            Severity::Important,
            "Catalog has no usable id_run/lane attributes",
        );
    };

    if from_name == from_metadata {
        CheckResult::pass(LANELET_CHECK, Severity::Important)
    } else {
        CheckResult::fail(
            LANELET_CHECK,
            Severity::Important,
            format!("File name says {from_name}, catalog says {from_metadata}"),
        )
    }
}
