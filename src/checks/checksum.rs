use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::avu::FileMetadata;
use crate::core::check::CheckResult;
use crate::core::types::Severity;
use crate::utils::validation::normalize_md5;

pub const CHECKSUM_CHECK: &str = "Catalog md5 matches the data file";

const MD5_ATTRIBUTE: &str = "md5";

/// Compute the MD5 of a file, streaming it in chunks
///
/// # Errors
///
/// Returns an IO error if the file cannot be read.
pub fn compute_file_md5(path: &Path) -> std::io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut context = md5::Context::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        context.consume(&buffer[..read]);
    }

    Ok(format!("{:x}", context.compute()))
}

/// Compare the catalog `md5` attribute with the checksum of a local copy
#[must_use]
pub fn check_md5(metadata: &FileMetadata, data_file: Option<&Path>) -> CheckResult {
    let Some(data_file) = data_file else {
        return CheckResult::not_executed(CHECKSUM_CHECK, Severity::Critical, "No data file given");
    };
    let Some(raw) = metadata.first_value(MD5_ATTRIBUTE) else {
        return CheckResult::not_executed(
            CHECKSUM_CHECK,
            Severity::Critical,
            "Catalog has no md5 attribute",
        );
    };

    let Some(expected) = normalize_md5(raw) else {
        return CheckResult::fail(
            CHECKSUM_CHECK,
            Severity::Critical,
            format!("Catalog md5 '{raw}' is not a valid MD5 checksum"),
        );
    };

    match compute_file_md5(data_file) {
        Ok(actual) if actual == expected => CheckResult::pass(CHECKSUM_CHECK, Severity::Critical),
        Ok(actual) => CheckResult::fail(
            CHECKSUM_CHECK,
            Severity::Critical,
            format!("Catalog md5 {expected} differs from file md5 {actual}"),
        ),
        Err(e) => CheckResult::not_executed(
            CHECKSUM_CHECK,
            Severity::Critical,
            format!("Cannot read {}: {e}", data_file.display()),
        ),
    }
}
