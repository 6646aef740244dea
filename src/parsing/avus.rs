//! Parser for catalog metadata exports.
//!
//! Two JSON shapes are accepted:
//!
//! - a bare array of `{"attribute", "value", "units"}` objects
//! - an object carrying `collection`, `data_object` and an `avus` array, as
//!   produced by catalog listing tools
//!
//! Files ending in `.gz` or `.bgz` are decompressed transparently.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::core::avu::{Avu, FileMetadata};
use crate::parsing::header::ParseError;
use crate::utils::io::read_text_file;
use crate::utils::validation::check_avu_limit;

#[derive(Deserialize)]
#[serde(untagged)]
enum AvuDocument {
    List(Vec<Avu>),
    Object(DataObject),
}

#[derive(Deserialize)]
struct DataObject {
    #[serde(default)]
    collection: Option<String>,
    #[serde(default)]
    data_object: Option<String>,
    avus: Vec<Avu>,
}

/// Parse a metadata export file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Json` if
/// it is not JSON, or `ParseError::InvalidFormat` if the JSON is not an AVU list or data object
/// or the AVU limit is exceeded.
pub fn parse_avus_file(path: &Path) -> Result<FileMetadata, ParseError> {
    let content = read_text_file(path)?;
    let metadata = parse_avus_json(&content, &path.display().to_string())?;
    debug!(
        subject = %metadata.subject,
        avus = metadata.avus.len(),
        "Parsed catalog metadata"
    );
    Ok(metadata)
}

/// Parse metadata from a JSON string. `default_subject` names the file when
/// the document does not carry its own catalog path.
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not JSON, or
/// `ParseError::InvalidFormat` if the JSON is not an AVU list or data object,
/// or if the AVU limit is exceeded.
pub fn parse_avus_json(json: &str, default_subject: &str) -> Result<FileMetadata, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let document: AvuDocument = serde_json::from_value(value).map_err(|e| {
        ParseError::InvalidFormat(format!("expected an AVU list or data object: {e}"))
    })?;

    let (subject, avus) = match document {
        AvuDocument::List(avus) => (default_subject.to_string(), avus),
        AvuDocument::Object(object) => {
            let subject = match (object.collection, object.data_object) {
                (Some(collection), Some(data_object)) => {
                    format!("{}/{}", collection.trim_end_matches('/'), data_object)
                }
                (None, Some(data_object)) => data_object,
                _ => default_subject.to_string(),
            };
            (subject, object.avus)
        }
    };

    if let Some(message) = check_avu_limit(avus.len()) {
        return Err(ParseError::InvalidFormat(message));
    }

    Ok(FileMetadata::new(subject, avus))
}
