//! Parser for required-attribute-frequency tables.
//!
//! One rule per line, exactly two whitespace-separated tokens:
//!
//! ```text
//! study_id 1
//! sample 1
//! md5 1
//! ```
//!
//! There is no comment syntax and blank lines are not allowed.

use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::checks::frequency::FrequencyMap;

/// Required frequencies compiled into the binary (validated by build.rs)
pub const DEFAULT_CONFIG: &str = include_str!("../../configs/required_avus.txt");

#[derive(Error, Debug)]
pub enum ConfigFormatError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line_num} has {tokens} tokens, expected 2: '{line}'")]
    MalformedLine {
        line_num: usize,
        tokens: usize,
        line: String,
    },

    #[error("Invalid frequency on line {line_num}: '{token}' is not a non-negative integer")]
    InvalidFrequency { line_num: usize, token: String },

    #[error("Config contains no rules")]
    Empty,
}

/// Parse a required-frequency config file
///
/// # Errors
///
/// Returns `ConfigFormatError::Io` if the file cannot be read, or any parse
/// error from [`parse_config_text`].
pub fn read_and_parse_config_file(path: &Path) -> Result<FrequencyMap, ConfigFormatError> {
    let content = std::fs::read_to_string(path)?;
    parse_config_text(&content)
}

/// Parse required-frequency rules from text
///
/// # Errors
///
/// Returns `ConfigFormatError::MalformedLine` if a line does not have exactly
/// two tokens, `ConfigFormatError::InvalidFrequency` if the second token is not
/// a non-negative integer, or `ConfigFormatError::Empty` if there are no lines.
pub fn parse_config_text(text: &str) -> Result<FrequencyMap, ConfigFormatError> {
    let mut required = FrequencyMap::new();

    for (i, line) in text.lines().enumerate() {
        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let [attribute, frequency] = tokens.as_slice() else {
            return Err(ConfigFormatError::MalformedLine {
                line_num,
                tokens: tokens.len(),
                line: line.to_string(),
            });
        };

        let frequency: usize =
            frequency
                .parse()
                .map_err(|_| ConfigFormatError::InvalidFrequency {
                    line_num,
                    token: (*frequency).to_string(),
                })?;

        if let Some(previous) = required.insert((*attribute).to_string(), frequency) {
            warn!(
                attribute = %attribute,
                previous,
                frequency,
                line = line_num,
                "Attribute listed twice in config, using the later frequency"
            );
        }
    }

    if required.is_empty() {
        return Err(ConfigFormatError::Empty);
    }

    Ok(required)
}

/// The required frequencies compiled into the binary
///
/// # Errors
///
/// Only fails if the embedded table is malformed, which build.rs rules out.
pub fn default_required_frequencies() -> Result<FrequencyMap, ConfigFormatError> {
    parse_config_text(DEFAULT_CONFIG)
}
