use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::read_group::ReadGroup;
use crate::utils::validation::check_read_group_limit;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Too many read groups: {0} exceeds maximum allowed (100000)")]
    TooManyReadGroups(usize),
}

/// Parse a SAM/BAM/CRAM file and extract its read groups
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::UnsupportedFormat` for unknown extensions, or
/// `ParseError::TooManyReadGroups` if the limit is exceeded.
pub fn parse_file(path: &Path) -> Result<Vec<ReadGroup>, ParseError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("sam") => parse_sam_file(path),
        Some("bam") => parse_bam_file(path),
        Some("cram") => parse_cram_file(path),
        Some("txt" | "header") => {
            let text = std::fs::read_to_string(path)?;
            parse_header_text(&text)
        }
        Some(ext) => Err(ParseError::UnsupportedFormat(ext.to_string())),
        None => parse_sam_file(path),
    }
}

fn parse_sam_file(path: &Path) -> Result<Vec<ReadGroup>, ParseError> {
    use noodles::sam;

    let mut reader = std::fs::File::open(path)
        .map(BufReader::new)
        .map(sam::io::Reader::new)?;

    let header = reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    header_to_read_groups(&header)
}

fn parse_bam_file(path: &Path) -> Result<Vec<ReadGroup>, ParseError> {
    use noodles::bam;

    let mut reader = std::fs::File::open(path).map(bam::io::Reader::new)?;

    let header = reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    header_to_read_groups(&header)
}

fn parse_cram_file(path: &Path) -> Result<Vec<ReadGroup>, ParseError> {
    use noodles::cram;

    let mut reader = std::fs::File::open(path).map(cram::io::Reader::new)?;

    reader
        .read_file_definition()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    let header = reader
        .read_file_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    header_to_read_groups(&header)
}

/// Convert a noodles header to read groups
fn header_to_read_groups(header: &noodles::sam::Header) -> Result<Vec<ReadGroup>, ParseError> {
    use noodles::sam::header::record::value::map::tag::Other;

    let mut read_groups = Vec::new();

    for (id, map) in header.read_groups() {
        let mut read_group = ReadGroup::new(id.to_string());

        if let Ok(sm_tag) = Other::try_from(*b"SM") {
            if let Some(value) = map.other_fields().get(&sm_tag) {
                read_group.sample = Some(value.to_string());
            }
        }

        if let Ok(lb_tag) = Other::try_from(*b"LB") {
            if let Some(value) = map.other_fields().get(&lb_tag) {
                read_group.library = Some(value.to_string());
            }
        }

        if check_read_group_limit(read_groups.len()).is_some() {
            return Err(ParseError::TooManyReadGroups(read_groups.len()));
        }

        read_groups.push(read_group);
    }

    Ok(read_groups)
}

/// Parse read groups from raw header text (stdin or pasted)
///
/// `@RG` lines without an `ID` tag are skipped with a warning. A header with
/// no read groups is valid and yields an empty list.
///
/// # Errors
///
/// Returns `ParseError::TooManyReadGroups` if the limit is exceeded.
pub fn parse_header_text(text: &str) -> Result<Vec<ReadGroup>, ParseError> {
    let mut read_groups = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if !line.starts_with("@RG") {
            continue;
        }

        let mut read_group = ReadGroup::default();
        let mut has_id = false;

        for field in line.split('\t').skip(1) {
            if let Some((tag, value)) = field.split_once(':') {
                match tag {
                    "ID" => {
                        read_group.id = value.to_string();
                        has_id = true;
                    }
                    "SM" => read_group.sample = Some(value.to_string()),
                    "LB" => read_group.library = Some(value.to_string()),
                    _ => {}
                }
            }
        }

        if !has_id {
            warn!(line = i + 1, "@RG line without ID tag, ignoring");
            continue;
        }

        if check_read_group_limit(read_groups.len()).is_some() {
            return Err(ParseError::TooManyReadGroups(read_groups.len()));
        }

        read_groups.push(read_group);
    }

    Ok(read_groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_text() {
        let header = "@HD\tVN:1.6\tSO:coordinate\n\
@SQ\tSN:chr1\tLN:248956422\n\
@RG\tID:1#23\tPL:ILLUMINA\tPU:5970_1#23\tLB:3904133\tDS:Genomes of X\tSM:2294STDY5395187\n\
@RG\tID:1#24\tSM:2294STDY5395188\n\
@PG\tID:bwa\n";

        let read_groups = parse_header_text(header).unwrap();
        assert_eq!(read_groups.len(), 2);

        assert_eq!(read_groups[0].id, "1#23");
        assert_eq!(read_groups[0].sample.as_deref(), Some("2294STDY5395187"));
        assert_eq!(read_groups[0].library.as_deref(), Some("3904133"));

        assert_eq!(read_groups[1].sample.as_deref(), Some("2294STDY5395188"));
        assert!(read_groups[1].library.is_none());
    }

    #[test]
    fn test_parse_header_text_no_rg() {
        let header = "@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:100\n";
        assert!(parse_header_text(header).unwrap().is_empty());
    }

    #[test]
    fn test_rg_without_id_skipped() {
        let header = "@RG\tSM:lonely\n@RG\tID:a\tSM:b\n";
        let read_groups = parse_header_text(header).unwrap();
        assert_eq!(read_groups.len(), 1);
        assert_eq!(read_groups[0].id, "a");
    }

    #[test]
    fn test_parse_sam_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("5970_1#23.sam");
        std::fs::write(
            &path,
            "@HD\tVN:1.6\n@RG\tID:1#23\tSM:2294STDY5395187\tLB:3904133\n",
        )
        .unwrap();

        let read_groups = parse_file(&path).unwrap();
        assert_eq!(read_groups.len(), 1);
        assert_eq!(read_groups[0].id, "1#23");
        assert_eq!(read_groups[0].sample.as_deref(), Some("2294STDY5395187"));
        assert_eq!(read_groups[0].library.as_deref(), Some("3904133"));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            parse_file(Path::new("reads.fastq")),
            Err(ParseError::UnsupportedFormat(_))
        ));
    }
}
