//! Reading text inputs that may be gzip-compressed.

use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read a whole text file, decompressing `.gz`/`.bgz` files transparently.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened, decompressed, or is not UTF-8.
pub fn read_text_file(path: &Path) -> std::io::Result<String> {
    if is_gzipped(path) {
        let file = std::fs::File::open(path)?;
        let mut content = String::new();
        MultiGzDecoder::new(file).read_to_string(&mut content)?;
        Ok(content)
    } else {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("meta.json.gz")));
        assert!(is_gzipped(Path::new("META.JSON.BGZ")));
        assert!(!is_gzipped(Path::new("meta.json")));
    }

    #[test]
    fn test_read_gzipped_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avus.json.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"[]").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        assert_eq!(read_text_file(&path).unwrap(), "[]");
    }

    #[test]
    fn test_read_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avus.json");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(read_text_file(&path).unwrap(), "{}");
    }
}
