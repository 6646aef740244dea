//! Centralized validation and helper functions.

/// Maximum number of read groups allowed in a single header (DOS protection)
pub const MAX_READ_GROUPS: usize = 100_000;

/// Maximum number of AVUs accepted for a single file
pub const MAX_AVUS: usize = 1_000_000;

/// Validate that a string is a valid MD5 checksum (32 hex characters).
///
/// # Examples
///
/// ```
/// use meta_checker::utils::validation::is_valid_md5;
///
/// assert!(is_valid_md5("6aef897c3d6ff0c78aff06ac189178dd"));
/// assert!(!is_valid_md5("not-an-md5"));
/// assert!(!is_valid_md5("6aef897c3d6ff0c78aff06ac189178d")); // 31 chars
/// ```
#[must_use]
pub fn is_valid_md5(s: &str) -> bool {
    s.len() == 32 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize an MD5 string to lowercase, ignoring surrounding whitespace.
/// Returns None if the input is not a valid MD5.
#[must_use]
pub fn normalize_md5(s: &str) -> Option<String> {
    let s = s.trim();
    if is_valid_md5(s) {
        Some(s.to_lowercase())
    } else {
        None
    }
}

/// Check if adding another read group would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new read group.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_read_group_limit(count: usize) -> Option<String> {
    if count >= MAX_READ_GROUPS {
        Some(format!(
            "Too many read groups: adding another would exceed maximum of {MAX_READ_GROUPS}"
        ))
    } else {
        None
    }
}

/// Check an AVU count against the maximum allowed.
/// Returns an error message if the count is over the limit.
#[must_use]
pub fn check_avu_limit(count: usize) -> Option<String> {
    if count > MAX_AVUS {
        Some(format!("Too many AVUs: {count} exceeds maximum of {MAX_AVUS}"))
    } else {
        None
    }
}
