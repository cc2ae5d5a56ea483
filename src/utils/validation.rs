//! Centralized validation and helper functions.

/// Maximum number of genomes allowed in a single file (DOS protection)
pub const MAX_GENOMES: usize = 100_000;

/// Longest sequence line accepted by the loader
pub const MAX_SEQUENCE_LINE_LENGTH: usize = 80;

/// Normalize a base to uppercase.
/// Returns None if it is not one of `A`, `C`, `G`, `T` or `N` in either case.
///
/// # Examples
///
/// ```
/// use genome_matcher::utils::validation::normalize_base;
///
/// assert_eq!(normalize_base(b'a'), Some(b'A'));
/// assert_eq!(normalize_base(b'N'), Some(b'N'));
/// assert_eq!(normalize_base(b'U'), None);
/// ```
#[must_use]
pub fn normalize_base(base: u8) -> Option<u8> {
    match base.to_ascii_uppercase() {
        upper @ (b'A' | b'C' | b'G' | b'T' | b'N') => Some(upper),
        _ => None,
    }
}

/// Normalize one sequence line to uppercase.
///
/// Returns None if the line is empty, longer than [`MAX_SEQUENCE_LINE_LENGTH`],
/// or contains anything other than a valid base.
#[must_use]
pub fn normalize_sequence_line(line: &str) -> Option<String> {
    if line.is_empty() || line.len() > MAX_SEQUENCE_LINE_LENGTH {
        return None;
    }
    line.bytes()
        .map(|b| normalize_base(b).map(char::from))
        .collect()
}

/// Check if adding another genome would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new genome.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_genome_limit(count: usize) -> Option<String> {
    if count >= MAX_GENOMES {
        Some(format!(
            "Too many genomes: adding another would exceed maximum of {MAX_GENOMES}"
        ))
    } else {
        None
    }
}
