//! Category field handling.

/// Split a comma-separated category field into trimmed, non-blank names.
pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical form of a category field: names trimmed and joined with `", "`.
pub fn normalize_categories(raw: &str) -> String {
    split_categories(raw).join(", ")
}
