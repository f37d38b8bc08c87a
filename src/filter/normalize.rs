//! String normalization shared by every predicate

/// Trim surrounding whitespace and lowercase
///
/// Missing values are represented as empty strings by the callers, so the
/// result is always comparable.
#[must_use]
pub fn norm(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case and whitespace insensitive equality
#[must_use]
pub fn norm_eq(left: &str, right: &str) -> bool {
    norm(left) == norm(right)
}

/// Case insensitive substring test; `needle` must already be normalized
#[must_use]
pub fn norm_contains(haystack: &str, needle: &str) -> bool {
    norm(haystack).contains(needle)
}
