//! Label extraction from full domain names.

/// Returns the leftmost label of a domain name.
///
/// The label is everything before the first `.`. A name without any dot is
/// treated as a bare label and returned whole.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(label("202.crypto"), "202");
/// assert_eq!(label("sub.brand.x"), "sub");
/// assert_eq!(label("localhost"), "localhost");
/// ```
pub fn label(domain: &str) -> &str {
    split(domain).0
}

/// Splits a domain name into its leftmost label and the remaining suffix.
///
/// The suffix may itself contain dots for multi-level endings
/// (`"a.b.crypto"` → `("a", Some("b.crypto"))`).
pub fn split(domain: &str) -> (&str, Option<&str>) {
    match domain.split_once('.') {
        Some((label, suffix)) => (label, Some(suffix)),
        None => (domain, None),
    }
}
