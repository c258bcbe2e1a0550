//! Allocating string conveniences
//!
//! The rest of the crate is zero-copy; these helpers are the explicitly
//! allocating counterpart for callers that want an owned result. Capacity is
//! computed up front so each call performs a single allocation.

/// Join string parts with a separator
///
/// # Examples
///
/// ```rust
/// use zerostr::join;
///
/// let parts = ["alpha", "beta", "gamma"];
/// assert_eq!(join(", ", &parts), "alpha, beta, gamma");
/// ```
pub fn join(separator: &str, parts: &[&str]) -> String {
    if parts.is_empty() {
        return String::new();
    }
    if parts.len() == 1 {
        return parts[0].to_string();
    }

    let total_len: usize = parts.iter().map(|p| p.len()).sum();
    let sep_len = separator.len() * (parts.len() - 1);
    let mut result = String::with_capacity(total_len + sep_len);

    result.push_str(parts[0]);
    for part in &parts[1..] {
        result.push_str(separator);
        result.push_str(part);
    }
    result
}

/// Replace every occurrence of `from` with `to`, allocating a new string
///
/// An empty `from` pattern matches nothing and returns the input unchanged.
///
/// # Examples
///
/// ```rust
/// use zerostr::replace;
///
/// assert_eq!(replace("a,b,c", ",", " - "), "a - b - c");
/// ```
pub fn replace(input: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find(from) {
        result.push_str(&rest[..pos]);
        result.push_str(to);
        rest = &rest[pos + from.len()..];
    }
    result.push_str(rest);
    result
}
