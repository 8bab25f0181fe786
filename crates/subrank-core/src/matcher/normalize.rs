/// Reduces a release name to lowercase ASCII alphanumeric words separated by
/// single spaces.
///
/// Every run of other characters (dots, dashes, brackets, emoji, non-ASCII
/// letters) becomes one space, and the result is trimmed. The function is
/// total and idempotent; empty input yields an empty string.
///
/// # Examples
/// ```
/// use subrank_core::matcher::normalize;
///
/// assert_eq!(normalize("The.Matrix-1999!"), "the matrix 1999");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut pending_space = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_space && !result.is_empty() {
                result.push(' ');
            }
            pending_space = false;
            result.push(c);
        } else {
            pending_space = true;
        }
    }

    result
}

/// Normalizes an optional name, treating `None` as empty.
pub fn normalize_opt(name: Option<&str>) -> String {
    name.map(normalize).unwrap_or_default()
}
