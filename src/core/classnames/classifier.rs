use super::catalog::PREFIX_PATTERN;

/// The part of a class token after its last variant separator.
///
/// `md:hover:-top-[1px]` with separator `:` yields `-top-[1px]`.
pub fn class_suffix<'t>(token: &'t str, separator: &str) -> &'t str {
    if separator.is_empty() {
        return token;
    }
    token
        .rsplit_once(separator)
        .map_or(token, |(_, suffix)| suffix)
}

/// Whether a single token is a negative arbitrary value classname.
pub fn is_negative_arbitrary(token: &str, separator: &str) -> bool {
    PREFIX_PATTERN.is_match(class_suffix(token, separator))
}

/// Keep the tokens that combine a negative prefix with an arbitrary value.
///
/// Order is preserved and duplicates are kept.
pub fn classify<'a>(tokens: &[&'a str], separator: &str) -> Vec<&'a str> {
    tokens
        .iter()
        .copied()
        .filter(|token| is_negative_arbitrary(token, separator))
        .collect()
}
