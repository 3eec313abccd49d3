use crate::core::extract::RawValue;

/// Split a raw class string into class tokens, left to right.
///
/// The separator only divides a variant prefix from the utility inside a token,
/// so it never splits tokens apart. It is accepted here to keep the splitter's
/// contract aligned with the classifier's.
pub fn split_class_tokens<'a>(raw: &RawValue<'a>, _separator: &str) -> Vec<&'a str> {
    let text = if raw.must_trim {
        raw.text.trim()
    } else {
        raw.text
    };

    text.split(is_token_boundary)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Class lists are separated by ASCII whitespace only; a no-break space stays
/// inside its token.
fn is_token_boundary(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}
