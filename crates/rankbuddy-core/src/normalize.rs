// Keyword text normalization.
//
// Every string entering the pipeline -- seed keywords, offline expansions,
// externally supplied suggestions -- passes through `normalize` before it is
// compared, deduplicated, or scored. Deduplication keys on the normalized
// form, so two inputs that differ only in case or whitespace collapse.

/// Normalize a raw keyword string: lowercase, trim, and collapse internal
/// whitespace runs to single spaces.
///
/// Returns an empty string for inputs that contain no non-whitespace
/// characters; callers treat that as invalid input.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for token in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for ch in token.chars() {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Number of whitespace-separated tokens in a keyword.
///
/// For normalized text this is exact; for raw text it counts the tokens
/// normalization would produce.
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
