//! Word masking applied to chirp bodies before they are stored.
//!
//! Only the literal space character separates tokens. Tabs, newlines and runs
//! of spaces survive untouched, so a token such as `"kerfuffle!"` or
//! `"\tfornax"` is not masked.

/// Words that are replaced wherever they appear as a whole token, compared
/// case-insensitively.
pub const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement written in place of a banned token.
pub const MASK: &str = "****";

#[must_use]
pub fn moderate(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.split(' ')
        .map(|word| if is_banned(word) { MASK } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_banned(word: &str) -> bool {
    let lowered = word.to_lowercase();
    BANNED_WORDS.contains(&lowered.as_str())
}
