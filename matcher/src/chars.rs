//! Character level helpers shared by the matcher.

/// The character class used for word boundary detection.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Copy, Clone)]
pub enum CharClass {
    Whitespace,
    NonWord,
    Word,
}

/// Classifies a char for word boundary detection. Underscores count
/// as word characters, matching the regex `\b` semantics the scoring
/// heuristic was tuned against.
pub fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::NonWord
    }
}

/// Maps a character to its lowercase version, guaranteed to be a
/// single codepoint so folded strings keep their char count.
pub fn to_lower_case(c: char) -> char {
    if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        // to_lowercase can expand to multiple codepoints ('İ');
        // keep the first one so char indices stay aligned
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Case folds `raw` into `scratch` and returns the folded slice.
pub(crate) fn fold<'a>(scratch: &'a mut String, raw: &str) -> &'a str {
    scratch.clear();
    scratch.extend(raw.chars().map(to_lower_case));
    scratch
}
