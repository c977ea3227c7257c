//! Text Normalizer — applied to every text before alias matching.

/// Lowercases, replaces every character outside `a-z 0-9 + # . / -` and whitespace
/// with a space, collapses whitespace runs and trims.
///
/// The output is ASCII, so byte offsets into it are also character offsets.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || matches!(c, '+' | '#' | '.' | '/' | '-')
        || c.is_whitespace()
}
