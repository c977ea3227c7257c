//! Alias Matcher — boundary-aware occurrence finder.
//!
//! An occurrence only counts when the characters on either side of it are not
//! letters or digits, so `java` never matches inside `javascript` while `c++` still
//! matches in `c++/python`.

use regex::Regex;

/// A single alias with its literal pattern compiled once.
#[derive(Debug, Clone)]
pub struct AliasPattern {
    regex: Regex,
}

impl AliasPattern {
    pub fn new(alias: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&regex::escape(alias))?,
        })
    }

    /// Byte spans `(start, end)` of every boundary-respecting occurrence, left to right.
    pub fn occurrences(&self, text: &str) -> Vec<(usize, usize)> {
        scan(&self.regex, text, usize::MAX)
    }

    /// True when at least one occurrence exists. Stops at the first one.
    pub fn is_found_in(&self, text: &str) -> bool {
        !scan(&self.regex, text, 1).is_empty()
    }
}

/// Occurrences of an arbitrary alias in already-normalized text.
///
/// Compiles the alias on each call; hot paths go through the catalog's precompiled
/// patterns instead.
#[allow(dead_code)]
pub fn find_occurrences(normalized_text: &str, alias: &str) -> Vec<(usize, usize)> {
    AliasPattern::new(alias)
        .map(|pattern| pattern.occurrences(normalized_text))
        .unwrap_or_default()
}

/// An accepted occurrence resumes the scan at its end; a rejected candidate resumes
/// one character past its start, so an overlapping later candidate is still tried.
fn scan(regex: &Regex, text: &str, limit: usize) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos <= text.len() && found.len() < limit {
        let Some(m) = regex.find_at(text, pos) else {
            break;
        };
        if m.is_empty() {
            break;
        }
        if is_token_boundary(text, m.start(), m.end()) {
            found.push((m.start(), m.end()));
            pos = m.end();
        } else {
            pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
        }
    }
    found
}

fn is_token_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_ascii_alphanumeric())
        && !after.is_some_and(|c| c.is_ascii_alphanumeric())
}
