//! Contact extraction — name, email and phone from raw resume text.
//!
//! Heuristics only. Each extractor returns the first plausible candidate or `None`.

use std::sync::LazyLock;

use phonenumber::{country, Mode};
use regex::Regex;
use tracing::debug;

use crate::models::resume::ContactInfo;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("Invalid regex")
});

/// A digit run of at least 7 digits, optionally `+`-prefixed, allowing the usual
/// separators (space, dot, dash, parentheses) between digits. Candidates are only
/// kept once `phonenumber` accepts them as valid.
static PHONE_CANDIDATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\(?\d[\d\s().-]{5,}\d").expect("Invalid regex")
});

/// Lines examined when looking for the candidate's name.
const NAME_SCAN_LINES: usize = 3;

pub fn extract_contact(text: &str, default_region: country::Id) -> ContactInfo {
    ContactInfo {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text, default_region),
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// First valid phone number in `text`, formatted as E.164.
///
/// Numbers without a `+` prefix are read as national numbers of `default_region`.
pub fn extract_phone(text: &str, default_region: country::Id) -> Option<String> {
    PHONE_CANDIDATE_PATTERN
        .find_iter(text)
        .find_map(|m| to_e164(m.as_str(), default_region))
}

fn to_e164(candidate: &str, default_region: country::Id) -> Option<String> {
    let number = match phonenumber::parse(Some(default_region), candidate) {
        Ok(number) => number,
        Err(err) => {
            debug!(candidate, error = %err, "Phone candidate did not parse");
            return None;
        }
    };

    if !phonenumber::is_valid(&number) {
        debug!(candidate, "Phone candidate is not a valid number");
        return None;
    }

    Some(number.format().mode(Mode::E164).to_string())
}

/// First of the leading lines with at least two alphabetic words, all capitalized.
pub fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
}

fn looks_like_name(line: &str) -> bool {
    let alphabetic: Vec<&str> = line
        .split_whitespace()
        .filter(|word| word.chars().all(char::is_alphabetic))
        .collect();

    alphabetic.len() >= 2
        && alphabetic
            .iter()
            .all(|word| word.chars().next().is_some_and(char::is_uppercase))
}
