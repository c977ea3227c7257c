//! Resume parser — plain text in, `ParsedResume` out.

use phonenumber::country;

use crate::matching::extractor::extract_skill_names;
use crate::models::resume::ParsedResume;
use crate::parsing::contact::extract_contact;

/// Options the parser takes from configuration.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Region assumed for phone numbers written without a `+` prefix.
    pub default_region: country::Id,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_region: country::Id::IN,
        }
    }
}

/// Contact fields plus catalog skills. Experience and education are left empty;
/// section splitting is not attempted.
pub fn parse_resume(text: &str, options: &ParseOptions) -> ParsedResume {
    ParsedResume {
        contact: extract_contact(text, options.default_region),
        skills: extract_skill_names(text),
        experience: vec![],
        education: vec![],
    }
}
