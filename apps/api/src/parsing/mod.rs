// Resume intake: document text extraction, contact heuristics, resume assembly.
// Skills come from the matching engine's extractor so parsing and scoring share one vocabulary.

pub mod contact;
pub mod extract;
pub mod handlers;
pub mod resume;
