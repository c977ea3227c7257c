// Skill matching engine
// Catalog → normalize → alias matching → extraction / weighting / canonicalization → scoring.
// Everything below `handlers` is pure and shares only the read-only catalog.

pub mod alias;
pub mod canonical;
pub mod catalog;
pub mod extractor;
pub mod handlers;
pub mod normalize;
pub mod scoring;
pub mod weighting;
