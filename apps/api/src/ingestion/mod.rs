//! Ingestion: turning page markup (or a URL) into clean text the parser can
//! work with.

pub mod extractor;
pub mod fetcher;
pub mod normalizer;

use thiserror::Error;

/// Failures on the markup path. Neither case forges a partial result; the
/// caller gets the explanation instead of garbage text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("extraction failed: no readable job description content found in the page")]
    ExtractionFailed,

    #[error("normalization failed: usable text is below the minimum length")]
    TooShort,
}
