//! Errors raised while turning a TMDB payload into catalog records.
//!
//! Every variant keeps its original cause reachable through
//! [`std::error::Error::source`] so callers can decide whether to abort an
//! import, skip the movie or retry.

use thiserror::Error;

/// A date string that does not match the expected `YYYY-MM-DD` layout
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid date '{value}'")]
pub struct ParseError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Image fetch/encode failure
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("failed to fetch image from {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("image request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("image at {url} has an empty body")]
    EmptyBody { url: String },
}

/// A certification string with no matching rating
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised certification '{certification}'")]
pub struct RatingResolutionError {
    pub certification: String,
}

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("release date could not be parsed")]
    Parse(#[from] ParseError),

    #[error("poster or backdrop could not be encoded")]
    Encoding(#[from] EncodingError),

    #[error("rating could not be resolved")]
    Rating(#[from] RatingResolutionError),
}
