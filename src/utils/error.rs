//! Error types for roster fetching, parsing and scoring
//!
//! These are the domain errors raised by the adapters and the calculator.
//! [`crate::error::Error`] wraps them for callers crossing module boundaries.

use thiserror::Error;

/// Errors that can occur while fetching a roster page
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Non-success status code
    #[error("Server returned {status} for {url}")]
    Status { url: String, status: u16 },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors raised when a page does not have the expected shape
#[derive(Error, Debug)]
pub enum ParseError {
    /// Literal marker around an embedded payload is missing
    #[error("Marker not found in page: {0}")]
    MarkerNotFound(&'static str),

    /// Embedded or API JSON failed to parse
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Roster container element is missing
    #[error("Container not found: {0}")]
    ContainerNotFound(&'static str),

    /// A data row is shorter than the columns read from it
    #[error("Row {row} has no '{column}' column")]
    MissingColumn { row: usize, column: &'static str },

    /// Required JSON field missing
    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

/// Errors from the strength formula
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// `max_participants / 2` is zero, so there is no comparison window
    #[error("Half-field window is empty (max_participants < 2)")]
    EmptyWindow,

    /// Ranking points over the window sum to zero
    #[error("Ranking top-{half} points sum to zero")]
    ZeroDenominator { half: usize },
}
