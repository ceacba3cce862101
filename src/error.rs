//! Unified error handling for the compstrength crate
//!
//! This module consolidates the domain-specific errors into a single `Error`
//! enum. Every variant is fatal for a run: the core never retries and never
//! emits a partial score.
//!
//! # Usage
//!
//! ```rust,ignore
//! use compstrength::error::{Error, ErrorCategory};
//!
//! fn report(err: &Error) {
//!     match err.category() {
//!         ErrorCategory::Network => eprintln!("source unreachable: {err}"),
//!         _ => eprintln!("{err}"),
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

pub use crate::utils::error::{FetchError, ParseError, ScoreError};

/// Classification of errors for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Empty/invalid registry or settings
    Config,
    /// Network and transport failures
    Network,
    /// Unexpected page or payload shape
    Parsing,
    /// Undefined strength formula
    Scoring,
    /// Local file access
    Storage,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "configuration",
            Self::Network => "network",
            Self::Parsing => "parsing",
            Self::Scoring => "scoring",
            Self::Storage => "storage",
        }
    }
}

/// Unified error type for the compstrength crate
#[derive(Error, Debug)]
pub enum Error {
    /// Empty or invalid registry, bad settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/transport failure
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Expected structure not found
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Zero denominator in the strength formula
    #[error("Division error: {0}")]
    Division(#[from] ScoreError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON deserialization errors outside of roster payloads
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Config,
            Self::Fetch(_) => ErrorCategory::Network,
            Self::Parse(_) => ErrorCategory::Parsing,
            Self::Division(_) => ErrorCategory::Scoring,
            Self::Io(_) => ErrorCategory::Storage,
            Self::Toml(_) | Self::Json(_) => ErrorCategory::Config,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
