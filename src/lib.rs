//! compstrength - Paragliding competition strength estimator
//!
//! Estimates how strong a competition field is by reconciling the live
//! participant list, scraped from the hosting site, with the pilot ranking.
//!
//! # Architecture
//!
//! - [`resolver`] - Fuzzy matching of a competition name against the registry
//! - [`sites`] - Per-site roster adapters (Airtribune, CIVL, FFVL, PWCA)
//! - [`parser`] - HTML table extraction and participant field normalization
//! - [`crawler`] - HTTP transport
//! - [`join`] - Roster to ranking join and its per-site key policy
//! - [`scoring`] - The strength formula
//! - [`tables`] - Registry and ranking file loaders
//! - [`pipeline`] - Everything above, end to end
//!
//! # Example
//!
//! ```no_run
//! use compstrength::config::Config;
//! use compstrength::pipeline::StrengthPipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let pipeline = StrengthPipeline::from_config(&config)?;
//!     let report = pipeline.run("British Winter Open").await?;
//!     println!("{} {}", report.scores.overall, report.scores.confirmed);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod join;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod resolver;
pub mod scoring;
pub mod sites;
pub mod tables;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::SiteFetcher;
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::models::{
        CompetitionEntry, JoinedRow, Participant, RankingEntry, RankingTable, SiteKind,
        StrengthScores, UNKNOWN_CIVL_ID,
    };
    pub use crate::pipeline::{StrengthPipeline, StrengthReport};
}

pub use models::{Participant, SiteKind, StrengthScores, UNKNOWN_CIVL_ID};
