//! Site adapters
//!
//! Each supported competition site has its own module that fetches the roster
//! and reduces it to canonical [`Participant`] records:
//!
//! - [`airtribune`] - JSON array embedded in the event page
//! - [`civl`] - HTML tables, one block per participant group
//! - [`ffvl`] - a single HTML table
//! - [`pwca`] - JSON API, one request per gender
//!
//! Dispatch goes through [`SiteKind::fetch_roster`] so call sites never branch
//! on the site themselves.

pub mod airtribune;
pub mod civl;
pub mod ffvl;
pub mod pwca;

use crate::crawler::SiteFetcher;
use crate::error::Result;
use crate::models::{Participant, SiteKind};

impl SiteKind {
    /// Fetch the roster at `url` with this site's adapter
    ///
    /// # Errors
    ///
    /// - `Error::Fetch` on any network failure
    /// - `Error::Parse` if the page does not have the expected shape
    pub async fn fetch_roster(self, fetcher: &SiteFetcher, url: &str) -> Result<Vec<Participant>> {
        tracing::debug!(site = %self, url, "Fetching roster");

        let roster = match self {
            Self::Airtribune => airtribune::fetch(fetcher, url).await?,
            Self::Civl => civl::fetch(fetcher, url).await?,
            Self::Ffvl => ffvl::fetch(fetcher, url).await?,
            Self::Pwca => pwca::fetch(fetcher, url).await?,
        };

        tracing::info!(
            site = %self,
            participants = roster.len(),
            unknown_ids = roster.iter().filter(|p| !p.has_known_civl_id()).count(),
            "Fetched roster"
        );

        Ok(roster)
    }
}
