//! End-to-end strength calculation
//!
//! Resolve the competition, fetch its roster with the matching site adapter,
//! join against the ranking table and score. Every step is fatal on error;
//! a run either yields both scores or nothing.

use serde::Serialize;

use crate::config::Config;
use crate::crawler::SiteFetcher;
use crate::error::Result;
use crate::join::{join_rankings, JoinKey};
use crate::models::{CompetitionEntry, Participant, RankingTable, SiteKind, StrengthScores};
use crate::resolver::CompetitionResolver;
use crate::scoring::calculate_scores;
use crate::tables::{load_ranking, load_registry};

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    /// Registry name the query resolved to
    pub competition: String,
    pub site: SiteKind,
    pub url: String,
    /// Similarity of the query to `competition`
    pub match_ratio: u8,
    pub scores: StrengthScores,
}

/// Competition strength pipeline over fixed input tables
pub struct StrengthPipeline {
    resolver: CompetitionResolver,
    ranking: RankingTable,
    fetcher: SiteFetcher,
}

impl StrengthPipeline {
    /// Create a pipeline from already-loaded tables
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the registry is empty
    pub fn new(
        registry: Vec<CompetitionEntry>,
        ranking: RankingTable,
        fetcher: SiteFetcher,
    ) -> Result<Self> {
        Ok(Self {
            resolver: CompetitionResolver::new(registry)?,
            ranking,
            fetcher,
        })
    }

    /// Create a pipeline loading the tables named in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = load_registry(&config.sources.registry_path)?;
        let ranking = load_ranking(&config.sources.ranking_path)?;
        let fetcher = SiteFetcher::new(&config.fetch)?;

        tracing::info!(
            registry = registry.len(),
            ranking = ranking.len(),
            "Loaded input tables"
        );

        Self::new(registry, ranking, fetcher)
    }

    pub fn ranking(&self) -> &RankingTable {
        &self.ranking
    }

    /// Run the full calculation for a free-text competition name
    ///
    /// # Errors
    ///
    /// Fails with `Fetch`, `Parse` or `Division` errors from the respective step
    pub async fn run(&self, competition_name: &str) -> Result<StrengthReport> {
        let resolution = self.resolver.resolve(competition_name);
        let entry = resolution.entry;

        let roster = entry.site.fetch_roster(&self.fetcher, &entry.url).await?;
        let scores = self.score_roster(entry, roster)?;

        Ok(StrengthReport {
            competition: entry.name.clone(),
            site: entry.site,
            url: entry.url.clone(),
            match_ratio: resolution.ratio,
            scores,
        })
    }

    /// Join and score an already-fetched roster for `entry`
    pub fn score_roster(
        &self,
        entry: &CompetitionEntry,
        roster: Vec<Participant>,
    ) -> Result<StrengthScores> {
        let joined = join_rankings(roster, &self.ranking, JoinKey::for_site(entry.site));
        Ok(calculate_scores(
            &joined,
            entry.max_participants,
            &self.ranking,
        )?)
    }
}
