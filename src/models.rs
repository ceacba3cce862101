// Core data structures for the strength calculation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser::normalize::collapse;

/// CIVL ID assigned to participants whose ID is absent or unparsable
pub const UNKNOWN_CIVL_ID: u64 = 99999;

/// Competition-hosting site a roster is scraped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteKind {
    Airtribune,
    Civl,
    #[serde(rename = "FFVL")]
    Ffvl,
    #[serde(rename = "PWCA")]
    Pwca,
}

impl SiteKind {
    /// Get string representation, as written in the registry
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Airtribune => "Airtribune",
            Self::Civl => "Civl",
            Self::Ffvl => "FFVL",
            Self::Pwca => "PWCA",
        }
    }

    /// Create from a registry string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "airtribune" => Some(Self::Airtribune),
            "civl" => Some(Self::Civl),
            "ffvl" => Some(Self::Ffvl),
            "pwca" => Some(Self::Pwca),
            _ => None,
        }
    }

    /// Get all site kinds
    pub fn all() -> [Self; 4] {
        [Self::Airtribune, Self::Civl, Self::Ffvl, Self::Pwca]
    }
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the competition registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionEntry {
    pub name: String,
    pub url: String,
    pub site: SiteKind,
    pub max_participants: u32,
}

/// Canonical participant record produced by every site adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Lower-cased, trailing garbage stripped
    pub name: String,
    /// Valid ID or [`UNKNOWN_CIVL_ID`]
    pub civl_id: u64,
    /// Lower-cased registration status
    pub status: String,
    pub country: Option<String>,
    /// Start number, where the site publishes one (Civl)
    pub entry_number: Option<u64>,
}

impl Participant {
    pub fn new(name: impl Into<String>, civl_id: u64, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            civl_id,
            status: status.into(),
            country: None,
            entry_number: None,
        }
    }

    #[must_use]
    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    pub fn has_known_civl_id(&self) -> bool {
        self.civl_id != UNKNOWN_CIVL_ID
    }
}

/// One row of the pilot ranking table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Lower-cased pilot name with whitespace collapsed
    pub name: String,
    pub civl_id: u64,
    pub points: f64,
}

impl RankingEntry {
    pub fn new(name: impl Into<String>, civl_id: u64, points: f64) -> Self {
        Self {
            name: collapse(&name.into()),
            civl_id,
            points,
        }
    }
}

/// Ranking table kept in descending points order
///
/// The order is established once on construction with a stable sort, so
/// equal-points rows keep their source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingTable {
    entries: Vec<RankingEntry>,
}

impl RankingTable {
    pub fn new(mut entries: Vec<RankingEntry>) -> Self {
        entries.sort_by(|a, b| b.points.total_cmp(&a.points));
        Self { entries }
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the best `n` points (fewer if the table is shorter)
    pub fn top_points(&self, n: usize) -> f64 {
        self.entries.iter().take(n).map(|e| e.points).sum()
    }
}

/// Participant joined with its ranking points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedRow {
    pub participant: Participant,
    /// 0 when no ranking row matched
    pub points: f64,
}

impl JoinedRow {
    pub fn status(&self) -> &str {
        &self.participant.status
    }
}

/// Output of one scoring run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthScores {
    /// Score over every registered participant
    pub overall: f64,
    /// Score over confirmed and wildcard participants only
    pub confirmed: f64,
    /// Comparison window, `max_participants / 2`
    pub half: usize,
    pub field_size: usize,
    pub confirmed_size: usize,
}
