//! Loaders for the competition registry and the ranking table
//!
//! Registry file (TOML). `site` is one of `Airtribune`, `Civl`, `FFVL` or
//! `PWCA`, compared case-insensitively:
//!
//! ```toml
//! [[competition]]
//! competition = "British Winter Open"
//! link = "https://airtribune.com/british-winter-open/pilots"
//! site = "Airtribune"
//! max_participants = 120
//! ```
//!
//! Ranking file (JSON), one object per row with the ranking export's column
//! names. Rows without numeric `Points` are metadata and are skipped.
//!
//! ```json
//! [{"Name": "Alice SMITH", "CIVL ID": 1234, "Points": 412.7}]
//! ```

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{CompetitionEntry, RankingEntry, RankingTable, SiteKind};

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    competition: Vec<RegistryRow>,
}

#[derive(Debug, Deserialize)]
struct RegistryRow {
    competition: String,
    link: String,
    site: String,
    max_participants: u32,
}

#[derive(Debug, Deserialize)]
struct RankingRow {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "CIVL ID", default)]
    civl_id: Option<Value>,
    #[serde(rename = "Points", default)]
    points: Option<Value>,
}

/// Parse registry TOML into entries, in file order
///
/// # Errors
///
/// - `Error::Toml` on malformed TOML or missing columns
/// - `Error::Configuration` on an unknown site
pub fn parse_registry(content: &str) -> Result<Vec<CompetitionEntry>> {
    let file: RegistryFile = toml::from_str(content)?;

    file.competition
        .into_iter()
        .map(|row| {
            let site = SiteKind::parse(&row.site).ok_or_else(|| {
                Error::config(format!(
                    "competition '{}' has unknown site '{}'",
                    row.competition, row.site
                ))
            })?;
            Ok(CompetitionEntry {
                name: row.competition,
                url: row.link,
                site,
                max_participants: row.max_participants,
            })
        })
        .collect()
}

/// Load the registry from a TOML file
pub fn load_registry(path: &Path) -> Result<Vec<CompetitionEntry>> {
    let content = std::fs::read_to_string(path)?;
    let entries = parse_registry(&content)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded registry");
    Ok(entries)
}

fn points_value(value: Option<&Value>) -> Option<f64> {
    let points = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    points.filter(|p| p.is_finite())
}

fn civl_id_value(value: Option<&Value>) -> Option<u64> {
    match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Parse ranking JSON into a sorted ranking table
///
/// # Errors
///
/// - `Error::Json` if the file is not a JSON array of objects
/// - `Error::Configuration` if a scored row has no name or a bad CIVL ID,
///   or negative points
pub fn parse_ranking(content: &str) -> Result<RankingTable> {
    let rows: Vec<RankingRow> = serde_json::from_str(content)?;
    let mut entries = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for (i, row) in rows.into_iter().enumerate() {
        let Some(points) = points_value(row.points.as_ref()) else {
            skipped += 1;
            continue;
        };

        if points < 0.0 {
            return Err(Error::config(format!("ranking row {i}: negative points")));
        }

        let name = row
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| Error::config(format!("ranking row {i}: missing Name")))?;

        let civl_id = civl_id_value(row.civl_id.as_ref())
            .ok_or_else(|| Error::config(format!("ranking row {i}: invalid CIVL ID")))?;

        entries.push(RankingEntry::new(name.trim(), civl_id, points));
    }

    tracing::debug!(entries = entries.len(), skipped, "Parsed ranking table");
    Ok(RankingTable::new(entries))
}

/// Load the ranking table from a JSON file
pub fn load_ranking(path: &Path) -> Result<RankingTable> {
    let content = std::fs::read_to_string(path)?;
    parse_ranking(&content)
}
