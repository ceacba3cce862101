//! Tests for registry and ranking file loading

use compstrength::config::Config;
use compstrength::error::Error;
use compstrength::models::SiteKind;
use compstrength::pipeline::StrengthPipeline;
use compstrength::tables::{load_ranking, load_registry};
use std::fs;
use tempfile::TempDir;

const REGISTRY: &str = r#"
[[competition]]
competition = "British Winter Open"
link = "https://airtribune.com/british-winter-open/pilots"
site = "Airtribune"
max_participants = 120

[[competition]]
competition = "PWC Superfinal"
link = "https://pwca.org/api/events/1/subscriptions"
site = "PWCA"
max_participants = 125
"#;

const RANKING: &str = r#"[
    {"Name": "CIVL World Pilot Ranking", "CIVL ID": null, "Points": null},
    {"Name": "Ranking date: 2023-03-01"},
    {"Name": "Bob Jones", "CIVL ID": 2, "Points": 80},
    {"Name": "Alice Smith", "CIVL ID": 1, "Points": 100.5},
    {"Name": null, "CIVL ID": null, "Points": null}
]"#;

#[test]
fn test_load_registry_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("competitions.toml");
    fs::write(&path, REGISTRY).unwrap();

    let entries = load_registry(&path).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].site, SiteKind::Airtribune);
    assert_eq!(entries[1].site, SiteKind::Pwca);
    assert_eq!(entries[1].max_participants, 125);
}

#[test]
fn test_load_ranking_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ranking.json");
    fs::write(&path, RANKING).unwrap();

    let ranking = load_ranking(&path).unwrap();
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking.entries()[0].name, "alice smith");
    assert_eq!(ranking.top_points(1), 100.5);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = load_registry(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_pipeline_from_config() {
    let dir = TempDir::new().unwrap();
    let registry_path = dir.path().join("competitions.toml");
    let ranking_path = dir.path().join("ranking.json");
    fs::write(&registry_path, REGISTRY).unwrap();
    fs::write(&ranking_path, RANKING).unwrap();

    let mut config = Config::default();
    config.sources.registry_path = registry_path;
    config.sources.ranking_path = ranking_path;

    let pipeline = StrengthPipeline::from_config(&config).unwrap();
    assert_eq!(pipeline.ranking().len(), 2);
}

#[test]
fn test_pipeline_from_config_empty_registry() {
    let dir = TempDir::new().unwrap();
    let registry_path = dir.path().join("competitions.toml");
    let ranking_path = dir.path().join("ranking.json");
    fs::write(&registry_path, "").unwrap();
    fs::write(&ranking_path, RANKING).unwrap();

    let mut config = Config::default();
    config.sources.registry_path = registry_path;
    config.sources.ranking_path = ranking_path;

    assert!(matches!(
        StrengthPipeline::from_config(&config),
        Err(Error::Configuration(_))
    ));
}
