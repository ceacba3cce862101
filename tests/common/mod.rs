//! Common test utilities

use compstrength::models::{CompetitionEntry, RankingEntry, RankingTable, SiteKind};
use std::fs;

/// Test fixture directory
const FIXTURES_DIR: &str = "tests/fixtures";

pub fn load_fixture(filename: &str) -> String {
    let path = format!("{FIXTURES_DIR}/{filename}");
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {path}"))
}

/// Ranking shared by the fixtures, 300 points in total
#[allow(dead_code)]
pub fn ranking() -> RankingTable {
    RankingTable::new(vec![
        RankingEntry::new("Alice", 1, 100.0),
        RankingEntry::new("Bob", 2, 80.0),
        RankingEntry::new("Carla Ruiz", 3, 60.0),
        RankingEntry::new("Zoé Martin", 4, 40.0),
        RankingEntry::new("Marc Petit", 5, 20.0),
    ])
}

/// Registry whose links all point at `base`
#[allow(dead_code)]
pub fn registry(base: &str) -> Vec<CompetitionEntry> {
    vec![
        CompetitionEntry {
            name: "Foo Open".to_string(),
            url: format!("{base}/civl/foo-open/participants"),
            site: SiteKind::Civl,
            max_participants: 20,
        },
        CompetitionEntry {
            name: "British Winter Open".to_string(),
            url: format!("{base}/airtribune/bwo/pilots"),
            site: SiteKind::Airtribune,
            max_participants: 8,
        },
        CompetitionEntry {
            name: "Coupe Icare".to_string(),
            url: format!("{base}/ffvl/icare"),
            site: SiteKind::Ffvl,
            max_participants: 4,
        },
        CompetitionEntry {
            name: "PWC Superfinal".to_string(),
            url: format!("{base}/pwca/api/events/42/subscriptions"),
            site: SiteKind::Pwca,
            max_participants: 6,
        },
    ]
}
