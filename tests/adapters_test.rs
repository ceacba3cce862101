//! Site adapter tests using page fixtures
//!
//! Each adapter's parse function is run against a captured page shape and the
//! canonical participant records are checked.

mod common;

use common::load_fixture;
use compstrength::models::UNKNOWN_CIVL_ID;
use compstrength::sites::{airtribune, civl, ffvl, pwca};
use compstrength::utils::error::ParseError;

// ============================================================================
// Airtribune
// ============================================================================

#[test]
fn test_airtribune_fixture() {
    let roster = airtribune::parse(&load_fixture("airtribune.html")).unwrap();
    assert_eq!(roster.len(), 4);

    let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["alice smith", "bob jones", "carla ruiz", "dan novak"]);

    let ids: Vec<u64> = roster.iter().map(|p| p.civl_id).collect();
    assert_eq!(ids, vec![1, 2, 3, UNKNOWN_CIVL_ID]);

    assert_eq!(roster[1].status, "wildcard");
    assert_eq!(roster[2].country.as_deref(), Some("ESP"));
}

#[test]
fn test_airtribune_payload_stops_at_array_end() {
    let html = load_fixture("airtribune.html");
    let json = airtribune::extract_pilots_json(&html).unwrap();
    assert!(json.contains("Dan Novak"));
    assert!(!json.contains("Team GB"));
}

// ============================================================================
// CIVL
// ============================================================================

#[test]
fn test_civl_fixture() {
    let roster = civl::parse(&load_fixture("civl.html")).unwrap();
    assert_eq!(roster.len(), 3);

    assert_eq!(roster[0].name, "alice");
    assert_eq!(roster[0].entry_number, Some(11));
    assert_eq!(roster[1].name, "bob");
    assert_eq!(roster[1].status, "pending");
    assert_eq!(roster[2].name, "zoé martin");
    assert_eq!(roster[2].status, "wildcard");

    assert!(roster.iter().all(|p| p.civl_id == UNKNOWN_CIVL_ID));
}

// ============================================================================
// FFVL
// ============================================================================

#[test]
fn test_ffvl_fixture() {
    let roster = ffvl::parse(&load_fixture("ffvl.html")).unwrap();
    assert_eq!(roster.len(), 3);

    assert_eq!(roster[0].name, "smith alice");
    assert_eq!(roster[0].civl_id, 1);
    assert_eq!(roster[0].country.as_deref(), Some("GBR"));

    assert_eq!(roster[1].status, "waiting list");

    assert_eq!(roster[2].name, "petit marc");
    assert_eq!(roster[2].civl_id, UNKNOWN_CIVL_ID);
    assert_eq!(roster[2].country.as_deref(), Some("FRA"));
}

#[test]
fn test_ffvl_rejects_civl_markup() {
    let result = ffvl::parse(&load_fixture("civl.html"));
    assert!(matches!(result, Err(ParseError::ContainerNotFound(_))));
}

// ============================================================================
// PWCA
// ============================================================================

#[test]
fn test_pwca_fixtures() {
    let male = pwca::parse(&load_fixture("pwca_male.json")).unwrap();
    let female = pwca::parse(&load_fixture("pwca_female.json")).unwrap();

    assert_eq!(male.len(), 2);
    assert_eq!(male[0].name, "bob");
    assert_eq!(male[1].status, "waiting list");
    assert_eq!(female[0].name, "alice");
    assert_eq!(female[0].status, "wildcard");
}

// ============================================================================
// Canonical schema
// ============================================================================

#[test]
fn test_all_adapters_lowercase_status() {
    let rosters = [
        airtribune::parse(&load_fixture("airtribune.html")).unwrap(),
        civl::parse(&load_fixture("civl.html")).unwrap(),
        ffvl::parse(&load_fixture("ffvl.html")).unwrap(),
        pwca::parse(&load_fixture("pwca_male.json")).unwrap(),
    ];

    for participant in rosters.iter().flatten() {
        assert_eq!(participant.status, participant.status.to_lowercase());
        assert_eq!(participant.name, participant.name.to_lowercase());
        assert!(!participant.name.ends_with(' '));
    }
}
