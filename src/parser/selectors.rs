//! CSS selectors for the HTML roster pages
//!
//! Civl and FFVL both publish their rosters as plain `<table>` markup inside a
//! container `<div>` with a site-specific class.

use scraper::Selector;
use std::sync::LazyLock;

// Helper macro to parse selectors once
macro_rules! parse_selector {
    ($s:expr) => {
        LazyLock::new(|| Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s)))
    };
}

static CIVL_CONTAINER: LazyLock<Selector> = parse_selector!("div.participants-item");
static FFVL_CONTAINER: LazyLock<Selector> = parse_selector!("div.table-responsive");
static ROW: LazyLock<Selector> = parse_selector!("tr");
static CELL: LazyLock<Selector> = parse_selector!("td");

/// Selectors for one roster table layout
pub struct RosterSelectors {
    /// Container selector as written, for error messages
    pub container_css: &'static str,
    pub container: &'static Selector,
    pub row: &'static Selector,
    pub cell: &'static Selector,
}

impl RosterSelectors {
    /// Civl: one or more `div.participants-item` blocks
    pub fn civl() -> Self {
        Self {
            container_css: "div.participants-item",
            container: &CIVL_CONTAINER,
            row: &ROW,
            cell: &CELL,
        }
    }

    /// FFVL: a single `div.table-responsive` block
    pub fn ffvl() -> Self {
        Self {
            container_css: "div.table-responsive",
            container: &FFVL_CONTAINER,
            row: &ROW,
            cell: &CELL,
        }
    }
}
