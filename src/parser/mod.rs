//! Roster page parsing helpers
//!
//! This module holds the pieces shared by the site adapters: CSS selectors,
//! HTML table extraction, and participant field normalization.

pub mod html;
pub mod normalize;
pub mod selectors;

pub use html::{cell, extract_table_rows, RawRow};
pub use selectors::RosterSelectors;
