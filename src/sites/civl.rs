//! CIVL calendar roster adapter
//!
//! The participants page holds one `div.participants-item` block per group,
//! each with a table of `No | Name | Number | Wing | Sponsor | Status`. The
//! Name cell packs the start number and the pilot name together.

use crate::crawler::SiteFetcher;
use crate::error::Result;
use crate::models::{Participant, UNKNOWN_CIVL_ID};
use crate::parser::normalize::{extract_names, extract_numbers, normalize_status};
use crate::parser::{cell, extract_table_rows, RosterSelectors};
use crate::utils::error::ParseError;

const NAME_COLUMN: usize = 1;
const STATUS_COLUMN: usize = 5;

/// Characters trimmed after the trailing separator of the Name cell
const NAME_SUFFIX_LEN: usize = 1;

/// Fetch and parse a CIVL participants page
pub async fn fetch(fetcher: &SiteFetcher, url: &str) -> Result<Vec<Participant>> {
    let html = fetcher.get_text(url).await?;
    Ok(parse(&html)?)
}

/// Parse a CIVL participants page into canonical participants
///
/// The CIVL page does not publish CIVL IDs, so every participant carries the
/// unknown sentinel and is matched to the ranking by name.
///
/// # Errors
///
/// Returns `ParseError` if no roster block exists or a row is truncated
pub fn parse(html: &str) -> std::result::Result<Vec<Participant>, ParseError> {
    let rows = extract_table_rows(html, &RosterSelectors::civl(), false)?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let packed = cell(row, i, NAME_COLUMN, "Name")?;
            let status = cell(row, i, STATUS_COLUMN, "status")?;

            let mut participant = Participant::new(
                extract_names(packed, NAME_SUFFIX_LEN),
                UNKNOWN_CIVL_ID,
                normalize_status(status),
            );
            participant.entry_number = extract_numbers(packed).parse().ok();
            Ok(participant)
        })
        .collect()
}
