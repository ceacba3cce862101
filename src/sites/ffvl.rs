//! FFVL roster adapter
//!
//! A single `div.table-responsive` table with columns
//! `No | Name | civl_id | Reg | Status | Ranking`. The pilot name is read
//! from the civl_id cell, which carries name and ID followed by an
//! eight-character label; the Name cell only contributes the country code.

use crate::crawler::SiteFetcher;
use crate::error::Result;
use crate::models::Participant;
use crate::parser::normalize::{
    coerce_civl_id, country_prefix, extract_names, extract_numbers, normalize_status,
};
use crate::parser::{cell, extract_table_rows, RosterSelectors};
use crate::utils::error::ParseError;

const NAME_COLUMN: usize = 1;
const CIVL_ID_COLUMN: usize = 2;
const STATUS_COLUMN: usize = 4;

const NAME_SUFFIX_LEN: usize = 8;

/// Fetch and parse an FFVL participants page
pub async fn fetch(fetcher: &SiteFetcher, url: &str) -> Result<Vec<Participant>> {
    let html = fetcher.get_text(url).await?;
    Ok(parse(&html)?)
}

/// Parse an FFVL participants page into canonical participants
///
/// # Errors
///
/// Returns `ParseError` if the table is missing or a row is truncated
pub fn parse(html: &str) -> std::result::Result<Vec<Participant>, ParseError> {
    let rows = extract_table_rows(html, &RosterSelectors::ffvl(), true)?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let raw_name = cell(row, i, NAME_COLUMN, "Name")?;
            let raw_id = cell(row, i, CIVL_ID_COLUMN, "civl_id")?;
            let status = cell(row, i, STATUS_COLUMN, "status")?;

            Ok(Participant::new(
                extract_names(raw_id, NAME_SUFFIX_LEN),
                coerce_civl_id(&extract_numbers(raw_id)),
                normalize_status(status),
            )
            .with_country(country_prefix(raw_name)))
        })
        .collect()
}
