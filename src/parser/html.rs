//! Table extraction from roster HTML pages

use scraper::{ElementRef, Html};

use crate::parser::selectors::RosterSelectors;
use crate::utils::error::ParseError;

/// Cells of one data row, as raw text
pub type RawRow = Vec<String>;

/// Extract data rows from every container block matched by `selectors`
///
/// The first `<tr>` of each block is a header and is skipped. Rows without
/// any `<td>` (e.g. `<th>`-only spacer rows) are dropped. With `first_only`
/// set, only the first container block is read.
///
/// # Errors
///
/// Returns `ParseError::ContainerNotFound` if no container block exists
pub fn extract_table_rows(
    html: &str,
    selectors: &RosterSelectors,
    first_only: bool,
) -> Result<Vec<RawRow>, ParseError> {
    let document = Html::parse_document(html);
    let mut containers = document.select(selectors.container).peekable();

    if containers.peek().is_none() {
        return Err(ParseError::ContainerNotFound(selectors.container_css));
    }

    let blocks: Vec<ElementRef<'_>> = if first_only {
        containers.take(1).collect()
    } else {
        containers.collect()
    };

    let mut rows = Vec::new();
    for block in blocks {
        let block_rows = block
            .select(selectors.row)
            .skip(1)
            .map(|row| {
                row.select(selectors.cell)
                    .map(|cell| cell.text().collect::<String>())
                    .collect::<RawRow>()
            })
            .filter(|cells| !cells.is_empty());
        rows.extend(block_rows);
    }

    tracing::debug!(
        container = selectors.container_css,
        rows = rows.len(),
        "Extracted roster rows"
    );

    Ok(rows)
}

/// Get column `index` of `row`, naming the column in the error
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if the row is too short
pub fn cell<'a>(
    row: &'a RawRow,
    row_index: usize,
    index: usize,
    column: &'static str,
) -> Result<&'a str, ParseError> {
    row.get(index)
        .map(String::as_str)
        .ok_or(ParseError::MissingColumn {
            row: row_index,
            column,
        })
}
