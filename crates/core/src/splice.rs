//! Insertion of computed columns next to the source name column.

use crate::model::{ProcessingConfig, UsernameResult};
use vnuser_sheet::CellValue;

/// Header label for the generated username column.
pub const USERNAME_HEADER: &str = "Username";
/// Header label for the generated email column.
pub const EMAIL_HEADER: &str = "Email";

/// Insert `values` into `row` at `at`, then `at + 1`, ... one cell at a time.
///
/// The row is padded with empty cells when it is shorter than `at`.
fn insert_sequential(row: &mut Vec<CellValue>, at: usize, values: Vec<CellValue>) {
    if row.len() < at {
        row.resize(at, CellValue::Null);
    }
    for (offset, value) in values.into_iter().enumerate() {
        row.insert(at + offset, value);
    }
}

/// Build a new grid with the username (and optional email) column inserted
/// right after `config.column_index`.
///
/// Both target positions come from the original layout: the username lands at
/// `column_index + 1` first, which shifts the rest of the row so the email then
/// lands at `column_index + 2`. Data rows are paired with `results` in order;
/// data rows past the end of `results` are copied unchanged.
///
/// A `column_index` too large to hold the new columns leaves the grid unchanged.
#[must_use]
pub fn splice_columns(
    grid: &[Vec<CellValue>],
    config: &ProcessingConfig,
    results: &[UsernameResult],
) -> Vec<Vec<CellValue>> {
    let with_email = config.email_domain().is_some();
    let inserted = 1 + usize::from(with_email);
    if config.column_index.checked_add(inserted).is_none() {
        tracing::warn!(column = config.column_index, "name column out of range; grid left unchanged");
        return grid.to_vec();
    }
    let username_at = config.column_index + 1;
    let data_start = config.first_data_row();

    let mut output: Vec<Vec<CellValue>> = grid.to_vec();

    if config.has_header {
        if let Some(header) = output.first_mut() {
            let mut labels = vec![CellValue::from(USERNAME_HEADER)];
            if with_email {
                labels.push(CellValue::from(EMAIL_HEADER));
            }
            insert_sequential(header, username_at, labels);
        }
    }

    let data_rows = output.iter_mut().skip(data_start);
    for (row, result) in data_rows.zip(results) {
        let mut cells = vec![CellValue::from(result.final_username.as_str())];
        if with_email {
            cells.push(CellValue::from(result.email.clone().unwrap_or_default()));
        }
        insert_sequential(row, username_at, cells);
    }

    tracing::debug!(
        rows = results.len().min(output.len().saturating_sub(data_start)),
        column = username_at,
        email = with_email,
        "spliced generated columns"
    );

    output
}
