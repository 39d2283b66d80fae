//! Spreadsheet ingestion: pulls one column out of an uploaded XLSX
//! workbook as a flat list of strings.
//!
//! The extraction is deliberately raw: cells are coerced to trimmed
//! display strings, blanks are dropped, and nothing else is filtered.
//! Duplicates stay, and if row 0 holds a header the header string ends
//! up in the list too - skipping it is the uploader's responsibility.

use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("sheet \"{0}\" not found")]
    SheetNotFound(String),

    #[error("invalid column reference: {0}")]
    InvalidColumnRef(String),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),
}

/// Resolves a column reference to a zero-based index. Accepts Excel
/// letters (`A`, `b`, `AA`) or a plain zero-based integer (`0`, `13`).
pub fn parse_column_ref(column_ref: &str) -> Result<usize, IngestError> {
    let column_ref = column_ref.trim();
    if column_ref.is_empty() {
        return Err(IngestError::InvalidColumnRef(column_ref.to_string()));
    }

    if column_ref.chars().all(|c| c.is_ascii_alphabetic()) {
        // A = 0, Z = 25, AA = 26, like Excel minus one.
        let mut index: usize = 0;
        for c in column_ref.chars() {
            let digit = (c.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
            index = index
                .checked_mul(26)
                .and_then(|i| i.checked_add(digit))
                .ok_or_else(|| IngestError::InvalidColumnRef(column_ref.to_string()))?;
        }
        return Ok(index - 1);
    }

    column_ref
        .parse::<usize>()
        .map_err(|_| IngestError::InvalidColumnRef(column_ref.to_string()))
}

/// Extracts every non-empty cell of one column from the named sheet, in
/// row order, as trimmed strings.
pub fn extract_column(
    workbook: &[u8],
    sheet_name: &str,
    column_ref: &str,
) -> Result<Vec<String>, IngestError> {
    let col = parse_column_ref(column_ref)?;

    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(workbook))?;
    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(IngestError::SheetNotFound(sheet_name.to_string()));
    }
    let range = workbook.worksheet_range(sheet_name)?;

    // The range only covers the used area of the sheet; cell positions
    // within it are relative to its top-left corner.
    let (_, start_col) = range.start().unwrap_or((0, 0));
    let start_col = start_col as usize;

    let mut values = Vec::new();
    if col >= start_col {
        for row in range.rows() {
            let Some(cell) = row.get(col - start_col) else {
                continue;
            };
            if let Some(value) = cell_to_string(cell) {
                values.push(value);
            }
        }
    }

    tracing::debug!(
        sheet = sheet_name,
        column = column_ref,
        count = values.len(),
        "extracted column"
    );
    Ok(values)
}

/// Coerces a cell to its trimmed display string; `None` for empty cells
/// and blank strings.
fn cell_to_string(cell: &Data) -> Option<String> {
    if matches!(cell, Data::Empty) {
        return None;
    }
    let text = cell.to_string();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
