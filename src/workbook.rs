// src/workbook.rs
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;
use tracing::info;

use crate::models::row::Row;

/// Layout native date cells are rendered with, matching the text dates the sheet carries.
const DATE_CELL_FORMAT: &str = "%b %-d %Y";

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("Could not open Excel file: {0}")]
    Open(#[source] calamine::Error),
    #[error("Could not read Excel rows: workbook has no sheets")]
    NoSheets,
    #[error("Could not read Excel rows: {0}")]
    Sheet(#[source] calamine::Error),
}

/// Reads every row of the first sheet, header included.
///
/// The workbook and its file handle are dropped before returning, on success or failure.
pub fn read_first_sheet(path: &Path) -> Result<Vec<Row>, WorkbookError> {
    info!(path = %path.display(), "Opening workbook");
    let mut workbook = open_workbook_auto(path).map_err(WorkbookError::Open)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(WorkbookError::NoSheets)?;
    info!(sheet = %sheet_name, "Reading sheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(WorkbookError::Sheet)?;

    // Range coordinates are relative to its start; pad back out to sheet coordinates.
    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    let mut rows: Vec<Row> = (0..first_row).map(|_| Row::default()).collect();
    rows.extend(range.rows().map(|cells| {
        let leading = (0..first_col).map(|_| None);
        Row::new(leading.chain(cells.iter().map(cell_text)).collect())
    }));

    info!(count = rows.len(), "Found rows in sheet");
    Ok(rows)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|naive| naive.format(DATE_CELL_FORMAT).to_string())
            .or_else(|| Some(cell.to_string())),
        other => Some(other.to_string()),
    }
}
