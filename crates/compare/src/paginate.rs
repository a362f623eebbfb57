// Paginated range queries over a cached comparison.
//
// Pages are pure derived views; nothing here mutates the entry. Two
// pagination requests for the same id may run concurrently.

use sheetdelta_engine::Workbook;
use sheetdelta_protocol::SheetPage;

use crate::error::CompareError;
use crate::store::CachedComparison;

/// One row window from each workbook. A side is None when that workbook has
/// no sheet with the requested name.
#[derive(Debug)]
pub struct SheetPages {
    pub file1: Option<SheetPage>,
    pub file2: Option<SheetPage>,
}

/// Slice `[start_row, start_row + limit)` out of the named sheet's
/// data-rows view in both workbooks.
///
/// `start_row` is 0-indexed from the first data row (the header row is not
/// part of the window). An out-of-range start yields an empty page, not an
/// error; a zero limit is invalid input.
pub fn paginate(
    entry: &CachedComparison,
    sheet_name: &str,
    start_row: usize,
    limit: usize,
) -> Result<SheetPages, CompareError> {
    if limit == 0 {
        return Err(CompareError::InvalidArgument(
            "limit must be positive".to_string(),
        ));
    }

    Ok(SheetPages {
        file1: page_for(&entry.workbook1, sheet_name, start_row, limit),
        file2: page_for(&entry.workbook2, sheet_name, start_row, limit),
    })
}

fn page_for(
    workbook: &Workbook,
    sheet_name: &str,
    start_row: usize,
    limit: usize,
) -> Option<SheetPage> {
    let sheet = workbook.sheet_by_name(sheet_name)?;
    let total_rows = sheet.data_row_count();

    let start = start_row.min(total_rows);
    let end = start_row.saturating_add(limit).min(total_rows);
    let rows = (start..end).map(|i| sheet.data_row(i)).collect();

    Some(SheetPage {
        headers: sheet.headers(),
        rows,
        total_rows,
        has_more: start_row.saturating_add(limit) < total_rows,
    })
}
