// Service layer: assemble the compare/paginate endpoint payloads.
// The HTTP layer owns transport only; every observable field is built here.

use chrono::Utc;
use sheetdelta_engine::{Sheet, Workbook};
use sheetdelta_protocol::{CompareResponse, PaginateResponse, SheetData, WorkbookData};

use crate::diff;
use crate::error::CompareError;
use crate::paginate;
use crate::store::ComparisonStore;

/// Rows per sheet included in the initial compare response. Further rows
/// come through pagination.
pub const PREVIEW_ROWS: usize = 25;

/// Compare two loaded workbooks, cache them, and build the initial response:
/// the full difference list plus a first-page preview of both files.
///
/// The cache entry is inserted only after the diff has been computed; a
/// failure anywhere upstream leaves no partial state behind.
pub fn create_comparison(
    store: &ComparisonStore,
    workbook1: Workbook,
    file1_name: &str,
    workbook2: Workbook,
    file2_name: &str,
) -> CompareResponse {
    let differences = diff::compare(&workbook1, &workbook2);
    let file1_data = preview(&workbook1);
    let file2_data = preview(&workbook2);
    let id = store.put(workbook1, workbook2);

    CompareResponse {
        id,
        file1_name: file1_name.to_string(),
        file2_name: file2_name.to_string(),
        differences,
        file1_data,
        file2_data,
        timestamp: Utc::now(),
    }
}

/// Serve one row window per workbook for a cached comparison.
pub fn paginate_comparison(
    store: &ComparisonStore,
    comparison_id: &str,
    sheet_name: &str,
    start_row: usize,
    limit: usize,
) -> Result<PaginateResponse, CompareError> {
    if limit == 0 {
        // Reject before touching the cache
        return Err(CompareError::InvalidArgument(
            "limit must be positive".to_string(),
        ));
    }

    let entry = store
        .get(comparison_id)
        .ok_or_else(|| CompareError::NotFound(comparison_id.to_string()))?;

    let pages = paginate::paginate(&entry, sheet_name, start_row, limit)?;

    Ok(PaginateResponse {
        comparison_id: comparison_id.to_string(),
        sheet: sheet_name.to_string(),
        file1: pages.file1,
        file2: pages.file2,
        start_row,
        limit,
    })
}

fn preview(workbook: &Workbook) -> WorkbookData {
    WorkbookData {
        sheets: workbook.sheets().iter().map(sheet_preview).collect(),
    }
}

fn sheet_preview(sheet: &Sheet) -> SheetData {
    let row_count = sheet.data_row_count().min(PREVIEW_ROWS);
    SheetData {
        name: sheet.name.clone(),
        headers: sheet.headers(),
        rows: (0..row_count).map(|i| sheet.data_row(i)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetdelta_protocol::DiffType;

    fn numbered_workbook(data_rows: usize) -> Workbook {
        let mut sheet = Sheet::new("Sheet1");
        sheet.set_input(0, 0, "id");
        for i in 0..data_rows {
            sheet.set_input(i + 1, 0, &i.to_string());
        }
        Workbook::from_sheets(vec![sheet])
    }

    #[test]
    fn test_create_comparison_previews_first_page_only() {
        let store = ComparisonStore::new();
        let response = create_comparison(
            &store,
            numbered_workbook(40),
            "old.xlsx",
            numbered_workbook(40),
            "new.xlsx",
        );

        assert!(response.differences.is_empty());
        assert_eq!(response.file1_data.sheets[0].rows.len(), PREVIEW_ROWS);
        assert_eq!(response.file1_name, "old.xlsx");

        // The full workbooks are cached even though the preview is truncated
        let pages =
            paginate_comparison(&store, &response.id, "Sheet1", PREVIEW_ROWS, 25).unwrap();
        assert_eq!(pages.file1.unwrap().rows.len(), 15);
    }

    #[test]
    fn test_create_comparison_reports_differences() {
        let store = ComparisonStore::new();
        let response = create_comparison(
            &store,
            numbered_workbook(2),
            "a.csv",
            numbered_workbook(3),
            "b.csv",
        );
        assert_eq!(response.differences.len(), 1);
        assert_eq!(response.differences[0].diff_type, DiffType::Added);
    }

    #[test]
    fn test_paginate_unknown_id_is_not_found() {
        let store = ComparisonStore::new();
        assert!(matches!(
            paginate_comparison(&store, "missing", "Sheet1", 0, 25),
            Err(CompareError::NotFound(_))
        ));
    }

    #[test]
    fn test_paginate_zero_limit_rejected_before_cache_lookup() {
        let store = ComparisonStore::new();
        // Unknown id AND bad limit: the limit error wins, per the contract
        assert!(matches!(
            paginate_comparison(&store, "missing", "Sheet1", 0, 0),
            Err(CompareError::InvalidArgument(_))
        ));
    }
}
