//! Comparison API — v1 Frozen Wire Format
//!
//! Canonical payload types exchanged between the comparison core and its
//! HTTP/UI consumers. The wire format is camelCase JSON; cell values are
//! bare JSON values (`"abc"`, `42`, `true`) with `null` meaning absent.
//!
//! The transport (routing, multipart upload, status codes) lives outside
//! this workspace; these types are the contract it serves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sheetdelta_engine::CellValue;

/// Current protocol version. Increment for breaking changes.
pub const PROTOCOL_VERSION: u32 = 1;

// =============================================================================
// Differences
// =============================================================================

/// The kind of change a difference records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffType {
    Added,
    Removed,
    Modified,
}

impl DiffType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffType::Added => "added",
            DiffType::Removed => "removed",
            DiffType::Modified => "modified",
        }
    }
}

/// One cell-level or sheet-level difference.
///
/// `row`/`column` are 1-based raw-grid coordinates (the header row is row 1);
/// sheet-level differences use row 0, column 0 and cell "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Difference {
    pub sheet: String,
    pub row: usize,
    pub column: usize,
    pub cell: String,
    #[serde(rename = "type")]
    pub diff_type: DiffType,
    pub old_value: Option<CellValue>,
    pub new_value: Option<CellValue>,
    pub description: String,
}

// =============================================================================
// Compare endpoint
// =============================================================================

/// Response to a compare request: the full difference list plus a first-page
/// preview of both workbooks, correlated to later pagination by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub id: String,
    pub file1_name: String,
    pub file2_name: String,
    pub differences: Vec<Difference>,
    pub file1_data: WorkbookData,
    pub file2_data: WorkbookData,
    pub timestamp: DateTime<Utc>,
}

/// Display form of a workbook: per sheet, headers plus (possibly truncated)
/// data rows rendered as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookData {
    pub sheets: Vec<SheetData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

// =============================================================================
// Paginate endpoint
// =============================================================================

/// Response to a paginate request. `file1`/`file2` are null when that
/// workbook has no sheet with the requested name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginateResponse {
    pub comparison_id: String,
    pub sheet: String,
    pub file1: Option<SheetPage>,
    pub file2: Option<SheetPage>,
    pub start_row: usize,
    pub limit: usize,
}

/// One row window of a sheet's data-rows view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetPage {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_wire_shape() {
        let diff = Difference {
            sheet: "Sheet1".to_string(),
            row: 3,
            column: 2,
            cell: "B3".to_string(),
            diff_type: DiffType::Modified,
            old_value: Some(CellValue::Number(2.0)),
            new_value: Some(CellValue::Number(3.0)),
            description: "Cell B3 changed from \"2\" to \"3\"".to_string(),
        };

        let json = serde_json::to_value(&diff).unwrap();
        assert_eq!(json["type"], "modified");
        assert_eq!(json["oldValue"], 2.0);
        assert_eq!(json["newValue"], 3.0);
        assert_eq!(json["cell"], "B3");
    }

    #[test]
    fn test_sheet_level_difference_nulls() {
        let diff = Difference {
            sheet: "Gone".to_string(),
            row: 0,
            column: 0,
            cell: "N/A".to_string(),
            diff_type: DiffType::Removed,
            old_value: None,
            new_value: None,
            description: "Sheet \"Gone\" removed in new file".to_string(),
        };

        let json = serde_json::to_value(&diff).unwrap();
        assert_eq!(json["oldValue"], serde_json::Value::Null);
        assert_eq!(json["newValue"], serde_json::Value::Null);
        assert_eq!(json["cell"], "N/A");
    }

    #[test]
    fn test_paginate_response_camel_case_keys() {
        let response = PaginateResponse {
            comparison_id: "abc".to_string(),
            sheet: "Sheet1".to_string(),
            file1: Some(SheetPage {
                headers: vec!["Name".to_string()],
                rows: vec![vec!["alpha".to_string()]],
                total_rows: 1,
                has_more: false,
            }),
            file2: None,
            start_row: 0,
            limit: 25,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["comparisonId"], "abc");
        assert!(json["file1"]["totalRows"].is_number());
        assert_eq!(json["file1"]["hasMore"], false);
        assert_eq!(json["file2"], serde_json::Value::Null);
        assert_eq!(json["startRow"], 0);
    }

    #[test]
    fn test_cell_values_serialize_untagged() {
        let page = SheetPage {
            headers: vec![],
            rows: vec![],
            total_rows: 0,
            has_more: false,
        };
        // Round-trip to confirm the shape is stable under deserialize
        let back: SheetPage = serde_json::from_str(&serde_json::to_string(&page).unwrap()).unwrap();
        assert_eq!(back, page);
    }
}
