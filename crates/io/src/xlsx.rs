// Excel container import (xlsx, xls, xlsb, ods) via calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use sheetdelta_engine::{CellValue, Sheet, Workbook};

use crate::{ImportStats, LoadError, SheetStats};

/// Maximum number of cells to import (guards against pathological files)
const MAX_CELLS: usize = 5_000_000;

/// Maximum dimensions for a sheet
const MAX_ROWS: usize = 65536;
const MAX_COLS: usize = 256;

/// Import an Excel file. Every sheet in the container becomes a Sheet;
/// a sheet with no occupied range becomes an empty Sheet (zero extents).
pub fn import(path: &Path) -> Result<(Workbook, ImportStats), LoadError> {
    let mut container: Sheets<_> =
        open_workbook_auto(path).map_err(|e| LoadError::Parse(e.to_string()))?;

    let sheet_names: Vec<String> = container.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(LoadError::Parse("file contains no sheets".to_string()));
    }

    let mut stats = ImportStats::default();
    let mut sheets: Vec<Sheet> = Vec::new();
    let mut total_cells = 0usize;
    let mut hit_cell_limit = false;

    for sheet_name in &sheet_names {
        let range = container
            .worksheet_range(sheet_name)
            .map_err(|e| LoadError::Parse(format!("sheet '{sheet_name}': {e}")))?;

        let mut sheet = Sheet::new(sheet_name);
        let mut sheet_stats = SheetStats {
            name: sheet_name.clone(),
            ..Default::default()
        };

        let (height, width) = range.get_size();
        if height == 0 || width == 0 {
            // Empty occupied range: keep the sheet, zero headers, zero rows
            sheets.push(sheet);
            stats.sheets_loaded += 1;
            stats.sheet_stats.push(sheet_stats);
            continue;
        }

        // Data may not begin at A1; keep absolute addressing
        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        let end_row = start_row as usize + height;
        let end_col = start_col as usize + width;

        if end_row > MAX_ROWS || end_col > MAX_COLS {
            sheet_stats.truncated_rows = end_row.saturating_sub(MAX_ROWS);
            sheet_stats.truncated_cols = end_col.saturating_sub(MAX_COLS);
            stats.truncated = true;
            stats.warnings.push(format!(
                "Sheet '{}' truncated from {}x{} to {}x{}",
                sheet_name,
                end_row,
                end_col,
                end_row.min(MAX_ROWS),
                end_col.min(MAX_COLS)
            ));
        }

        'rows: for (row_idx, row) in range.rows().enumerate() {
            let target_row = start_row as usize + row_idx;
            if target_row >= MAX_ROWS {
                break;
            }

            for (col_idx, cell) in row.iter().enumerate() {
                let target_col = start_col as usize + col_idx;
                if target_col >= MAX_COLS {
                    break;
                }

                if total_cells >= MAX_CELLS {
                    if !hit_cell_limit {
                        hit_cell_limit = true;
                        stats.truncated = true;
                        stats
                            .warnings
                            .push(format!("Import stopped at {MAX_CELLS} cells (limit reached)"));
                    }
                    break 'rows;
                }

                if let Some(value) = convert_cell(cell) {
                    sheet.set(target_row, target_col, value);
                    sheet_stats.cells_loaded += 1;
                    total_cells += 1;
                }
            }
        }

        stats.cells_loaded += sheet_stats.cells_loaded;
        stats.sheets_loaded += 1;
        stats.sheet_stats.push(sheet_stats);
        sheets.push(sheet);
    }

    Ok((Workbook::from_sheets(sheets), stats))
}

/// Map a calamine cell to a typed value. None means the address stays
/// absent — blank cells and empty strings do not occupy the grid.
fn convert_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(CellValue::Text(s.clone()))
            }
        }
        Data::Float(n) => Some(CellValue::Number(*n)),
        Data::Int(n) => Some(CellValue::Number(*n as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        // Serial value; format-aware date rendering is out of scope
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Text(format!("#{e:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell_empty_is_absent() {
        assert_eq!(convert_cell(&Data::Empty), None);
        assert_eq!(convert_cell(&Data::String(String::new())), None);
    }

    #[test]
    fn test_convert_cell_typed() {
        assert_eq!(
            convert_cell(&Data::String("abc".into())),
            Some(CellValue::Text("abc".into()))
        );
        assert_eq!(convert_cell(&Data::Float(2.5)), Some(CellValue::Number(2.5)));
        assert_eq!(convert_cell(&Data::Int(7)), Some(CellValue::Number(7.0)));
        assert_eq!(convert_cell(&Data::Bool(true)), Some(CellValue::Bool(true)));
    }

    #[test]
    fn test_convert_cell_iso_strings_stay_text() {
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2024-01-01".into())),
            Some(CellValue::Text("2024-01-01".into()))
        );
    }
}
