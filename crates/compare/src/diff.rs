// Cell-level workbook reconciliation.
// Pure functions: two workbooks in, ordered difference list out.
// No IO, no cache, no formatting concerns.

use sheetdelta_engine::{cell_label, CellValue, Sheet, Workbook};
use sheetdelta_protocol::{DiffType, Difference};

/// Compare two workbooks, producing the ordered difference list.
///
/// Ordering is an observable contract: sheets in first-appearance order
/// (all of A's sheets in file order, then B's sheets not in A), then
/// row-major, then column-major within a sheet. Running the comparison
/// twice over the same workbooks yields an identical list.
pub fn compare(a: &Workbook, b: &Workbook) -> Vec<Difference> {
    let mut differences = Vec::new();

    for name in sheet_union(a, b) {
        match (a.sheet_by_name(name), b.sheet_by_name(name)) {
            (Some(sheet_a), Some(sheet_b)) => {
                compare_sheets(sheet_a, sheet_b, &mut differences);
            }
            (Some(_), None) => {
                differences.push(sheet_level(name, DiffType::Removed));
            }
            (None, Some(_)) => {
                differences.push(sheet_level(name, DiffType::Added));
            }
            (None, None) => unreachable!("name came from the union of both workbooks"),
        }
    }

    differences
}

/// Union of sheet names in first-appearance order: A's in file order, then
/// B's that A lacks, in B's file order.
fn sheet_union<'a>(a: &'a Workbook, b: &'a Workbook) -> Vec<&'a str> {
    let mut names: Vec<&str> = a.sheet_names();
    for name in b.sheet_names() {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Scan the bounding rectangle covering both raw grids. The header row
/// (raw row 0) participates like any other row.
fn compare_sheets(a: &Sheet, b: &Sheet, out: &mut Vec<Difference>) {
    let max_rows = a.rows().max(b.rows());
    let max_cols = a.cols().max(b.cols());

    for row in 0..max_rows {
        for col in 0..max_cols {
            match (a.cell(row, col), b.cell(row, col)) {
                (None, None) => {}
                (None, Some(new)) => out.push(cell_added(&a.name, row, col, new)),
                (Some(old), None) => out.push(cell_removed(&a.name, row, col, old)),
                (Some(old), Some(new)) => {
                    if old != new {
                        out.push(cell_modified(&a.name, row, col, old, new));
                    }
                }
            }
        }
    }
}

fn sheet_level(name: &str, diff_type: DiffType) -> Difference {
    let verb = match diff_type {
        DiffType::Added => "added",
        DiffType::Removed => "removed",
        DiffType::Modified => unreachable!("sheet-level differences are added/removed only"),
    };
    Difference {
        sheet: name.to_string(),
        row: 0,
        column: 0,
        cell: "N/A".to_string(),
        diff_type,
        old_value: None,
        new_value: None,
        description: format!("Sheet \"{name}\" {verb} in new file"),
    }
}

fn cell_added(sheet: &str, row: usize, col: usize, new: &CellValue) -> Difference {
    let label = cell_label(row, col);
    Difference {
        sheet: sheet.to_string(),
        row: row + 1,
        column: col + 1,
        cell: label.clone(),
        diff_type: DiffType::Added,
        old_value: None,
        new_value: Some(new.clone()),
        description: format!("Cell {label} added with value: {}", new.display()),
    }
}

fn cell_removed(sheet: &str, row: usize, col: usize, old: &CellValue) -> Difference {
    let label = cell_label(row, col);
    Difference {
        sheet: sheet.to_string(),
        row: row + 1,
        column: col + 1,
        cell: label.clone(),
        diff_type: DiffType::Removed,
        old_value: Some(old.clone()),
        new_value: None,
        description: format!("Cell {label} removed (was: {})", old.display()),
    }
}

fn cell_modified(sheet: &str, row: usize, col: usize, old: &CellValue, new: &CellValue) -> Difference {
    let label = cell_label(row, col);
    Difference {
        sheet: sheet.to_string(),
        row: row + 1,
        column: col + 1,
        cell: label.clone(),
        diff_type: DiffType::Modified,
        old_value: Some(old.clone()),
        new_value: Some(new.clone()),
        description: format!(
            "Cell {label} changed from \"{}\" to \"{}\"",
            old.display(),
            new.display()
        ),
    }
}
