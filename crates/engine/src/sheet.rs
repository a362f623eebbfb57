use std::collections::HashMap;

use crate::cell::CellValue;

/// A named 2-D grid of cells.
///
/// Storage is sparse: only populated addresses exist in the map. `rows` and
/// `cols` are the occupied extents (end-exclusive, anchored at row 0/col 0) —
/// the bounding rectangle the diff engine scans and the row views cover.
///
/// Two views over the same grid:
/// - the raw grid (`cell`), used for cell-level diffing — row 0 included;
/// - headers + data rows (`headers`/`data_row`), used for pagination — row 0
///   becomes the header row, data rows are 0-indexed from raw row 1.
///
/// Row order is storage order and never changes after load; pagination
/// offsets and diff indices depend on that stability.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    cells: HashMap<(usize, usize), CellValue>,
    rows: usize,
    cols: usize,
}

impl Sheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: HashMap::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Place a value at (row, col), growing the occupied extents.
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        self.cells.insert((row, col), value);
        self.rows = self.rows.max(row + 1);
        self.cols = self.cols.max(col + 1);
    }

    /// Parse textual input and place it; empty input leaves the cell absent
    /// (and does not grow the extents).
    pub fn set_input(&mut self, row: usize, col: usize, input: &str) {
        if let Some(value) = CellValue::from_input(input) {
            self.set(row, col, value);
        }
    }

    /// Raw grid read. None means the address was never populated —
    /// distinct from a cell holding an empty string.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// Occupied row extent (end-exclusive). 0 for an empty sheet.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Occupied column extent (end-exclusive). 0 for an empty sheet.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Header row: raw row 0 rendered as strings. A missing header cell at
    /// column c synthesizes "Column {c+1}". Empty sheet → no headers.
    pub fn headers(&self) -> Vec<String> {
        (0..self.cols)
            .map(|col| match self.cell(0, col) {
                Some(value) => value.display(),
                None => format!("Column {}", col + 1),
            })
            .collect()
    }

    /// Number of data rows (raw rows minus the header row).
    pub fn data_row_count(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// One data row (0-indexed from raw row 1), padded with empty strings to
    /// header width. Absent cells render as "" here — the raw grid keeps the
    /// absent/empty distinction, the row view does not need it.
    pub fn data_row(&self, index: usize) -> Vec<String> {
        let raw_row = index + 1;
        (0..self.cols)
            .map(|col| {
                self.cell(raw_row, col)
                    .map(|v| v.display())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// All data rows in storage order.
    pub fn data_rows(&self) -> Vec<Vec<String>> {
        (0..self.data_row_count()).map(|i| self.data_row(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> Sheet {
        let mut sheet = Sheet::new("Sheet1");
        sheet.set_input(0, 0, "Name");
        sheet.set_input(0, 1, "Amount");
        sheet.set_input(1, 0, "alpha");
        sheet.set_input(1, 1, "10");
        sheet.set_input(2, 0, "beta");
        sheet
    }

    #[test]
    fn test_extents_track_populated_cells() {
        let sheet = sample_sheet();
        assert_eq!(sheet.rows(), 3);
        assert_eq!(sheet.cols(), 2);
    }

    #[test]
    fn test_empty_input_does_not_occupy() {
        let mut sheet = Sheet::new("Sheet1");
        sheet.set_input(5, 5, "");
        assert!(sheet.is_empty());
        assert_eq!(sheet.rows(), 0);
        assert_eq!(sheet.headers(), Vec::<String>::new());
    }

    #[test]
    fn test_absent_vs_value() {
        let sheet = sample_sheet();
        assert_eq!(sheet.cell(1, 0), Some(&CellValue::Text("alpha".into())));
        assert_eq!(sheet.cell(2, 1), None);
        assert_eq!(sheet.cell(100, 100), None);
    }

    #[test]
    fn test_headers_with_synthesized_names() {
        let mut sheet = Sheet::new("Sheet1");
        sheet.set_input(0, 0, "Name");
        sheet.set_input(1, 2, "x"); // widens the sheet past the header row
        assert_eq!(sheet.headers(), vec!["Name", "Column 2", "Column 3"]);
    }

    #[test]
    fn test_data_rows_padded_to_width() {
        let sheet = sample_sheet();
        assert_eq!(sheet.data_row_count(), 2);
        assert_eq!(sheet.data_row(0), vec!["alpha", "10"]);
        // beta's row has no Amount cell — padded with empty string
        assert_eq!(sheet.data_row(1), vec!["beta", ""]);
    }

    #[test]
    fn test_header_only_sheet_has_no_data_rows() {
        let mut sheet = Sheet::new("Sheet1");
        sheet.set_input(0, 0, "Name");
        assert_eq!(sheet.data_row_count(), 0);
        assert_eq!(sheet.data_rows(), Vec::<Vec<String>>::new());
    }
}
