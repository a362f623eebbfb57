// Spreadsheet loading
//
// One-way conversion: files are parsed into the normalized workbook model.
// A load either produces a complete workbook or fails with LoadError —
// no partial workbook is ever returned.

use std::fmt;
use std::path::Path;

use sheetdelta_engine::Workbook;

pub mod csv;
pub mod xlsx;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum LoadError {
    /// File could not be read from disk.
    Io(String),
    /// Extension is not a supported spreadsheet container.
    UnsupportedFormat(String),
    /// File opened but could not be parsed as its claimed format.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "cannot read file: {msg}"),
            Self::UnsupportedFormat(ext) => {
                write!(f, "unsupported file format '{ext}' (expected .xlsx, .xls, or .csv)")
            }
            Self::Parse(msg) => write!(f, "cannot parse file: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

// ---------------------------------------------------------------------------
// Import statistics
// ---------------------------------------------------------------------------

/// Per-sheet load statistics.
#[derive(Debug, Default, Clone)]
pub struct SheetStats {
    pub name: String,
    pub cells_loaded: usize,
    pub truncated_rows: usize,
    pub truncated_cols: usize,
}

/// Result of a load operation. Purely diagnostic — the CLI prints the
/// summary to stderr; nothing downstream depends on it.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub sheets_loaded: usize,
    pub cells_loaded: usize,
    pub truncated: bool,
    pub sheet_stats: Vec<SheetStats>,
    pub warnings: Vec<String>,
}

impl ImportStats {
    /// One-line summary suitable for display.
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!(
                "{} sheet{}",
                self.sheets_loaded,
                if self.sheets_loaded == 1 { "" } else { "s" }
            ),
            format!("{} cells", self.cells_loaded),
        ];
        if self.truncated {
            parts.push("data truncated".to_string());
        }
        parts.join(" · ")
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Load a spreadsheet file, dispatching on extension.
///
/// Excel containers go through calamine's auto-detection (.xlsx, .xls, and
/// .xlsb/.ods come along for free); .csv/.tsv/.txt take the delimited path.
pub fn load(path: &Path) -> Result<(Workbook, ImportStats), LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" | "xls" | "xlsb" | "ods" => xlsx::import(path),
        "csv" | "tsv" | "txt" => {
            let sheet = csv::import(path)?;
            let mut stats = ImportStats {
                sheets_loaded: 1,
                cells_loaded: sheet.cell_count(),
                ..Default::default()
            };
            stats.sheet_stats.push(SheetStats {
                name: sheet.name.clone(),
                cells_loaded: sheet.cell_count(),
                ..Default::default()
            });
            Ok((Workbook::from_sheets(vec![sheet]), stats))
        }
        _ => Err(LoadError::UnsupportedFormat(if ext.is_empty() {
            path.display().to_string()
        } else {
            format!(".{ext}")
        })),
    }
}
