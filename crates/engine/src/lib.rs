// Workbook model shared by the loader, the diff engine, and pagination.

pub mod address;
pub mod cell;
pub mod sheet;
pub mod workbook;

pub use address::{cell_label, col_letter};
pub use cell::CellValue;
pub use sheet::Sheet;
pub use workbook::Workbook;
