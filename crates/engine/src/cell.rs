use serde::{Deserialize, Serialize};

/// A concrete cell value.
///
/// Absence is not a variant: an address that holds no value is missing from
/// the sheet's cell map, and reads surface it as `Option<&CellValue>`. An
/// absent cell is never equal to any concrete value, including `Text("")`.
///
/// Serialized untagged so wire payloads carry the bare JSON value
/// (`"abc"`, `42`, `true`) with `null` reserved for absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Parse raw textual input (CSV fields, user entry) into a typed value.
    /// Returns None for empty input — the cell stays absent.
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return None;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return Some(CellValue::Bool(true));
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Some(CellValue::Bool(false));
        }

        if let Ok(num) = trimmed.parse::<f64>() {
            return Some(CellValue::Number(num));
        }

        Some(CellValue::Text(input.to_string()))
    }

    /// Render for row views and diff descriptions.
    /// Integers print without a decimal point, booleans as TRUE/FALSE.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Bool(b) => {
                if *b { "TRUE".to_string() } else { "FALSE".to_string() }
            }
        }
    }

}
