use crate::schema::{RawStatement, StatementRow};
use log::debug;

/// A statement row as it arrives from the upload layer: three positional
/// cells, values still text. Wider inputs must be reduced to these three
/// columns before conversion.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub label: String,
    pub prior_cell: String,
    pub current_cell: String,
}

impl RawRecord {
    pub fn new(
        label: impl Into<String>,
        prior_cell: impl Into<String>,
        current_cell: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            prior_cell: prior_cell.into(),
            current_cell: current_cell.into(),
        }
    }
}

/// Coerces a text cell to a finite number. Accepts thousands separators and
/// surrounding whitespace; anything unparseable (or non-finite) becomes 0.0.
/// Total by construction, never fails.
pub fn normalize_cell(cell: &str) -> f64 {
    let cleaned: String = cell
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != ' ')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Builds an immutable `RawStatement` from positional three-column records.
pub fn convert_records_to_statement(records: &[RawRecord]) -> RawStatement {
    let rows = records
        .iter()
        .map(|record| StatementRow {
            label: record.label.trim().to_string(),
            prior: normalize_cell(&record.prior_cell),
            current: normalize_cell(&record.current_cell),
        })
        .collect::<Vec<_>>();

    debug!("Normalized {} statement rows", rows.len());
    RawStatement::new(rows)
}
