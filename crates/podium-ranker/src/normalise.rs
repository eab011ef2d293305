//! Schema normalisation: header aliasing, required-column fill, and cell
//! coercion.
//!
//! Takes a raw table with arbitrary column names and produces rows that
//! carry exactly the canonical columns with the right types. Total function:
//! any input table normalises without error.

use std::collections::HashMap;

use podium_ingestion::RawTable;
use serde::{Deserialize, Serialize};

use crate::schema::{Field, GAME_COUNT};

/// One row after normalisation.
///
/// All numeric values are finite; unparseable or missing cells are 0.
/// Negative scores are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    pub name: String,
    pub games: [f64; GAME_COUNT],
    pub bonus: f64,
    pub total: f64,
}

/// Resolve each header to its canonical field.
///
/// When several headers alias the same canonical column, the later column
/// wins. Headers that resolve to nothing are passthrough columns; they have
/// no entry here and are dropped by the projection below.
fn resolve_columns(headers: &[String]) -> HashMap<Field, usize> {
    let mut index = HashMap::new();
    for (col, header) in headers.iter().enumerate() {
        if let Some(field) = Field::from_header(header) {
            index.insert(field, col);
        }
    }
    index
}

/// Numeric coercion: any cell that fails to parse as a finite number
/// becomes 0. Malformed input degrades instead of aborting the pass.
fn coerce_number(cell: &str) -> f64 {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Normalise a raw table into canonical rows.
///
/// Canonical columns absent from the input are created zero-filled, which
/// for a missing name column means every name coerces to the string `"0"`.
pub fn normalise(table: &RawTable) -> Vec<TeamRow> {
    let index = resolve_columns(&table.headers);

    let name_col = index.get(&Field::Name).copied();
    let game_cols: [Option<usize>; GAME_COUNT] =
        Field::GAMES.map(|g| index.get(&g).copied());
    let bonus_col = index.get(&Field::Bonus).copied();
    let total_col = index.get(&Field::Total).copied();

    (0..table.row_count())
        .map(|row| {
            let name = match name_col {
                Some(col) => table.cell(row, col).to_string(),
                None => "0".to_string(),
            };
            let games = game_cols.map(|col| numeric_cell(table, row, col));
            TeamRow {
                name,
                games,
                bonus: numeric_cell(table, row, bonus_col),
                total: numeric_cell(table, row, total_col),
            }
        })
        .collect()
}

fn numeric_cell(table: &RawTable, row: usize, col: Option<usize>) -> f64 {
    match col {
        Some(col) => coerce_number(table.cell(row, col)),
        None => 0.0,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
