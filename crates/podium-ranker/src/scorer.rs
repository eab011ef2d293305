//! Totals derivation, dense ranking, and presentation ordering.
//!
//! Total functions over normalised rows; coercion has already eliminated
//! malformed values, so nothing here can fail.

use serde::{Deserialize, Serialize};

use crate::normalise::TeamRow;
use crate::schema::GAME_COUNT;

/// Two totals closer than this are the same total for ranking purposes.
const TOTAL_EPS: f64 = 1e-10;

/// One presentation row. Field order is the output column order:
/// rank, name, the four game scores, bonus, total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub rank: u32,
    pub name: String,
    pub games: [f64; GAME_COUNT],
    pub bonus: f64,
    pub total: f64,
}

/// The ranked table: rows sorted by total descending, name ascending for
/// ties, with dense ranks assigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub rows: Vec<RankedRow>,
}

impl Leaderboard {
    /// Up to the three best-ranked rows, for the medal cards.
    pub fn top_three(&self) -> &[RankedRow] {
        &self.rows[..self.rows.len().min(3)]
    }

    pub fn total_sum(&self) -> f64 {
        self.rows.iter().map(|r| r.total).sum()
    }
}

/// Fill in the total column when the sheet does not carry one.
///
/// All-or-nothing: only when every row's total is zero is the whole column
/// replaced with per-row game sum plus bonus. A single nonzero supplied
/// total means the column was entered by hand and is trusted wholesale,
/// zero rows included.
fn derive_totals(rows: &mut [TeamRow]) {
    if rows.iter().any(|r| r.total != 0.0) {
        return;
    }
    for row in rows.iter_mut() {
        row.total = row.games.iter().sum::<f64>() + row.bonus;
    }
}

/// Rank normalised rows into the final presentation table.
///
/// Dense rank semantics: the highest total gets rank 1, tied totals share a
/// rank, and the next distinct total's rank is exactly one greater, with no
/// gaps for skipped counts.
pub fn rank(mut rows: Vec<TeamRow>) -> Leaderboard {
    derive_totals(&mut rows);

    // Stable sort: total descending, then name ascending (case-sensitive).
    rows.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut ranked = Vec::with_capacity(rows.len());
    let mut current_rank = 0u32;
    let mut prev_total: Option<f64> = None;
    for row in rows {
        let is_new_group = prev_total.map_or(true, |p| (p - row.total).abs() > TOTAL_EPS);
        if is_new_group {
            current_rank += 1;
            prev_total = Some(row.total);
        }
        ranked.push(RankedRow {
            rank: current_rank,
            name: row.name,
            games: row.games,
            bonus: row.bonus,
            total: row.total,
        });
    }

    Leaderboard { rows: ranked }
}

/// Built-in fallback dataset: eight synthetic teams with all-zero scores,
/// run through the ranking engine so the presentation layer always receives
/// a structurally valid board.
pub fn placeholder_board() -> Leaderboard {
    let rows = (1..=8)
        .map(|i| TeamRow {
            name: format!("Team_{i}"),
            games: [0.0; GAME_COUNT],
            bonus: 0.0,
            total: 0.0,
        })
        .collect();
    rank(rows)
}

// ── Tests ────────────────────────────────────────────────────────────────────
