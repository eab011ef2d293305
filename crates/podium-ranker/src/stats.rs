//! Summary statistics for the dashboard stat cards.

use serde::{Deserialize, Serialize};

use crate::schema::GAME_COUNT;
use crate::scorer::Leaderboard;

/// Shown as the leading team while nobody has scored yet.
pub const LEADER_PLACEHOLDER: &str = "TBD";

/// The four scalar statistics shown under the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub teams: usize,
    pub highest: i64,
    /// Mean total, rounded to the nearest integer for display.
    pub average: i64,
    pub leader: String,
}

impl Summary {
    pub fn from_board(board: &Leaderboard) -> Self {
        let teams = board.rows.len();
        if teams == 0 {
            return Self {
                teams: 0,
                highest: 0,
                average: 0,
                leader: LEADER_PLACEHOLDER.to_string(),
            };
        }

        // Rows are already ordered, so the first row carries the maximum.
        let highest_total = board.rows[0].total;
        let mean = board.total_sum() / teams as f64;

        let leader = if highest_total > 0.0 {
            board.rows[0].name.clone()
        } else {
            LEADER_PLACEHOLDER.to_string()
        };

        Self {
            teams,
            highest: highest_total as i64,
            average: mean.round() as i64,
            leader,
        }
    }
}

/// 0-based index of the strongest of the four game scores, first occurrence
/// winning ties.
pub fn best_game(games: &[f64; GAME_COUNT]) -> usize {
    let mut best = 0;
    for (i, score) in games.iter().enumerate().skip(1) {
        if *score > games[best] {
            best = i;
        }
    }
    best
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalise::TeamRow;
    use crate::scorer::{placeholder_board, rank};

    fn board_of(totals: &[(&str, f64)]) -> Leaderboard {
        rank(totals
            .iter()
            .map(|(name, total)| TeamRow {
                name: name.to_string(),
                games: [0.0; GAME_COUNT],
                bonus: 0.0,
                total: *total,
            })
            .collect())
    }

    #[test]
    fn test_summary_of_empty_board() {
        let summary = Summary::from_board(&Leaderboard::default());
        assert_eq!(summary.teams, 0);
        assert_eq!(summary.highest, 0);
        assert_eq!(summary.average, 0);
        assert_eq!(summary.leader, LEADER_PLACEHOLDER);
    }

    #[test]
    fn test_summary_of_scored_board() {
        let summary = Summary::from_board(&board_of(&[("Alpha", 10.0), ("Bravo", 25.0)]));
        assert_eq!(summary.teams, 2);
        assert_eq!(summary.highest, 25);
        // mean 17.5 rounds up
        assert_eq!(summary.average, 18);
        assert_eq!(summary.leader, "Bravo");
    }

    #[test]
    fn test_leader_placeholder_when_nobody_scored() {
        let summary = Summary::from_board(&placeholder_board());
        assert_eq!(summary.teams, 8);
        assert_eq!(summary.leader, LEADER_PLACEHOLDER);
    }

    #[test]
    fn test_leader_placeholder_when_all_totals_negative() {
        let summary = Summary::from_board(&board_of(&[("Alpha", -3.0), ("Bravo", -1.0)]));
        assert_eq!(summary.leader, LEADER_PLACEHOLDER);
        assert_eq!(summary.highest, -1);
    }

    #[test]
    fn test_best_game_first_occurrence_wins_ties() {
        assert_eq!(best_game(&[5.0, 9.0, 9.0, 1.0]), 1);
        assert_eq!(best_game(&[0.0, 0.0, 0.0, 0.0]), 0);
        assert_eq!(best_game(&[1.0, 2.0, 3.0, 4.0]), 3);
    }
}
