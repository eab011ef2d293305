//! JSON API — the ranked table and summary statistics, plus the manual
//! refresh trigger used by the dashboard's button.

use axum::{extract::State, response::Redirect, Json};
use chrono::{DateTime, Utc};
use podium_ranker::{best_game, RankedRow, Summary};
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub rows: Vec<RankedRow>,
    pub fetched_at: DateTime<Utc>,
    /// Failure cause when the rows are the placeholder board.
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: Summary,
    /// Up to the three best-ranked teams with their strongest game.
    pub top_three: Vec<TopTeam>,
    pub fetched_at: DateTime<Utc>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopTeam {
    pub name: String,
    pub total: f64,
    /// 0-based index of this team's highest game score, first occurrence
    /// on ties.
    pub best_game: usize,
}

/// GET /api/leaderboard
pub async fn api_leaderboard(State(state): State<SharedState>) -> Json<LeaderboardResponse> {
    let outcome = state.load(false).await;
    Json(LeaderboardResponse {
        rows: outcome.snapshot.board.rows,
        fetched_at: outcome.snapshot.fetched_at,
        error: outcome.error,
    })
}

/// GET /api/summary
pub async fn api_summary(State(state): State<SharedState>) -> Json<SummaryResponse> {
    let outcome = state.load(false).await;
    let top_three = top_teams(outcome.snapshot.board.top_three());
    Json(SummaryResponse {
        summary: outcome.snapshot.summary,
        top_three,
        fetched_at: outcome.snapshot.fetched_at,
        error: outcome.error,
    })
}

/// POST /refresh - invalidate the cached board, recompute, and send the
/// browser back to the dashboard.
pub async fn refresh(State(state): State<SharedState>) -> Redirect {
    let outcome = state.load(true).await;
    if outcome.error.is_some() {
        Redirect::to("/")
    } else {
        Redirect::to("/?refreshed=1")
    }
}

pub(crate) fn top_teams(rows: &[RankedRow]) -> Vec<TopTeam> {
    rows.iter()
        .map(|row| TopTeam {
            name: row.name.clone(),
            total: row.total,
            best_game: best_game(&row.games),
        })
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use podium_ranker::{placeholder_board, rank, TeamRow};

    #[test]
    fn test_top_teams_carry_best_game_index() {
        let board = rank(vec![
            TeamRow {
                name: "Alpha".to_string(),
                games: [5.0, 9.0, 9.0, 1.0],
                bonus: 0.0,
                total: 0.0,
            },
            TeamRow {
                name: "Bravo".to_string(),
                games: [1.0, 0.0, 0.0, 2.0],
                bonus: 0.0,
                total: 0.0,
            },
        ]);
        let top = top_teams(board.top_three());
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Alpha");
        assert_eq!(top[0].best_game, 1);
        assert_eq!(top[1].best_game, 3);
    }

    #[test]
    fn test_top_teams_caps_at_three() {
        let top = top_teams(placeholder_board().top_three());
        assert_eq!(top.len(), 3);
    }
}
