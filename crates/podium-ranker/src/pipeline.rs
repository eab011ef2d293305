//! One full pass: fetch → normalise → rank → summarise.
//!
//! Every pass rebuilds the board from scratch; nothing carries over from
//! the previous fetch, so a team absent from the new sheet simply
//! disappears.

use chrono::{DateTime, Utc};
use podium_common::error::Result;
use podium_ingestion::{RawTable, SheetClient};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::normalise::normalise;
use crate::scorer::{placeholder_board, rank, Leaderboard};
use crate::stats::Summary;

/// A fetched-and-processed board, the unit the web layer caches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Leaderboard,
    pub summary: Summary,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    fn from_board(board: Leaderboard) -> Self {
        let summary = Summary::from_board(&board);
        Self {
            board,
            summary,
            fetched_at: Utc::now(),
        }
    }
}

/// Normalise and rank a raw table.
pub fn process(table: &RawTable) -> Snapshot {
    let board = rank(normalise(table));
    info!(teams = board.rows.len(), "Ranked leaderboard");
    Snapshot::from_board(board)
}

/// Fetch the sheet and run the full pipeline.
pub async fn load(client: &SheetClient, url: &str) -> Result<Snapshot> {
    let table = client.fetch_table(url).await?;
    Ok(process(&table))
}

/// Snapshot of the built-in placeholder board, substituted when the real
/// source cannot be retrieved.
pub fn fallback() -> Snapshot {
    Snapshot::from_board(placeholder_board())
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LEADER_PLACEHOLDER;

    #[test]
    fn test_process_end_to_end() {
        let table = RawTable::from_csv(
            "Team Name,Game1,Game 2,Game3,Game 4,Bonus,Notes\n\
             Bravo,1,2,3,4,0,slow start\n\
             Alpha,10,20,5,0,5,favourites\n",
        )
        .unwrap();
        let snapshot = process(&table);

        // Totals derived (no total column), ranked descending.
        assert_eq!(snapshot.board.rows[0].name, "Alpha");
        assert_eq!(snapshot.board.rows[0].total, 40.0);
        assert_eq!(snapshot.board.rows[0].rank, 1);
        assert_eq!(snapshot.board.rows[1].name, "Bravo");
        assert_eq!(snapshot.board.rows[1].total, 10.0);
        assert_eq!(snapshot.board.rows[1].rank, 2);

        assert_eq!(snapshot.summary.teams, 2);
        assert_eq!(snapshot.summary.highest, 40);
        assert_eq!(snapshot.summary.average, 25);
        assert_eq!(snapshot.summary.leader, "Alpha");
    }

    #[test]
    fn test_fallback_snapshot_is_structurally_valid() {
        let snapshot = fallback();
        assert_eq!(snapshot.board.rows.len(), 8);
        assert_eq!(snapshot.summary.teams, 8);
        assert_eq!(snapshot.summary.leader, LEADER_PLACEHOLDER);
    }
}
