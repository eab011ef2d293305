//! podium-ranker — Schema normalisation and the totals & ranking engine.

pub mod normalise;
pub mod pipeline;
pub mod schema;
pub mod scorer;
pub mod stats;

pub use normalise::{normalise, TeamRow};
pub use pipeline::Snapshot;
pub use schema::{Field, GAME_COUNT};
pub use scorer::{placeholder_board, rank, Leaderboard, RankedRow};
pub use stats::{best_game, Summary, LEADER_PLACEHOLDER};
