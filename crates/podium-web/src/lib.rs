//! podium-web — Web GUI for the Podium leaderboard.
//! Provides:
//!   - The leaderboard dashboard (ranked table, stat cards, top-3 podium)
//!   - JSON API for the ranked table and summary statistics
//!   - Manual and periodic refresh of the cached sheet data

pub mod handlers;
pub mod refresh;
pub mod router;
pub mod state;
