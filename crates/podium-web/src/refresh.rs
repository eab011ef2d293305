//! Periodic background refresh.
//!
//! A single spawned task re-triggers the same load path the handlers use.
//! Each pass runs to completion before the next tick is awaited, so
//! refreshes are strictly sequential and never overlap.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, warn};

use crate::state::SharedState;

pub fn spawn(state: SharedState) {
    if !state.config.refresh.auto {
        debug!("Periodic refresh disabled");
        return;
    }
    let period = Duration::from_secs(state.config.refresh.interval_secs.max(1));

    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let outcome = state.load(false).await;
            match outcome.error {
                Some(cause) => warn!(error = %cause, "Periodic refresh failed"),
                None => debug!(
                    teams = outcome.snapshot.summary.teams,
                    "Periodic refresh pass complete"
                ),
            }
        }
    });
}
