//! Periodic liveness tick, independent of message processing.

use std::time::Duration;

use tokio::time::{interval, Instant};
use tracing::info;

/// Log a heartbeat line every `interval_secs`. Never returns.
pub async fn run(interval_secs: u64) {
    let started = Instant::now();
    let mut ticker = interval(Duration::from_secs(interval_secs));
    // The first tick completes immediately; skip it so the first logged
    // heartbeat lands one full interval after startup.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        info!(uptime_secs = started.elapsed().as_secs(), "heartbeat");
    }
}
