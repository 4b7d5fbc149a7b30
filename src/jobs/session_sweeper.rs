//! Expired-session sweeper.
//!
//! Sessions are purged lazily when a lapsed token is presented; this job
//! sweeps the rows nobody ever presents again. It needs no coordination with
//! request traffic and any schedule is safe.
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::services::SessionService;

pub async fn run(sessions: Arc<SessionService>, interval: Duration) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "starting expired-session sweeper"
    );

    loop {
        sleep(interval).await;

        match sessions.cleanup_expired().await {
            Ok(0) => tracing::debug!("no expired sessions to purge"),
            Ok(purged) => tracing::info!(purged, "expired sessions purged"),
            Err(err) => tracing::error!("session cleanup failed: {}", err),
        }
    }
}
