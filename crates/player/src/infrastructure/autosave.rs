//! Periodic draft autosave.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::application::WizardSession;

/// Save the session's draft every `period` until the returned task is aborted.
///
/// The first save happens one full period after spawning. Failures are
/// logged by the draft service and never stop the loop.
pub fn spawn_autosave(session: Arc<Mutex<WizardSession>>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // interval() fires immediately; skip that tick
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let saved = session.lock().await.save_draft();
            tracing::trace!(saved, "Autosave tick");
        }
    })
}
