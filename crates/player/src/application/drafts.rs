//! Draft Service - best-effort save/restore of builds in progress.
//!
//! Nothing here returns an error. Storage failures are logged and swallowed;
//! a draft that cannot be read is treated as absent.

use std::sync::Arc;

use codex_domain::{CharacterBuild, DraftKey, DraftSnapshot};

use crate::ports::outbound::{ClockPort, StoragePort};

#[derive(Clone)]
pub struct DraftService {
    storage: Arc<dyn StoragePort>,
    clock: Arc<dyn ClockPort>,
}

impl DraftService {
    pub fn new(storage: Arc<dyn StoragePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { storage, clock }
    }

    /// Snapshot and store a build. Returns whether it was written.
    pub fn save(&self, key: &DraftKey, build: &CharacterBuild) -> bool {
        let snapshot = DraftSnapshot::capture(build, self.clock.now());
        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to serialize draft");
                return false;
            }
        };

        match self.storage.save(key.as_str(), &json) {
            Ok(()) => {
                tracing::debug!(key = %key, "Draft saved");
                true
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to save draft");
                false
            }
        }
    }

    /// A restorable draft, if one exists. Expired and corrupt drafts are
    /// deleted on the way out.
    pub fn load(&self, key: &DraftKey) -> Option<DraftSnapshot> {
        let json = match self.storage.load(key.as_str()) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read draft");
                return None;
            }
        };

        let snapshot: DraftSnapshot = match serde_json::from_str(&json) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding corrupt draft");
                self.clear(key);
                return None;
            }
        };

        if snapshot.is_expired(self.clock.now()) {
            tracing::info!(key = %key, saved_at = %snapshot.saved_at, "Discarding expired draft");
            self.clear(key);
            return None;
        }

        Some(snapshot)
    }

    pub fn clear(&self, key: &DraftKey) {
        if let Err(e) = self.storage.remove(key.as_str()) {
            tracing::warn!(key = %key, error = %e, "Failed to clear draft");
        }
    }
}
