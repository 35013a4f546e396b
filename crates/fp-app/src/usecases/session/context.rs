use std::sync::Arc;

use tracing::{debug, warn};

use fp_core::ports::ProfileRepositoryPort;
use fp_core::UserProfile;

/// Session-scoped access to the persisted registration profile.
///
/// Shared between the registration orchestrator (writer) and the wizard
/// orchestrator (reader).
pub struct SessionContext {
    profile_repo: Arc<dyn ProfileRepositoryPort>,
}

impl SessionContext {
    pub fn new(profile_repo: Arc<dyn ProfileRepositoryPort>) -> Self {
        Self { profile_repo }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn persist_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        self.profile_repo.save(profile).await
    }

    /// Stored profile for pre-filling, if any.
    ///
    /// Read failures mean "no pre-fill" and are only logged.
    pub async fn load_profile(&self) -> Option<UserProfile> {
        match self.profile_repo.load().await {
            Ok(profile) => {
                debug!(found = profile.is_some(), "stored profile loaded");
                profile
            }
            Err(err) => {
                warn!(error = %err, "failed to load stored profile, skipping pre-fill");
                None
            }
        }
    }

    /// Drop the persisted profile.
    pub async fn teardown(&self) -> anyhow::Result<()> {
        self.profile_repo.clear().await?;
        debug!("session torn down");
        Ok(())
    }
}
