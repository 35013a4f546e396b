use async_trait::async_trait;
use tokio::sync::Mutex;

use fp_core::ports::ProfileRepositoryPort;
use fp_core::UserProfile;

/// Process-local profile store.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profile: Mutex<Option<UserProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: Mutex::new(Some(profile)),
        }
    }
}

#[async_trait]
impl ProfileRepositoryPort for InMemoryProfileRepository {
    async fn save(&self, profile: &UserProfile) -> anyhow::Result<()> {
        *self.profile.lock().await = Some(profile.clone());
        Ok(())
    }

    async fn load(&self) -> anyhow::Result<Option<UserProfile>> {
        Ok(self.profile.lock().await.clone())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        self.profile.lock().await.take();
        Ok(())
    }
}
