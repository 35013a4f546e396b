use async_trait::async_trait;

use crate::profile::UserProfile;

#[async_trait]
pub trait ProfileRepositoryPort: Send + Sync {
    /// Store the profile. Overwrites any previous record.
    async fn save(&self, profile: &UserProfile) -> anyhow::Result<()>;

    /// Load the stored profile.
    ///
    /// Absent, blank or malformed content is `Ok(None)`; only I/O failures
    /// are errors.
    async fn load(&self) -> anyhow::Result<Option<UserProfile>>;

    /// Remove the stored profile. Removing nothing is not an error.
    async fn clear(&self) -> anyhow::Result<()>;
}
