//! File-based profile repository
//!
//! Persists the registration profile as a single JSON record in the
//! application data directory.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use fp_core::ports::ProfileRepositoryPort;
use fp_core::UserProfile;

pub const DEFAULT_PROFILE_FILE: &str = "userData.json";

pub struct FileProfileRepository {
    path: PathBuf,
}

impl FileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create repository with base dir and filename
    pub fn with_base_dir(base_dir: impl AsRef<Path>, filename: impl AsRef<Path>) -> Self {
        Self::new(base_dir.as_ref().join(filename))
    }

    /// Create repository with the default file name
    pub fn with_defaults(base_dir: impl AsRef<Path>) -> Self {
        Self::with_base_dir(base_dir, DEFAULT_PROFILE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create profile dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, then rename over the target.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp profile failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp profile to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl ProfileRepositoryPort for FileProfileRepository {
    async fn save(&self, profile: &UserProfile) -> Result<()> {
        let content = serde_json::to_string(profile).context("serialize profile failed")?;
        self.atomic_write(&content).await?;
        debug!(path = %self.path.display(), "profile saved");
        Ok(())
    }

    async fn load(&self) -> Result<Option<UserProfile>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!(path = %self.path.display(), "profile is not valid UTF-8, ignoring");
                return Ok(None);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read profile failed: {}", self.path.display()))
            }
        };

        Ok(UserProfile::from_stored(&content))
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "profile removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("remove profile failed: {}", self.path.display()))
            }
        }
    }
}
