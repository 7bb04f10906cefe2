//! Profile store: one JSON record per user.
//!
//! The engine treats the persisted form as opaque; schema evolution lives
//! entirely in `PlayerProfile`'s serde defaults, so a store only has to
//! move bytes.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::profile::PlayerProfile;

/// Name of the dot-directory under the user's home.
const APP_DIR: &str = ".eloquence";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile store I/O failure: {0}")]
    Io(#[from] io::Error),
    #[error("stored profile is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A keyed record store for player profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetches a profile, `Ok(None)` when the user was never saved.
    async fn load(&self, user_id: &str) -> Result<Option<PlayerProfile>, StoreError>;

    /// Writes the full profile record, replacing any previous one.
    async fn save(&self, user_id: &str, profile: &PlayerProfile) -> Result<(), StoreError>;
}

/// Stores each profile as `<root>/<user_id>.json`, pretty-printed.
///
/// User ids are used as file names verbatim; callers hand out
/// filesystem-safe ids.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `~/.eloquence/profiles`.
    pub fn in_home_dir() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Ok(Self::new(home_dir.join(APP_DIR).join("profiles")))
    }

    fn profile_path(&self, user_id: &str) -> PathBuf {
        self.root.join(format!("{user_id}.json"))
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn load(&self, user_id: &str) -> Result<Option<PlayerProfile>, StoreError> {
        match tokio::fs::read_to_string(self.profile_path(user_id)).await {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, user_id: &str, profile: &PlayerProfile) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.root).await?;
        let json = serde_json::to_string_pretty(profile)?;
        tokio::fs::write(self.profile_path(user_id), json).await?;
        Ok(())
    }
}
