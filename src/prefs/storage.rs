use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::preferences::Preferences;

/// Fixed storage namespace for the durable preference subset.
const STORAGE_FILE: &str = "jobboard-storage.json";

/// Where the durable subset lives between sessions. Injected into the
/// preference store so tests can swap the backing out.
#[async_trait]
pub trait PreferenceStorage: Send + Sync {
    /// Read the stored subset back. `None` means nothing usable is
    /// stored; the caller falls back to defaults.
    async fn load(&self) -> Result<Option<Preferences>, AppError>;

    async fn store(&self, prefs: &Preferences) -> Result<(), AppError>;
}

/// JSON file under the data directory.
pub struct FilePreferenceStorage {
    path: PathBuf,
}

impl FilePreferenceStorage {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORAGE_FILE),
        }
    }
}

#[async_trait]
impl PreferenceStorage for FilePreferenceStorage {
    async fn load(&self) -> Result<Option<Preferences>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&bytes) {
            Ok(prefs) => Ok(Some(prefs)),
            Err(e) => {
                tracing::warn!(
                    "Discarding corrupt preference file {}: {e}",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    async fn store(&self, prefs: &Preferences) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let bytes = serde_json::to_vec_pretty(prefs).map_err(std::io::Error::from)?;
        // Write-then-rename so a crash mid-write cannot truncate the
        // stored state.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::{SortKey, ViewMode};

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilePreferenceStorage::new(dir.path());
        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stored_preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilePreferenceStorage::new(dir.path());

        let prefs = Preferences {
            saved_jobs: vec!["job-3".into(), "job-7".into()],
            view_mode: ViewMode::List,
            sort_by: SortKey::Company,
        };
        storage.store(&prefs).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded, prefs);
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE);
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let storage = FilePreferenceStorage::new(dir.path());
        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_creates_the_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state");
        let storage = FilePreferenceStorage::new(&nested);

        storage.store(&Preferences::default()).await.unwrap();
        assert!(storage.load().await.unwrap().is_some());
    }
}
