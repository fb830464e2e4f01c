//! JSON file store.

use async_trait::async_trait;
use lumiere_core::Project;
use lumiere_error::{LumiereResult, StorageError, StorageErrorKind};
use lumiere_interface::ProjectStore;
use std::path::{Path, PathBuf};

/// Stores each key as `{dir}/{key}.json`.
///
/// # Example Structure
///
/// ```text
/// ~/.local/share/lumiere/
/// └── projects.json
/// ```
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    dir: PathBuf,
}

impl FileProjectStore {
    /// Creates a store rooted at `dir`.
    ///
    /// The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl ProjectStore for FileProjectStore {
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn load(&self, key: &str) -> Vec<Project> {
        let path = self.path_for(key);

        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "No projects file, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read projects, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Project>>(&json) {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "Loaded projects");
                projects
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Malformed projects file, starting empty");
                Vec::new()
            }
        }
    }

    #[tracing::instrument(skip(self, projects), fields(count = projects.len()))]
    async fn save(&self, key: &str, projects: &[Project]) -> LumiereResult<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.dir.display(),
                e
            )))
        })?;

        let json = serde_json::to_string_pretty(projects)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;

        // Write to temp file first, then rename for atomicity
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), "Saved projects");
        Ok(())
    }
}
