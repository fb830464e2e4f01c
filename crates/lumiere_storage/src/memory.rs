//! In-memory store.

use async_trait::async_trait;
use lumiere_core::Project;
use lumiere_error::LumiereResult;
use lumiere_interface::ProjectStore;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Keeps project collections in memory.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    collections: RwLock<HashMap<String, Vec<Project>>>,
}

impl InMemoryProjectStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn load(&self, key: &str) -> Vec<Project> {
        self.collections
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    async fn save(&self, key: &str, projects: &[Project]) -> LumiereResult<()> {
        self.collections
            .write()
            .await
            .insert(key.to_string(), projects.to_vec());
        Ok(())
    }
}
