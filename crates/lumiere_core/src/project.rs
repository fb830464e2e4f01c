//! Story projects.

use crate::{Scene, SceneId, nav_items};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A story document and the scenes generated from it.
///
/// A new project is empty. Ingestion fills in the story text, page count and a scene
/// map holding the cover, every page and the end, all pending.
///
/// # Examples
///
/// ```
/// use lumiere_core::Project;
///
/// let project = Project::new("The Fox", "Ada");
/// assert!(!project.is_ingested());
/// assert!(project.nav_items().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Display name
    pub name: String,
    /// Story author
    pub author: String,
    /// Full extracted story text, empty until ingested
    #[serde(default)]
    pub story_text: String,
    /// Number of story pages, zero until ingested
    #[serde(default)]
    pub total_pages: u32,
    /// Scene records keyed by scene id
    #[serde(default)]
    pub scenes: BTreeMap<SceneId, Scene>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates an empty project with a fresh id.
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            author: author.into(),
            story_text: String::new(),
            total_pages: 0,
            scenes: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether a document has been ingested.
    pub fn is_ingested(&self) -> bool {
        self.total_pages > 0
    }

    /// Looks up a scene record.
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Ordered scene ids for navigation.
    pub fn nav_items(&self) -> Vec<SceneId> {
        nav_items(self.total_pages)
    }

    /// Number of completed scenes.
    pub fn completed_count(&self) -> usize {
        self.scenes.values().filter(|s| s.is_completed()).count()
    }
}
