//! Partial project updates.

use crate::{Project, Scene, SceneId};
use derive_setters::Setters;
use std::collections::BTreeMap;

/// The changed top-level fields of a project.
///
/// Pipeline stages never mutate a project. They return a patch, and the caller merges
/// it with [`apply_patch`] before handing the result to the store.
///
/// # Examples
///
/// ```
/// use lumiere_core::{Project, ProjectPatch, apply_patch};
///
/// let project = Project::new("", "");
/// let patch = ProjectPatch::default().with_name("The Fox").with_author("Ada");
///
/// let updated = apply_patch(&project, patch);
/// assert_eq!(updated.name, "The Fox");
/// assert_eq!(updated.id, project.id);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Setters)]
#[setters(prefix = "with_", strip_option, into)]
pub struct ProjectPatch {
    /// New display name
    pub name: Option<String>,
    /// New author
    pub author: Option<String>,
    /// New story text
    pub story_text: Option<String>,
    /// New page count
    pub total_pages: Option<u32>,
    /// Replacement scene map
    pub scenes: Option<BTreeMap<SceneId, Scene>>,
}

impl ProjectPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.author.is_none()
            && self.story_text.is_none()
            && self.total_pages.is_none()
            && self.scenes.is_none()
    }

    /// Patch replacing a single scene within the project's current scene map.
    pub fn replace_scene(project: &Project, id: SceneId, scene: Scene) -> Self {
        let mut scenes = project.scenes.clone();
        scenes.insert(id, scene);
        Self::default().with_scenes(scenes)
    }
}

/// Merges a patch into a copy of the project.
///
/// Fields the patch leaves unset keep their current values. The id and creation
/// timestamp are never touched.
pub fn apply_patch(project: &Project, patch: ProjectPatch) -> Project {
    let ProjectPatch {
        name,
        author,
        story_text,
        total_pages,
        scenes,
    } = patch;

    Project {
        name: name.unwrap_or_else(|| project.name.clone()),
        author: author.unwrap_or_else(|| project.author.clone()),
        story_text: story_text.unwrap_or_else(|| project.story_text.clone()),
        total_pages: total_pages.unwrap_or(project.total_pages),
        scenes: scenes.unwrap_or_else(|| project.scenes.clone()),
        id: project.id.clone(),
        created_at: project.created_at,
    }
}
