//! Per-scene lifecycle phases.

use lumiere_core::{Project, SceneId};

/// Where a scene is in its lifecycle.
///
/// `Pending` and `Completed` follow from the stored project. `Generating` and
/// `Failed` are transient and only tracked by a [`ProjectSession`](crate::ProjectSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ScenePhase {
    /// The project has no document yet
    NotIngested,
    /// Waiting for generation
    Pending,
    /// A generation request is in flight
    Generating,
    /// Prompt and video are available
    Completed,
    /// The last generation attempt failed; the stored scene is unchanged
    Failed,
}

impl ScenePhase {
    /// Phase implied by the stored project alone.
    pub fn persisted(project: &Project, scene_id: &SceneId) -> Self {
        if !project.is_ingested() {
            return ScenePhase::NotIngested;
        }
        match project.scene(scene_id) {
            Some(scene) if scene.is_completed() => ScenePhase::Completed,
            _ => ScenePhase::Pending,
        }
    }

    /// Whether the phase only exists while a session is running.
    pub fn is_transient(&self) -> bool {
        matches!(self, ScenePhase::Generating | ScenePhase::Failed)
    }
}
