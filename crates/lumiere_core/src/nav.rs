//! Navigation gate enforcing strict page-completion order.
//!
//! Nothing here is stored. The gate is recomputed from the page count and the scene
//! map whenever a caller needs it, so it can never disagree with the project.

use crate::{Scene, SceneId};
use derive_getters::Getters;
use lumiere_error::{PipelineError, PipelineErrorKind};
use std::collections::{BTreeMap, BTreeSet};

/// Ordered scene ids for a story with `total_pages` pages.
///
/// # Examples
///
/// ```
/// use lumiere_core::{SceneId, nav_items};
///
/// assert_eq!(
///     nav_items(2),
///     vec![SceneId::Cover, SceneId::Page(1), SceneId::Page(2), SceneId::End]
/// );
/// assert!(nav_items(0).is_empty());
/// ```
pub fn nav_items(total_pages: u32) -> Vec<SceneId> {
    if total_pages == 0 {
        return Vec::new();
    }
    std::iter::once(SceneId::Cover)
        .chain((1..=total_pages).map(SceneId::Page))
        .chain(std::iter::once(SceneId::End))
        .collect()
}

/// Derived navigation state of a project.
///
/// Every scene up to and including the first pending one is reachable. Scenes after
/// it stay locked until it completes.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Navigation {
    /// Scene ids in reading order
    items: Vec<SceneId>,
    /// Index of the first scene that is not completed
    first_pending_index: Option<usize>,
    /// Index of the scene the user should work on next
    current_index: usize,
    /// Scenes the user may open
    reachable: BTreeSet<SceneId>,
}

impl Navigation {
    /// Computes navigation for a project's page count and scene map.
    ///
    /// A scene missing from the map counts as pending.
    ///
    /// # Errors
    ///
    /// Returns `NotIngested` when the project has no pages.
    pub fn compute(
        total_pages: u32,
        scenes: &BTreeMap<SceneId, Scene>,
    ) -> Result<Self, PipelineError> {
        let items = nav_items(total_pages);
        if items.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::NotIngested));
        }

        let first_pending_index = items
            .iter()
            .position(|id| !scenes.get(id).is_some_and(Scene::is_completed));
        let current_index = first_pending_index.unwrap_or(items.len() - 1);
        let reachable = items[..=current_index].iter().copied().collect();

        Ok(Self {
            items,
            first_pending_index,
            current_index,
            reachable,
        })
    }

    /// The scene the user should work on next.
    pub fn current(&self) -> &SceneId {
        &self.items[self.current_index]
    }

    /// Whether every scene is completed.
    pub fn is_finished(&self) -> bool {
        self.first_pending_index.is_none()
    }

    /// Whether the id names one of this project's scenes.
    pub fn contains(&self, id: &SceneId) -> bool {
        self.items.contains(id)
    }

    /// Whether the user may open the scene.
    pub fn is_reachable(&self, id: &SceneId) -> bool {
        self.reachable.contains(id)
    }

    /// Fails with `SceneNotReachable` for a scene beyond the first pending one.
    pub fn check_reachable(&self, id: &SceneId) -> Result<(), PipelineError> {
        if self.is_reachable(id) {
            Ok(())
        } else {
            Err(PipelineError::new(PipelineErrorKind::SceneNotReachable(
                id.to_string(),
            )))
        }
    }

    /// Picks the scene to show.
    ///
    /// Stays on `active` only while the user is reviewing a completed, reachable
    /// scene; otherwise advances to the current scene.
    pub fn resolve_active(
        &self,
        active: Option<SceneId>,
        reviewing: bool,
        scenes: &BTreeMap<SceneId, Scene>,
    ) -> SceneId {
        match active {
            Some(id)
                if reviewing
                    && self.is_reachable(&id)
                    && scenes.get(&id).is_some_and(Scene::is_completed) =>
            {
                id
            }
            _ => *self.current(),
        }
    }
}
