//! Scene lifecycle records.

use crate::StructuredPrompt;
use serde::{Deserialize, Serialize};

/// Persisted status of a scene.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SceneStatus {
    /// Awaiting generation
    Pending,
    /// Prompt and video are available
    Completed,
}

/// One unit of narrative tracked through generation.
///
/// A completed scene always carries both its structured prompt and its video
/// reference; there is no way to build one without the other.
///
/// # Examples
///
/// ```
/// use lumiere_core::{Scene, SceneStatus, StructuredPrompt};
///
/// let page = Scene::pending(Some("Once upon a time".to_string()));
/// assert_eq!(page.status(), SceneStatus::Pending);
///
/// let done = page.complete(StructuredPrompt::default(), "https://videos/abc.mp4");
/// assert!(done.is_completed());
/// assert_eq!(done.text(), Some("Once upon a time"));
/// assert_eq!(done.video_url(), Some("https://videos/abc.mp4"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Scene {
    /// Not generated yet
    Pending {
        /// Page text; absent for the cover and end scenes
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// Generated at least once
    Completed {
        /// Page text; absent for the cover and end scenes
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        /// Structured prompt returned by the generation service
        prompt: StructuredPrompt,
        /// Reference to the synthesized video
        #[serde(rename = "videoUrl")]
        video_url: String,
    },
}

impl Scene {
    /// A pending scene with optional page text.
    pub fn pending(text: Option<String>) -> Self {
        Scene::Pending { text }
    }

    /// Completes this scene, keeping its text.
    ///
    /// Applies equally to a first completion and to a regeneration, which replaces
    /// the prompt and video in place.
    pub fn complete(self, prompt: StructuredPrompt, video_url: impl Into<String>) -> Self {
        let text = match self {
            Scene::Pending { text } | Scene::Completed { text, .. } => text,
        };
        Scene::Completed {
            text,
            prompt,
            video_url: video_url.into(),
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SceneStatus {
        match self {
            Scene::Pending { .. } => SceneStatus::Pending,
            Scene::Completed { .. } => SceneStatus::Completed,
        }
    }

    /// Whether the scene has been generated.
    pub fn is_completed(&self) -> bool {
        matches!(self, Scene::Completed { .. })
    }

    /// Page text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Scene::Pending { text } | Scene::Completed { text, .. } => text.as_deref(),
        }
    }

    /// Structured prompt of a completed scene.
    pub fn prompt(&self) -> Option<&StructuredPrompt> {
        match self {
            Scene::Completed { prompt, .. } => Some(prompt),
            Scene::Pending { .. } => None,
        }
    }

    /// Video reference of a completed scene.
    pub fn video_url(&self) -> Option<&str> {
        match self {
            Scene::Completed { video_url, .. } => Some(video_url),
            Scene::Pending { .. } => None,
        }
    }
}
