//! Core data model for the Lumiere story animation pipeline.
//!
//! This crate provides the types shared by every Lumiere crate: projects and their
//! scenes, the structured prompt returned by the generation service, partial project
//! updates, and the navigation gate that enforces strict page-completion order.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod nav;
mod patch;
mod project;
mod prompt;
mod request;
mod scene;
mod scene_id;

pub use media::{ImagePayload, mime_for_extension};
pub use nav::{Navigation, nav_items};
pub use patch::{ProjectPatch, apply_patch};
pub use project::Project;
pub use prompt::{
    Action, ActionBuilder, AnimationStyle, AnimationStyleBuilder, Audio, AudioBuilder, Camera,
    CameraBuilder, Character, CharacterBuilder, PromptMetadata, PromptMetadataBuilder, Setting,
    SettingBuilder, StructuredPrompt, StructuredPromptBuilder,
};
pub use request::GenerationRequest;
pub use scene::{Scene, SceneStatus};
pub use scene_id::SceneId;
