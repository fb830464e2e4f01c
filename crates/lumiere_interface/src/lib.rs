//! Trait definitions for the Lumiere story animation pipeline.
//!
//! The pipeline talks to three collaborators through these traits: a scene generator
//! (the multimodal generation service), a video synthesizer, and a project store.
//! Concrete implementations live in `lumiere_models` and `lumiere_storage`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ProjectStore, SceneGenerator, VideoSynthesizer};
