//! Scene generation pipeline for Lumiere.
//!
//! This crate turns an ingested story into animated scenes, one scene at a time:
//!
//! - [`PromptBuilder`] assembles the instruction and response schema for a scene
//! - [`Pipeline`] runs ingest and generate stages and returns [`ProjectPatch`] values
//! - [`ingest_document`] is the ingest stage on its own, for callers without a generator
//! - [`ProjectSession`] applies patches, persists them and tracks transient phases
//!
//! The pipeline never mutates a project. Each stage either returns a complete patch or
//! an error, so a failed generation leaves the stored project exactly as it was.
//!
//! [`ProjectPatch`]: lumiere_core::ProjectPatch

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod orchestrator;
mod phase;
mod prompt;
mod session;

pub use orchestrator::{Ingestion, Pipeline, PreparedProject, SceneRequest, ingest_document};
pub use phase::ScenePhase;
pub use prompt::PromptBuilder;
pub use session::ProjectSession;
