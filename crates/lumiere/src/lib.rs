//! Lumiere: illustrated stories to animated scenes.
//!
//! A story document is split into pages, and each scene (cover, pages, end) is turned
//! into a structured prompt by a multimodal generation service and then into a video by
//! a synthesis backend. Scenes complete strictly in order.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lumiere::{
//!     FileProjectStore, GeminiClient, GeminiConfig, Pipeline, ProjectLibrary, ProjectSession,
//!     SceneId, SceneRequest, SimulatedSynthesizer,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let library = ProjectLibrary::new(FileProjectStore::new("./projects"));
//!     let project = library.create("", "").await?;
//!
//!     let generator = GeminiClient::from_env(GeminiConfig::default())?;
//!     let pipeline = Pipeline::new(generator, SimulatedSynthesizer::new("https://videos.local"));
//!
//!     let mut session = ProjectSession::open(library, pipeline, &project.id).await?;
//!     session.ingest_path("story.pdf").await?;
//!     session.generate(SceneId::End, SceneRequest::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `pdf` (default) - PDF ingestion with cover image extraction
//! - `observability` - OpenTelemetry span export to stdout
//!
//! # Architecture
//!
//! - `lumiere_error` - Error types
//! - `lumiere_core` - Projects, scenes, structured prompts and navigation
//! - `lumiere_interface` - Generator, synthesizer and store traits
//! - `lumiere_ingest` - Document ingestion and page splitting
//! - `lumiere_models` - Gemini client and video synthesis backends
//! - `lumiere_storage` - Project persistence
//! - `lumiere_pipeline` - Prompt building, orchestration and sessions
//!
//! This crate re-exports all of them and adds layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{LoggingConfig, LumiereConfig, StorageConfig};

pub use lumiere_core::*;
pub use lumiere_error::*;
pub use lumiere_ingest::*;
pub use lumiere_interface::*;
pub use lumiere_models::*;
pub use lumiere_pipeline::*;
pub use lumiere_storage::*;

#[cfg(feature = "observability")]
pub mod observability;
