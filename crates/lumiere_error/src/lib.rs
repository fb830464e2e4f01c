//! Error types for the Lumiere library.
//!
//! This crate provides the foundation error types used throughout the Lumiere workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Every pipeline entry point returns a single [`LumiereError`], so a caller can
//! render one message per failure without the process ever crashing.
//!
//! # Examples
//!
//! ```
//! use lumiere_error::{IngestError, IngestErrorKind, LumiereResult};
//!
//! fn ingest() -> LumiereResult<()> {
//!     Err(IngestError::new(IngestErrorKind::EmptyDocument))?
//! }
//!
//! match ingest() {
//!     Ok(()) => println!("ingested"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod ingest;
mod json;
mod pipeline;
mod storage;
mod synthesis;

pub use config::ConfigError;
pub use error::{LumiereError, LumiereErrorKind, LumiereResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use ingest::{IngestError, IngestErrorKind};
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use synthesis::{SynthesisError, SynthesisErrorKind};
