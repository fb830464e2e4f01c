//! Project persistence for Lumiere.
//!
//! Provides two [`ProjectStore`](lumiere_interface::ProjectStore) backends and the
//! project library built on top of them:
//!
//! - [`FileProjectStore`] keeps one JSON file per key and writes atomically
//! - [`InMemoryProjectStore`] keeps everything in memory, for tests and previews
//! - [`ProjectLibrary`] lists, creates, updates and deletes whole projects

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod library;
mod memory;

pub use filesystem::FileProjectStore;
pub use library::{PROJECTS_KEY, ProjectLibrary};
pub use memory::InMemoryProjectStore;
