//! Document ingestion for the Lumiere story animation pipeline.
//!
//! Turns an uploaded story document into ordered page texts and, for PDFs, an
//! optional cover illustration. Plain text and Markdown are always supported; PDF
//! support is behind the `pdf` feature.
//!
//! # Example
//!
//! ```
//! use lumiere_ingest::ingest_bytes;
//!
//! let doc = ingest_bytes("fox.txt", b"The fox woke.\n\nThe fox ran.").unwrap();
//! assert_eq!(doc.total_pages(), 2);
//! assert_eq!(doc.pages()[1], "The fox ran.");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod format;
#[cfg(feature = "pdf")]
mod pdf;
mod split;

pub use document::{IngestedDocument, ingest_bytes, ingest_path, read_document};
pub use format::DocumentFormat;
pub use split::split_pages;
