//! Document ingestion entry points.

use crate::{DocumentFormat, split_pages};
use derive_getters::Getters;
use lumiere_core::ImagePayload;
use lumiere_error::{IngestError, IngestErrorKind};
use std::path::Path;

/// The result of ingesting one story document.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct IngestedDocument {
    /// Full extracted text
    story_text: String,
    /// Page texts in reading order, never empty
    pages: Vec<String>,
    /// Illustration found on the first page of a PDF
    cover_image: Option<ImagePayload>,
}

impl IngestedDocument {
    /// Number of pages.
    pub fn total_pages(&self) -> u32 {
        self.pages.len() as u32
    }
}

/// Ingests an in-memory document.
///
/// The format is chosen from `filename`'s extension before any bytes are parsed.
///
/// # Errors
///
/// - `UnsupportedFormat` for extensions outside the supported set
/// - `Parse` when a PDF cannot be read
/// - `EmptyDocument` when no text remains after trimming
pub fn ingest_bytes(filename: &str, bytes: &[u8]) -> Result<IngestedDocument, IngestError> {
    let format = DocumentFormat::from_filename(filename)?;
    tracing::debug!(filename, %format, size = bytes.len(), "Ingesting document");

    let (story_text, cover_image) = extract(format, bytes)?;
    if story_text.trim().is_empty() {
        return Err(IngestError::new(IngestErrorKind::EmptyDocument));
    }

    let pages = split_pages(&story_text)?;
    tracing::debug!(
        pages = pages.len(),
        has_cover = cover_image.is_some(),
        "Document ingested"
    );

    Ok(IngestedDocument {
        story_text,
        pages,
        cover_image,
    })
}

/// Reads a document from disk, returning its file name and raw bytes.
///
/// The extension is checked before the file is opened, so unsupported formats fail
/// without touching the filesystem.
///
/// # Errors
///
/// - `UnsupportedFormat` for extensions outside the supported set
/// - `Read` when the file cannot be read
pub async fn read_document(path: impl AsRef<Path>) -> Result<(String, Vec<u8>), IngestError> {
    let path = path.as_ref();
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    DocumentFormat::from_filename(&filename)?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        IngestError::new(IngestErrorKind::Read(format!("{}: {}", path.display(), e)))
    })?;
    Ok((filename, bytes))
}

/// Reads and ingests a document from disk.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub async fn ingest_path(path: impl AsRef<Path>) -> Result<IngestedDocument, IngestError> {
    let (filename, bytes) = read_document(path).await?;
    ingest_bytes(&filename, &bytes)
}

fn extract(
    format: DocumentFormat,
    bytes: &[u8],
) -> Result<(String, Option<ImagePayload>), IngestError> {
    match format {
        DocumentFormat::Text | DocumentFormat::Markdown => {
            Ok((String::from_utf8_lossy(bytes).into_owned(), None))
        }
        #[cfg(feature = "pdf")]
        DocumentFormat::Pdf => crate::pdf::extract(bytes),
        #[cfg(not(feature = "pdf"))]
        DocumentFormat::Pdf => Err(IngestError::new(IngestErrorKind::UnsupportedFormat(
            format.to_string(),
        ))),
    }
}
