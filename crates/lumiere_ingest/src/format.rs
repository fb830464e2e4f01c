//! Supported document formats.

use lumiere_error::{IngestError, IngestErrorKind};
use std::path::Path;
use std::str::FromStr;

/// Document formats accepted for ingestion, keyed by file extension.
///
/// # Examples
///
/// ```
/// use lumiere_ingest::DocumentFormat;
///
/// assert_eq!(DocumentFormat::from_filename("story.MD").unwrap(), DocumentFormat::Markdown);
/// assert!(DocumentFormat::from_filename("story.docx").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DocumentFormat {
    /// Plain text
    #[strum(serialize = "txt", serialize = "text")]
    Text,
    /// Markdown, ingested as plain text
    #[strum(serialize = "md", serialize = "markdown")]
    Markdown,
    /// Portable Document Format
    #[strum(serialize = "pdf")]
    Pdf,
}

impl DocumentFormat {
    /// Picks the format from a file name's extension.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for unknown or missing extensions, and for PDFs when
    /// the crate is built without the `pdf` feature.
    pub fn from_filename(filename: &str) -> Result<Self, IngestError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let format = DocumentFormat::from_str(ext)
            .map_err(|_| IngestError::new(IngestErrorKind::UnsupportedFormat(ext.to_string())))?;

        if format == DocumentFormat::Pdf && !cfg!(feature = "pdf") {
            return Err(IngestError::new(IngestErrorKind::UnsupportedFormat(
                ext.to_string(),
            )));
        }
        Ok(format)
    }

    /// Whether the format can carry an embedded cover illustration.
    pub fn has_cover(&self) -> bool {
        matches!(self, DocumentFormat::Pdf)
    }
}
