//! Document ingestion error types.

/// Specific error conditions for document ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IngestErrorKind {
    /// File extension is not one of the supported document formats
    #[display("Unsupported document format: '{}'", _0)]
    UnsupportedFormat(String),
    /// Extracted text is blank after trimming
    #[display("Document contains no text")]
    EmptyDocument,
    /// Failed to read the document from disk
    #[display("Failed to read document: {}", _0)]
    Read(String),
    /// Document bytes could not be parsed in the declared format
    #[display("Failed to parse document: {}", _0)]
    Parse(String),
}

/// Document ingestion error with source location tracking.
///
/// # Examples
///
/// ```
/// use lumiere_error::{IngestError, IngestErrorKind};
///
/// let err = IngestError::new(IngestErrorKind::UnsupportedFormat("docx".to_string()));
/// assert!(format!("{}", err).contains("docx"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ingest Error: {} at line {} in {}", kind, line, file)]
pub struct IngestError {
    /// The kind of error that occurred
    pub kind: IngestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl IngestError {
    /// Create a new IngestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IngestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
