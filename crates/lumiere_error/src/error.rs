//! Top-level error wrapper types.

use crate::{
    ConfigError, GenerationError, IngestError, JsonError, PipelineError, StorageError,
    SynthesisError,
};

/// Every error condition a Lumiere operation can surface.
///
/// # Examples
///
/// ```
/// use lumiere_error::{LumiereError, PipelineError, PipelineErrorKind};
///
/// let err: LumiereError = PipelineError::new(PipelineErrorKind::NotIngested).into();
/// assert!(format!("{}", err).contains("not been ingested"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LumiereErrorKind {
    /// Document ingestion error
    #[from(IngestError)]
    Ingest(IngestError),
    /// Generation service error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Video synthesis error
    #[from(SynthesisError)]
    Synthesis(SynthesisError),
    /// Pipeline state machine error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Project persistence error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Lumiere error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lumiere_error::{ConfigError, LumiereErrorKind, LumiereResult};
///
/// fn might_fail() -> LumiereResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), LumiereErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lumiere Error: {}", _0)]
pub struct LumiereError(Box<LumiereErrorKind>);

impl LumiereError {
    /// Create a new error from a kind.
    pub fn new(kind: LumiereErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LumiereErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LumiereErrorKind
impl<T> From<T> for LumiereError
where
    T: Into<LumiereErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lumiere operations.
pub type LumiereResult<T> = std::result::Result<T, LumiereError>;
