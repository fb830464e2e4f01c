//! Generation service error types.

/// Generation-service error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in the configured environment variable
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Request could not be sent or the response body could not be read
    #[display("Generation request failed: {}", _0)]
    Request(String),
    /// Service answered with a non-success HTTP status
    #[display("Generation service returned HTTP {}: {}", status, body)]
    ServiceError {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the service
        body: String,
    },
    /// Service answered without any candidate output
    #[display("Generation service returned no candidate output")]
    EmptyResponse,
    /// Candidate output could not be parsed as a structured prompt
    #[display("Malformed generation response: {}", _0)]
    MalformedResponse(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use lumiere_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::ServiceError {
///     status: 500,
///     body: "internal".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 500"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// HTTP status code, when the service answered with one.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            GenerationErrorKind::ServiceError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
