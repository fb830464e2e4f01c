//! Video synthesis error types.

/// Video synthesis error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SynthesisErrorKind {
    /// Request to the synthesis backend could not be completed
    #[display("Synthesis request failed: {}", _0)]
    Request(String),
    /// Synthesis backend answered with a non-success HTTP status
    #[display("Synthesis service returned HTTP {}: {}", status, body)]
    ServiceError {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the service
        body: String,
    },
    /// Synthesis backend answered without a usable video reference
    #[display("Invalid synthesis response: {}", _0)]
    InvalidResponse(String),
}

/// Video synthesis error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Synthesis Error: {} at line {} in {}", kind, line, file)]
pub struct SynthesisError {
    /// The kind of error that occurred
    pub kind: SynthesisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SynthesisError {
    /// Create a new SynthesisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SynthesisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
