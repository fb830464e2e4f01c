//! Errors from encoding and decoding structured prompts.

/// A structured prompt that could not be written or read as JSON.
///
/// The generation service answers with prompt JSON, and saved scenes keep their
/// prompt as pretty-printed JSON for review and editing. Either side failing ends
/// up here with the `serde_json` message.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// The `serde_json` message
    pub message: String,
    /// Line of the call that raised it
    pub line: u32,
    /// Source file of the call that raised it
    pub file: &'static str,
}

impl JsonError {
    /// Records a prompt encoding failure at the caller's location.
    ///
    /// ```
    /// use lumiere_error::JsonError;
    ///
    /// let err = JsonError::new("invalid type: map, expected a string at line 1 column 15");
    /// assert!(err.message.contains("expected a string"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
