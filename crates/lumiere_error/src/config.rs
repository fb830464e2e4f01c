//! Errors from loading `lumiere.toml` and `LUMIERE_*` overrides.

/// A settings file or environment override that could not be used.
///
/// Raised while layering the bundled defaults, the user's `lumiere.toml` and
/// environment overrides, and when a section names something this build cannot
/// provide, such as an unknown synthesis backend.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong with the settings
    pub message: String,
    /// Line of the call that raised it
    pub line: u32,
    /// Source file of the call that raised it
    pub file: &'static str,
}

impl ConfigError {
    /// Records a settings problem at the caller's location.
    ///
    /// ```
    /// use lumiere_error::ConfigError;
    ///
    /// let err = ConfigError::new("Unknown synthesis backend: veo9");
    /// assert!(err.to_string().starts_with("Configuration Error: Unknown synthesis backend"));
    /// assert!(err.file.ends_with(".rs"));
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
