//! Pipeline state machine error types.

/// Specific error conditions for scene navigation and generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Project has no pages yet, so there is nothing to navigate or generate
    #[display("Project has not been ingested")]
    NotIngested,
    /// First generation of a cover or page scene requires an uploaded illustration
    #[display("Scene '{}' requires an illustration for its first generation", _0)]
    MissingIllustration(String),
    /// Scene id is not part of the project's navigation items
    #[display("Scene '{}' does not exist in this project", _0)]
    UnknownScene(String),
    /// Scene lies beyond the first pending scene
    #[display("Scene '{}' is not reachable until earlier scenes are completed", _0)]
    SceneNotReachable(String),
    /// Scene has no structured prompt because it was never generated
    #[display("Scene '{}' has not been generated", _0)]
    SceneNotGenerated(String),
    /// No project with the given id exists in the store
    #[display("Project '{}' not found", _0)]
    ProjectNotFound(String),
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use lumiere_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::MissingIllustration("1".to_string()));
/// assert!(format!("{}", err).contains("illustration"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
