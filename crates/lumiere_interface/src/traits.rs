//! Collaborator traits.

use async_trait::async_trait;
use lumiere_core::{GenerationRequest, Project, StructuredPrompt};
use lumiere_error::{GenerationError, LumiereResult, SynthesisError};

/// Turns a generation request into a structured prompt.
///
/// Implementations make exactly one round trip per call and never touch project
/// state.
#[async_trait]
pub trait SceneGenerator: Send + Sync {
    /// Generate a structured prompt for one scene.
    async fn generate(&self, req: &GenerationRequest) -> Result<StructuredPrompt, GenerationError>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Converts a structured prompt into a video reference.
#[async_trait]
pub trait VideoSynthesizer: Send + Sync {
    /// Synthesize a video and return its reference (usually a URL).
    async fn synthesize(&self, prompt: &StructuredPrompt) -> Result<String, SynthesisError>;

    /// Backend name (e.g., "simulated", "http").
    fn backend_name(&self) -> &'static str;
}

/// Key-value persistence for project collections.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Load the projects stored under `key`.
    ///
    /// Never fails: a missing or unreadable collection loads as empty.
    async fn load(&self, key: &str) -> Vec<Project>;

    /// Replace the projects stored under `key`.
    async fn save(&self, key: &str, projects: &[Project]) -> LumiereResult<()>;
}
