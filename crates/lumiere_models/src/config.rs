//! Client configuration sections.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_generation_timeout() -> u64 {
    120
}

/// Generation service settings (`[generation]`).
///
/// # Examples
///
/// ```
/// use lumiere_models::GeminiConfig;
///
/// let config = GeminiConfig::default();
/// assert_eq!(config.api_key_env(), "GEMINI_API_KEY");
/// assert!(config.temperature().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeminiConfig {
    /// API root, without the `/models/...` suffix
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    model: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    api_key_env: String,
    /// Request timeout in seconds
    #[serde(default = "default_generation_timeout")]
    timeout_secs: u64,
    /// Sampling temperature; the service default applies when unset
    #[serde(default)]
    temperature: Option<f32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_generation_timeout(),
            temperature: None,
        }
    }
}

impl GeminiConfig {
    /// Same settings against a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Same settings with a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Same settings with a fixed temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Which video synthesis backend to use.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SynthesisBackend {
    /// Deterministic references derived from the prompt
    #[default]
    Simulated,
    /// A remote service reached over HTTP
    Http,
}

fn default_video_base_url() -> String {
    "https://videos.lumiere.local".to_string()
}

fn default_synthesis_timeout() -> u64 {
    300
}

/// Video synthesis settings (`[synthesis]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SynthesisConfig {
    /// Backend selection
    #[serde(default)]
    backend: SynthesisBackend,
    /// Prefix of simulated video references
    #[serde(default = "default_video_base_url")]
    base_url: String,
    /// Endpoint of the HTTP backend
    #[serde(default)]
    endpoint: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_synthesis_timeout")]
    timeout_secs: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            backend: SynthesisBackend::default(),
            base_url: default_video_base_url(),
            endpoint: None,
            timeout_secs: default_synthesis_timeout(),
        }
    }
}

impl SynthesisConfig {
    /// HTTP backend posting to `endpoint`.
    pub fn http(endpoint: impl Into<String>) -> Self {
        Self {
            backend: SynthesisBackend::Http,
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }
}
