//! Video synthesis backends.

use crate::{SynthesisBackend, SynthesisConfig};
use async_trait::async_trait;
use lumiere_core::StructuredPrompt;
use lumiere_error::{SynthesisError, SynthesisErrorKind};
use lumiere_interface::VideoSynthesizer;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Deterministic stand-in for a video service.
///
/// The reference is derived from a hash of the prompt, so identical prompts always map
/// to the same video.
///
/// # Examples
///
/// ```
/// use lumiere_core::StructuredPrompt;
/// use lumiere_interface::VideoSynthesizer;
/// use lumiere_models::SimulatedSynthesizer;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let synth = SimulatedSynthesizer::new("https://videos.example");
/// let url = synth.synthesize(&StructuredPrompt::default()).await?;
/// assert!(url.starts_with("https://videos.example/"));
/// assert!(url.ends_with(".mp4"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedSynthesizer {
    base_url: String,
}

impl SimulatedSynthesizer {
    /// Creates a synthesizer issuing references under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn reference_for(&self, prompt: &StructuredPrompt) -> Result<String, SynthesisError> {
        let json = serde_json::to_string(prompt).map_err(|e| {
            SynthesisError::new(SynthesisErrorKind::Request(format!(
                "Failed to encode prompt: {}",
                e
            )))
        })?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let hash = format!("{:x}", hasher.finalize());

        Ok(format!(
            "{}/{}.mp4",
            self.base_url.trim_end_matches('/'),
            &hash[..16]
        ))
    }
}

#[async_trait]
impl VideoSynthesizer for SimulatedSynthesizer {
    #[instrument(skip(self, prompt))]
    async fn synthesize(&self, prompt: &StructuredPrompt) -> Result<String, SynthesisError> {
        let url = self.reference_for(prompt)?;
        debug!(url = %url, "Simulated video synthesis");
        Ok(url)
    }

    fn backend_name(&self) -> &'static str {
        "simulated"
    }
}

#[derive(Debug, Deserialize)]
struct VideoResponse {
    #[serde(rename = "videoUrl", default)]
    video_url: Option<String>,
}

/// Client for a remote video synthesis service.
///
/// Posts the prompt as JSON and expects `{"videoUrl": "..."}` back.
#[derive(Debug, Clone)]
pub struct HttpSynthesizer {
    client: Client,
    endpoint: String,
}

impl HttpSynthesizer {
    /// Creates a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `Request` if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SynthesisError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            SynthesisError::new(SynthesisErrorKind::Request(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl VideoSynthesizer for HttpSynthesizer {
    #[instrument(skip(self, prompt), fields(endpoint = %self.endpoint))]
    async fn synthesize(&self, prompt: &StructuredPrompt) -> Result<String, SynthesisError> {
        debug!("Sending prompt to synthesis service");

        let response = self
            .client
            .post(&self.endpoint)
            .json(prompt)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to reach synthesis service");
                SynthesisError::new(SynthesisErrorKind::Request(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Synthesis service returned error");
            return Err(SynthesisError::new(SynthesisErrorKind::ServiceError {
                status: status.as_u16(),
                body,
            }));
        }

        let parsed: VideoResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse synthesis response");
            SynthesisError::new(SynthesisErrorKind::InvalidResponse(e.to_string()))
        })?;

        parsed
            .video_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                SynthesisError::new(SynthesisErrorKind::InvalidResponse(
                    "Response has no videoUrl".to_string(),
                ))
            })
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}

/// Synthesizer selected from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSynthesizer {
    /// Deterministic references
    Simulated(SimulatedSynthesizer),
    /// Remote service
    Http(HttpSynthesizer),
}

impl ConfiguredSynthesizer {
    /// Builds the backend named by `config`.
    ///
    /// # Errors
    ///
    /// Returns `Request` when the HTTP backend is selected without an endpoint or its
    /// client cannot be built.
    pub fn from_config(config: &SynthesisConfig) -> Result<Self, SynthesisError> {
        match config.backend() {
            SynthesisBackend::Simulated => Ok(Self::Simulated(SimulatedSynthesizer::new(
                config.base_url(),
            ))),
            SynthesisBackend::Http => {
                let endpoint = config.endpoint().as_ref().ok_or_else(|| {
                    SynthesisError::new(SynthesisErrorKind::Request(
                        "synthesis.endpoint is required for the http backend".to_string(),
                    ))
                })?;
                Ok(Self::Http(HttpSynthesizer::new(
                    endpoint,
                    Duration::from_secs(*config.timeout_secs()),
                )?))
            }
        }
    }
}

#[async_trait]
impl VideoSynthesizer for ConfiguredSynthesizer {
    async fn synthesize(&self, prompt: &StructuredPrompt) -> Result<String, SynthesisError> {
        match self {
            Self::Simulated(synth) => synth.synthesize(prompt).await,
            Self::Http(synth) => synth.synthesize(prompt).await,
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            Self::Simulated(synth) => synth.backend_name(),
            Self::Http(synth) => synth.backend_name(),
        }
    }
}
