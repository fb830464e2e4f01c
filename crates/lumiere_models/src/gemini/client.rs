use super::{Content, GeminiRequest, GeminiResponse, GenerationConfig, Part};
use crate::{GeminiConfig, extract_json};
use async_trait::async_trait;
use lumiere_core::{GenerationRequest, StructuredPrompt};
use lumiere_error::{GenerationError, GenerationErrorKind};
use lumiere_interface::SceneGenerator;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Gemini REST client producing structured scene prompts.
///
/// # Example
///
/// ```no_run
/// use lumiere_core::GenerationRequest;
/// use lumiere_interface::SceneGenerator;
/// use lumiere_models::{GeminiClient, GeminiConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::from_env(GeminiConfig::default())?;
/// let request = GenerationRequest {
///     instruction: "Describe a quiet opening scene.".to_string(),
///     schema: serde_json::json!({"type": "OBJECT"}),
///     image: None,
/// };
/// let prompt = client.generate(&request).await?;
/// println!("{:?}", prompt.scene_summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    api_key: String,
}

impl GeminiClient {
    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns `Request` if the HTTP client cannot be constructed.
    pub fn new(config: GeminiConfig, api_key: impl Into<String>) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Request(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        debug!(model = %config.model(), "Creating new Gemini client");
        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Creates a client reading the API key from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the variable is unset or empty.
    pub fn from_env(config: GeminiConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(config.api_key_env())
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GenerationError::new(GenerationErrorKind::MissingApiKey(
                    config.api_key_env().clone(),
                ))
            })?;
        Self::new(config, api_key)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            self.config.model()
        )
    }

    /// Converts a generation request into the wire body.
    pub fn convert_request(&self, req: &GenerationRequest) -> Result<GeminiRequest, GenerationError> {
        let mut parts = vec![Part::from_text(&req.instruction)];
        if let Some(image) = &req.image {
            parts.push(Part::from_image(image));
        }

        GeminiRequest::builder()
            .contents(vec![Content::user(parts)])
            .generation_config(GenerationConfig::json(
                req.schema.clone(),
                *self.config.temperature(),
            ))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Request(format!(
                    "Failed to build request: {}",
                    e
                )))
            })
    }

    /// Sends one `generateContent` call.
    #[instrument(skip(self, request), fields(model = %self.config.model()))]
    pub async fn generate_content(
        &self,
        request: &GeminiRequest,
    ) -> Result<GeminiResponse, GenerationError> {
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                GenerationError::new(GenerationErrorKind::Request(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(GenerationError::new(GenerationErrorKind::ServiceError {
                status: status.as_u16(),
                body,
            }));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Gemini response body");
            GenerationError::new(GenerationErrorKind::Request(format!(
                "Failed to read response: {}",
                e
            )))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response envelope");
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "Invalid response envelope: {}",
                e
            )))
        })
    }

    /// Parses the first candidate's text into a structured prompt.
    pub fn parse_prompt(response: &GeminiResponse) -> Result<StructuredPrompt, GenerationError> {
        let text = response
            .first_text()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

        let json = extract_json(&text).ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(
                "No JSON object in candidate text".to_string(),
            ))
        })?;

        serde_json::from_str(&json).map_err(|e| {
            error!(error = ?e, "Candidate text does not match the structured prompt");
            GenerationError::new(GenerationErrorKind::MalformedResponse(e.to_string()))
        })
    }
}

#[async_trait]
impl SceneGenerator for GeminiClient {
    #[instrument(skip(self, req), fields(has_image = req.image.is_some()))]
    async fn generate(&self, req: &GenerationRequest) -> Result<StructuredPrompt, GenerationError> {
        let request = self.convert_request(req)?;
        let response = self.generate_content(&request).await?;
        let prompt = Self::parse_prompt(&response)?;
        debug!(
            characters = prompt.characters().len(),
            "Received structured prompt from Gemini"
        );
        Ok(prompt)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
