//! Gemini REST API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use lumiere_core::ImagePayload;
use serde::{Deserialize, Serialize};

/// Base64 image sent inline with a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the image
    mime_type: String,
    /// Base64-encoded bytes
    data: String,
}

impl From<&ImagePayload> for InlineData {
    fn from(image: &ImagePayload) -> Self {
        Self {
            mime_type: image.mime_type.clone(),
            data: image.data.clone(),
        }
    }
}

/// One part of a content turn: text or inline data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Inline binary content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    /// A text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline image part.
    pub fn from_image(image: &ImagePayload) -> Self {
        Self {
            text: None,
            inline_data: Some(image.into()),
        }
    }

    /// Text content, if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A conversation turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Content {
    /// "user" for requests, "model" for responses
    #[serde(default)]
    role: String,
    /// Ordered parts
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// A user turn.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }
}

/// Output constraints for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `application/json`
    response_mime_type: String,
    /// OpenAPI-subset schema the answer must follow
    response_schema: serde_json::Value,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl GenerationConfig {
    /// JSON output constrained by `schema`.
    pub fn json(schema: serde_json::Value, temperature: Option<f32>) -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
            temperature,
        }
    }
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GeminiRequest {
    /// Conversation turns
    contents: Vec<Content>,
    /// Output constraints
    generation_config: GenerationConfig,
}

impl GeminiRequest {
    /// Creates a new builder for `GeminiRequest`.
    pub fn builder() -> GeminiRequestBuilder {
        GeminiRequestBuilder::default()
    }
}

/// One generated answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    content: Option<Content>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Response of a `generateContent` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiResponse {
    /// Generated answers, usually one
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GeminiResponse {
    /// Concatenated text parts of the first candidate.
    ///
    /// `None` when there is no candidate, no content, or no non-empty text.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().filter_map(Part::as_text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
