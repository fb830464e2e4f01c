//! Generation requests produced by the prompt builder.

use crate::ImagePayload;
use serde::{Deserialize, Serialize};

/// Everything a scene generator needs for one round trip.
///
/// The instruction carries story context and the scene task, the schema constrains
/// the service's answer, and the image is the page or cover illustration when one
/// was supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Natural-language instruction
    pub instruction: String,
    /// Response schema in the service's OpenAPI subset
    pub schema: serde_json::Value,
    /// Illustration sent inline with the instruction
    pub image: Option<ImagePayload>,
}
