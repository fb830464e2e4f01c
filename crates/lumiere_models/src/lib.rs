//! Generation and video synthesis clients for Lumiere.
//!
//! - [`GeminiClient`] calls the Gemini `generateContent` endpoint with a response schema
//!   and an optional inline illustration, and parses the answer into a
//!   [`StructuredPrompt`](lumiere_core::StructuredPrompt).
//! - [`SimulatedSynthesizer`] and [`HttpSynthesizer`] turn a structured prompt into a
//!   video reference.
//!
//! Every client makes exactly one round trip per call. Failures are returned to the
//! caller unchanged; nothing here retries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod gemini;
mod synthesis;

pub use config::{GeminiConfig, SynthesisBackend, SynthesisConfig};
pub use extraction::extract_json;
pub use gemini::{
    Candidate, Content, GeminiClient, GeminiRequest, GeminiRequestBuilder, GeminiResponse,
    GenerationConfig, InlineData, Part,
};
pub use synthesis::{ConfiguredSynthesizer, HttpSynthesizer, SimulatedSynthesizer};
