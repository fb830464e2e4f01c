//! Google Gemini `generateContent` client.
//!
//! The client speaks the REST API directly so that it can send a response schema and
//! an inline illustration in a single request.

mod client;
mod wire;

pub use client::GeminiClient;
pub use wire::{
    Candidate, Content, GeminiRequest, GeminiRequestBuilder, GeminiResponse, GenerationConfig,
    InlineData, Part,
};
