//! Test utilities for pipeline tests.
//!
//! Deterministic stand-ins for the generation and synthesis services, plus helpers
//! for building ingested projects.

#![allow(dead_code)]

use async_trait::async_trait;
use lumiere_core::{GenerationRequest, ImagePayload, StructuredPrompt};
use lumiere_error::{GenerationError, GenerationErrorKind, SynthesisError, SynthesisErrorKind};
use lumiere_interface::{SceneGenerator, VideoSynthesizer};
use std::sync::{Arc, Mutex};

/// Behavior configuration for stub responses.
#[derive(Debug, Clone)]
pub enum StubBehavior {
    /// Derive a prompt from the request text
    Echo,
    /// Always return this prompt
    Fixed(StructuredPrompt),
    /// Always fail with this error
    Error(GenerationErrorKind),
    /// Return each response in turn, then fail
    Sequence(Vec<StubResponse>),
}

/// A single stub response.
#[derive(Debug, Clone)]
pub enum StubResponse {
    Success(StructuredPrompt),
    Error(GenerationErrorKind),
}

/// Stub scene generator recording every request it receives.
#[derive(Debug, Clone)]
pub struct StubGenerator {
    behavior: StubBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl StubGenerator {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn echo() -> Self {
        Self::new(StubBehavior::Echo)
    }

    pub fn fixed(prompt: StructuredPrompt) -> Self {
        Self::new(StubBehavior::Fixed(prompt))
    }

    pub fn failing(kind: GenerationErrorKind) -> Self {
        Self::new(StubBehavior::Error(kind))
    }

    pub fn sequence(responses: Vec<StubResponse>) -> Self {
        Self::new(StubBehavior::Sequence(responses))
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn next_response(&self, req: &GenerationRequest) -> Result<StructuredPrompt, GenerationError> {
        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;
        self.requests.lock().unwrap().push(req.clone());

        match &self.behavior {
            StubBehavior::Echo => Ok(echo_prompt(req)),
            StubBehavior::Fixed(prompt) => Ok(prompt.clone()),
            StubBehavior::Error(kind) => Err(GenerationError::new(kind.clone())),
            StubBehavior::Sequence(responses) => match responses.get(current) {
                Some(StubResponse::Success(prompt)) => Ok(prompt.clone()),
                Some(StubResponse::Error(kind)) => Err(GenerationError::new(kind.clone())),
                None => Err(GenerationError::new(GenerationErrorKind::Request(format!(
                    "Stub sequence exhausted (call {} beyond {} responses)",
                    current + 1,
                    responses.len()
                )))),
            },
        }
    }
}

fn echo_prompt(req: &GenerationRequest) -> StructuredPrompt {
    StructuredPrompt::builder()
        .scene_summary(format!(
            "{} chars, image: {}",
            req.instruction.len(),
            req.image.is_some()
        ))
        .build()
        .unwrap()
}

#[async_trait]
impl SceneGenerator for StubGenerator {
    async fn generate(&self, req: &GenerationRequest) -> Result<StructuredPrompt, GenerationError> {
        self.next_response(req)
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

/// Synthesizer that always fails.
#[derive(Debug, Clone)]
pub struct FailingSynthesizer(pub SynthesisErrorKind);

#[async_trait]
impl VideoSynthesizer for FailingSynthesizer {
    async fn synthesize(&self, _prompt: &StructuredPrompt) -> Result<String, SynthesisError> {
        Err(SynthesisError::new(self.0.clone()))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

/// A small PNG-ish payload standing in for an uploaded illustration.
pub fn illustration() -> ImagePayload {
    ImagePayload::from_bytes("image/png", &[0x89, b'P', b'N', b'G', 1, 2, 3])
}

/// A prompt carrying cover hints.
pub fn cover_prompt(title: &str, author: &str) -> StructuredPrompt {
    StructuredPrompt::builder()
        .scene_summary("Opening")
        .extracted_title(title)
        .extracted_author(author)
        .build()
        .unwrap()
}
