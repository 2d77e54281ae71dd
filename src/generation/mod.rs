pub mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;
use thiserror::Error;

/// One text-generation call: system and user instructions plus the sampling
/// knobs the caller controls.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system: String,
    pub user: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Hard failures of the generation capability. These always propagate;
/// soft degradation (unparseable replies) is handled downstream.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Rate limited by provider")]
    RateLimited,
    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("No completion choices returned")]
    EmptyCompletion,
}

/// Capability that turns prompts into text. Injected at construction
/// everywhere a model call happens, so tests can script replies.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
