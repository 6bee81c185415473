// Generator trait — swap-ready abstraction over the chat-completion service.
//
// Mirrors the wire shape of OpenAI-style chat APIs: an ordered message
// list in, one completion's text content out. Implementations make exactly
// one attempt per call — retry policy belongs to callers, and none of the
// current callers retries.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One message in a chat prompt. Roles are the service's strings
/// ("system", "user", "assistant") passed through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Per-call sampling overrides. `None` fields are omitted from the
/// request so the service applies its own defaults.
#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl CompletionOptions {
    /// Near-zero temperature and a tight token cap — biases the service
    /// toward short, deterministic answers (topic extraction).
    pub fn short_deterministic() -> Self {
        Self {
            temperature: Some(0.0),
            max_tokens: Some(10),
        }
    }
}

/// Trait for issuing a single chat-completion call.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send `messages` and return the first completion's text content.
    /// An empty completion is an error, distinct from transport failure.
    async fn complete(&self, messages: &[ChatMessage], opts: &CompletionOptions)
        -> Result<String>;
}
