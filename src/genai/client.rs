// OpenAI-compatible chat-completions client.
//
// One synchronous (non-streaming) POST per call, bearer auth, typed
// request/response structs. The endpoint is configurable because the
// original deployment pointed the same wire format at a hosted gateway
// rather than api.openai.com.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

use super::traits::{ChatMessage, CompletionOptions, Generator};

/// Chat-completion client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Build a client from loaded configuration. Callers are expected to
    /// have run `config.require_generation()` first.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent("newsbrief/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl Generator for OpenAiClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        opts: &CompletionOptions,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: opts.temperature,
            max_tokens: opts.max_tokens,
        };

        debug!(model = %self.model, messages = messages.len(), "chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call the chat-completion service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Chat-completion service returned {status}: {body}");
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse chat-completion response")?;

        first_content(completion)
    }
}

/// Pull the first choice's content out of a parsed response.
///
/// "No choices" and "empty content" are reported separately from
/// transport errors — callers treat an empty result as its own failure
/// class.
fn first_content(completion: ChatCompletionResponse) -> Result<String> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .context("Chat-completion service returned no choices")?;

    let content = choice.message.content.unwrap_or_default();
    let content = content.trim();
    if content.is_empty() {
        anyhow::bail!("Chat-completion service returned an empty completion");
    }
    Ok(content.to_string())
}

// --- Wire types ---

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<String> {
        let completion: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        first_content(completion)
    }

    #[test]
    fn extracts_first_choice_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":" Nvidia "}},{"message":{"role":"assistant","content":"second"}}]}"#;
        assert_eq!(parse(body).unwrap(), "Nvidia");
    }

    #[test]
    fn no_choices_is_an_error() {
        let err = parse(r#"{"choices":[]}"#).unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn empty_content_is_a_distinct_error() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  "}}]}"#;
        let err = parse(body).unwrap_err();
        assert!(err.to_string().contains("empty completion"));

        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert!(parse(body).is_err());
    }

    #[test]
    fn request_omits_unset_sampling_fields() {
        let messages = vec![ChatMessage::user("q")];
        let request = ChatCompletionRequest {
            model: "gpt-4o",
            messages: &messages,
            temperature: None,
            max_tokens: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());

        let request = ChatCompletionRequest {
            model: "gpt-4o",
            messages: &messages,
            temperature: Some(0.0),
            max_tokens: Some(10),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["max_tokens"], 10);
    }
}
