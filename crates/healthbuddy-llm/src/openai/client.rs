// OpenAI-compatible chat completions client (OpenAI, Groq, ...)

use crate::traits::{ChatClient, ChatRequest, ChatResponse, TokenUsage};
use crate::types::Message;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// OpenAI-compatible client (HTTP direct, no SDK)
pub struct OpenAIClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenAIClient {
    /// Create new client against any OpenAI-compatible base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            anyhow::bail!("API key must not be empty");
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build chat completion request payload
    fn build_chat_request(&self, model: &str, messages: &[Message]) -> Result<Value> {
        let payload = OpenAIChatPayload {
            model,
            messages,
            stream: false,
        };
        Ok(serde_json::to_value(payload)?)
    }
}

#[async_trait]
impl ChatClient for OpenAIClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let payload = self.build_chat_request(&request.model, &request.messages)?;
        let started = Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Chat completion API error ({}): {}", status, error_text);
        }

        let body: OpenAIChatResponse = response
            .json()
            .await
            .context("Failed to parse response")?;

        tracing::debug!(
            model = %request.model,
            choices = body.choices.len(),
            elapsed_ms = %started.elapsed().as_millis(),
            "Chat completion received"
        );

        let usage = body.usage.map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        // Only the first choice is surfaced
        let (content, finish_reason) = match body.choices.into_iter().next() {
            Some(choice) => (choice.message.content, choice.finish_reason),
            None => (None, None),
        };

        Ok(ChatResponse {
            content,
            usage,
            finish_reason,
        })
    }
}

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatPayload<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let client = OpenAIClient::with_base_url("test-key", GROQ_API_BASE).unwrap();
        let messages = vec![Message::system("be brief"), Message::human("hi")];
        let payload = client.build_chat_request("llama3-70b-8192", &messages).unwrap();

        assert_eq!(
            payload,
            serde_json::json!({
                "model": "llama3-70b-8192",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hi"},
                ],
                "stream": false,
            })
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = OpenAIClient::with_base_url("k", "http://localhost:1234/v1/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/v1");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(OpenAIClient::with_base_url("", GROQ_API_BASE).is_err());
        assert!(OpenAIClient::with_base_url("   ", OPENAI_API_BASE).is_err());
    }
}
