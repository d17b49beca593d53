use crate::error::{ChatError, Result};
use crate::persona::Persona;
use healthbuddy_llm::{ChatClient, ChatRequest, Message};
use std::sync::Arc;
use std::time::Instant;

/// Model identifier used when none is configured.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Sends one question, prefixed by the persona, to the chat backend and
/// returns the first choice's text.
///
/// No retries, no caching and no timeout of its own: one call per
/// `complete`, and any failure goes straight back to the caller.
#[derive(Clone)]
pub struct CompletionGateway {
    client: Arc<dyn ChatClient>,
    model: String,
    persona: Persona,
}

impl CompletionGateway {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            persona: Persona::healthcare(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// `[system(persona), user(question)]`
    pub fn build_request(&self, question: &str) -> ChatRequest {
        ChatRequest::new(
            self.model.clone(),
            vec![self.persona.system_message(), Message::human(question)],
        )
    }

    pub async fn complete(&self, question: &str) -> Result<String> {
        let request = self.build_request(question);
        let started = Instant::now();

        let response = self.client.chat(request).await.map_err(|e| {
            tracing::error!(model = %self.model, error = %e, "Completion request failed");
            ChatError::Gateway(e)
        })?;

        let usage = response.usage.as_ref();
        tracing::debug!(
            model = %self.model,
            elapsed_ms = %started.elapsed().as_millis(),
            finish_reason = ?response.finish_reason,
            input_tokens = ?usage.map(|u| u.input_tokens),
            output_tokens = ?usage.map(|u| u.output_tokens),
            "Completion received"
        );

        response.content.ok_or(ChatError::EmptyCompletion)
    }
}
