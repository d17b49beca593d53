// Configuration layer for provider-agnostic LLM client creation
// This module provides a factory pattern for creating chat clients from configuration

use crate::openai::{OpenAIClient, GROQ_API_BASE, OPENAI_API_BASE};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Type of LLM provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    OpenAI,
    #[default]
    Groq,
}

impl ProviderType {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderType::OpenAI => OPENAI_API_BASE,
            ProviderType::Groq => GROQ_API_BASE,
        }
    }
}

/// Complete provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub provider: ProviderType,
    pub api_key: String,
    /// Overrides the provider's default base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Create OpenAI provider config
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            provider: ProviderType::OpenAI,
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Create Groq provider config
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self {
            provider: ProviderType::Groq,
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Get the provider type
    pub fn provider_type(&self) -> ProviderType {
        self.provider
    }

    /// Base URL the client will talk to
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }
}

/// Factory for creating chat clients from configuration
pub struct ClientFactory;

impl ClientFactory {
    /// Create a chat client from provider configuration
    pub fn create_chat_client(config: ProviderConfig) -> Result<Arc<dyn crate::traits::ChatClient>> {
        let base_url = config.resolved_base_url().to_string();
        tracing::debug!(provider = ?config.provider, %base_url, "Creating chat client");
        let client = OpenAIClient::with_base_url(config.api_key, base_url)?;
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_config() {
        let config = ProviderConfig::openai("test-key");
        assert_eq!(config.provider_type(), ProviderType::OpenAI);
        assert_eq!(config.resolved_base_url(), OPENAI_API_BASE);
    }

    #[test]
    fn test_groq_config() {
        let config = ProviderConfig::groq("test-key");
        assert_eq!(config.provider_type(), ProviderType::Groq);
        assert_eq!(config.resolved_base_url(), "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_base_url_override() {
        let config = ProviderConfig::groq("test-key").with_base_url("http://127.0.0.1:9000/v1");
        assert_eq!(config.resolved_base_url(), "http://127.0.0.1:9000/v1");
    }

    #[test]
    fn test_provider_defaults_to_groq() {
        let config: ProviderConfig = serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        assert_eq!(config.provider_type(), ProviderType::Groq);
    }

    #[test]
    fn test_factory_rejects_empty_key() {
        assert!(ClientFactory::create_chat_client(ProviderConfig::groq("")).is_err());
    }
}
