use std::fmt;

use async_trait::async_trait;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;

use astro_core::OracleSettings;

use crate::error::OracleError;

/// The remote boundary: one prompt in, free-form text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError>;
}

fn map_backend(provider: &str) -> Result<LLMBackend, OracleError> {
    match provider {
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "google" | "gemini" => Ok(LLMBackend::Google),
        "ollama" => Ok(LLMBackend::Ollama),
        "groq" => Ok(LLMBackend::Groq),
        "mistral" => Ok(LLMBackend::Mistral),
        "deepseek" => Ok(LLMBackend::DeepSeek),
        other => Err(OracleError::Configuration(format!("unknown provider: {other}"))),
    }
}

/// [`TextGenerator`] backed by the `llm` crate. Holds only settings; a
/// provider handle is built per call.
#[derive(Clone)]
pub struct LlmGenerator {
    settings: OracleSettings,
}

// Keep the API key out of logs.
impl fmt::Debug for LlmGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmGenerator")
            .field("provider", &self.settings.provider)
            .field("model", &self.settings.model)
            .field("has_key", &!self.settings.api_key.is_empty())
            .field("base_url", &self.settings.base_url)
            .finish()
    }
}

impl LlmGenerator {
    /// Fails when the provider name is not one we can map to a backend.
    pub fn new(settings: OracleSettings) -> Result<Self, OracleError> {
        map_backend(&settings.provider)?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &OracleSettings {
        &self.settings
    }
}

#[async_trait]
impl TextGenerator for LlmGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let settings = &self.settings;
        let backend = map_backend(&settings.provider)?;

        let mut builder = LLMBuilder::new().backend(backend).model(&settings.model);

        if !settings.api_key.is_empty() {
            builder = builder.api_key(&settings.api_key);
        }
        if let Some(url) = &settings.base_url {
            builder = builder.base_url(url);
        }

        let llm = builder
            .build()
            .map_err(|e| OracleError::Configuration(format!("build LLM: {e}")))?;

        let messages = vec![ChatMessage::user().content(prompt).build()];

        let response = llm
            .chat(&messages)
            .await
            .map_err(|e| OracleError::Transport(format!("chat: {e}")))?;

        // Blank text is left for the parser to reject as NoJson.
        response
            .text()
            .ok_or_else(|| OracleError::Transport("LLM returned no text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_providers_map_to_backends() {
        for provider in ["openai", "anthropic", "google", "gemini", "ollama", "groq", "mistral", "deepseek"] {
            assert!(map_backend(provider).is_ok(), "{provider}");
        }
    }

    #[test]
    fn unknown_provider_is_a_configuration_error() {
        let settings = OracleSettings {
            provider: "oracle-of-delphi".to_string(),
            ..OracleSettings::default()
        };
        assert!(matches!(
            LlmGenerator::new(settings),
            Err(OracleError::Configuration(msg)) if msg.contains("oracle-of-delphi")
        ));
    }
}
