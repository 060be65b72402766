pub mod chat;
pub mod claude;
pub mod gemini;

pub use chat::ChatCompletionsTransport;
pub use claude::ClaudeTransport;
pub use gemini::GeminiTransport;

use crate::translation::provider::Provider;
use crate::utils::config::ProvidersConfig;
use crate::utils::{EndpointConfig, Result, TranslatorError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::str::FromStr;
use std::time::Duration;

const DEEPSEEK_SYSTEM_PROMPT: &str =
    "You are a professional translation assistant specialized in software localization.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    OpenAi,
    Claude,
    DeepSeek,
    Perplexity,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::Gemini,
        ProviderKind::OpenAi,
        ProviderKind::Claude,
        ProviderKind::DeepSeek,
        ProviderKind::Perplexity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Claude => "claude",
            ProviderKind::DeepSeek => "deepseek",
            ProviderKind::Perplexity => "perplexity",
        }
    }

    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Claude => "CLAUDE_API_KEY",
            ProviderKind::DeepSeek => "DEEPSEEK_API_KEY",
            ProviderKind::Perplexity => "PERPLEXITY_API_KEY",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = TranslatorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                let supported: Vec<&str> = ProviderKind::ALL.iter().map(|k| k.as_str()).collect();
                TranslatorError::Configuration(format!(
                    "unsupported AI provider: {}. Supported providers: {}",
                    s,
                    supported.join(", ")
                ))
            })
    }
}

/// Builds the provider for `kind`. Fails before any network call when the
/// vendor's credential is missing.
pub fn create_provider(kind: ProviderKind, providers: &ProvidersConfig) -> Result<Provider> {
    let endpoint = providers.endpoint(kind).clone();
    let api_key = endpoint.api_key.clone().ok_or_else(|| {
        TranslatorError::Configuration(format!(
            "API key not found for provider {}. Set {}",
            kind,
            kind.api_key_var()
        ))
    })?;

    let provider = match kind {
        ProviderKind::Gemini => Provider::new(GeminiTransport::new(endpoint, api_key)?),
        ProviderKind::Claude => Provider::new(ClaudeTransport::new(endpoint, api_key)?),
        ProviderKind::OpenAi => {
            Provider::new(ChatCompletionsTransport::new("openai", endpoint, api_key)?)
        }
        ProviderKind::DeepSeek => Provider::new(
            ChatCompletionsTransport::new("deepseek", endpoint, api_key)?
                .with_system_prompt(DEEPSEEK_SYSTEM_PROMPT),
        ),
        ProviderKind::Perplexity => Provider::new(ChatCompletionsTransport::new(
            "perplexity",
            endpoint,
            api_key,
        )?),
    };

    Ok(provider)
}

pub(crate) fn http_client(endpoint: &EndpointConfig) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(endpoint.timeout_seconds))
        .build()?)
}

/// Turns a non-2xx reply into a `Transport` error carrying status and body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    vendor: &str,
    response: reqwest::Response,
) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(TranslatorError::Transport(format!(
            "{} API returned {}: {}",
            vendor, status, body
        )));
    }

    Ok(response.json().await?)
}
