use crate::translation::provider::PromptTransport;
use crate::translation::vendors::{http_client, read_json};
use crate::utils::{EndpointConfig, Result, TranslatorError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible `/chat/completions` endpoint, shared by OpenAI,
/// DeepSeek and Perplexity.
pub struct ChatCompletionsTransport {
    name: &'static str,
    client: Client,
    endpoint: EndpointConfig,
    api_key: String,
    system_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionsTransport {
    pub fn new(name: &'static str, endpoint: EndpointConfig, api_key: String) -> Result<Self> {
        Ok(Self {
            name,
            client: http_client(&endpoint)?,
            endpoint,
            api_key,
            system_prompt: None,
        })
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.endpoint.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl PromptTransport for ChatCompletionsTransport {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system_prompt {
            messages.push(Message {
                role: "system",
                content: system,
            });
        }
        messages.push(Message {
            role: "user",
            content: prompt,
        });

        let request = ChatRequest {
            model: &self.endpoint.model,
            messages,
            temperature: self.endpoint.temperature,
            max_tokens: self.endpoint.max_tokens,
            stream: false,
        };

        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let body: ChatResponse = read_json(self.name, response).await?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                TranslatorError::Transport(format!("{} response has no message content", self.name))
            })
    }
}
