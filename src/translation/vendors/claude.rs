use crate::translation::provider::PromptTransport;
use crate::translation::vendors::{http_client, read_json};
use crate::utils::{EndpointConfig, Result, TranslatorError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct ClaudeTransport {
    client: Client,
    endpoint: EndpointConfig,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

impl ClaudeTransport {
    pub fn new(endpoint: EndpointConfig, api_key: String) -> Result<Self> {
        Ok(Self {
            client: http_client(&endpoint)?,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl PromptTransport for ClaudeTransport {
    fn name(&self) -> &'static str {
        "claude"
    }

    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        let request = MessagesRequest {
            model: &self.endpoint.model,
            max_tokens: self.endpoint.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature: self.endpoint.temperature,
        };

        let response = self
            .client
            .post(format!(
                "{}/messages",
                self.endpoint.base_url.trim_end_matches('/')
            ))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let body: MessagesResponse = read_json("claude", response).await?;

        body.content
            .into_iter()
            .find_map(|block| {
                if block.content_type == "text" {
                    block.text
                } else {
                    None
                }
            })
            .ok_or_else(|| TranslatorError::Transport("No text content in response".to_string()))
    }
}
