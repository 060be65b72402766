use crate::translation::provider::PromptTransport;
use crate::translation::vendors::{http_client, read_json};
use crate::utils::{EndpointConfig, Result, TranslatorError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct GeminiTransport {
    client: Client,
    endpoint: EndpointConfig,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiTransport {
    pub fn new(endpoint: EndpointConfig, api_key: String) -> Result<Self> {
        Ok(Self {
            client: http_client(&endpoint)?,
            endpoint,
            api_key,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.base_url.trim_end_matches('/'),
            self.endpoint.model
        )
    }
}

#[async_trait]
impl PromptTransport for GeminiTransport {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: self
                .endpoint
                .temperature
                .map(|temperature| GenerationConfig { temperature }),
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let body: GenerateResponse = read_json("gemini", response).await?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(TranslatorError::Transport(
                "gemini response has no candidate text".to_string(),
            ));
        }

        Ok(text)
    }
}
