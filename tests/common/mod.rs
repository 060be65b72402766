// Shared fixtures for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use xcstrings_translator::{AppConfig, PromptTransport, Result, RunConfig, TranslatorError};

/// What the stub transport does for one call.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Fail,
    /// Wait before answering, to shuffle completion order under concurrency.
    Delayed(Duration, String),
}

impl Reply {
    pub fn json(values: &[&str]) -> Self {
        Reply::Text(serde_json::to_string(values).unwrap())
    }
}

#[derive(Clone, Default)]
pub struct CallLog {
    prompts: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

/// Replays replies in call order. Runs out → transport failure.
pub struct StubTransport {
    replies: Mutex<VecDeque<Reply>>,
    log: CallLog,
}

impl StubTransport {
    pub fn new(replies: Vec<Reply>) -> (Self, CallLog) {
        let log = CallLog::default();
        let stub = Self {
            replies: Mutex::new(replies.into()),
            log: log.clone(),
        };
        (stub, log)
    }
}

#[async_trait]
impl PromptTransport for StubTransport {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        self.log.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Delayed(delay, text)) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            Some(Reply::Fail) | None => {
                Err(TranslatorError::Transport("stub transport failure".to_string()))
            }
        }
    }
}

pub fn run_config(batch_size: usize) -> RunConfig {
    let mut config = RunConfig::from_app_config(&AppConfig::default()).unwrap();
    config.batch_size = batch_size;
    config.retry_delay_ms = 10;
    config
}

/// Builds an `.xcstrings` document with English source values.
pub fn catalog_json(entries: &[(&str, &str)]) -> String {
    let mut strings = serde_json::Map::new();
    for (key, value) in entries {
        strings.insert(
            key.to_string(),
            serde_json::json!({
                "localizations": {
                    "en": { "stringUnit": { "state": "translated", "value": value } }
                }
            }),
        );
    }
    serde_json::to_string_pretty(&serde_json::json!({
        "sourceLanguage": "en",
        "strings": strings,
        "version": "1.0"
    }))
    .unwrap()
}

pub fn write_catalog(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Localizable.xcstrings");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
