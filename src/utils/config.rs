use crate::translation::ProviderKind;
use crate::utils::errors::{Result, TranslatorError};
use crate::utils::languages::language_name;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub translation: TranslationDefaults,
    pub providers: ProvidersConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationDefaults {
    pub provider: String,
    pub file_path: Option<PathBuf>,
    pub batch_size: usize,
    pub retry_count: usize,
    pub retry_delay_ms: u64,
    pub max_concurrent_chunks: usize,
    pub source_language: String,
    pub target_language: String,
}

impl Default for TranslationDefaults {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            file_path: None,
            batch_size: 50,
            retry_count: 3,
            retry_delay_ms: 1000,
            max_concurrent_chunks: 1,
            source_language: "en".to_string(),
            target_language: "fr".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub gemini: EndpointConfig,
    pub openai: EndpointConfig,
    pub claude: EndpointConfig,
    pub deepseek: EndpointConfig,
    pub perplexity: EndpointConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            gemini: EndpointConfig::new(
                "https://generativelanguage.googleapis.com/v1beta",
                "gemini-2.5-flash",
                None,
            ),
            openai: EndpointConfig::new("https://api.openai.com/v1", "gpt-4", Some(0.3)),
            claude: EndpointConfig::new(
                "https://api.anthropic.com/v1",
                "claude-3-sonnet-20240229",
                None,
            ),
            deepseek: EndpointConfig::new(
                "https://api.deepseek.com/v1",
                "deepseek-chat",
                Some(0.3),
            ),
            perplexity: EndpointConfig::new("https://api.perplexity.ai", "sonar", Some(0.2)),
        }
    }
}

impl ProvidersConfig {
    pub fn endpoint(&self, kind: ProviderKind) -> &EndpointConfig {
        match kind {
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Claude => &self.claude,
            ProviderKind::DeepSeek => &self.deepseek,
            ProviderKind::Perplexity => &self.perplexity,
        }
    }

    /// A partially specified `[providers.<name>]` table keeps the built-in
    /// endpoint and model for whatever it leaves out.
    fn fill_missing(&mut self) {
        let defaults = ProvidersConfig::default();
        for kind in ProviderKind::ALL {
            let fallback = defaults.endpoint(kind);
            let endpoint = self.endpoint_mut(kind);
            if endpoint.base_url.is_empty() {
                endpoint.base_url = fallback.base_url.clone();
            }
            if endpoint.model.is_empty() {
                endpoint.model = fallback.model.clone();
            }
        }
    }

    fn endpoint_mut(&mut self, kind: ProviderKind) -> &mut EndpointConfig {
        match kind {
            ProviderKind::Gemini => &mut self.gemini,
            ProviderKind::OpenAi => &mut self.openai,
            ProviderKind::Claude => &mut self.claude,
            ProviderKind::DeepSeek => &mut self.deepseek,
            ProviderKind::Perplexity => &mut self.perplexity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
    /// Credentials come from the environment only.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl EndpointConfig {
    fn new(base_url: &str, model: &str, temperature: Option<f32>) -> Self {
        Self {
            base_url: base_url.to_string(),
            model: model.to_string(),
            temperature,
            max_tokens: 4000,
            timeout_seconds: 120,
            api_key: None,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new("", "", None)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive for this crate. `verbose` overrides `level`.
    pub fn directive(&self) -> Result<String> {
        let level = if self.verbose {
            "debug".to_string()
        } else {
            self.level.trim().to_ascii_lowercase()
        };

        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(TranslatorError::Configuration(format!(
                "unknown log level '{}', expected one of {}",
                self.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(format!("xcstrings_translator={}", level))
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslatorError::Configuration(format!("{}: {}", path, e)))?;
        let mut config: AppConfig = toml::from_str(&content)
            .map_err(|e| TranslatorError::Configuration(format!("{}: {}", path, e)))?;
        config.providers.fill_missing();
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(content)
            .map_err(|e| TranslatorError::Configuration(e.to_string()))?;
        config.providers.fill_missing();
        Ok(config)
    }

    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and built-in defaults are used otherwise.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) if !Path::new(p).exists() => Err(TranslatorError::Configuration(format!(
                "config file not found: {}",
                p
            ))),
            Some(p) => Self::load_from_file(p),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_PATH)
            }
            None => Ok(Self::default()),
        }
    }

    /// Layers process environment variables on top of the file values.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Numeric variables that fail to parse or are zero keep the current value.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let positive = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
        };

        if let Some(provider) = lookup("AI_PROVIDER") {
            self.translation.provider = provider;
        }
        if let Some(path) = lookup("XCSTRINGS_FILE_PATH") {
            self.translation.file_path = Some(PathBuf::from(path));
        }
        if let Some(size) = positive("BATCH_SIZE") {
            self.translation.batch_size = size as usize;
        }
        if let Some(count) = positive("RETRY_COUNT") {
            self.translation.retry_count = count as usize;
        }
        if let Some(delay) = positive("REQUEST_DELAY") {
            self.translation.retry_delay_ms = delay;
        }
        if let Some(limit) = positive("MAX_CONCURRENT_CHUNKS") {
            self.translation.max_concurrent_chunks = limit as usize;
        }
        if let Some(lang) = lookup("DEFAULT_TARGET_LANGUAGE") {
            self.translation.target_language = lang;
        }
        if let Some(lang) = lookup("DEFAULT_SOURCE_LANGUAGE") {
            self.translation.source_language = lang;
        }
        if let Some(verbose) = lookup("VERBOSE_LOGGING") {
            self.logging.verbose = verbose == "true";
        }

        for kind in ProviderKind::ALL {
            if let Some(key) = lookup(kind.api_key_var()).filter(|k| !k.trim().is_empty()) {
                self.providers.endpoint_mut(kind).api_key = Some(key);
            }
        }
    }
}

/// Resolved, validated settings for a single translation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub batch_size: usize,
    pub retry_count: usize,
    pub retry_delay_ms: u64,
    pub max_concurrent_chunks: usize,
    pub source_lang_code: String,
    pub source_lang_name: String,
    pub target_lang_code: String,
    pub target_lang_name: String,
    pub provider: ProviderKind,
    pub provider_label: String,
}

impl RunConfig {
    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        let defaults = &config.translation;
        let provider: ProviderKind = defaults.provider.parse()?;

        let source_lang_name = lookup_language(&defaults.source_language)?;
        let target_lang_name = lookup_language(&defaults.target_language)?;

        let run = Self {
            batch_size: defaults.batch_size,
            retry_count: defaults.retry_count,
            retry_delay_ms: defaults.retry_delay_ms,
            max_concurrent_chunks: defaults.max_concurrent_chunks,
            source_lang_code: defaults.source_language.clone(),
            source_lang_name: source_lang_name.to_string(),
            target_lang_code: defaults.target_language.clone(),
            target_lang_name: target_lang_name.to_string(),
            provider,
            provider_label: provider.label(),
        };
        run.validate()?;
        Ok(run)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(TranslatorError::Configuration(
                "batch size must be a positive integer".to_string(),
            ));
        }
        if self.retry_count == 0 {
            return Err(TranslatorError::Configuration(
                "retry count must be at least 1".to_string(),
            ));
        }
        if self.max_concurrent_chunks == 0 {
            return Err(TranslatorError::Configuration(
                "concurrency limit must be at least 1".to_string(),
            ));
        }
        if self.source_lang_code == self.target_lang_code {
            return Err(TranslatorError::Configuration(format!(
                "source and target language are both '{}'",
                self.source_lang_code
            )));
        }
        Ok(())
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn lookup_language(code: &str) -> Result<&'static str> {
    language_name(code).ok_or_else(|| {
        TranslatorError::Configuration(format!("unsupported language code: {}", code))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_resolve_to_english_to_french() {
        let run = RunConfig::from_app_config(&AppConfig::default()).unwrap();
        assert_eq!(run.batch_size, 50);
        assert_eq!(run.retry_count, 3);
        assert_eq!(run.retry_delay(), Duration::from_millis(1000));
        assert_eq!(run.max_concurrent_chunks, 1);
        assert_eq!(run.source_lang_name, "English");
        assert_eq!(run.target_lang_name, "French");
        assert_eq!(run.provider_label, "GEMINI");
    }

    #[test]
    fn env_overrides_file_values() {
        let vars = env(&[
            ("AI_PROVIDER", "claude"),
            ("BATCH_SIZE", "20"),
            ("RETRY_COUNT", "5"),
            ("DEFAULT_TARGET_LANGUAGE", "de"),
            ("CLAUDE_API_KEY", "sk-test"),
            ("VERBOSE_LOGGING", "true"),
        ]);
        let mut config = AppConfig::default();
        config.apply_env_with(|k| vars.get(k).cloned());

        assert_eq!(config.translation.provider, "claude");
        assert_eq!(config.translation.batch_size, 20);
        assert_eq!(config.translation.retry_count, 5);
        assert_eq!(config.translation.target_language, "de");
        assert_eq!(config.providers.claude.api_key.as_deref(), Some("sk-test"));
        assert!(config.logging.verbose);
    }

    #[test]
    fn unparsable_numbers_keep_defaults() {
        let vars = env(&[("BATCH_SIZE", "lots"), ("REQUEST_DELAY", "0")]);
        let mut config = AppConfig::default();
        config.apply_env_with(|k| vars.get(k).cloned());

        assert_eq!(config.translation.batch_size, 50);
        assert_eq!(config.translation.retry_delay_ms, 1000);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let mut config = AppConfig::default();
        config.translation.batch_size = 0;
        let err = RunConfig::from_app_config(&config).unwrap_err();
        assert!(matches!(err, TranslatorError::Configuration(_)));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let mut config = AppConfig::default();
        config.translation.provider = "babelfish".to_string();
        let err = RunConfig::from_app_config(&config).unwrap_err();
        assert!(err.to_string().contains("babelfish"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let mut config = AppConfig::default();
        config.translation.target_language = "klingon".to_string();
        assert!(RunConfig::from_app_config(&config).is_err());
    }

    #[test]
    fn parses_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [translation]
            batch_size = 25
            provider = "openai"

            [providers.openai]
            model = "gpt-4o-mini"
            "#,
        )
        .unwrap();

        assert_eq!(config.translation.batch_size, 25);
        assert_eq!(config.translation.retry_count, 3);
        assert_eq!(config.providers.openai.model, "gpt-4o-mini");
        assert_eq!(config.providers.openai.base_url, "https://api.openai.com/v1");
        assert_eq!(config.providers.openai.max_tokens, 4000);
    }

    #[test]
    fn logging_table_drives_filter_directive() {
        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            level = "WARN"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.directive().unwrap(), "xcstrings_translator=warn");

        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            level = "error"
            verbose = true
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.directive().unwrap(), "xcstrings_translator=debug");
    }

    #[test]
    fn default_logging_is_info() {
        let directive = AppConfig::default().logging.directive().unwrap();
        assert_eq!(directive, "xcstrings_translator=info");
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let config = AppConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap();
        let err = config.logging.directive().unwrap_err();
        assert!(matches!(err, TranslatorError::Configuration(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn explicit_missing_config_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = AppConfig::load_or_default(missing.to_str()).unwrap_err();
        assert!(matches!(err, TranslatorError::Configuration(_)));
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[translation]\nbatch_size = 7\n[logging]\nverbose = true\n")
            .unwrap();

        let config = AppConfig::load_or_default(path.to_str()).unwrap();
        assert_eq!(config.translation.batch_size, 7);
        assert!(config.logging.verbose);
    }
}
