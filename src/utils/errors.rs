use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid catalog: {0}")]
    CatalogFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Model did not return a JSON array: {0}")]
    MalformedResponse(String),

    #[error("Model returned fewer items than expected: expected={expected} got={got}")]
    IncompleteResponse { expected: usize, got: usize },

    #[error("Translation failed after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: usize, last: String },
}

impl TranslatorError {
    /// Setup errors abort the run before any translation work starts.
    /// Everything else is scoped to a single chunk and is retried.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TranslatorError::Configuration(_)
                | TranslatorError::CatalogFormat(_)
                | TranslatorError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_errors_are_fatal() {
        assert!(TranslatorError::Configuration("x".into()).is_fatal());
        assert!(TranslatorError::CatalogFormat("x".into()).is_fatal());
    }

    #[test]
    fn chunk_errors_are_not_fatal() {
        assert!(!TranslatorError::Transport("timeout".into()).is_fatal());
        assert!(!TranslatorError::MalformedResponse("prose".into()).is_fatal());
        assert!(!TranslatorError::IncompleteResponse { expected: 3, got: 1 }.is_fatal());
    }

    #[test]
    fn incomplete_response_message_names_counts() {
        let err = TranslatorError::IncompleteResponse { expected: 5, got: 2 };
        assert_eq!(
            err.to_string(),
            "Model returned fewer items than expected: expected=5 got=2"
        );
    }
}
