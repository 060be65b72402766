pub mod config;
pub mod errors;
pub mod languages;

pub use config::{AppConfig, EndpointConfig, LoggingConfig, RunConfig};
pub use errors::{Result, TranslatorError};
pub use languages::language_name;
