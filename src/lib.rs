pub mod catalog;
pub mod state;
pub mod translation;
pub mod utils;

pub use catalog::{chunk_items, Catalog, Chunk, Item, ItemChunker};
pub use state::{BarProgress, NoProgress, ProgressObserver, TranslationStats};
pub use translation::{
    create_provider, translate_catalog_file, PromptTransport, Provider, ProviderKind, RunReport,
    TranslationOrchestrator, TranslationResult,
};
pub use utils::{AppConfig, Result, RunConfig, TranslatorError};
