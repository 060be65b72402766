pub mod orchestrator;
pub mod prompt;
pub mod provider;
pub mod response;
pub mod vendors;

pub use orchestrator::{ChunkReport, RunReport, TranslationOrchestrator, TranslationResult};
pub use prompt::build_prompt;
pub use provider::{PromptTransport, Provider};
pub use response::parse_response;
pub use vendors::{create_provider, ProviderKind};

use crate::catalog::Catalog;
use crate::state::{ProgressObserver, TranslationStats};
use crate::utils::{Result, RunConfig};
use std::path::Path;

/// Loads the catalog at `path`, translates every source string and writes
/// the file back once, after the last chunk.
///
/// Returns `Ok` even when chunks failed; check the report's stats. The file
/// is left untouched when there is nothing to translate.
pub async fn translate_catalog_file(
    path: &Path,
    config: &RunConfig,
    provider: &Provider,
    progress: &mut dyn ProgressObserver,
) -> Result<RunReport> {
    config.validate()?;

    let mut catalog = Catalog::load(path).await?;
    if catalog.is_empty() {
        tracing::warn!(path = %path.display(), "Catalog has no entries");
    }
    if let Some(declared) = catalog.source_language() {
        if declared != config.source_lang_code {
            tracing::warn!(
                declared = %declared,
                requested = %config.source_lang_code,
                "Catalog declares a different source language"
            );
        }
    }

    let items = catalog.items(&config.source_lang_code);

    if items.is_empty() {
        tracing::warn!(
            source = %config.source_lang_name,
            path = %path.display(),
            "No source strings found, nothing to translate"
        );
        return Ok(RunReport {
            results: Vec::new(),
            chunks: Vec::new(),
            stats: TranslationStats::new(0, config.provider_label.clone()),
        });
    }

    tracing::info!(
        strings = items.len(),
        source = %config.source_lang_code,
        target = %config.target_lang_code,
        path = %path.display(),
        "Collected translatable strings"
    );

    let report = TranslationOrchestrator::new(provider, config)
        .run(&mut catalog, &items, progress)
        .await;

    catalog.persist(path).await?;

    Ok(report)
}
