use crate::catalog::{Catalog, Chunk, Item, ItemChunker};
use crate::state::{ProgressObserver, TranslationStats};
use crate::translation::provider::Provider;
use crate::utils::{Result, RunConfig, TranslatorError};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::pin::pin;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub key: String,
    pub translated_text: String,
    pub succeeded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChunkReport {
    pub index: usize,
    pub item_count: usize,
    pub attempts: usize,
    pub error: Option<String>,
}

impl ChunkReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub results: Vec<TranslationResult>,
    pub chunks: Vec<ChunkReport>,
    pub stats: TranslationStats,
}

impl RunReport {
    pub fn failed_chunks(&self) -> impl Iterator<Item = &ChunkReport> {
        self.chunks.iter().filter(|c| !c.succeeded())
    }
}

/// Drives every chunk through the provider, retrying each one a bounded
/// number of times, and merges successful chunks into the catalog in input
/// order.
pub struct TranslationOrchestrator<'a> {
    provider: &'a Provider,
    config: &'a RunConfig,
}

impl<'a> TranslationOrchestrator<'a> {
    pub fn new(provider: &'a Provider, config: &'a RunConfig) -> Self {
        Self { provider, config }
    }

    /// A failed chunk never aborts the run: its keys keep their previous
    /// catalog values and count as errors in the returned stats.
    pub async fn run(
        &self,
        catalog: &mut Catalog,
        items: &[Item],
        progress: &mut dyn ProgressObserver,
    ) -> RunReport {
        let chunker = ItemChunker::new(self.config.batch_size);
        let chunks = chunker.chunk(items);
        let total = items.len();

        let mut stats = TranslationStats::new(total, self.config.provider_label.clone());
        let mut results = Vec::with_capacity(total);
        let mut reports = Vec::with_capacity(chunks.len());
        let mut processed = 0;

        info!(
            items = total,
            chunks = chunker.chunk_count(total),
            batch_size = chunker.chunk_size(),
            concurrency = self.config.max_concurrent_chunks,
            provider = %self.config.provider_label,
            "Starting translation run"
        );
        progress.started(total);
        let started = Instant::now();

        // `buffered` yields in input order, so merging below stays ordered
        // even when more than one request is in flight.
        let mut outcomes = pin!(stream::iter(chunks)
            .map(|chunk| async move {
                let (attempts, outcome) = self.translate_with_retry(&chunk).await;
                (chunk, attempts, outcome)
            })
            .buffered(self.config.max_concurrent_chunks.max(1)));

        while let Some((chunk, attempts, outcome)) = outcomes.next().await {
            let succeeded = outcome.is_ok();

            match outcome {
                Ok(translations) => {
                    for (item, text) in chunk.items.iter().zip(translations) {
                        self.merge_item(catalog, item, text, &mut stats, &mut results);
                    }
                    info!(
                        chunk_index = chunk.index,
                        items = chunk.len(),
                        attempts = attempts,
                        "Chunk translated successfully"
                    );
                    reports.push(ChunkReport {
                        index: chunk.index,
                        item_count: chunk.len(),
                        attempts,
                        error: None,
                    });
                }
                Err(e) => {
                    warn!(
                        chunk_index = chunk.index,
                        items = chunk.len(),
                        error = %e,
                        "Failed to translate chunk, keeping existing values"
                    );
                    stats.record_failure(chunk.len());
                    results.extend(chunk.items.iter().map(|item| TranslationResult {
                        key: item.key.clone(),
                        translated_text: String::new(),
                        succeeded: false,
                    }));
                    reports.push(ChunkReport {
                        index: chunk.index,
                        item_count: chunk.len(),
                        attempts,
                        error: Some(e.to_string()),
                    });
                }
            }

            processed += chunk.len();
            progress.chunk_completed(processed, total, succeeded);
        }

        stats.finish(started.elapsed());
        progress.finished();

        info!(
            success = stats.success_count,
            errors = stats.error_count,
            duration_secs = stats.duration_seconds(),
            "Translation run finished"
        );

        RunReport {
            results,
            chunks: reports,
            stats,
        }
    }

    /// Returns the number of attempts made alongside the outcome.
    async fn translate_with_retry(&self, chunk: &Chunk<'_>) -> (usize, Result<Vec<String>>) {
        let max_attempts = self.config.retry_count.max(1);
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                tokio::time::sleep(self.config.retry_delay()).await;
            }

            debug!(
                chunk_index = chunk.index,
                range = %format!("{}..{}", chunk.start, chunk.end()),
                attempt = attempt,
                "Sending chunk"
            );

            match self
                .provider
                .translate(
                    chunk.items,
                    &self.config.target_lang_name,
                    &self.config.source_lang_name,
                )
                .await
            {
                Ok(translations) => return (attempt, Ok(translations)),
                Err(e) => {
                    warn!(
                        chunk_index = chunk.index,
                        attempt = attempt,
                        max_attempts = max_attempts,
                        error = %e,
                        "Translation attempt failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        let last = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Unknown error".to_string());
        (
            max_attempts,
            Err(TranslatorError::RetriesExhausted {
                attempts: max_attempts,
                last,
            }),
        )
    }

    fn merge_item(
        &self,
        catalog: &mut Catalog,
        item: &Item,
        text: String,
        stats: &mut TranslationStats,
        results: &mut Vec<TranslationResult>,
    ) {
        match catalog.merge_translation(&item.key, &self.config.target_lang_code, &text) {
            Ok(()) => {
                stats.record_success(1);
                results.push(TranslationResult {
                    key: item.key.clone(),
                    translated_text: text,
                    succeeded: true,
                });
            }
            Err(e) => {
                error!(key = %item.key, error = %e, "Failed to merge translation");
                stats.record_failure(1);
                results.push(TranslationResult {
                    key: item.key.clone(),
                    translated_text: String::new(),
                    succeeded: false,
                });
            }
        }
    }
}
