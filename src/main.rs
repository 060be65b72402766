use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use xcstrings_translator::utils::languages::LANGUAGES;
use xcstrings_translator::utils::LoggingConfig;
use xcstrings_translator::{
    create_provider, translate_catalog_file, AppConfig, BarProgress, RunConfig,
};

/// Translate an Xcode string catalog (.xcstrings) with an LLM provider.
#[derive(Debug, Parser)]
#[command(name = "xcstrings-translator", version, about)]
struct Cli {
    /// Target language code, e.g. fr, de, pt-BR
    target_lang: Option<String>,

    /// AI provider: gemini, openai, claude, deepseek or perplexity
    #[arg(long)]
    provider: Option<String>,

    /// Number of strings sent per request
    #[arg(long)]
    batch_size: Option<usize>,

    /// Source language code
    #[arg(long = "source")]
    source_lang: Option<String>,

    /// Path to the .xcstrings file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Attempts per chunk before it is given up
    #[arg(long)]
    retry_count: Option<usize>,

    /// Delay between attempts of the same chunk
    #[arg(long)]
    retry_delay_ms: Option<u64>,

    /// Chunks allowed in flight at once
    #[arg(long)]
    concurrency: Option<usize>,

    /// TOML configuration file [default: ./config.toml when present]
    #[arg(long)]
    config: Option<String>,

    /// Print supported language codes and exit
    #[arg(long)]
    list_languages: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        let translation = &mut config.translation;
        if let Some(lang) = &self.target_lang {
            translation.target_language = lang.clone();
        }
        if let Some(lang) = &self.source_lang {
            translation.source_language = lang.clone();
        }
        if let Some(provider) = &self.provider {
            translation.provider = provider.clone();
        }
        if let Some(size) = self.batch_size {
            translation.batch_size = size;
        }
        if let Some(path) = &self.file {
            translation.file_path = Some(path.clone());
        }
        if let Some(count) = self.retry_count {
            translation.retry_count = count;
        }
        if let Some(delay) = self.retry_delay_ms {
            translation.retry_delay_ms = delay;
        }
        if let Some(limit) = self.concurrency {
            translation.max_concurrent_chunks = limit;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(logging.directive()?.parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if cli.list_languages {
        for (code, name) in LANGUAGES {
            println!("{:<6} {}", code, name);
        }
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_env();
    cli.apply(&mut config);

    init_tracing(&config.logging)?;

    let run = RunConfig::from_app_config(&config)?;

    let Some(path) = config.translation.file_path.clone() else {
        bail!("no catalog file given; pass --file or set XCSTRINGS_FILE_PATH");
    };
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }

    let provider = create_provider(run.provider, &config.providers)?;

    tracing::info!(
        provider = %run.provider_label,
        source = %format!("{} ({})", run.source_lang_name, run.source_lang_code),
        target = %format!("{} ({})", run.target_lang_name, run.target_lang_code),
        batch_size = run.batch_size,
        "Using AI provider"
    );

    let mut progress = BarProgress::new();
    let report = translate_catalog_file(&path, &run, &provider, &mut progress)
        .await
        .with_context(|| format!("translation of {} failed", path.display()))?;

    if report.stats.total == 0 {
        return Ok(());
    }

    println!();
    println!("Translation completed! Updated file: {}", path.display());
    println!("{}", report.stats);

    for chunk in report.failed_chunks() {
        println!(
            "  chunk {} ({} strings) failed after {} attempts: {}",
            chunk.index + 1,
            chunk.item_count,
            chunk.attempts,
            chunk.error.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(())
}
