use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use glossdb_config::Config;
use glossdb_core::MorphologyProvider;
use glossdb_lang_english::EnglishInflector;
use glossdb_store::{extract_source_records, read_source_records};
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod profile;
pub mod worker;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::worker::{run_passes, PassContext, PassOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = profile::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Build { lemma_langs } => {
            let languages = profile::select_languages(&config, lemma_langs);
            let outcomes = build(config, languages).await?;
            report(&outcomes)
        }
        Command::Extract { klld, output } => {
            let output = output.unwrap_or_else(|| default_extract_path(&config));
            let written = extract_source_records(&klld, &output)
                .await
                .with_context(|| format!("Failed to extract {}", klld.display()))?;
            tracing::info!("Wrote {} source records to {}", written, output.display());
            Ok(())
        }
    }
}

/// Load the shared inputs once, then run every language pass
pub async fn build(config: Config, languages: Vec<String>) -> anyhow::Result<Vec<PassOutcome>> {
    let records_path = config.sources.source_records_path(&config.origin_lang);
    let records = read_source_records(&records_path)
        .with_context(|| format!("Failed to read source records {}", records_path.display()))?;

    let morphology = origin_morphology(&config)?;
    let context = Arc::new(PassContext {
        config,
        records,
        morphology,
    });

    tracing::info!("Building {} languages", languages.len());
    Ok(run_passes(context, languages).await)
}

fn origin_morphology(config: &Config) -> anyhow::Result<Option<Arc<dyn MorphologyProvider>>> {
    if config.origin_lang != "en" {
        tracing::warn!("No morphology for origin language {}", config.origin_lang);
        return Ok(None);
    }
    let inflector = EnglishInflector::with_lexicon_file(config.sources.inflection_lexicon.as_deref())
        .context("Failed to load inflection lexicon")?;
    let morphology: Arc<dyn MorphologyProvider> = Arc::new(inflector);
    Ok(Some(morphology))
}

fn default_extract_path(config: &Config) -> PathBuf {
    config.sources.source_records_path(&config.origin_lang)
}

fn report(outcomes: &[PassOutcome]) -> anyhow::Result<()> {
    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|outcome| !outcome.is_ok())
        .map(|outcome| outcome.language.as_str())
        .collect();

    for outcome in outcomes {
        if let Ok(summary) = &outcome.result {
            tracing::info!(
                "{}: {} rows, {} enabled -> {}",
                summary.language,
                summary.rows,
                summary.enabled,
                summary.path.display()
            );
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} of {} language passes failed: {}", failed.len(), outcomes.len(), failed.join(", "))
    }
}
