use std::collections::HashMap;
use std::sync::Arc;

use glossdb_config::Config;
use glossdb_core::{
    DifficultySource, DifficultyTable, FrequencyTable, MorphologyProvider, OriginLemmas, ProviderError,
};
use glossdb_store::{load_translations, write_store, BuildError, BuildSummary, LemmaStoreBuilder, LoadError};
use glossdb_types::SourceRecord;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Read-only inputs shared by every language pass
pub struct PassContext {
    pub config: Config,
    pub records: Vec<SourceRecord>,
    /// Morphology of the origin language, if one is available
    pub morphology: Option<Arc<dyn MorphologyProvider>>,
}

#[derive(Debug)]
pub struct PassOutcome {
    pub language: String,
    pub result: Result<BuildSummary, BuildError>,
}

impl PassOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run one pass per language, at most `config.workers` at once.
///
/// A failed pass is reported in its outcome and never stops the others.
/// Outcomes come back in the order of `languages`.
pub async fn run_passes(context: Arc<PassContext>, languages: Vec<String>) -> Vec<PassOutcome> {
    let semaphore = Arc::new(Semaphore::new(context.config.workers.max(1)));
    let mut tasks = JoinSet::new();
    let mut task_languages = HashMap::new();

    for language in &languages {
        let context = Arc::clone(&context);
        let semaphore = Arc::clone(&semaphore);
        let lang = language.clone();
        let handle = tasks.spawn(async move {
            // never closed, so only the pool size bounds this
            let _permit = semaphore.acquire_owned().await.ok();
            build_language(context, &lang).await
        });
        task_languages.insert(handle.id(), language.clone());
    }

    let mut results = HashMap::new();
    while let Some(joined) = tasks.join_next_with_id().await {
        let (id, result) = match joined {
            Ok((id, result)) => (id, result),
            Err(e) => (e.id(), Err(BuildError::Join(e))),
        };
        let Some(language) = task_languages.remove(&id) else {
            continue;
        };
        match &result {
            Ok(summary) => tracing::info!("{} done: {} rows", language, summary.rows),
            Err(e) => tracing::error!("{} failed: {}", language, e),
        }
        results.insert(language, result);
    }

    languages
        .into_iter()
        .filter_map(|language| {
            let result = results.remove(&language)?;
            Some(PassOutcome { language, result })
        })
        .collect()
}

async fn build_language(context: Arc<PassContext>, language: &str) -> Result<BuildSummary, BuildError> {
    let config = &context.config;
    let sources = &config.sources;
    tracing::info!("Starting {} pass", language);

    let rows = if config.is_origin(language) {
        let morphology = context
            .morphology
            .clone()
            .ok_or_else(|| ProviderError::MorphologyUnavailable(language.to_string()))?;
        let curated = OriginLemmas::load_from_file(&sources.origin_lemmas_path(language))
            .map_err(LoadError::from)?;

        let pass_context = Arc::clone(&context);
        let lang = language.to_string();
        tokio::task::spawn_blocking(move || {
            LemmaStoreBuilder::origin(&lang, morphology.as_ref(), &curated).build_rows(&pass_context.records)
        })
        .await??
    } else {
        let translations = load_translations(&sources.translations_path(language))?;
        let curated = DifficultyTable::load_optional(&sources.difficulty_path(language))
            .map_err(LoadError::from)?;
        let frequency = match curated {
            Some(_) => FrequencyTable::new(),
            None => load_frequency(config, language),
        };

        let pass_context = Arc::clone(&context);
        let lang = language.to_string();
        tokio::task::spawn_blocking(move || {
            let difficulty = match &curated {
                Some(table) => DifficultySource::Curated(table),
                None => DifficultySource::Frequency(&frequency),
            };
            LemmaStoreBuilder::translated(&lang, &translations, difficulty).build_rows(&pass_context.records)
        })
        .await??
    };

    let path = config.output.database_path(language, &config.gloss_lang);
    let summary = write_store(language, &path, &rows, config.output.is_segmented(language)).await?;
    Ok(summary)
}

/// Frequency table of `language`, empty when none is on disk
fn load_frequency(config: &Config, language: &str) -> FrequencyTable {
    let mut frequency = FrequencyTable::new();
    let path = config.sources.frequency_path(language);
    if let Err(e) = frequency.load_language(language, &path) {
        tracing::warn!("No frequency data for {}: {}", language, e);
    }
    frequency
}
