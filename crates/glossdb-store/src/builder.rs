use std::path::{Path, PathBuf};

use glossdb_core::{
    DifficultySource, FormExpander, MorphPos, MorphologyProvider, OriginLemmas, ProviderError,
    TranslationResolver,
};
use glossdb_types::{LemmaRow, SourceRecord, Translations};

use crate::error::StoreError;
use crate::store::LemmaStore;

/// What a language pass needs beyond the source records
#[derive(Clone, Copy)]
pub enum LanguagePlan<'a> {
    /// Headwords are the lemmas; forms come from morphology
    Origin {
        morphology: &'a dyn MorphologyProvider,
        curated: &'a OriginLemmas,
    },
    Translated {
        translations: &'a Translations,
        difficulty: DifficultySource<'a>,
    },
}

/// Builds the lemma table of one language
pub struct LemmaStoreBuilder<'a> {
    language: &'a str,
    plan: LanguagePlan<'a>,
}

impl<'a> LemmaStoreBuilder<'a> {
    pub fn new(language: &'a str, plan: LanguagePlan<'a>) -> Self {
        Self { language, plan }
    }

    pub fn origin(
        language: &'a str,
        morphology: &'a dyn MorphologyProvider,
        curated: &'a OriginLemmas,
    ) -> Self {
        Self::new(language, LanguagePlan::Origin { morphology, curated })
    }

    pub fn translated(
        language: &'a str,
        translations: &'a Translations,
        difficulty: DifficultySource<'a>,
    ) -> Self {
        Self::new(
            language,
            LanguagePlan::Translated {
                translations,
                difficulty,
            },
        )
    }

    /// One row per record, in `(lemma, pos, sense_id)` order.
    ///
    /// Only an unavailable provider fails the pass.
    pub fn build_rows(&self, records: &[SourceRecord]) -> Result<Vec<LemmaRow>, ProviderError> {
        let mut ordered: Vec<&SourceRecord> = records.iter().collect();
        ordered.sort_by(|a, b| a.pass_order().cmp(&b.pass_order()));

        tracing::info!("Building {} rows for {}", ordered.len(), self.language);

        let rows = match self.plan {
            LanguagePlan::Origin { morphology, curated } => {
                let expander = FormExpander::new(morphology);
                ordered
                    .into_iter()
                    .map(|record| origin_row(&expander, curated, record))
                    .collect::<Result<Vec<_>, _>>()?
            }
            LanguagePlan::Translated {
                translations,
                difficulty,
            } => {
                // key set lives exactly as long as this pass
                let mut resolver = TranslationResolver::new(self.language, translations, difficulty);
                let rows = ordered
                    .into_iter()
                    .map(|record| resolver.resolve(record))
                    .collect::<Result<Vec<_>, _>>()?;
                tracing::debug!(
                    "{} claimed {} display group keys",
                    self.language,
                    resolver.inserted_keys().len()
                );
                rows
            }
        };

        Ok(rows)
    }
}

fn origin_row(
    expander: &FormExpander<'_>,
    curated: &OriginLemmas,
    record: &SourceRecord,
) -> Result<LemmaRow, ProviderError> {
    let forms = expander.expand_forms(&record.lemma, MorphPos::from_source(record.pos))?;
    Ok(LemmaRow::new(
        record.sense_id,
        curated.is_enabled(record.sense_id),
        record.lemma.clone(),
        record.pos,
        curated.difficulty(&record.lemma),
    )
    .with_forms(forms))
}

/// Outcome of a written language pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub language: String,
    pub path: PathBuf,
    pub rows: u64,
    pub enabled: usize,
}

/// Persist a finished pass into a fresh database at `path`.
///
/// The table is built next to `path` and renamed over it once complete, so a
/// failed write leaves any previous database in place.
pub async fn write_store(
    language: &str,
    path: &Path,
    rows: &[LemmaRow],
    segmented: bool,
) -> Result<BuildSummary, StoreError> {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".partial");
    let staging = PathBuf::from(staging);

    let written = match stage_table(&staging, rows, segmented).await {
        Ok(written) => written,
        Err(e) => {
            if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
                tracing::debug!("Could not remove {}: {}", staging.display(), cleanup);
            }
            return Err(e);
        }
    };
    tokio::fs::rename(&staging, path).await?;

    let summary = BuildSummary {
        language: language.to_string(),
        path: path.to_path_buf(),
        rows: written,
        enabled: rows.iter().filter(|row| row.enabled).count(),
    };
    tracing::info!(
        "Wrote {} rows ({} enabled) for {} to {}",
        summary.rows,
        summary.enabled,
        language,
        path.display()
    );
    Ok(summary)
}

async fn stage_table(path: &Path, rows: &[LemmaRow], segmented: bool) -> Result<u64, StoreError> {
    let store = LemmaStore::create(path).await?;
    let result = store.write_table(rows, segmented).await;
    store.close().await;
    result
}
