use std::path::Path;
use std::str::FromStr;

use glossdb_core::difficulty::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use glossdb_types::{LemmaRow, PartOfSpeech};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::error::StoreError;

const CREATE_TABLE: &str = "CREATE TABLE lemmas (sense_id INTEGER PRIMARY KEY, enabled INTEGER, lemma TEXT, pos_type TEXT, short_def TEXT DEFAULT '', full_def TEXT DEFAULT '', difficulty INTEGER, example TEXT DEFAULT '', forms TEXT DEFAULT '')";

const INSERT_ROW: &str = "INSERT INTO lemmas (sense_id, enabled, lemma, pos_type, short_def, full_def, difficulty, example, forms) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

const SELECT_COLUMNS: &str =
    "SELECT sense_id, enabled, lemma, pos_type, short_def, full_def, difficulty, example, forms FROM lemmas";

#[derive(Debug, sqlx::FromRow)]
struct StoredLemma {
    sense_id: i64,
    enabled: bool,
    lemma: String,
    pos_type: String,
    short_def: String,
    full_def: String,
    difficulty: i64,
    example: String,
    forms: String,
}

impl From<StoredLemma> for LemmaRow {
    fn from(stored: StoredLemma) -> Self {
        let difficulty = stored
            .difficulty
            .clamp(MIN_DIFFICULTY as i64, MAX_DIFFICULTY as i64) as u8;
        let mut row = LemmaRow::new(
            stored.sense_id,
            stored.enabled,
            stored.lemma,
            PartOfSpeech::from_label(&stored.pos_type),
            difficulty,
        )
        .with_forms(LemmaRow::split_forms_column(&stored.forms));
        row.short_def = stored.short_def;
        row.full_def = stored.full_def;
        row.example = stored.example;
        row
    }
}

/// SQLite table of lemma rows for one language pair
pub struct LemmaStore {
    pool: SqlitePool,
}

impl LemmaStore {
    /// Create a fresh database file, replacing any previous build
    pub async fn create(path: &Path) -> Result<Self, StoreError> {
        if tokio::fs::try_exists(path).await? {
            tokio::fs::remove_file(path).await?;
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);
        let store = Self::connect(options).await?;
        store.create_table().await?;
        tracing::debug!("Created lemma table in {}", path.display());
        Ok(store)
    }

    /// Open a built database for reading
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new().filename(path).read_only(true);
        Self::connect(options).await
    }

    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let store = Self::connect(options).await?;
        store.create_table().await?;
        Ok(store)
    }

    async fn connect(options: SqliteConnectOptions) -> Result<Self, StoreError> {
        // one connection: the in-memory database lives and dies with it
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    async fn create_table(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert all rows in one transaction
    pub async fn insert_rows(&self, rows: &[LemmaRow]) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for row in rows {
            let result = sqlx::query(INSERT_ROW)
                .bind(row.sense_id)
                .bind(row.enabled)
                .bind(&row.lemma)
                .bind(row.pos.as_str())
                .bind(&row.short_def)
                .bind(&row.full_def)
                .bind(row.difficulty as i64)
                .bind(&row.example)
                .bind(row.forms_column())
                .execute(&mut *tx)
                .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Secondary index on `(lemma, pos_type)`, plus `forms` for segmented languages
    pub async fn create_index(&self, segmented: bool) -> Result<(), StoreError> {
        let statement = if segmented {
            "CREATE INDEX idx_lemmas ON lemmas (lemma, pos_type, forms)"
        } else {
            "CREATE INDEX idx_lemmas ON lemmas (lemma, pos_type)"
        };
        sqlx::query(statement).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert rows then index them
    pub async fn write_table(&self, rows: &[LemmaRow], segmented: bool) -> Result<u64, StoreError> {
        let inserted = self.insert_rows(rows).await?;
        self.create_index(segmented).await?;
        Ok(inserted)
    }

    pub async fn fetch_row(&self, sense_id: i64) -> Result<Option<LemmaRow>, StoreError> {
        let query = format!("{SELECT_COLUMNS} WHERE sense_id = ?");
        let stored = sqlx::query_as::<_, StoredLemma>(&query)
            .bind(sense_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(stored.map(LemmaRow::from))
    }

    /// Rows of one lemma and part of speech, by sense id
    pub async fn lookup(&self, lemma: &str, pos: PartOfSpeech) -> Result<Vec<LemmaRow>, StoreError> {
        let query = format!("{SELECT_COLUMNS} WHERE lemma = ? AND pos_type = ? ORDER BY sense_id");
        let stored = sqlx::query_as::<_, StoredLemma>(&query)
            .bind(lemma)
            .bind(pos.as_str())
            .fetch_all(&self.pool)
            .await?;
        Ok(stored.into_iter().map(LemmaRow::from).collect())
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lemmas")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Columns covered by `idx_lemmas`, empty before the index exists
    pub async fn index_columns(&self) -> Result<Vec<String>, StoreError> {
        let columns: Vec<(i64, i64, String)> = sqlx::query_as("PRAGMA index_info('idx_lemmas')")
            .fetch_all(&self.pool)
            .await?;
        Ok(columns.into_iter().map(|(_, _, name)| name).collect())
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
