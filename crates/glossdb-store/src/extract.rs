use std::path::Path;

use sqlx::Connection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};

use crate::error::StoreError;

const SOURCE_RECORDS_QUERY: &str = "SELECT lemma, pos_types.label, senses.id, display_lemma_id \
     FROM lemmas JOIN senses ON lemmas.id = display_lemma_id \
     JOIN pos_types ON pos_types.id = senses.pos_type \
     WHERE (full_def IS NOT NULL OR short_def IS NOT NULL) AND lemma NOT LIKE '-%' \
     ORDER BY lemma, pos_type, senses.id";

/// Dump the defined senses of a Kindle KLLD database as source record CSV.
///
/// Returns the number of records written.
pub async fn extract_source_records(klld: &Path, output: &Path) -> Result<usize, StoreError> {
    if !tokio::fs::try_exists(klld).await? {
        return Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("KLLD database not found: {}", klld.display()),
        )));
    }

    let options = SqliteConnectOptions::new().filename(klld).read_only(true);
    let mut conn = SqliteConnection::connect_with(&options).await?;
    let senses: Vec<(String, String, i64, i64)> = sqlx::query_as(SOURCE_RECORDS_QUERY)
        .fetch_all(&mut conn)
        .await?;
    conn.close().await?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output)?;
    for (lemma, label, sense_id, display_lemma_id) in &senses {
        writer.write_record([
            lemma.as_str(),
            label.as_str(),
            sense_id.to_string().as_str(),
            display_lemma_id.to_string().as_str(),
        ])?;
    }
    writer.flush()?;

    tracing::info!("Extracted {} senses from {} to {}", senses.len(), klld.display(), output.display());
    Ok(senses.len())
}

#[cfg(test)]
mod tests {
    use glossdb_types::PartOfSpeech;

    use super::*;
    use crate::sources::read_source_records;

    async fn fake_klld(path: &Path) {
        let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();
        for statement in [
            "CREATE TABLE lemmas (id INTEGER PRIMARY KEY, lemma TEXT)",
            "CREATE TABLE pos_types (id INTEGER PRIMARY KEY, label TEXT)",
            "CREATE TABLE senses (id INTEGER PRIMARY KEY, display_lemma_id INTEGER, pos_type INTEGER, short_def TEXT, full_def TEXT)",
            "INSERT INTO pos_types VALUES (0, 'noun'), (1, 'verb')",
            "INSERT INTO lemmas VALUES (1, 'run'), (2, '-ish'), (3, 'hold on, please'), (4, 'abacus')",
            "INSERT INTO senses VALUES (11, 1, 1, 'move fast', NULL)",
            "INSERT INTO senses VALUES (10, 1, 0, NULL, 'an act of running')",
            "INSERT INTO senses VALUES (12, 1, 1, NULL, NULL)",
            "INSERT INTO senses VALUES (20, 2, 0, 'suffix', NULL)",
            "INSERT INTO senses VALUES (30, 3, 1, 'wait', NULL)",
            "INSERT INTO senses VALUES (40, 4, 0, 'counting frame', NULL)",
        ] {
            sqlx::query(statement).execute(&mut conn).await.unwrap();
        }
        conn.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_extract_source_records() {
        let dir = tempfile::tempdir().unwrap();
        let klld = dir.path().join("kll.en.en.klld");
        let output = dir.path().join("data").join("kindle_all_lemmas.csv");
        fake_klld(&klld).await;

        let written = extract_source_records(&klld, &output).await.unwrap();
        assert_eq!(written, 4);

        let records = read_source_records(&output).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.sense_id).collect();
        // sorted by lemma, pos id, sense id; undefined and suffix senses dropped
        assert_eq!(ids, vec![40, 30, 10, 11]);
        assert_eq!(records[1].lemma, "hold on, please");
        assert_eq!(records[2].pos, PartOfSpeech::Noun);
        assert_eq!(records[3].display_group_id, 1);
    }

    #[tokio::test]
    async fn test_missing_klld() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_source_records(&dir.path().join("missing.klld"), &dir.path().join("out.csv")).await;
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
