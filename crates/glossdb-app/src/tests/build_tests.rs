use std::fs;
use std::path::Path;

use glossdb_config::Config;
use glossdb_core::ProviderError;
use glossdb_store::{BuildError, LemmaStore, LoadError};
use glossdb_types::PartOfSpeech;

use crate::build;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture(root: &Path) -> Config {
    let data = root.join("data");
    write(
        &data.join("en").join("kindle_all_lemmas.csv"),
        "run,verb,1,1\nrun,verb,2,1\ntable,noun,3,2\nnot,a,row\n",
    );
    write(
        &data.join("en").join("kindle_enabled_lemmas.json"),
        r#"{"run": [2, 1], "table": [1, 3]}"#,
    );
    write(
        &data.join("fr").join("translations.json"),
        r#"{"run_verb": [["courir", "cours"], ["diriger"]], "table_noun": [["table", "tables"]]}"#,
    );
    write(&data.join("fr").join("frequency.tsv"), "courir\t4.2\ndiriger\t3.1\ntable\t5.5\n");
    // no frequency table for de
    write(&data.join("de").join("translations.json"), r#"{"run_verb": [["laufen", "läuft"]]}"#);
    write(&data.join("zh").join("translations.json"), r#"{"run_verb": [["跑"]]}"#);
    write(&data.join("zh").join("difficulty.json"), r#"{"跑": 2}"#);

    let mut config = Config::default();
    config.sources.data_dir = data;
    config.output.output_dir = root.join("out");
    config.workers = 2;
    config
}

fn langs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_failed_language_leaves_siblings_intact() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture(dir.path());
    let out = config.output.output_dir.clone();

    let outcomes = build(config, langs(&["en", "fr", "de", "es", "zh"])).await.unwrap();
    let languages: Vec<&str> = outcomes.iter().map(|o| o.language.as_str()).collect();
    assert_eq!(languages, vec!["en", "fr", "de", "es", "zh"]);

    assert!(outcomes[0].is_ok());
    assert!(outcomes[1].is_ok());
    assert!(matches!(
        outcomes[2].result,
        Err(BuildError::Provider(ProviderError::FrequencyUnavailable(_)))
    ));
    assert!(matches!(outcomes[3].result, Err(BuildError::Load(LoadError::FileNotFound(_)))));
    assert!(outcomes[4].is_ok());

    assert!(out.join("en").join("kindle_en_en_v0.db").exists());
    assert!(out.join("fr").join("kindle_fr_en_v0.db").exists());
    assert!(!out.join("de").join("kindle_de_en_v0.db").exists());
    assert!(!out.join("es").exists());
}

#[tokio::test]
async fn test_origin_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture(dir.path());
    let path = config.output.database_path("en", "en");

    let outcomes = build(config, langs(&["en"])).await.unwrap();
    let summary = outcomes[0].result.as_ref().unwrap();
    assert_eq!((summary.rows, summary.enabled), (3, 2));

    let store = LemmaStore::open(&path).await.unwrap();
    let run = store.lookup("run", PartOfSpeech::Verb).await.unwrap();
    assert_eq!(run.len(), 2);
    assert!(run[0].enabled);
    assert!(!run[1].enabled);
    assert_eq!(run[0].difficulty, 2);
    assert!(run[0].forms.contains(&"ran".to_string()));
    assert_eq!(store.index_columns().await.unwrap(), vec!["lemma", "pos_type"]);
    store.close().await;
}

#[tokio::test]
async fn test_translated_databases() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture(dir.path());
    let fr_path = config.output.database_path("fr", "en");
    let zh_path = config.output.database_path("zh", "en");

    let outcomes = build(config, langs(&["fr", "zh"])).await.unwrap();
    assert!(outcomes.iter().all(|o| o.is_ok()));

    let fr = LemmaStore::open(&fr_path).await.unwrap();
    let first = fr.fetch_row(1).await.unwrap().unwrap();
    assert_eq!((first.lemma.as_str(), first.enabled, first.difficulty), ("courir", true, 3));
    assert_eq!(first.forms, vec!["cours"]);
    let second = fr.fetch_row(2).await.unwrap().unwrap();
    assert_eq!((second.lemma.as_str(), second.enabled), ("diriger", true));
    let table = fr.fetch_row(3).await.unwrap().unwrap();
    assert_eq!((table.lemma.as_str(), table.difficulty), ("table", 4));
    fr.close().await;

    let zh = LemmaStore::open(&zh_path).await.unwrap();
    assert_eq!(zh.index_columns().await.unwrap(), vec!["lemma", "pos_type", "forms"]);
    let first = zh.fetch_row(1).await.unwrap().unwrap();
    assert_eq!((first.lemma.as_str(), first.enabled, first.difficulty), ("跑", true, 2));
    // every candidate taken, falls back to the default and stays disabled
    let second = zh.fetch_row(2).await.unwrap().unwrap();
    assert_eq!((second.lemma.as_str(), second.enabled), ("跑", false));
    // no translation for table
    let table = zh.fetch_row(3).await.unwrap().unwrap();
    assert_eq!((table.lemma.as_str(), table.enabled, table.difficulty), ("table", false, 1));
    zh.close().await;
}

#[tokio::test]
async fn test_missing_source_records_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fixture(dir.path());
    config.sources.data_dir = dir.path().join("nowhere");

    assert!(build(config, langs(&["fr"])).await.is_err());
}
