use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use glossdb_types::{SourceRecord, Translations};

use crate::error::LoadError;

/// Load the headerless `lemma,pos,sense_id,display_group_id` CSV
pub fn read_source_records(path: &Path) -> Result<Vec<SourceRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    tracing::info!("Loading source records from {}", path.display());
    let records = parse_source_records(File::open(path)?)?;
    tracing::info!("Loaded {} source records", records.len());
    Ok(records)
}

/// Parse source records, skipping rows that do not fit the record layout
pub fn parse_source_records<R: Read>(reader: R) -> Result<Vec<SourceRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in csv_reader.deserialize::<SourceRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => tracing::warn!("Skipping malformed source row {}: {}", row + 1, e),
        }
    }
    Ok(records)
}

/// Load `{"{lemma}_{pos}": [[canonical, variant...], ...]}`
pub fn load_translations(path: &Path) -> Result<Translations, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    let reader = BufReader::new(File::open(path)?);
    let translations: Translations = serde_json::from_reader(reader)?;
    tracing::info!("Loaded {} translation entries from {}", translations.len(), path.display());
    Ok(translations)
}

#[cfg(test)]
mod tests {
    use glossdb_types::PartOfSpeech;

    use super::*;

    #[test]
    fn test_parse_source_records() {
        let csv = "run,verb,1,1\n\"hold on, please\",other,2,5\n-ish,adjective,3,6\n";
        let records = parse_source_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], SourceRecord::new("run", PartOfSpeech::Verb, 1, 1));
        assert_eq!(records[1].lemma, "hold on, please");
        assert_eq!(records[1].pos, PartOfSpeech::Other);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let csv = "run,verb,1,1\nbroken,noun,abc,1\nshort,noun\nwalk,preposition,4,2\n";
        let records = parse_source_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], SourceRecord::new("walk", PartOfSpeech::Other, 4, 2));
    }

    #[test]
    fn test_missing_files() {
        assert!(matches!(
            read_source_records(Path::new("/nonexistent/records.csv")),
            Err(LoadError::FileNotFound(_))
        ));
        assert!(matches!(
            load_translations(Path::new("/nonexistent/translations.json")),
            Err(LoadError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_load_translations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.json");
        std::fs::write(&path, r#"{"run_verb": [["courir", "cours"]], "hello_other": [["bonjour"]]}"#).unwrap();

        let translations = load_translations(&path).unwrap();
        assert_eq!(translations.len(), 2);
        assert!(translations.get("hello", PartOfSpeech::Other).is_some());
    }
}
