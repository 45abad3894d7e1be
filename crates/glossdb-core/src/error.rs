/// Failures of the morphology and frequency providers.
///
/// An empty answer is not an error, these only cover a provider that cannot answer at all.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("No frequency data for language: {0}")]
    FrequencyUnavailable(String),

    #[error("Morphology provider unavailable: {0}")]
    MorphologyUnavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
