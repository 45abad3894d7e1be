use glossdb_core::{ProviderError, TableError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Table(#[from] TableError),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Anything that fails a whole language pass
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to load inputs: {0}")]
    Load(#[from] LoadError),

    #[error("Provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Failed to write lemma table: {0}")]
    Store(#[from] StoreError),

    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
