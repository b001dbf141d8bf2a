use thiserror::Error;

/// Error type that captures the failures this engine can surface.
///
/// Most engines here prefer partial success or defensive defaults over
/// erroring; the variants below cover the cases that genuinely must reach
/// the caller (unusable import input, broken persistence).
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Import error: {0}")]
    Import(String),
}
