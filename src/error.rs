use thiserror::Error;

/// Errors raised outside the ledger core: transport, seed fixtures and encoding.
///
/// The ledger itself is infallible. An unknown account is never an error.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
