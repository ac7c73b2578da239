//! Error types for the Chesed Machine

use thiserror::Error;

/// Main error type for Chesed Machine operations
#[derive(Error, Debug)]
pub enum ChesedError {
    /// Transport failure talking to a remote endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// Remote endpoint answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body could not be understood
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Record was not found in the hosted store
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation for current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl From<reqwest::Error> for ChesedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ChesedError::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            ChesedError::Http {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            ChesedError::Network(err.to_string())
        }
    }
}

/// Result type alias using ChesedError
pub type ChesedResult<T> = Result<T, ChesedError>;

/// Turn a non-2xx response into [`ChesedError::Http`], keeping the body for the log.
pub(crate) async fn check_status(response: reqwest::Response) -> ChesedResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ChesedError::Http {
        status: status.as_u16(),
        body,
    })
}
