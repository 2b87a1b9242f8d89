use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Corpus sampling against the indexer
    #[error("Sampler error: {0}")]
    Sampler(#[from] SamplerError),

    /// File and socket I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Indexer query error types
#[derive(Error, Debug)]
pub enum SamplerError {
    /// Request could not be sent or the connection failed
    #[error("Indexer request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Indexer answered with a non-success HTTP status
    #[error("Indexer returned HTTP {status} for {predicate}")]
    Status { predicate: String, status: u16 },

    /// Indexer response body was not the expected JSON
    #[error("Invalid indexer response: {0}")]
    InvalidResponse(String),

    /// Indexer returned something that is not a transaction id
    #[error("Invalid txid in indexer response: {txid}")]
    InvalidTxid { txid: String },

    /// Writing the corpus output failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for corpus sampling
pub type SamplerResult<T> = Result<T, SamplerError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<serde_json::Error> for SamplerError {
    fn from(err: serde_json::Error) -> Self {
        SamplerError::InvalidResponse(err.to_string())
    }
}
