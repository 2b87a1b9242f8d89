//! SLP decoder error taxonomy
//!
//! Each variant is a distinct failure kind so that a differential fuzz driver
//! can compare this decoder's verdict with another implementation's error
//! classes. `NotSlp` is kept apart from the genuine SLP errors: most chain
//! outputs are not SLP at all and that is not a failure worth investigating.

/// Result type for SLP decoding
pub type SlpResult<T> = Result<T, SlpError>;

/// SLP decode failure kinds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlpError {
    /// Pushdata length prefix overruns the script, or an opcode appears where
    /// only pushdata is permitted
    #[error("Malformed script: {0}")]
    MalformedScript(String),

    /// No OP_RETURN, or the LOKAD marker is absent or wrong
    #[error("Not an SLP message: {0}")]
    NotSlp(&'static str),

    #[error("Unsupported token type: {0}")]
    UnsupportedTokenType(String),

    #[error("Unknown transaction type: {0}")]
    UnknownTransactionType(String),

    /// Transaction type is recognised but has no field schema
    #[error("Unsupported transaction type: {0}")]
    UnsupportedTransactionType(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Trailing data: {count} unexpected element(s) after {transaction_type} fields")]
    TrailingData {
        transaction_type: &'static str,
        count: usize,
    },

    #[error("Invalid decimals: {0}")]
    InvalidDecimals(String),

    #[error("Invalid document hash length: {0} bytes (must be 0 or 32)")]
    InvalidHashLength(usize),

    #[error("Invalid token id length: {0} bytes (must be 32)")]
    InvalidTokenId(usize),

    #[error("Invalid mint baton vout: {0}")]
    InvalidMintBaton(String),

    #[error("SEND has no token output quantities")]
    TooFewOutputs,

    #[error("SEND has {0} token output quantities (maximum 19)")]
    TooManyOutputs(usize),

    #[error("Invalid quantity encoding for {field}: {len} bytes (must be 8)")]
    InvalidQuantityEncoding { field: &'static str, len: usize },

    #[error("Invalid NFT1 child message: {0}")]
    InvalidNft1Child(&'static str),
}

impl SlpError {
    /// Stable name of the failure kind, independent of the message text
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedScript(_) => "MalformedScript",
            Self::NotSlp(_) => "NotSlp",
            Self::UnsupportedTokenType(_) => "UnsupportedTokenType",
            Self::UnknownTransactionType(_) => "UnknownTransactionType",
            Self::UnsupportedTransactionType(_) => "UnsupportedTransactionType",
            Self::MissingField(_) => "MissingField",
            Self::TrailingData { .. } => "TrailingData",
            Self::InvalidDecimals(_) => "InvalidDecimals",
            Self::InvalidHashLength(_) => "InvalidHashLength",
            Self::InvalidTokenId(_) => "InvalidTokenId",
            Self::InvalidMintBaton(_) => "InvalidMintBaton",
            Self::TooFewOutputs => "TooFewOutputs",
            Self::TooManyOutputs(_) => "TooManyOutputs",
            Self::InvalidQuantityEncoding { .. } => "InvalidQuantityEncoding",
            Self::InvalidNft1Child(_) => "InvalidNft1Child",
        }
    }

    /// Whether the script simply is not an SLP message
    pub fn is_not_slp(&self) -> bool {
        matches!(self, Self::NotSlp(_))
    }
}
