//! Simple Ledger Protocol message decoding
//!
//! - **script** - tokenizes raw script bytes into pushdata/opcode elements
//! - **decoder** - validates the OP_RETURN/LOKAD envelope and dispatches
//! - **validators** - GENESIS, MINT and SEND field schemas
//! - **encoder** - canonical script encoding, the inverse of the decoder
//! - **message** - decoded message types
//! - **error** - decode failure taxonomy

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod message;
pub mod script;
pub mod validators;

pub use decoder::{decode, SlpEnvelope};
pub use encoder::encode;
pub use error::{SlpError, SlpResult};
pub use message::{
    GenesisFields, MintFields, SendFields, SlpBody, SlpMessage, TokenId, TokenType,
    TransactionType,
};
pub use script::{tokenize, ScriptElement, Tokenizer};
