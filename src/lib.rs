//! SLP Decode Oracle
//!
//! Reference decoder for Simple Ledger Protocol OP_RETURN messages, exposed
//! over HTTP for differential fuzzing, plus a sampler that pulls real SLP
//! transaction ids from an indexer to seed the fuzz corpus.

pub mod cli;
pub mod config;
pub mod errors;
pub mod oracle;
pub mod sampler;
pub mod slp;
