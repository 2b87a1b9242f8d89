//! Indexer query construction
//!
//! Queries follow the SLPDB query language: a JSON document that is base64
//! encoded and appended to the indexer's `/q/` endpoint. The `r.f` projection
//! runs on the indexer side and is passed through untouched.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use std::str::FromStr;

/// Indexer-side projection that reduces each match to `{ txid }`
pub const TXID_PROJECTION: &str = "[ .[] | { txid: .tx.h } ]";

/// Message category sampled from the indexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// Outputs the indexer judged invalid SLP
    Invalid,
    Genesis,
    Mint,
    Send,
    /// No filter: a broad sample of everything indexed
    All,
}

impl Predicate {
    /// Fixed sampling order
    pub const ORDERED: [Predicate; 5] = [
        Predicate::Invalid,
        Predicate::Genesis,
        Predicate::Mint,
        Predicate::Send,
        Predicate::All,
    ];

    /// The `find` clause for this category
    pub fn find(&self) -> Value {
        match self {
            Self::Invalid => json!({ "slp.valid": false }),
            Self::Genesis => Self::valid_of_type("GENESIS"),
            Self::Mint => Self::valid_of_type("MINT"),
            Self::Send => Self::valid_of_type("SEND"),
            Self::All => json!({}),
        }
    }

    fn valid_of_type(transaction_type: &str) -> Value {
        json!({
            "slp.valid": true,
            "slp.detail.transactionType": transaction_type,
        })
    }

    /// Whether this is the unfiltered sample that gets the large limit
    pub fn is_broad(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Genesis => "genesis",
            Self::Mint => "mint",
            Self::Send => "send",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Predicate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDERED
            .iter()
            .find(|predicate| predicate.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                format!(
                    "unknown category '{}' (expected one of: invalid, genesis, mint, send, all)",
                    s
                )
            })
    }
}

/// A single indexer query: a `find` predicate with a result limit
#[derive(Debug, Clone, PartialEq)]
pub struct IndexerQuery {
    pub find: Value,
    pub limit: usize,
}

impl IndexerQuery {
    pub fn new(find: Value, limit: usize) -> Self {
        Self { find, limit }
    }

    pub fn for_predicate(predicate: Predicate, limit: usize) -> Self {
        Self::new(predicate.find(), limit)
    }

    /// Full query document
    pub fn to_json(&self) -> Value {
        json!({
            "v": 3,
            "q": {
                "db": ["c"],
                "find": self.find,
                "project": { "tx.h": 1 },
                "limit": self.limit,
            },
            "r": { "f": TXID_PROJECTION },
        })
    }

    /// Base64 of the JSON-encoded query document
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_json().to_string())
    }

    /// Query URL under the indexer's base path
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.encode())
    }
}
