//! In-memory indexer transport
//!
//! Replays canned response bodies in order and records every URL requested.

use slp_oracle::errors::{SamplerError, SamplerResult};
use slp_oracle::sampler::IndexerTransport;
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct MockIndexer {
    /// `None` simulates an HTTP 503 from the indexer
    responses: Mutex<VecDeque<Option<String>>>,
    requests: Mutex<Vec<String>>,
}

impl MockIndexer {
    pub fn new(responses: Vec<Option<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Responses listing the given txids under `c`
    pub fn with_txids(batches: &[&[&str]]) -> Self {
        Self::new(batches.iter().map(|txids| Some(txid_body(txids))).collect())
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl IndexerTransport for MockIndexer {
    async fn get(&self, predicate: &str, url: &str) -> SamplerResult<String> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Some(body)) => Ok(body),
            _ => Err(SamplerError::Status {
                predicate: predicate.to_string(),
                status: 503,
            }),
        }
    }
}

/// JSON body in the indexer's `{ "c": [{ "txid": ... }] }` shape
pub fn txid_body(txids: &[&str]) -> String {
    let items: Vec<_> = txids
        .iter()
        .map(|txid| serde_json::json!({ "txid": txid }))
        .collect();
    serde_json::json!({ "c": items, "u": [] }).to_string()
}

/// A syntactically valid txid built from one repeated hex digit
pub fn txid(digit: char) -> String {
    std::iter::repeat(digit).take(64).collect()
}
