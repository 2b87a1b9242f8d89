//! Fuzz corpus sampler
//!
//! Queries an SLP indexer for transaction ids in each message category and
//! writes them one per line. Categories run sequentially in a fixed order; the
//! first failing query aborts the run so a corpus never silently misses a
//! category.

pub mod client;
pub mod query;

pub use client::{HttpIndexer, IndexerTransport};
pub use query::{IndexerQuery, Predicate, TXID_PROJECTION};

use crate::errors::{SamplerError, SamplerResult};
use bitcoin::Txid;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;
use tracing::{info, warn};

/// Indexer response: confirmed matches under `c`
///
/// `c` is required: a body without it is an indexer error, not an empty
/// category.
#[derive(Debug, Deserialize)]
struct IndexerResponse {
    c: Vec<IndexedTransaction>,
}

#[derive(Debug, Deserialize)]
struct IndexedTransaction {
    txid: String,
}

/// One step of a sampling run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePlan {
    pub predicate: Predicate,
    pub limit: usize,
}

impl SamplePlan {
    /// Every category in order, narrow ones at `narrow_limit` and the
    /// unfiltered sample at `broad_limit`
    pub fn all(narrow_limit: usize, broad_limit: usize) -> Vec<SamplePlan> {
        Predicate::ORDERED
            .iter()
            .map(|&predicate| SamplePlan {
                predicate,
                limit: if predicate.is_broad() {
                    broad_limit
                } else {
                    narrow_limit
                },
            })
            .collect()
    }
}

/// Samples transaction ids from an indexer
pub struct CorpusSampler<T: IndexerTransport> {
    transport: T,
    base_url: String,
}

impl<T: IndexerTransport> CorpusSampler<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue one query and return the matching txids in indexer order
    ///
    /// At most `limit` ids are returned even if the indexer sends more.
    pub async fn sample(&self, predicate: Predicate, limit: usize) -> SamplerResult<Vec<String>> {
        let query = IndexerQuery::for_predicate(predicate, limit);
        let body = self
            .transport
            .get(predicate.as_str(), &query.url(&self.base_url))
            .await?;

        let response: IndexerResponse = serde_json::from_str(&body)?;
        if response.c.len() > limit {
            warn!(
                "Indexer returned {} results for '{}' with limit {}; truncating",
                response.c.len(),
                predicate,
                limit
            );
        }

        response
            .c
            .into_iter()
            .take(limit)
            .map(|tx| match Txid::from_str(&tx.txid) {
                Ok(_) => Ok(tx.txid),
                Err(_) => Err(SamplerError::InvalidTxid { txid: tx.txid }),
            })
            .collect()
    }

    /// Run every step of `plan` in order, writing one txid per line
    ///
    /// Returns the total number of lines written.
    pub async fn run<W: Write>(&self, plan: &[SamplePlan], out: &mut W) -> SamplerResult<usize> {
        let mut written = 0;

        for step in plan {
            info!("Sampling '{}' (limit {})", step.predicate, step.limit);
            let txids = self.sample(step.predicate, step.limit).await?;
            info!("Received {} txid(s) for '{}'", txids.len(), step.predicate);

            for txid in &txids {
                writeln!(out, "{}", txid)?;
            }
            written += txids.len();
        }

        out.flush()?;
        Ok(written)
    }
}
