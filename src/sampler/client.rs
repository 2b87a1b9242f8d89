//! Indexer transport
//!
//! The sampler only needs "GET this URL, give me the body". That seam is the
//! `IndexerTransport` trait so tests can substitute an in-memory indexer.

use crate::config::IndexerConfig;
use crate::errors::{SamplerError, SamplerResult};
use std::time::Duration;
use tracing::debug;

/// Fetches a query URL from the indexer
#[allow(async_fn_in_trait)]
pub trait IndexerTransport {
    /// GET `url` and return the response body; `predicate` names the query
    /// for error reporting
    async fn get(&self, predicate: &str, url: &str) -> SamplerResult<String>;
}

/// HTTPS transport backed by `reqwest`
pub struct HttpIndexer {
    client: reqwest::Client,
}

impl HttpIndexer {
    pub fn new(config: &IndexerConfig) -> SamplerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client })
    }
}

impl IndexerTransport for HttpIndexer {
    async fn get(&self, predicate: &str, url: &str) -> SamplerResult<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SamplerError::Status {
                predicate: predicate.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
