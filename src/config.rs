use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

/// Default SLPDB query endpoint used for corpus sampling
pub const DEFAULT_INDEXER_URL: &str = "https://slpdb.fountainhead.cash/q/";

/// Application configuration loaded from slp-oracle.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub oracle: OracleConfig,
    pub indexer: IndexerConfig,
}

/// Decode oracle HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    pub bind: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8078".to_string(),
        }
    }
}

/// Indexer settings for the corpus sampler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexerConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Result limit for the GENESIS/MINT/SEND/invalid categories
    pub narrow_limit: usize,
    /// Result limit for the unfiltered sample
    pub broad_limit: usize,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INDEXER_URL.to_string(),
            timeout_seconds: 60,
            narrow_limit: 1,
            broad_limit: 10_000,
        }
    }
}

impl AppConfig {
    /// Load configuration from slp-oracle.toml and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let oracle = OracleConfig::default();
        let indexer = IndexerConfig::default();

        let config = Config::builder()
            .set_default("oracle.bind", oracle.bind)?
            .set_default("indexer.base_url", indexer.base_url)?
            .set_default("indexer.timeout_seconds", indexer.timeout_seconds)?
            .set_default("indexer.narrow_limit", indexer.narrow_limit as i64)?
            .set_default("indexer.broad_limit", indexer.broad_limit as i64)?
            // Load from slp-oracle.toml if it exists
            .add_source(File::with_name("slp-oracle").required(false))
            // SLP_ORACLE_INDEXER__BASE_URL etc. override file settings
            .add_source(
                config::Environment::with_prefix("SLP_ORACLE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.indexer.narrow_limit == 0 || app_config.indexer.broad_limit == 0 {
            return Err(ConfigError::Message(
                "indexer limits must be at least 1".to_string(),
            ));
        }

        Ok(app_config)
    }
}
