use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::sampler::{CorpusSampler, HttpIndexer, Predicate, SamplePlan};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Sample SLP transaction ids from the indexer for the fuzz corpus
#[derive(Args)]
pub struct SampleCommand {
    /// Indexer query endpoint (overrides slp-oracle.toml)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Write txids to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Result limit for the invalid/GENESIS/MINT/SEND categories
    #[arg(long)]
    pub narrow_limit: Option<usize>,

    /// Result limit for the unfiltered sample
    #[arg(long)]
    pub broad_limit: Option<usize>,

    /// Sample a single category: invalid, genesis, mint, send or all
    #[arg(long)]
    pub only: Option<Predicate>,
}

impl SampleCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;
        let mut indexer_config = config.indexer;

        // Override with CLI arguments
        if let Some(base_url) = &self.base_url {
            indexer_config.base_url = base_url.clone();
        }
        if let Some(limit) = self.narrow_limit {
            indexer_config.narrow_limit = limit;
        }
        if let Some(limit) = self.broad_limit {
            indexer_config.broad_limit = limit;
        }

        if indexer_config.narrow_limit == 0 || indexer_config.broad_limit == 0 {
            return Err(AppError::InvalidData(
                "sample limits must be at least 1".to_string(),
            ));
        }

        let mut plan = SamplePlan::all(indexer_config.narrow_limit, indexer_config.broad_limit);
        if let Some(only) = self.only {
            plan.retain(|step| step.predicate == only);
        }

        let transport = HttpIndexer::new(&indexer_config)?;
        let sampler = CorpusSampler::new(transport, indexer_config.base_url.clone());

        info!("Sampling {} categories from {}", plan.len(), indexer_config.base_url);

        let mut out: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let written = sampler.run(&plan, &mut out).await?;

        info!("Wrote {} txid(s)", written);
        Ok(())
    }
}
