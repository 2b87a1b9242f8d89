use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::oracle::server;
use clap::Args;
use std::net::SocketAddr;
use tracing::info;

/// Serve the SLP decode oracle over HTTP
#[derive(Args)]
pub struct ServeCommand {
    /// Address to listen on (overrides slp-oracle.toml)
    #[arg(long)]
    pub bind: Option<String>,
}

impl ServeCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

        let bind = self.bind.clone().unwrap_or(config.oracle.bind);
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid bind address '{}': {}", bind, e)))?;

        info!("Starting SLP decode oracle on {}", addr);
        server::serve(addr).await?;
        Ok(())
    }
}
