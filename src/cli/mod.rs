use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// SLP decode oracle and fuzz corpus sampler
#[derive(Parser)]
#[command(name = "slp-oracle")]
#[command(about = "SLP OP_RETURN decode oracle and fuzz corpus sampler")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the decode oracle: GET /<hex-script> returns the decoded message as JSON
    Serve(commands::serve::ServeCommand),
    /// Sample transaction ids per SLP message category from the indexer
    Sample(commands::sample::SampleCommand),
    /// Decode a single hex-encoded script and print the oracle JSON
    Decode(commands::decode::DecodeCommand),
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "info" if not set)
    // Logs go to stderr so sampled txids on stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(command) => command.run().await,
        Commands::Sample(command) => command.run().await,
        Commands::Decode(command) => command.run(),
    }
}
