use crate::errors::AppResult;
use crate::oracle::respond_to_hex;
use clap::Args;
use tracing::info;

/// Decode one hex-encoded script and print the oracle response
#[derive(Args)]
pub struct DecodeCommand {
    /// Hex-encoded output script
    pub script_hex: String,

    /// Pretty-print the JSON response
    #[arg(long)]
    pub pretty: bool,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let response = respond_to_hex(&self.script_hex);
        if let Some(kind) = response.kind {
            info!("Decode failed: {}", kind);
        }

        let json = if self.pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        println!("{}", json);
        Ok(())
    }
}
