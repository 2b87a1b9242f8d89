#[tokio::main]
async fn main() {
    if let Err(e) = slp_oracle::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
