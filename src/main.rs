use anyhow::Result;
use slotfinder::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
