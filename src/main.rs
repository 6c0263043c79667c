use anyhow::Result;
use workcal::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
