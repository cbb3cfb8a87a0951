use clap::Parser;
use roast_my_book::adapter::inbound::cli::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    run::execute(&cli).await?;
    Ok(())
}
