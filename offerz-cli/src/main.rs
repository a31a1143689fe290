//! offerz - terminal front end for the ClickOfferz catalog

mod cli;
mod commands;
mod logger;
mod render;

use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _guard = logger::init_logger(cli.log_dir.as_deref())?;

    commands::run(cli).await
}
