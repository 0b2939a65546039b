mod app;
mod args;
mod classifier;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use app::App;
use args::Cli;

fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the log subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level())?;

    let app = App::from_cli(&cli)?;
    app.run()?;
    Ok(())
}
