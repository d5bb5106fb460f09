//! PostAPI Studio
//!
//! Command-line dashboard for the PostAPI mock API builder.

use clap::Parser;
use colored::Colorize;
use postapi_cli::Cli;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_level = match cli.global.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = postapi_cli::run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
