use clap::Parser;
use launchdeck::cli_app::{handle_command, Cli};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "launchdeck=warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    handle_command(cli).await
}
