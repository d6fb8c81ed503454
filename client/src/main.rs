//! `pocasie` command-line browser

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pocasie_client::cli::{self, Cli};
use pocasie_client::ClientConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pocasie=info,pocasie_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = ClientConfig::load()?;
    cli.apply_overrides(&mut config);
    tracing::debug!("Using API at {}", config.api_url);

    let (outcome, _) = cli::run(cli.command, &config, io::stdout()).await;
    Ok(outcome.exit_code())
}
