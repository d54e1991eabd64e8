use clap::Parser;
use dotenvy::dotenv;
use teamsify_core::standard_catalog;
use teamsify_sdk::WebhookClient;
use tracing_subscriber::{EnvFilter, fmt};

mod actions;
mod config;
mod notifier;

use actions::Actions;
use config::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    // stdout 留给 workflow 命令
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initializing logging: {}", e))?;

    let settings = Cli::parse().into_settings();
    let catalog = standard_catalog();
    let client = WebhookClient::new();

    let code = notifier::run(&mut Actions::stdout(), &settings, &catalog, &client).await;
    std::process::exit(code);
}
