//! UNL Retrieval and Key Derivation Tool
//!
//! Fetches a published XRP Ledger UNL, derives the base58 validation keys,
//! and prints the status report as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use unl_manifest::{UnlClient, UnlReport, DEFAULT_UNL_URL};

#[derive(Parser)]
#[command(name = "unl-parser")]
#[command(about = "Retrieve a published UNL and derive its validation keys")]
#[command(version)]
struct Cli {
    /// Address of the published UNL
    #[arg(long, default_value = DEFAULT_UNL_URL)]
    url: String,

    /// Derive a single raw public key (hex) instead of fetching a UNL
    #[arg(long)]
    key: Option<String>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Some(raw_key) = cli.key {
        let encoded = unl_keys::derive(&raw_key).context("key derivation failed")?;
        println!("{encoded}");
        return Ok(());
    }

    let client = UnlClient::new(cli.url).context("failed to build HTTP client")?;
    let report = UnlReport::collect(&client).await;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("failed to serialize report")?;

    println!("{rendered}");
    Ok(())
}
