//! Verifact Control - CLI for fact-checking claims.
//!
//! Thin presentation layer over `verifact_core`: validates input,
//! runs one fact check, renders the result.

mod render;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use verifact_core::GeminiClient;

#[derive(Parser)]
#[command(name = "verifactctl")]
#[command(about = "Fact-check a claim or link against a generative model", long_about = None)]
#[command(version)]
struct Cli {
    /// The claim (free text or URL) to verify
    #[arg(required = true, trailing_var_arg = true)]
    claim: Vec<String>,

    /// Print the raw result as JSON
    #[arg(long)]
    json: bool,

    /// Model identifier to use
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let claim = cli.claim.join(" ");
    let claim = claim.trim();
    if claim.is_empty() {
        bail!("Claim is empty. Provide text or a link to verify.");
    }

    // Missing credential is the one hard failure; report it before
    // touching the network.
    let mut client = GeminiClient::from_env()?;
    if let Some(model) = cli.model {
        client = client.with_model(model);
    }

    let result = verifact_core::fact_check_with(&client, claim).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render::print_result(&result);
    }

    Ok(())
}
