use anyhow::Context;
use clap::Parser;
use std::io::Read;

use perpbot::exchange::HyperliquidConnector;
use perpbot::{execute_trade, AppConfig};

/// Submit a single IoC perp order from a JSON trade request.
///
/// Required request fields: coin, side ("buy"|"sell"), size, pk_name.
/// Optional: leverage, reduceOnly, vault_name.
#[derive(Parser, Debug)]
#[command(name = "perpbot")]
struct Cli {
    /// Trade request as a JSON object; read from stdin when omitted.
    request: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_logging();

    let cli = Cli::parse();
    let raw = match cli.request {
        Some(raw) => raw,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading trade request from stdin")?;
            buf
        }
    };
    let args: serde_json::Value =
        serde_json::from_str(&raw).context("trade request is not valid JSON")?;

    let config = AppConfig::from_env();
    let result = execute_trade(&config, &HyperliquidConnector, args).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("perpbot=info")
        .init();
}
