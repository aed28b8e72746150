use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tickerdash_core::extract;

#[derive(Debug, Parser)]
#[command(name = "tickerdash_cli")]
struct Args {
    /// Path to the report payload (raw markdown text or JSON). Reads stdin
    /// when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Treat the payload as raw markdown even if it parses as JSON.
    #[arg(long)]
    raw: bool,

    /// Pretty-print the normalized record.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let payload = detect_payload(&text, args.raw);
    let parsed = extract::parse_report(Some(&payload));

    tracing::info!(
        stance = parsed.stance().as_str(),
        statements = parsed.technical.len() + parsed.fundamental.len() + parsed.sentiment.len(),
        "parsed broker analysis"
    );

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&parsed).context("failed to render record")?
    } else {
        serde_json::to_string(&parsed).context("failed to render record")?
    };
    println!("{rendered}");

    Ok(())
}

/// JSON payloads (the structured endpoint generation) pass through as
/// values; anything else is the raw markdown variant.
fn detect_payload(text: &str, force_raw: bool) -> serde_json::Value {
    if !force_raw {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(text.trim()) {
            return value;
        }
    }
    serde_json::Value::String(text.to_string())
}
