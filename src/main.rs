//! `cv2`: render a JSON message document into platform payloads.
//!
//! Reads a [`MessageDocument`] from a file or stdin and prints the native
//! and/or legacy message body, or just the validation report.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use discord_cv2::{ComponentLimits, MessageBuilder, MessageDocument};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "cv2", version)]
struct Cli {
    /// Message document JSON; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Which payload to print.
    #[arg(long, value_enum, default_value_t = Format::Native)]
    format: Format,

    /// Print the validation report instead of a payload.
    #[arg(long)]
    validate: bool,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Native,
    Legacy,
    Both,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let document = read_document(cli.file.as_ref())?;
    let builder = document
        .into_builder(ComponentLimits::from_env())
        .context("build message")?;

    let report = builder.validate();
    for warning in &report.warnings {
        warn!(%warning, "message validation");
    }

    if cli.validate {
        print_json(&report, cli.compact)?;
        return Ok(if report.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    info!(
        components = builder.component_count(),
        text_length = builder.text_length(),
        "message built"
    );
    render(&builder, cli.format, cli.compact)?;
    Ok(ExitCode::SUCCESS)
}

fn read_document(path: Option<&PathBuf>) -> anyhow::Result<MessageDocument> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read document '{}'", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("read document from stdin")?;
            raw
        }
    };

    serde_json::from_str(&raw).context("parse message document")
}

fn render(builder: &MessageBuilder, format: Format, compact: bool) -> anyhow::Result<()> {
    match format {
        Format::Native => {
            let payload = builder.native_payload().context("emit native payload")?;
            print_json(&payload, compact)
        }
        Format::Legacy => {
            let payload = builder.legacy_payload().context("emit legacy payload")?;
            print_json(&payload, compact)
        }
        Format::Both => {
            let native = builder.native_payload().context("emit native payload")?;
            let legacy = builder.legacy_payload().context("emit legacy payload")?;
            print_json(&serde_json::json!({ "native": native, "legacy": legacy }), compact)
        }
    }
}

fn print_json(value: &impl Serialize, compact: bool) -> anyhow::Result<()> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("serialize output")?;

    println!("{json}");
    Ok(())
}
