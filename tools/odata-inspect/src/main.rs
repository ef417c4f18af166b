// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! OData payload inspector
//!
//! Decodes JSON payloads through the model runtime and reports what each
//! field turned into.
//!
//! # Usage
//!
//! ```bash
//! # Show the resolved type and stored properties
//! odata-inspect decode alert.json
//!
//! # Dispatch from a narrower family
//! odata-inspect decode evidence.json --type security.alertEvidence
//!
//! # Re-serialize and fail if the output departs from the input
//! odata-inspect roundtrip page.json --type security.alertCollectionResponse --check
//!
//! # Read from stdin with settings from a file
//! cat alert.json | odata-inspect --config inspect.toml decode -
//! ```

mod config;
mod inspect;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use config::InspectConfig;
use odata_model::json::JsonWriterOptions;
use odata_model::models::type_names;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "odata-inspect")]
#[command(about = "Decode, dispatch and round-trip OData JSON payloads")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deserialize a payload and describe the resulting model
    Decode {
        /// Input JSON file, `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Model family to dispatch from (e.g. `entity`, `security.alert`)
        #[arg(short = 't', long = "type", value_name = "NAME")]
        type_name: Option<String>,

        /// Do not expand nested models
        #[arg(long)]
        flat: bool,
    },

    /// Deserialize then serialize a payload
    Roundtrip {
        /// Input JSON file, `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Model family to dispatch from
        #[arg(short = 't', long = "type", value_name = "NAME")]
        type_name: Option<String>,

        /// Fail when the output differs from the input
        #[arg(long)]
        check: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the accepted model family names
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => InspectConfig::from_file(path)
            .with_context(|| format!("cannot load {}", path.display()))?,
        None => InspectConfig::default(),
    };
    if cli.pretty {
        config.pretty = true;
    }

    init_logging(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Decode {
            input,
            type_name,
            flat,
        } => cmd_decode(&config, &input, type_name.as_deref(), flat),
        Commands::Roundtrip {
            input,
            type_name,
            check,
            output,
        } => cmd_roundtrip(&config, &input, type_name.as_deref(), check, output.as_deref()),
        Commands::Types => {
            for name in type_names() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("cannot read stdin")?;
        return Ok(bytes);
    }
    std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

fn cmd_decode(
    config: &InspectConfig,
    input: &Path,
    type_name: Option<&str>,
    flat: bool,
) -> anyhow::Result<()> {
    let family = type_name.unwrap_or(config.default_type.as_str());
    let factory = inspect::resolve_factory(family)?;
    let bytes = read_input(input)?;
    tracing::info!(family, bytes = bytes.len(), "decoding {}", input.display());

    let model = inspect::decode(&bytes, factory)?;
    let report = inspect::describe(model.as_ref(), config.show_nested && !flat);
    print!("{}", report);
    Ok(())
}

fn cmd_roundtrip(
    config: &InspectConfig,
    input: &Path,
    type_name: Option<&str>,
    check: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let family = type_name.unwrap_or(config.default_type.as_str());
    let factory = inspect::resolve_factory(family)?;
    let bytes = read_input(input)?;

    let options = JsonWriterOptions {
        pretty: config.pretty,
    };
    let result = inspect::roundtrip(&bytes, factory, options)?;

    match output {
        Some(path) => {
            std::fs::write(path, &result.output)
                .with_context(|| format!("cannot write {}", path.display()))?;
            tracing::info!("wrote {} bytes to {}", result.output.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&result.output)?;
            writeln!(stdout)?;
        }
    }

    if !check {
        for difference in &result.differences {
            tracing::warn!("{}", difference);
        }
        return Ok(());
    }
    if !result.differences.is_empty() {
        for difference in &result.differences {
            eprintln!("[DIFF] {}", difference);
        }
        bail!(
            "{} difference(s) between input and output",
            result.differences.len()
        );
    }
    eprintln!("[OK] round trip matches input");
    Ok(())
}
