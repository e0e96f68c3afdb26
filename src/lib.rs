//! zonefeed — parking-zone feed normalizer.
//!
//! Reads one provider's raw payload, lowers it through the matching adapter
//! in [`zonefeed_providers`] and normalizes the zones with
//! [`zonefeed_core::normalize_batch`] into the canonical record format.
//!
//! ```text
//! payload.json ──► adapter ──► RawZone* ──► normalize_batch ──► <provider>.json
//! ```
//!
//! The binary in `main.rs` only parses arguments and installs logging; the
//! whole flow lives in [`run`] so integration tests can drive it directly.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use zonefeed_core::config::{Config, OutputConfig};
use zonefeed_core::{normalize_batch, CanonicalZoneRecord};
use zonefeed_providers::Provider;

/// Output path meaning "write to stdout".
pub const STDOUT: &str = "-";

#[derive(Debug, Parser)]
#[command(
    name = "zonefeed",
    about = "Normalize a parking provider's zone payload into canonical zone records"
)]
pub struct Cli {
    /// Provider the payload comes from.
    #[arg(long, value_enum)]
    pub provider: ProviderArg,

    /// Raw provider payload (JSON).
    #[arg(long)]
    pub input: PathBuf,

    /// Output file; `-` writes to stdout. Defaults to `<provider>.json`.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Config file; defaults to `./zonefeed.toml` when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Europark,
    Parkimine,
    Snabb,
}

impl From<ProviderArg> for Provider {
    fn from(value: ProviderArg) -> Self {
        match value {
            ProviderArg::Europark => Provider::Europark,
            ProviderArg::Parkimine => Provider::Parkimine,
            ProviderArg::Snabb => Provider::Snabb,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub zones: usize,
    pub records: usize,
    /// `None` when the records went to stdout.
    pub output: Option<PathBuf>,
}

/// Fixed provider id from the `[providers]` config section.
pub fn provider_id(config: &Config, provider: Provider) -> u32 {
    match provider {
        Provider::Europark => config.providers.europark,
        Provider::Parkimine => config.providers.parkimine,
        Provider::Snabb => config.providers.snabb,
    }
}

/// Run one normalization. The output is written only after every zone was
/// normalized; a fatal error leaves any existing output untouched.
pub fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    let provider = Provider::from(cli.provider);

    let json = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let zones = provider.load_zones(&json, provider_id(&config, provider))?;
    let zone_count = zones.len();
    let records = normalize_batch(zones)
        .with_context(|| format!("normalizing {provider} payload {}", cli.input.display()))?;

    let rendered = render(&records, &config.output)?;
    let output = match cli.output.as_deref() {
        Some(path) if path == Path::new(STDOUT) => None,
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(format!("{provider}.json"))),
    };
    match &output {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.write_all(b"\n")?;
        }
    }

    tracing::info!(
        provider = %provider,
        "normalized {} of {} zones",
        records.len(),
        zone_count
    );
    Ok(RunSummary {
        zones: zone_count,
        records: records.len(),
        output,
    })
}

/// Serialize records per the `[output]` config.
pub fn render(records: &[CanonicalZoneRecord], output: &OutputConfig) -> anyhow::Result<Vec<u8>> {
    if !output.pretty {
        return Ok(serde_json::to_vec(records)?);
    }
    let indent = " ".repeat(output.indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}
