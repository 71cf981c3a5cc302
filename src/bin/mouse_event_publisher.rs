//! `mouse-event-publisher`: stream mouse button events as JSON lines.
//!
//! ```text
//! mouse-event-publisher                      # find a mouse under /dev/input
//! mouse-event-publisher /dev/input/event5    # read this node
//! mouse-event-publisher --list               # show every candidate and exit
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout carries only messages.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mouse_reader::{
    Config, DeviceCatalog, DeviceSelector, JsonLinesSink, LogSink, MouseDevice, OutputFormat,
    Publisher,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mouse-event-publisher", version, about)]
struct Cli {
    /// Input node to read (e.g. /dev/input/event5). Omit to auto-discover.
    device: Option<String>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory scanned by auto-discovery.
    #[arg(long)]
    search_dir: Option<PathBuf>,

    /// Output format for forwarded events.
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Print every candidate node with its classification, then exit.
    #[arg(long)]
    list: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    JsonLines,
    Log,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::JsonLines => OutputFormat::JsonLines,
            Format::Log => OutputFormat::Log,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_overrides(cli.device, cli.search_dir, cli.format.map(OutputFormat::from));

    let catalog = DeviceCatalog::in_dir(&config.device.search_dir);

    if cli.list {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for descriptor in catalog.scan() {
            info!(%descriptor, pointer = descriptor.supports_pointer_events, "candidate");
            serde_json::to_writer(&mut out, &descriptor).context("writing device list")?;
            out.write_all(b"\n").context("writing device list")?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let selector = config.device.selector();
    if selector == DeviceSelector::AutoDiscover {
        info!(dir = %config.device.search_dir.display(), "No mouse specified, searching for one");
    }

    let mut mouse = MouseDevice::open_with(selector, &catalog);
    if !mouse.is_readable() {
        match mouse.open_failure() {
            Some(failure) => error!(%failure, "Unable to locate mouse"),
            None => error!("Unable to locate mouse"),
        }
        info!("Try: mouse-event-publisher [DEVICE]");
        return Ok(ExitCode::FAILURE);
    }

    let mut publisher = Publisher::new();
    match config.output.format {
        OutputFormat::JsonLines => publisher.add_sink(JsonLinesSink::new(std::io::stdout())),
        OutputFormat::Log => publisher.add_sink(LogSink::new()),
    };

    let outcome = publisher.run(&mut mouse);
    mouse.close();
    let stats = outcome.context("mouse session ended with a fault")?;
    info!(published = stats.published, suppressed = stats.suppressed, "mouse session ended");
    Ok(ExitCode::SUCCESS)
}
