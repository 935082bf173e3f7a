use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use ptrack::input::{read_payloads, Source};
use ptrack::render::{render, Format};
use ptrack::{carrier_options, Config, Normalizer};

#[derive(Parser)]
#[command(name = "ptrack", about = "Normalize shipment-tracking payloads")]
struct Cli {
    /// Config file to use instead of ~/.config/ptrack/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a tracking payload read from FILE or stdin.
    Normalize {
        /// Input file; `-` or absent reads stdin.
        file: Option<PathBuf>,
        /// Treat input as JSON Lines, one payload per line.
        #[arg(long)]
        lines: bool,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Single-line JSON output.
        #[arg(long)]
        compact: bool,
    },
    /// Print the canonical name for a carrier code or alias.
    Carrier { name: String },
    /// List the carrier catalogue.
    Carriers,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ptrack debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default config");
            Config::defaults()
        }),
    };
    let normalizer = Normalizer::from_config(&config);

    match cli.command {
        Command::Normalize {
            file,
            lines,
            format,
            compact,
        } => {
            let source = Source::from_arg(file.as_deref());
            let payloads = read_payloads(&source, lines).context("reading tracking payload")?;
            // JSON Lines in, JSON Lines out.
            let pretty = config.output.pretty && !compact && !lines;
            for payload in &payloads {
                let view = normalizer.normalize(payload);
                println!("{}", render(&view, format, pretty)?.trim_end());
            }
        }
        Command::Carrier { name } => {
            println!("{}", normalizer.resolver().resolve(&name).unwrap_or_default());
        }
        Command::Carriers => {
            for carrier in carrier_options() {
                println!("{}\t{}", carrier.code, carrier.label);
            }
        }
    }

    Ok(())
}
