use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};

use sixnines::config::{LoggingConfig, Settings, CONFIG_ENV};
use sixnines::{badge, graph, report, snapshot, stats};

#[derive(Parser)]
#[command(
    name = "sixnines",
    about = "Uptime statistics and SVG latency graphs from probe history snapshots",
    version,
    long_about = None
)]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the latency graph as SVG
    Graph {
        /// History snapshot (JSON array of probe records)
        #[arg(long)]
        input: PathBuf,

        /// Reference instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Write the SVG here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print average latency and uptime
    Stats {
        /// History snapshot (JSON array of probe records)
        #[arg(long)]
        input: PathBuf,

        /// Only consider probes from the last N hours
        #[arg(long)]
        window_hours: Option<u32>,

        /// Reference instant for the window (RFC 3339); defaults to now
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },

    /// Render the uptime badge as SVG
    Badge {
        /// History snapshot (JSON array of probe records)
        #[arg(long)]
        input: PathBuf,

        /// Left-hand badge text
        #[arg(long, default_value = badge::DEFAULT_LABEL)]
        label: String,

        /// Write the SVG here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn emit(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = svg.len(), "wrote SVG");
        }
        None => println!("{}", svg),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, config_path) = Settings::load_or_default(cli.config.as_deref())?;
    init_tracing(&settings.logging);
    match &config_path {
        Some(path) => tracing::info!(path = %path.display(), "loaded configuration"),
        None => tracing::debug!("no config file found, using compiled-in defaults"),
    }
    let rule = settings.status.rule();

    match cli.command {
        Commands::Graph { input, now, output } => {
            let history = snapshot::load(&input, rule)?;
            let now = now.unwrap_or_else(Utc::now);
            let svg = graph::render_svg_with(&history, now, &settings.graph);
            emit(&svg, output.as_deref())?;
        }
        Commands::Stats {
            input,
            window_hours,
            now,
            json,
        } => {
            let mut history = snapshot::load(&input, rule)?;
            if let Some(hours) = window_hours {
                let now = now.unwrap_or_else(Utc::now);
                match now.checked_sub_signed(Duration::hours(i64::from(hours))) {
                    Some(cutoff) => {
                        history = history.since(cutoff);
                        tracing::debug!(hours, records = history.len(), "applied rolling window");
                    }
                    None => tracing::debug!(hours, "window reaches past the earliest representable time, keeping all probes"),
                }
            }
            let summary = stats::Summary::from_history(&history);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", report::format_summary(&summary));
            }
        }
        Commands::Badge {
            input,
            label,
            output,
        } => {
            let history = snapshot::load(&input, rule)?;
            let svg = badge::render_badge(&history, &label);
            emit(&svg, output.as_deref())?;
        }
    }

    Ok(())
}
