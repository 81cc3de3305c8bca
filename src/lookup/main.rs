//! Severe weather outlook lookup.
//!
//! Resolves the SPC day 1 categorical outlook in effect at a given time,
//! downloads it and prints the risk category covering a point.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use stormrisk::archive::{parse_query_time, resolve_snapshot, OutlookFetcher};
use stormrisk::config::Config;
use stormrisk::models::Location;
use stormrisk::pip::RiskClassifier;
use stormrisk::render::{write_svg, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "stormrisk")]
#[command(about = "Look up the SPC severe weather risk for a location")]
struct Args {
    /// Only connect to the archive over IPv4
    #[arg(long)]
    ipv4: bool,

    /// Write an SVG graph of the outlook polygons
    #[arg(long)]
    graph: bool,

    /// Graph output path (defaults to the config value, then outlook.svg)
    #[arg(long)]
    graph_output: Option<PathBuf>,

    /// Use this date instead of the current one (ISO-8601)
    #[arg(long)]
    date: Option<String>,

    /// Query point as "latitude,longitude"
    #[arg(long, allow_hyphen_values = true)]
    location: Option<Location>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the long risk description instead of the short label
    #[arg(long)]
    describe: bool,

    /// Print the resolved archive URL and exit
    #[arg(long)]
    url_only: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout carries only the result line
    let default_level = if args.verbose { "info" } else { "warn" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    let time = match &args.date {
        Some(date) => parse_query_time(date)?,
        None => Utc::now(),
    };
    let location = args
        .location
        .or(config.location)
        .unwrap_or_default();

    let mut fetch_options = config.fetch_options();
    fetch_options.force_ipv4 |= args.ipv4;

    let snapshot = resolve_snapshot(&time);
    let fetcher = OutlookFetcher::new(&fetch_options)?;
    info!("Query time {} resolves to outlook {}", time, snapshot);

    if args.url_only {
        println!("{}", fetcher.url_for(&snapshot));
        return Ok(());
    }

    let collection = fetcher.fetch(&snapshot).await?;
    let classifier = RiskClassifier::from_collection(&collection)?;
    let assessment = classifier.classify(location);
    info!("Risk at {}: {}", location, assessment.description());

    if args.describe {
        println!("{}", assessment.description());
    } else {
        println!("{}", assessment);
    }

    if args.graph {
        let output = args.graph_output.unwrap_or(config.render.output);
        write_svg(
            output,
            classifier.areas(),
            Some(location),
            &RenderOptions::default(),
        )?;
    }

    Ok(())
}
