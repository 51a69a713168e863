//! `multisort`: sort a JSON array from the command line.

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use multisort_config::{SortConfig, SortConfigSource, load_env_file, run};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "multisort",
    version,
    about = "Sort a JSON array by one or more criteria"
)]
struct Cli {
    /// JSON input file; reads stdin when omitted or `-`
    input: Option<PathBuf>,
    /// Sort criterion, highest priority first. Repeat for tie-breakers.
    /// Numbers sort the items themselves (negative = descending).
    #[arg(long = "by", short = 'b', value_name = "CRITERION", allow_hyphen_values = true)]
    by: Vec<String>,
    /// Config file (TOML or JSON); overrides $MULTISORT_CONFIG_PATH
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON pointer to the array to sort, e.g. `/data/items`
    #[arg(long)]
    pointer: Option<String>,
    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
    /// Env file to load before reading configuration
    #[arg(long)]
    env_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let env_loaded = load_env_file(cli.env_file.as_deref())
        .context("failed to load env file")?;
    debug!(env_loaded, "environment prepared");

    let (config, source) = match &cli.config {
        Some(path) => (
            SortConfig::load_from_file(path)?,
            SortConfigSource::File(path.clone()),
        ),
        None => SortConfig::load_from_env()?,
    };
    debug!(?source, "configuration loaded");

    let mut config = config.with_criteria_args(cli.by.as_slice());
    if cli.pointer.is_some() {
        config.pointer = cli.pointer;
    }
    config.pretty |= cli.pretty;

    let input = read_input(cli.input.as_ref())?;
    let output = run(&input, &config)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("failed to write output")?;
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
