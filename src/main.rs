use anyhow::{Context, Result};
use clap::Parser;
use ownerscan::{filter, PartialConfig};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter property-ownership CSVs down to rows whose owner matches a reference
/// name list and whose owner and situs addresses share a prefix.
#[derive(Parser, Debug)]
#[command(name = "ownerscan", version)]
struct Cli {
    /// Text file with one reference name per line
    #[arg(long, short = 'n', env = "OWNERSCAN_NAMES")]
    names: Option<PathBuf>,

    /// Input CSV file, or a directory whose *.csv files are all read
    #[arg(long, short = 'i', env = "OWNERSCAN_INPUT")]
    input: Option<PathBuf>,

    /// Directory that receives final_output.csv
    #[arg(long, short = 'o', env = "OWNERSCAN_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Number of leading address characters that must match
    #[arg(long, short = 'c', env = "OWNERSCAN_CHARS")]
    chars: Option<usize>,

    /// YAML file supplying any of the options above
    #[arg(long, env = "OWNERSCAN_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> PartialConfig {
        PartialConfig {
            names_path: self.names.clone(),
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            num_chars_to_compare: self.chars,
        }
    }
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<filter::RunReport> {
    let from_file = match &cli.config {
        Some(path) => PartialConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PartialConfig::default(),
    };
    let config = cli.overrides().or(from_file).resolve()?;
    info!(?config, "starting run");

    let report = filter::run(&config)?;
    for skipped in &report.files_skipped {
        warn!("skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(report) => {
            info!(
                files = report.files_read,
                rows = report.rows_read,
                "{}",
                report.outcome.message()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
