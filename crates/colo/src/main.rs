//! CLI driver: loads a dataset and configuration, runs the mining pipeline,
//! and renders prevalent patterns to stdout or a file.

mod error;

use clap::Parser;
use colocation_io::MiningConfig;
use error::DriverError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, info_span};

/// Mines prevalent spatial co-location patterns from a dataset.
#[derive(Debug, Parser)]
#[command(name = "colo", about = "Spatial co-location pattern miner")]
struct Cli {
    /// Path to a key=value configuration file. Defaults are used when absent.
    #[arg(long, default_value = "colocation.conf")]
    config: PathBuf,

    /// Overrides the dataset path from the configuration file.
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Writes the report to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Overrides `debug_mode` from the configuration file.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match colocation_io::load_config(&cli.config) {
        Ok(config) => config,
        Err(err) => return fail(&err.into()),
    };
    if let Some(dataset) = &cli.dataset {
        config.dataset_path = dataset.clone();
    }
    if cli.debug {
        config.debug_mode = true;
    }

    init_tracing(config.debug_mode);

    match run(&config) {
        Ok(report) => match write_report(&report, cli.output.as_deref()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => fail(&err),
        },
        Err(err) => fail(&err),
    }
}

fn run(config: &MiningConfig) -> Result<String, DriverError> {
    let instances = {
        let _span = info_span!("load_dataset", path = %config.dataset_path.display()).entered();
        let instances = colocation_io::load_dataset(&config.dataset_path)?;
        info!(count = instances.len(), "loaded instances");
        instances
    };

    let prevalent = {
        let _span = info_span!(
            "mine",
            neighbor_distance = config.neighbor_distance,
            min_prevalence = config.min_prevalence
        )
        .entered();
        let prevalent = colocation_core::mine(&instances, config.neighbor_distance, config.min_prevalence);
        info!(count = prevalent.len(), "found prevalent patterns");
        if config.debug_mode {
            for (pattern, pi) in &prevalent {
                debug!(%pattern, pi, "prevalent pattern");
            }
        }
        prevalent
    };

    Ok(colocation_io::render_report(&prevalent))
}

fn write_report(report: &str, output: Option<&std::path::Path>) -> Result<(), DriverError> {
    match output {
        Some(path) => std::fs::write(path, report).map_err(DriverError::from),
        None => {
            print!("{report}");
            Ok(())
        }
    }
}

fn init_tracing(debug_mode: bool) {
    use tracing_subscriber::EnvFilter;
    let default_level = if debug_mode { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn fail(err: &DriverError) -> ExitCode {
    tracing::error!("{err}");
    eprintln!("colo: {err}");
    ExitCode::FAILURE
}
