//! Service entry point: loads the YAML config, wires up logging and
//! metrics, opens the data directory and serves the HTTP API.

mod config;

use clap::Parser;
use config::{Config, MetricsConfig};
use metrics_exporter_statsd::StatsdBuilder;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gatehouse", about = "Factory data-entry gateway")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, short)]
    config: PathBuf,
}

#[derive(thiserror::Error, Debug)]
enum MetricsInitError {
    #[error("statsd exporter error: {0}")]
    Statsd(#[from] metrics_exporter_statsd::StatsdError),
    #[error("could not install recorder: {0}")]
    Install(#[from] metrics::SetRecorderError<metrics_exporter_statsd::StatsdRecorder>),
}

fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsInitError> {
    let recorder = StatsdBuilder::from(config.statsd_host.clone(), config.statsd_port)
        .build(Some("gatehouse"))?;
    metrics::set_global_recorder(recorder)?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match Config::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    if let Some(metrics_config) = &config.metrics {
        // Metrics are best-effort; a missing StatsD sink must not keep
        // the forms offline.
        if let Err(e) = init_metrics(metrics_config) {
            tracing::warn!(error = %e, "metrics exporter not installed");
        }
    }

    let store = match store::Store::open(&config.data_dir) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, data_dir = %config.data_dir.display(), "failed to open data directory");
            return ExitCode::FAILURE;
        }
    };

    let state = gateway::AppState::new(store);
    if let Err(e) = gateway::serve(
        &config.listener.host,
        config.listener.port,
        state,
        config.static_dir.as_deref(),
    )
    .await
    {
        tracing::error!(error = %e, "server exited with error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
