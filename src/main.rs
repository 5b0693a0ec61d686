//! Command-line entry point: project ROI for the configured business inputs
//! and print the report to stdout.

use std::error::Error;
use std::process::ExitCode;

use roi_projection::adapters::render_report;
use roi_projection::application::{GenerateProjectionHandler, GenerateProjectionQuery};
use roi_projection::config::{AppConfig, LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Projection failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    let handler = GenerateProjectionHandler::from_settings(config.model.to_settings()?)?;
    let report = handler.handle(GenerateProjectionQuery {
        inputs: config.inputs.into(),
    })?;

    println!("{}", render_report(&report, config.output.format)?);
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| logging.env_filter())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
