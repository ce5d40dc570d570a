mod cli;
mod commands;
mod logging;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use crate::{
    cli::Cli,
    logging::{LoggingConfig, init_logging},
};

fn main() -> Result<()> {
    // panic hook
    color_eyre::install()?;

    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(&logging_config).wrap_err("Failed to initialize logging")?;

    // errors surface through eyre reports; the hook only records where they came from
    pixelcraft_core::set_error_hook(|report| {
        tracing::debug!(
            kind = %report.kind,
            file = report.file,
            line = report.line,
            "{}",
            report.message
        );
    });

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pixelcraft starting up");

    let cli = Cli::parse();
    cli.validate()?;
    tracing::debug!(command = ?cli.command, "parsed arguments");

    commands::run(cli.command)
}
