use crate::cli::ConfigureArgs;
use crate::config::{AppConfig, Precision};
use crate::error::{CliError, Result};
use crate::ui;
use crate::utils::progress::CliProgressHandler;
use atomaker::core::numeric::Scalar;
use atomaker::engine::config::{ConfigurationConfig, ConfigurationConfigBuilder};
use atomaker::engine::progress::ProgressReporter;
use atomaker::workflows;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub fn run(args: ConfigureArgs, config: &AppConfig) -> Result<()> {
    let workflow_config = build_workflow_config(&args, config)?;
    info!(
        protons = workflow_config.protons,
        electrons = workflow_config.electrons,
        precision = ?config.precision,
        "Computing orbital configuration."
    );

    match config.precision {
        Precision::F32 => execute::<f32>(&workflow_config),
        Precision::F64 => execute::<f64>(&workflow_config),
    }
}

/// Asks for the number of electrons until a non-negative integer is entered.
pub fn prompt_electrons<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<usize> {
    let mut line = String::new();
    loop {
        write!(output, "Number of electrons: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(CliError::Argument(
                "no number of electrons was given".to_string(),
            ));
        }
        match line.trim().parse() {
            Ok(electrons) => return Ok(electrons),
            Err(_) => warn!("'{}' is not a valid number of electrons.", line.trim()),
        }
    }
}

fn build_workflow_config(args: &ConfigureArgs, config: &AppConfig) -> Result<ConfigurationConfig> {
    ConfigurationConfigBuilder::new()
        .protons(config.protons)
        .electrons(args.electrons)
        .field_model(config.field_model)
        .fine_structure(config.fine_structure)
        .relaxation(config.relaxation)
        .ionization_levels(args.ionization_levels.unwrap_or(config.ionization_levels))
        .constants(config.constants.clone())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn execute<T: Scalar>(config: &ConfigurationConfig) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let report = workflows::configure::run::<T>(config, &reporter)?;
    drop(reporter);

    if !report.is_converged() {
        warn!("At least one relaxation hit the reseat limit; the configuration may not be stable.");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ui::render_configuration(&mut out, &report)?;
    out.flush()?;
    Ok(())
}
