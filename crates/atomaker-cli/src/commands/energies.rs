use crate::cli::EnergiesArgs;
use crate::config::{AppConfig, Precision};
use crate::error::{CliError, Result};
use crate::ui;
use atomaker::core::numeric::Scalar;
use atomaker::engine::config::{EnergyTableConfig, EnergyTableConfigBuilder};
use atomaker::workflows;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: EnergiesArgs, config: &AppConfig) -> Result<()> {
    let table_config = EnergyTableConfigBuilder::new()
        .protons(config.protons)
        .shell(args.shell)
        .fine_structure(config.fine_structure)
        .constants(config.constants.clone())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    info!(shell = args.shell, "Tabulating shell energies.");

    match config.precision {
        Precision::F32 => execute::<f32>(&table_config),
        Precision::F64 => execute::<f64>(&table_config),
    }
}

fn execute<T: Scalar>(config: &EnergyTableConfig) -> Result<()> {
    let table = workflows::energies::run::<T>(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ui::render_energy_table(&mut out, &table)?;
    out.flush()?;
    Ok(())
}
