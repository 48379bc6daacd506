mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod ui;
mod utils;

use crate::cli::{Cli, Commands, ConfigureArgs};
use crate::error::{CliError, Result};
use clap::Parser;
use std::io;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("Atomaker CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let config = config::build_config(&cli.model)?;
    debug!("Resolved configuration: {:?}", &config);

    let command_result = match cli.command {
        Some(Commands::Configure(args)) => {
            info!("Dispatching to 'configure' command.");
            commands::configure::run(args, &config)
        }
        Some(Commands::Energies(args)) => {
            info!("Dispatching to 'energies' command.");
            commands::energies::run(args, &config)
        }
        Some(Commands::Constants) => {
            info!("Dispatching to 'constants' command.");
            commands::constants::run(&config)
        }
        None => {
            let electrons = commands::configure::prompt_electrons(io::stdin().lock(), io::stdout())?;
            commands::configure::run(
                ConfigureArgs {
                    electrons,
                    ionization_levels: None,
                },
                &config,
            )
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}
