use crate::config::{ConstantsPreset, FieldModelArg, FineStructureArg, Precision};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Atomaker - approximates the electron configuration of an atom by adding one electron at a time and minimizing the total energy.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// What to compute. Without a subcommand the number of electrons is read from stdin
    /// and an orbital configuration is computed.
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

/// Settings shared by every mode.
#[derive(Args, Debug, Default, Clone)]
pub struct ModelArgs {
    /// Number of protons in the nucleus.
    #[arg(short = 'Z', short_alias = 'z', long, global = true, value_name = "INT")]
    pub protons: Option<u32>,

    /// Load the physical constants from the given file (record format, or TOML for `.toml`).
    #[arg(
        short = 'C',
        short_alias = 'c',
        long = "constants",
        global = true,
        value_name = "PATH"
    )]
    pub constants_file: Option<PathBuf>,

    /// Built-in set of constants to start from.
    #[arg(long = "preset", global = true, value_enum, value_name = "PRESET")]
    pub constants_preset: Option<ConstantsPreset>,

    /// Floating-point precision used for every energy.
    #[arg(long, global = true, value_enum)]
    pub precision: Option<Precision>,

    /// How the magnetic field of the other electrons enters each energy.
    #[arg(long, global = true, value_enum)]
    pub field_model: Option<FieldModelArg>,

    /// How the angular factor of the fine-structure correction is evaluated.
    #[arg(long, global = true, value_enum)]
    pub fine_structure: Option<FineStructureArg>,

    /// Maximum number of reseats after each added electron.
    #[arg(long, global = true, value_name = "INT")]
    pub max_reseats: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S relaxation.max-reseats=50
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add electrons one at a time, relaxing after each, and report the configuration.
    Configure(ConfigureArgs),
    /// List the energies of all states of one principal shell for a bare nucleus.
    Energies(EnergiesArgs),
    /// Print the loaded physical constants in record format.
    Constants,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigureArgs {
    /// Number of electrons to add.
    #[arg(value_name = "ELECTRONS")]
    pub electrons: usize,

    /// How many ionization energies to report.
    #[arg(long, value_name = "INT")]
    pub ionization_levels: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct EnergiesArgs {
    /// Principal index of the shell (0 for the first shell).
    #[arg(value_name = "N")]
    pub shell: u32,
}
