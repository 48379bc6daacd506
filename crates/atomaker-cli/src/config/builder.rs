use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ModelArgs;
use crate::error::{CliError, Result};
use atomaker::engine::config::{ConstantsSource, RelaxationConfigBuilder};
use clap::ValueEnum;
use std::path::PathBuf;
use std::str::FromStr;

/// Merges CLI flags, `--set` overrides, the config file and the built-in
/// defaults, in that order of precedence.
pub fn build_config(args: &ModelArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let protons = args
        .protons
        .or(file_config.protons)
        .unwrap_or(defaults.protons);
    if protons == 0 {
        return Err(CliError::Argument(
            "the nucleus needs at least one proton".to_string(),
        ));
    }

    let precision = args
        .precision
        .or(file_config.precision)
        .unwrap_or(defaults.precision);

    let field_model = args
        .field_model
        .or(file_config.field_model)
        .unwrap_or(defaults.field_model);

    let fine_structure = args
        .fine_structure
        .or(file_config.fine_structure)
        .unwrap_or(defaults.fine_structure);

    let constants = match args
        .constants_file
        .clone()
        .or(file_config.constants_file.take())
    {
        Some(path) => ConstantsSource::File(path),
        None => args
            .constants_preset
            .or(file_config.constants_preset)
            .unwrap_or(defaults.constants_preset)
            .into(),
    };

    let relaxation_file = file_config.relaxation.take().unwrap_or_default();
    let relaxation = RelaxationConfigBuilder::new()
        .max_reseats(
            args.max_reseats
                .or(relaxation_file.max_reseats)
                .unwrap_or(defaults.max_reseats),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let ionization_levels = file_config
        .ionization_levels
        .unwrap_or(defaults.ionization_levels);

    Ok(AppConfig {
        protons,
        precision,
        constants,
        field_model: field_model.into(),
        fine_structure: fine_structure.into(),
        relaxation,
        ionization_levels,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn parse_choice<T: ValueEnum>(key: &str, value: &str) -> Result<T> {
    T::from_str(value, true).map_err(|_| {
        let choices: Vec<String> = T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        CliError::Config(format!(
            "Invalid value for {}: {} (expected one of: {})",
            key,
            value,
            choices.join(", ")
        ))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "protons" => config.protons = Some(parse_value(key, value_str, "integer")?),
            "precision" => config.precision = Some(parse_choice(key, value_str)?),
            "constants-file" => config.constants_file = Some(PathBuf::from(value_str)),
            "constants-preset" => config.constants_preset = Some(parse_choice(key, value_str)?),
            "field-model" => config.field_model = Some(parse_choice(key, value_str)?),
            "fine-structure" => config.fine_structure = Some(parse_choice(key, value_str)?),
            "ionization-levels" => {
                config.ionization_levels = Some(parse_value(key, value_str, "integer")?)
            }
            "relaxation.max-reseats" => {
                config
                    .relaxation
                    .get_or_insert_with(Default::default)
                    .max_reseats = Some(parse_value(key, value_str, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
