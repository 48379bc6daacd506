use super::models::{ConstantsPreset, FieldModelArg, FineStructureArg, Precision};
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileRelaxationConfig {
    pub max_reseats: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub protons: Option<u32>,
    pub precision: Option<Precision>,
    pub constants_file: Option<PathBuf>,
    pub constants_preset: Option<ConstantsPreset>,
    pub field_model: Option<FieldModelArg>,
    pub fine_structure: Option<FineStructureArg>,
    pub ionization_levels: Option<usize>,
    pub relaxation: Option<FileRelaxationConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
