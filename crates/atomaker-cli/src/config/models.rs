use atomaker::core::energy::FieldModel;
use atomaker::core::orbital::FineStructure;
use atomaker::engine::config::{ConstantsSource, RelaxationConfig};
use clap::ValueEnum;
use serde::Deserialize;

/// Fully resolved settings shared by every command.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub protons: u32,
    pub precision: Precision,
    pub constants: ConstantsSource,
    pub field_model: FieldModel,
    pub fine_structure: FineStructure,
    pub relaxation: RelaxationConfig,
    pub ionization_levels: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Precision {
    F32,
    #[default]
    F64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstantsPreset {
    /// The built-in constants (c = 1, alpha = 1).
    #[default]
    Default,
    /// Hartree atomic units (c = 137.036).
    Hartree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldModelArg {
    #[default]
    Off,
    SelfConsistent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FineStructureArg {
    /// Integer quotients in the angular factor.
    #[default]
    Truncated,
    /// Real-valued angular factor.
    Exact,
}

impl From<FineStructureArg> for FineStructure {
    fn from(arg: FineStructureArg) -> Self {
        match arg {
            FineStructureArg::Truncated => FineStructure::Truncated,
            FineStructureArg::Exact => FineStructure::Exact,
        }
    }
}

impl From<FieldModelArg> for FieldModel {
    fn from(arg: FieldModelArg) -> Self {
        match arg {
            FieldModelArg::Off => FieldModel::Off,
            FieldModelArg::SelfConsistent => FieldModel::SelfConsistent,
        }
    }
}

impl From<ConstantsPreset> for ConstantsSource {
    fn from(preset: ConstantsPreset) -> Self {
        match preset {
            ConstantsPreset::Default => ConstantsSource::Defaults,
            ConstantsPreset::Hartree => ConstantsSource::HartreeAtomic,
        }
    }
}
