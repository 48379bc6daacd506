use super::models::{ConstantsPreset, FieldModelArg, FineStructureArg, Precision};
use atomaker::engine::config::{DEFAULT_IONIZATION_LEVELS, DEFAULT_MAX_RESEATS};

pub struct DefaultsConfig {
    pub protons: u32,
    pub precision: Precision,
    pub constants_preset: ConstantsPreset,
    pub field_model: FieldModelArg,
    pub fine_structure: FineStructureArg,
    pub max_reseats: usize,
    pub ionization_levels: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            protons: 1,
            precision: Precision::F64,
            constants_preset: ConstantsPreset::Default,
            field_model: FieldModelArg::Off,
            fine_structure: FineStructureArg::Truncated,
            max_reseats: DEFAULT_MAX_RESEATS,
            ionization_levels: DEFAULT_IONIZATION_LEVELS,
        }
    }
}
