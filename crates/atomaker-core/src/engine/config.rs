use crate::core::constants::{ConstantsError, LoadReport, PhysicalConstants};
use crate::core::energy::FieldModel;
use crate::core::numeric::Scalar;
use crate::core::orbital::FineStructure;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_MAX_RESEATS: usize = 1000;
pub const DEFAULT_IONIZATION_LEVELS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Where the physical constants of a run come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConstantsSource {
    #[default]
    Defaults,
    HartreeAtomic,
    /// A record or TOML file applied on top of the defaults.
    File(PathBuf),
}

impl ConstantsSource {
    /// Builds the constants, returning how many fields a file load assigned.
    pub fn resolve<T: Scalar>(
        &self,
    ) -> Result<(PhysicalConstants<T>, Option<LoadReport>), ConstantsError> {
        match self {
            Self::Defaults => Ok((PhysicalConstants::default(), None)),
            Self::HartreeAtomic => Ok((PhysicalConstants::hartree_atomic(), None)),
            Self::File(path) => {
                let mut constants = PhysicalConstants::default();
                let report = constants.load(path)?;
                Ok((constants, Some(report)))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaxationConfig {
    pub max_reseats: usize,
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        Self {
            max_reseats: DEFAULT_MAX_RESEATS,
        }
    }
}

#[derive(Default)]
pub struct RelaxationConfigBuilder {
    max_reseats: Option<usize>,
}

impl RelaxationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_reseats(mut self, max_reseats: usize) -> Self {
        self.max_reseats = Some(max_reseats);
        self
    }

    pub fn build(self) -> Result<RelaxationConfig, ConfigError> {
        let max_reseats = self
            .max_reseats
            .ok_or(ConfigError::MissingParameter("max_reseats"))?;
        if max_reseats == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_reseats",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(RelaxationConfig { max_reseats })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationConfig {
    pub protons: u32,
    pub electrons: usize,
    pub field_model: FieldModel,
    pub fine_structure: FineStructure,
    pub relaxation: RelaxationConfig,
    pub ionization_levels: usize,
    pub constants: ConstantsSource,
}

#[derive(Default)]
pub struct ConfigurationConfigBuilder {
    protons: Option<u32>,
    electrons: Option<usize>,
    field_model: Option<FieldModel>,
    fine_structure: Option<FineStructure>,
    relaxation: Option<RelaxationConfig>,
    ionization_levels: Option<usize>,
    constants: Option<ConstantsSource>,
}

impl ConfigurationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protons(mut self, protons: u32) -> Self {
        self.protons = Some(protons);
        self
    }
    pub fn electrons(mut self, electrons: usize) -> Self {
        self.electrons = Some(electrons);
        self
    }
    pub fn field_model(mut self, model: FieldModel) -> Self {
        self.field_model = Some(model);
        self
    }
    pub fn fine_structure(mut self, rule: FineStructure) -> Self {
        self.fine_structure = Some(rule);
        self
    }
    pub fn relaxation(mut self, relaxation: RelaxationConfig) -> Self {
        self.relaxation = Some(relaxation);
        self
    }
    pub fn ionization_levels(mut self, levels: usize) -> Self {
        self.ionization_levels = Some(levels);
        self
    }
    pub fn constants(mut self, source: ConstantsSource) -> Self {
        self.constants = Some(source);
        self
    }

    pub fn build(self) -> Result<ConfigurationConfig, ConfigError> {
        Ok(ConfigurationConfig {
            protons: validate_protons(self.protons)?,
            electrons: self
                .electrons
                .ok_or(ConfigError::MissingParameter("electrons"))?,
            field_model: self.field_model.unwrap_or_default(),
            fine_structure: self.fine_structure.unwrap_or_default(),
            relaxation: self.relaxation.unwrap_or_default(),
            ionization_levels: self
                .ionization_levels
                .unwrap_or(DEFAULT_IONIZATION_LEVELS),
            constants: self.constants.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyTableConfig {
    pub protons: u32,
    /// Principal index `n` of the shell to tabulate.
    pub shell: u32,
    pub fine_structure: FineStructure,
    pub constants: ConstantsSource,
}

#[derive(Default)]
pub struct EnergyTableConfigBuilder {
    protons: Option<u32>,
    shell: Option<u32>,
    fine_structure: Option<FineStructure>,
    constants: Option<ConstantsSource>,
}

impl EnergyTableConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protons(mut self, protons: u32) -> Self {
        self.protons = Some(protons);
        self
    }
    pub fn shell(mut self, shell: u32) -> Self {
        self.shell = Some(shell);
        self
    }
    pub fn fine_structure(mut self, rule: FineStructure) -> Self {
        self.fine_structure = Some(rule);
        self
    }
    pub fn constants(mut self, source: ConstantsSource) -> Self {
        self.constants = Some(source);
        self
    }

    pub fn build(self) -> Result<EnergyTableConfig, ConfigError> {
        Ok(EnergyTableConfig {
            protons: validate_protons(self.protons)?,
            shell: self.shell.ok_or(ConfigError::MissingParameter("shell"))?,
            fine_structure: self.fine_structure.unwrap_or_default(),
            constants: self.constants.unwrap_or_default(),
        })
    }
}

fn validate_protons(protons: Option<u32>) -> Result<u32, ConfigError> {
    match protons {
        None => Err(ConfigError::MissingParameter("protons")),
        Some(0) => Err(ConfigError::InvalidParameter {
            name: "protons",
            reason: "a nucleus needs at least one proton".to_string(),
        }),
        Some(z) => Ok(z),
    }
}
