use super::params::{ConstantField, PhysicalConstants};
use crate::core::numeric::{Scalar, cast};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConstantsError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// How many base constants a load actually assigned.
///
/// Loads are not validated beyond this count: fields that were not assigned
/// keep whatever value they had before the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub fields_loaded: usize,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.fields_loaded == ConstantField::ALL.len()
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ConstantsTable {
    m_e: Option<f64>,
    m_p: Option<f64>,
    m_n: Option<f64>,
    h_bar: Option<f64>,
    epsilon_0: Option<f64>,
    e: Option<f64>,
    c: Option<f64>,
}

impl ConstantsTable {
    fn value(&self, field: ConstantField) -> Option<f64> {
        match field {
            ConstantField::ElectronMass => self.m_e,
            ConstantField::ProtonMass => self.m_p,
            ConstantField::NeutronMass => self.m_n,
            ConstantField::ReducedPlanck => self.h_bar,
            ConstantField::VacuumPermittivity => self.epsilon_0,
            ConstantField::ElementaryCharge => self.e,
            ConstantField::SpeedOfLight => self.c,
        }
    }
}

impl<T: Scalar> PhysicalConstants<T> {
    /// Reads the plain-text record format (`m_e: <v>` ... `c: <v>`).
    ///
    /// Fields are assigned in their fixed order until the first label or value
    /// that does not match; the rest of the input is ignored.
    pub fn read_record(&mut self, text: &str) -> LoadReport {
        let mut rest = text;
        let mut fields_loaded = 0;

        for field in ConstantField::ALL {
            let Some(after_label) = rest
                .trim_start()
                .strip_prefix(field.record_label())
                .and_then(|s| s.strip_prefix(':'))
            else {
                break;
            };
            let after_label = after_label.trim_start();
            let end = after_label
                .find(char::is_whitespace)
                .unwrap_or(after_label.len());
            let Ok(value) = after_label[..end].parse::<f64>() else {
                break;
            };

            self.set(field, cast(value));
            fields_loaded += 1;
            rest = &after_label[end..];
        }

        LoadReport { fields_loaded }
    }

    /// Applies a TOML table of constants with kebab-case keys (`m-e`, `h-bar`, ...).
    pub fn apply_toml(&mut self, text: &str) -> Result<LoadReport, toml::de::Error> {
        let table: ConstantsTable = toml::from_str(text)?;
        let mut fields_loaded = 0;
        for field in ConstantField::ALL {
            if let Some(value) = table.value(field) {
                self.set(field, cast(value));
                fields_loaded += 1;
            }
        }
        Ok(LoadReport { fields_loaded })
    }

    /// Loads constants from a file. Files ending in `.toml` are parsed as a TOML
    /// table, everything else as the plain-text record format.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport, ConstantsError> {
        debug!("Loading physical constants from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| ConstantsError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let report = if is_toml {
            self.apply_toml(&content)
                .map_err(|e| ConstantsError::Toml {
                    path: path.to_string_lossy().to_string(),
                    source: e,
                })?
        } else {
            self.read_record(&content)
        };

        debug!(
            "Assigned {} of {} constants from {:?}",
            report.fields_loaded,
            ConstantField::ALL.len(),
            path
        );
        Ok(report)
    }

    /// Renders the constants in the plain-text record format.
    pub fn to_record(&self) -> String {
        self.to_string()
    }
}

impl<T: Scalar> fmt::Display for PhysicalConstants<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in ConstantField::ALL {
            writeln!(f, "{}: {}", field.record_label(), self.get(field))?;
        }
        Ok(())
    }
}
