//! # Workflows Module
//!
//! Complete procedures built from the [`engine`](crate::engine) and
//! [`core`](crate::core) layers. These are the entry points the command-line
//! driver calls.
//!
//! - **Configuration Workflow** ([`configure`]) - Builds an atom electron by electron,
//!   relaxing after every placement, and reports placements, moves, valence states,
//!   total energy and ionization energies.
//! - **Energy Table Workflow** ([`energies`]) - Bare energies of every state in one
//!   principal shell, without building an atom.

pub mod configure;
pub mod energies;

use crate::core::constants::{LoadReport, PhysicalConstants};
use crate::core::numeric::Scalar;
use crate::engine::config::ConstantsSource;
use crate::engine::error::EngineError;
use tracing::{info, warn};

/// Resolves the constants for a run, warning when a file assigned only some fields.
pub(crate) fn load_constants<T: Scalar>(
    source: &ConstantsSource,
) -> Result<(PhysicalConstants<T>, Option<LoadReport>), EngineError> {
    let (constants, report) = source.resolve::<T>()?;
    match (source, report) {
        (ConstantsSource::File(path), Some(report)) if !report.is_complete() => {
            warn!(
                fields_loaded = report.fields_loaded,
                "Only {} of 7 constants were read from {:?}; the rest keep their default values.",
                report.fields_loaded,
                path
            );
        }
        (ConstantsSource::File(path), Some(_)) => {
            info!("Loaded all physical constants from {:?}.", path);
        }
        _ => {}
    }
    Ok((constants, report))
}
