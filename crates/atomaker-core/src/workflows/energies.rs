use super::load_constants;
use crate::core::constants::{LoadReport, PhysicalConstants};
use crate::core::numeric::{Scalar, cast};
use crate::core::orbital::{FineStructure, Orbital, OrbitalGroup};
use crate::engine::config::EnergyTableConfig;
use crate::engine::error::EngineError;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyLevel<T> {
    /// Position of the state within its shell, in enumeration order.
    pub index: usize,
    pub orbital: Orbital,
    pub energy: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyTable<T> {
    pub protons: u32,
    pub shell: u32,
    pub constants: PhysicalConstants<T>,
    pub load_report: Option<LoadReport>,
    pub levels: Vec<EnergyLevel<T>>,
}

/// Energies of every state in one principal shell for a bare nucleus
/// (no shielding, no field).
#[instrument(skip_all, name = "energy_table_workflow", fields(protons = config.protons, shell = config.shell))]
pub fn run<T: Scalar>(config: &EnergyTableConfig) -> Result<EnergyTable<T>, EngineError> {
    let (constants, load_report) = load_constants::<T>(&config.constants)?;
    let levels = shell_levels(&constants, config.protons, config.shell, config.fine_structure);
    info!(states = levels.len(), "Tabulated shell energies.");
    Ok(EnergyTable {
        protons: config.protons,
        shell: config.shell,
        constants,
        load_report,
        levels,
    })
}

pub fn shell_levels<T: Scalar>(
    constants: &PhysicalConstants<T>,
    protons: u32,
    shell: u32,
    rule: FineStructure,
) -> Vec<EnergyLevel<T>> {
    let z: T = cast(protons as f64);
    Orbital::shell_start(shell)
        .members(OrbitalGroup::Shell)
        .enumerate()
        .map(|(index, orbital)| EnergyLevel {
            index,
            orbital,
            energy: orbital.energy_with(constants, z, cast(0.0), rule),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orbital::Spin;
    use crate::engine::config::{ConstantsSource, EnergyTableConfigBuilder};

    #[test]
    fn shell_table_lists_two_n_squared_states_in_order() {
        let c = PhysicalConstants::<f64>::hartree_atomic();
        let levels = shell_levels(&c, 1, 2, FineStructure::Truncated);
        assert_eq!(levels.len(), 18);
        assert!(levels.windows(2).all(|w| w[0].orbital < w[1].orbital));
        assert!(levels.iter().enumerate().all(|(i, level)| level.index == i));
        assert_eq!(levels[0].orbital, Orbital::shell_start(2));
    }

    #[test]
    fn ground_shell_energies_match_the_bare_formula() {
        let c = PhysicalConstants::<f64>::default();
        let levels = shell_levels(&c, 2, 0, FineStructure::Truncated);
        assert_eq!(levels.len(), 2);
        for level in &levels {
            assert_eq!(level.energy, level.orbital.energy(&c, 2.0, 0.0));
        }
        assert_eq!(levels[1].orbital, Orbital::new(0, 0, 0, Spin::Up));
    }

    #[test]
    fn run_resolves_constants_from_the_config() {
        let config = EnergyTableConfigBuilder::new()
            .protons(1)
            .shell(1)
            .constants(ConstantsSource::HartreeAtomic)
            .build()
            .unwrap();
        let table = run::<f64>(&config).unwrap();
        assert_eq!(table.constants, PhysicalConstants::hartree_atomic());
        assert_eq!(table.levels.len(), 8);
        // Spin-orbit splitting lowers 2p with j = 1/2 below 2p with j = 3/2.
        let p_down = table.levels.iter().find(|l| l.orbital == Orbital::new(1, 1, 0, Spin::Down));
        let p_up = table.levels.iter().find(|l| l.orbital == Orbital::new(1, 1, 0, Spin::Up));
        assert!(p_down.unwrap().energy < p_up.unwrap().energy);
    }

    #[test]
    fn table_uses_the_configured_fine_structure_rule() {
        let c = PhysicalConstants::<f64>::default();
        let truncated = shell_levels(&c, 3, 0, FineStructure::Truncated);
        let exact = shell_levels(&c, 3, 0, FineStructure::Exact);
        // 1s at Z = 3: E_n (1 + 9) against E_n (1 + 9/4).
        let e_n = Orbital::GROUND.principal_energy(&c, 3.0);
        assert!((truncated[0].energy - 10.0 * e_n).abs() < 1e-12);
        assert!((exact[0].energy - 3.25 * e_n).abs() < 1e-12);
    }
}
