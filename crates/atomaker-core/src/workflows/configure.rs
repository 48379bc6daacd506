use super::load_constants;
use crate::core::constants::{LoadReport, PhysicalConstants};
use crate::core::energy::Scorer;
use crate::core::models::atom::Atom;
use crate::core::numeric::Scalar;
use crate::core::orbital::Orbital;
use crate::engine::config::ConfigurationConfig;
use crate::engine::error::EngineError;
use crate::engine::placement::{self, Reseat};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateEnergy<T> {
    pub orbital: Orbital,
    pub energy: T,
}

/// An electron moved during relaxation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRecord<T> {
    /// The vacated state, scored against the relaxed atom with the moved
    /// electron left out.
    pub from: StateEnergy<T>,
    pub to: StateEnergy<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord<T> {
    /// Zero-based position of the electron in the order it was added.
    pub index: usize,
    pub placed: StateEnergy<T>,
    pub moves: Vec<MoveRecord<T>>,
    pub converged: bool,
    /// Where the newly added electron sits after relaxation, if anything moved.
    pub settled: Option<StateEnergy<T>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationReport<T> {
    pub protons: u32,
    pub constants: PhysicalConstants<T>,
    pub load_report: Option<LoadReport>,
    pub placements: Vec<PlacementRecord<T>>,
    /// Index of the electron that could not be placed, if any.
    pub rejected: Option<usize>,
    pub atom: Atom,
    pub valence: Vec<StateEnergy<T>>,
    pub total_energy: T,
    /// Entry `k` is the energy needed to remove `k + 1` electrons.
    pub ionization_energies: Vec<T>,
}

impl<T> ConfigurationReport<T> {
    pub fn is_converged(&self) -> bool {
        self.placements.iter().all(|p| p.converged)
    }
}

#[instrument(skip_all, name = "configuration_workflow", fields(protons = config.protons, electrons = config.electrons))]
pub fn run<T: Scalar>(
    config: &ConfigurationConfig,
    reporter: &ProgressReporter,
) -> Result<ConfigurationReport<T>, EngineError> {
    // === Phase 0: Constants ===
    reporter.report(Progress::PhaseStart {
        name: "Loading Constants",
    });
    let (constants, load_report) = load_constants::<T>(&config.constants)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Populate and relax ===
    let mut atom = Atom::new(config.protons)
        .with_field_model(config.field_model)
        .with_fine_structure(config.fine_structure);
    let (placements, rejected) = populate_all(&mut atom, &constants, config, reporter);

    // === Phase 2: Analysis ===
    reporter.report(Progress::PhaseStart { name: "Analyzing" });
    let scorer = Scorer::new(&atom, &constants);
    let valence = atom
        .valence_orbitals()
        .into_iter()
        .map(|orbital| StateEnergy {
            orbital,
            energy: scorer.orbital_energy(&orbital, None),
        })
        .collect();
    let total_energy = scorer.total_energy();
    let levels = config.ionization_levels.min(atom.electron_count());
    let ionization_energies = (1..=levels)
        .map(|level| scorer.ionization_energy(level))
        .collect();
    reporter.report(Progress::PhaseFinish);

    info!(
        electrons = atom.electron_count(),
        total_energy = %total_energy,
        "Configuration workflow complete."
    );

    Ok(ConfigurationReport {
        protons: config.protons,
        constants,
        load_report,
        placements,
        rejected,
        atom,
        valence,
        total_energy,
        ionization_energies,
    })
}

fn populate_all<T: Scalar>(
    atom: &mut Atom,
    constants: &PhysicalConstants<T>,
    config: &ConfigurationConfig,
    reporter: &ProgressReporter,
) -> (Vec<PlacementRecord<T>>, Option<usize>) {
    reporter.report(Progress::PhaseStart {
        name: "Populating",
    });
    reporter.report(Progress::TaskStart {
        total_steps: config.electrons as u64,
    });
    info!("Adding {} electron(s), relaxing after each.", config.electrons);

    let mut placements = Vec::with_capacity(config.electrons);
    let mut rejected = None;

    for index in 0..config.electrons {
        let Some(spot) = placement::populate(atom, constants) else {
            warn!(index, "Electron {} was rejected; no free state lowers the energy.", index);
            reporter.report(Progress::Message(format!("Electron {} was rejected", index)));
            rejected = Some(index);
            break;
        };
        let placed = StateEnergy {
            orbital: spot,
            energy: Scorer::new(atom, constants).orbital_energy(&spot, None),
        };
        reporter.report(Progress::StatusUpdate {
            text: format!("e{} -> {}", index, spot),
        });

        let mut moves = Vec::new();
        let mut tracked = spot;
        let relaxation = placement::relax_with(atom, constants, &config.relaxation, |moved, step| {
            if step.from == tracked {
                tracked = step.to;
            }
            moves.push(score_move(moved, constants, step));
        });

        if !relaxation.converged {
            warn!(
                index,
                moves = relaxation.moves.len(),
                "Relaxation did not converge within {} reseats; continuing with the current configuration.",
                config.relaxation.max_reseats
            );
        } else if !relaxation.moves.is_empty() {
            debug!(index, moves = relaxation.moves.len(), "Relaxation converged.");
        }

        let settled = (!moves.is_empty()).then(|| StateEnergy {
            orbital: tracked,
            energy: Scorer::new(atom, constants).orbital_energy(&tracked, None),
        });

        placements.push(PlacementRecord {
            index,
            placed,
            moves,
            converged: relaxation.converged,
            settled,
        });
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    (placements, rejected)
}

fn score_move<T: Scalar>(atom: &Atom, constants: &PhysicalConstants<T>, step: &Reseat) -> MoveRecord<T> {
    let scorer = Scorer::new(atom, constants);
    MoveRecord {
        from: StateEnergy {
            orbital: step.from,
            energy: scorer.orbital_energy(&step.from, Some(&step.to)),
        },
        to: StateEnergy {
            orbital: step.to,
            energy: scorer.orbital_energy(&step.to, None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::energy::FieldModel;
    use crate::core::orbital::{FineStructure, Spin};
    use crate::engine::config::{
        ConfigurationConfigBuilder, ConstantsSource, RelaxationConfig,
    };
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    fn config(protons: u32, electrons: usize) -> ConfigurationConfig {
        ConfigurationConfigBuilder::new()
            .protons(protons)
            .electrons(electrons)
            .constants(ConstantsSource::HartreeAtomic)
            .build()
            .unwrap()
    }

    #[test]
    fn lithium_report_lists_placements_valence_and_energies() {
        let report = run::<f64>(&config(3, 3), &ProgressReporter::new()).unwrap();

        let placed: Vec<Orbital> = report.placements.iter().map(|p| p.placed.orbital).collect();
        assert_eq!(placed, vec![
            Orbital::GROUND,
            Orbital::new(0, 0, 0, Spin::Up),
            Orbital::new(1, 0, 0, Spin::Down),
        ]);
        assert_eq!(report.rejected, None);
        assert!(report.is_converged());
        assert_eq!(report.valence.len(), 1);
        assert_eq!(report.valence[0].orbital, Orbital::new(1, 0, 0, Spin::Down));
        assert_eq!(report.ionization_energies.len(), 3);
        assert!(report.ionization_energies.windows(2).all(|w| w[0] < w[1]));
        assert!((report.ionization_energies[2] + report.total_energy).abs() < 1e-9);
        assert!(report.load_report.is_none());
    }

    #[test]
    fn ionization_levels_are_capped_by_electron_count() {
        let report = run::<f64>(&config(1, 1), &ProgressReporter::new()).unwrap();
        assert_eq!(report.ionization_energies.len(), 1);

        let report = run::<f64>(&config(5, 0), &ProgressReporter::new()).unwrap();
        assert!(report.ionization_energies.is_empty());
        assert!(report.valence.is_empty());
        assert_eq!(report.total_energy, 0.0);
    }

    #[test]
    fn rejection_stops_the_run_and_is_recorded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_charge.txt");
        let record = "m_e: 1\nm_p: 1836\nm_n: 1838\nh_bar: 1\nepsilon_0: 0.0795774715459\ne: 0\nc: 137\n";
        fs::write(&path, record).unwrap();

        let config = ConfigurationConfigBuilder::new()
            .protons(1)
            .electrons(2)
            .constants(ConstantsSource::File(path))
            .build()
            .unwrap();
        let report = run::<f64>(&config, &ProgressReporter::new()).unwrap();
        assert_eq!(report.rejected, Some(0));
        assert!(report.placements.is_empty());
        assert!(report.atom.is_empty());
        assert_eq!(report.load_report.map(|r| r.fields_loaded), Some(7));
    }

    #[test]
    fn moves_are_scored_and_the_new_electron_is_tracked() {
        let config = ConfigurationConfigBuilder::new()
            .protons(10)
            .electrons(10)
            .constants(ConstantsSource::HartreeAtomic)
            .relaxation(RelaxationConfig { max_reseats: 50 })
            .build()
            .unwrap();
        let report = run::<f64>(&config, &ProgressReporter::new()).unwrap();
        assert_eq!(report.atom.electron_count(), report.placements.len());
        for placement in &report.placements {
            assert_eq!(placement.settled.is_some(), !placement.moves.is_empty());
            for step in &placement.moves {
                assert_ne!(step.from.orbital, step.to.orbital);
            }
        }
    }

    #[test]
    fn progress_events_cover_every_electron() {
        let increments = Mutex::new(0u64);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::TaskIncrement = event {
                *increments.lock().unwrap() += 1;
            }
        }));
        run::<f64>(&config(4, 4), &reporter).unwrap();
        drop(reporter);
        assert_eq!(increments.into_inner().unwrap(), 4);
    }

    #[test]
    fn missing_constants_file_is_an_engine_error() {
        let dir = tempdir().unwrap();
        let config = ConfigurationConfigBuilder::new()
            .protons(1)
            .electrons(1)
            .constants(ConstantsSource::File(dir.path().join("absent.toml")))
            .build()
            .unwrap();
        let result = run::<f64>(&config, &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Constants { .. })));
    }

    #[test]
    fn self_consistent_field_run_completes() {
        let config = ConfigurationConfigBuilder::new()
            .protons(4)
            .electrons(4)
            .field_model(FieldModel::SelfConsistent)
            .constants(ConstantsSource::HartreeAtomic)
            .relaxation(RelaxationConfig { max_reseats: 20 })
            .build()
            .unwrap();
        let report = run::<f64>(&config, &ProgressReporter::new()).unwrap();
        assert_eq!(report.atom.electron_count(), 4);
        assert_eq!(report.atom.field_model(), FieldModel::SelfConsistent);
    }

    #[test]
    fn fine_structure_rule_reaches_the_atom() {
        let config = ConfigurationConfigBuilder::new()
            .protons(2)
            .electrons(2)
            .fine_structure(FineStructure::Exact)
            .build()
            .unwrap();
        let report = run::<f64>(&config, &ProgressReporter::new()).unwrap();
        assert_eq!(report.atom.fine_structure(), FineStructure::Exact);
        // Default constants with exact fine structure pair helium in 1s.
        assert_eq!(report.valence.len(), 2);
        assert!(report.atom.iter().all(|o| o.n == 0));
    }

    #[test]
    fn single_precision_run_reaches_the_same_configuration() {
        let single = run::<f32>(&config(3, 3), &ProgressReporter::new()).unwrap();
        let double = run::<f64>(&config(3, 3), &ProgressReporter::new()).unwrap();
        assert_eq!(single.atom, double.atom);
    }
}
