use super::config::RelaxationConfig;
use crate::core::constants::PhysicalConstants;
use crate::core::energy::{FieldModel, Scorer};
use crate::core::models::atom::Atom;
use crate::core::numeric::Scalar;
use crate::core::orbital::{Orbital, OrbitalGroup, ShellBoundary};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One electron moved by [`reseat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reseat {
    pub from: Orbital,
    pub to: Orbital,
}

/// Outcome of driving [`reseat`] to a fixed point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Relaxation {
    pub moves: Vec<Reseat>,
    /// `false` when the move budget ran out before the atom became stable.
    pub converged: bool,
}

/// Shells the self-consistent search may scan past the last shell needed to
/// hold the atom's electrons.
pub const FIELD_SHELL_MARGIN: u32 = 1;

#[derive(Debug, Clone, Copy)]
enum Candidate<T> {
    Blocked,
    Free(T),
}

/// Finds the free state that minimizes the atom's total energy when the
/// electron in `moving` is relocated there.
///
/// `moving = None` stands for an incoming electron. The current configuration
/// is the incumbent, so the result is `moving` itself when nothing strictly
/// improves on it, and `None` for an incoming electron that no free state
/// can bind.
///
/// Shells are scanned in order. Each shell that contains an occupied state or
/// an improvement re-arms the [`ShellBoundary`], so the scan ends after the
/// first shell with neither. Under [`FieldModel::SelfConsistent`] the scan
/// also stops after [`shell_limit`].
pub fn reseat_spot<T: Scalar>(
    atom: &Atom,
    constants: &PhysicalConstants<T>,
    moving: Option<&Orbital>,
) -> Option<Orbital> {
    let scorer = Scorer::new(atom, constants);
    let mut best = moving.copied();
    let mut best_energy = scorer.total_energy();
    let mut boundary = ShellBoundary::new();
    let limit = shell_limit(atom);

    for n in 0.. {
        if limit.is_some_and(|limit| n > limit) || !boundary.cross() {
            break;
        }
        for (orbital, candidate) in evaluate_shell(&scorer, moving, n) {
            match candidate {
                Candidate::Blocked => boundary.mark(),
                Candidate::Free(energy) => {
                    trace!(candidate = %orbital, energy = %energy, "Evaluated candidate state.");
                    if energy < best_energy {
                        boundary.mark();
                        best = Some(orbital);
                        best_energy = energy;
                    }
                }
            }
        }
    }
    best
}

/// Last shell the search may enter, if any.
///
/// With the self-consistent field the Zeeman term of `|m_l| = n` states grows
/// with `n` while the binding energy fades, so improvements alone never close
/// the [`ShellBoundary`]. That mode is capped at [`FIELD_SHELL_MARGIN`] shells
/// past the smallest set of shells that can hold `max(Z, N + 1)` electrons.
pub fn shell_limit(atom: &Atom) -> Option<u32> {
    match atom.field_model() {
        FieldModel::Off => None,
        FieldModel::SelfConsistent => {
            let electrons = (atom.protons() as usize).max(atom.electron_count() + 1);
            Some(filled_shell(electrons) + FIELD_SHELL_MARGIN)
        }
    }
}

/// Principal index of the outermost shell when `electrons` fill shells in order.
fn filled_shell(electrons: usize) -> u32 {
    let mut capacity = 0;
    let mut n = 0;
    loop {
        capacity += 2 * (n as usize + 1).pow(2);
        if capacity >= electrons {
            return n;
        }
        n += 1;
    }
}

/// Scores every state of shell `n`, in enumeration order.
fn evaluate_shell<T: Scalar>(
    scorer: &Scorer<T>,
    moving: Option<&Orbital>,
    n: u32,
) -> Vec<(Orbital, Candidate<T>)> {
    let states: Vec<Orbital> = Orbital::shell_start(n)
        .members(OrbitalGroup::Shell)
        .collect();

    #[cfg(not(feature = "parallel"))]
    let iterator = states.iter();

    #[cfg(feature = "parallel")]
    let iterator = states.par_iter();

    iterator
        .map(|state| {
            let candidate = if scorer.is_occupied(state) {
                Candidate::Blocked
            } else {
                Candidate::Free(scorer.total_energy_with_move(moving, state))
            };
            (*state, candidate)
        })
        .collect()
}

/// Adds one electron in the state that lowers the total energy the most.
///
/// Returns the chosen state, or `None` (leaving the atom untouched) when no
/// free state lowers the energy.
pub fn populate<T: Scalar>(atom: &mut Atom, constants: &PhysicalConstants<T>) -> Option<Orbital> {
    let spot = reseat_spot(atom, constants, None)?;
    let inserted = atom.occupy(spot);
    debug_assert!(inserted, "search returned occupied state {}", spot);
    debug!(state = %spot, electrons = atom.electron_count(), "Placed electron.");
    Some(spot)
}

/// Performs a single relaxation step.
///
/// Occupants are visited from the highest state down; the first one whose best
/// spot differs from where it sits is moved. `None` means no occupant wants to
/// move, i.e. the configuration is stable.
pub fn reseat<T: Scalar>(atom: &mut Atom, constants: &PhysicalConstants<T>) -> Option<Reseat> {
    let step = atom.iter().rev().find_map(|occupant| {
        reseat_spot(atom, constants, Some(occupant))
            .filter(|spot| spot != occupant)
            .map(|to| Reseat {
                from: *occupant,
                to,
            })
    })?;
    let moved = atom.relocate(&step.from, step.to);
    debug_assert!(moved, "reseat target {} is already occupied", step.to);
    debug!(from = %step.from, to = %step.to, "Reseated electron.");
    Some(step)
}

/// Whether no occupant can lower the total energy by moving alone.
pub fn is_stable<T: Scalar>(atom: &Atom, constants: &PhysicalConstants<T>) -> bool {
    atom.iter()
        .all(|occupant| reseat_spot(atom, constants, Some(occupant)) == Some(*occupant))
}

/// Calls [`reseat`] until the atom is stable or `config.max_reseats` moves
/// have been made. `on_move` sees the atom right after each move.
pub fn relax_with<T, F>(
    atom: &mut Atom,
    constants: &PhysicalConstants<T>,
    config: &RelaxationConfig,
    mut on_move: F,
) -> Relaxation
where
    T: Scalar,
    F: FnMut(&Atom, &Reseat),
{
    let mut moves = Vec::new();
    while moves.len() < config.max_reseats {
        match reseat(atom, constants) {
            Some(step) => {
                on_move(atom, &step);
                moves.push(step);
            }
            None => {
                return Relaxation {
                    moves,
                    converged: true,
                };
            }
        }
    }
    let converged = is_stable(atom, constants);
    Relaxation { moves, converged }
}

pub fn relax<T: Scalar>(
    atom: &mut Atom,
    constants: &PhysicalConstants<T>,
    config: &RelaxationConfig,
) -> Relaxation {
    relax_with(atom, constants, config, |_, _| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orbital::{FineStructure, Spin};
    use std::collections::BTreeSet;

    fn presets() -> [PhysicalConstants<f64>; 2] {
        [
            PhysicalConstants::default(),
            PhysicalConstants::hartree_atomic(),
        ]
    }

    fn build(protons: u32, electrons: usize, c: &PhysicalConstants<f64>) -> Atom {
        let mut atom = Atom::new(protons);
        let config = RelaxationConfig::default();
        for _ in 0..electrons {
            populate(&mut atom, c).expect("electron should be accepted");
            relax(&mut atom, c, &config);
        }
        atom
    }

    /// Straight scan over the enumerator, one state at a time.
    fn reference_spot(
        atom: &Atom,
        c: &PhysicalConstants<f64>,
        moving: Option<&Orbital>,
    ) -> Option<Orbital> {
        let scorer = Scorer::new(atom, c);
        let mut best = moving.copied();
        let mut best_energy = scorer.total_energy();
        let mut boundary = ShellBoundary::new();
        for state in Orbital::all() {
            if !boundary.observe(&state) {
                break;
            }
            if atom.is_occupied(&state) {
                boundary.mark();
                continue;
            }
            let energy = scorer.total_energy_with_move(moving, &state);
            if energy < best_energy {
                boundary.mark();
                best = Some(state);
                best_energy = energy;
            }
        }
        best
    }

    #[test]
    fn hydrogen_takes_the_ground_state() {
        for c in presets() {
            let mut atom = Atom::new(1);
            assert_eq!(populate(&mut atom, &c), Some(Orbital::GROUND));
            assert_eq!(reseat(&mut atom, &c), None);
        }
    }

    #[test]
    fn hydrogen_ground_state_energy_is_close_to_minus_rydberg() {
        let c = PhysicalConstants::<f64>::hartree_atomic();
        let mut atom = Atom::new(1);
        let state = populate(&mut atom, &c).unwrap();
        let energy = Scorer::new(&atom, &c).orbital_energy(&state, None);
        assert!((energy + c.rydberg()).abs() < 1e-4 * c.rydberg());
    }

    #[test]
    fn helium_pairs_both_electrons_in_the_ground_orbital() {
        let hartree = (
            PhysicalConstants::<f64>::hartree_atomic(),
            FineStructure::Truncated,
        );
        let exact_default = (PhysicalConstants::default(), FineStructure::Exact);
        for (c, rule) in [hartree, exact_default] {
            let mut atom = Atom::new(2).with_fine_structure(rule);
            assert_eq!(populate(&mut atom, &c), Some(Orbital::GROUND));
            assert_eq!(
                populate(&mut atom, &c),
                Some(Orbital::new(0, 0, 0, Spin::Up))
            );
            assert_eq!(reseat(&mut atom, &c), None);
            assert!(is_stable(&atom, &c));
        }
    }

    #[test]
    fn truncated_fine_structure_sends_the_second_helium_electron_to_two_s() {
        // With α = 1 the truncated correction doubles the 1s binding, which
        // outweighs the screening cost of pairing only in the 2s state.
        let c = PhysicalConstants::<f64>::default();
        let mut atom = Atom::new(2);
        assert_eq!(populate(&mut atom, &c), Some(Orbital::GROUND));
        assert_eq!(
            populate(&mut atom, &c),
            Some(Orbital::new(1, 0, 0, Spin::Down))
        );
        assert_eq!(reseat(&mut atom, &c), None);
    }

    #[test]
    fn lithium_opens_the_second_shell_with_a_single_valence_electron() {
        let two_s = Orbital::new(1, 0, 0, Spin::Down);
        for c in presets() {
            let atom = build(3, 3, &c);
            let expected = BTreeSet::from([
                Orbital::GROUND,
                Orbital::new(0, 0, 0, Spin::Up),
                two_s,
            ]);
            assert_eq!(atom.occupants(), &expected);
            assert_eq!(atom.valence_orbitals(), BTreeSet::from([two_s]));
        }
    }

    #[test]
    fn search_matches_a_state_by_state_scan() {
        let c = PhysicalConstants::<f64>::hartree_atomic();
        let mut atom = Atom::new(8);
        for _ in 0..8 {
            assert_eq!(
                reseat_spot(&atom, &c, None),
                reference_spot(&atom, &c, None)
            );
            for occupant in atom.iter() {
                assert_eq!(
                    reseat_spot(&atom, &c, Some(occupant)),
                    reference_spot(&atom, &c, Some(occupant))
                );
            }
            populate(&mut atom, &c);
        }
    }

    #[test]
    fn reseat_never_raises_the_total_energy() {
        let c = PhysicalConstants::<f64>::hartree_atomic();
        let config = RelaxationConfig { max_reseats: 50 };
        for protons in 1..=10 {
            let mut atom = Atom::new(protons);
            for _ in 0..protons {
                populate(&mut atom, &c);
                let mut before = Scorer::new(&atom, &c).total_energy();
                relax_with(&mut atom, &c, &config, |moved, _| {
                    let after = Scorer::new(moved, &c).total_energy();
                    assert!(after <= before);
                    before = after;
                });
            }
        }
    }

    #[test]
    fn stable_configuration_stays_stable() {
        for c in presets() {
            for protons in 1..=3 {
                let mut atom = build(protons, protons as usize, &c);
                assert_eq!(reseat(&mut atom, &c), None);
                assert_eq!(reseat(&mut atom, &c), None);
            }
        }
    }

    #[test]
    fn electron_count_tracks_accepted_placements() {
        let c = PhysicalConstants::<f64>::hartree_atomic();
        let config = RelaxationConfig { max_reseats: 20 };
        let mut atom = Atom::new(10);
        for placed in 1..=10 {
            assert!(populate(&mut atom, &c).is_some());
            relax(&mut atom, &c, &config);
            assert_eq!(atom.electron_count(), placed);
        }
    }

    #[test]
    fn populate_rejects_when_no_state_binds() {
        let mut c = PhysicalConstants::<f64>::default();
        c.e = 0.0;
        let mut atom = Atom::new(1);
        assert_eq!(populate(&mut atom, &c), None);
        assert!(atom.is_empty());
    }

    #[test]
    fn reseat_spot_of_a_settled_electron_is_itself() {
        for c in presets() {
            let atom = build(2, 2, &c);
            for occupant in atom.iter() {
                assert_eq!(reseat_spot(&atom, &c, Some(occupant)), Some(*occupant));
            }
        }
    }

    #[test]
    fn relax_reports_non_convergence_when_the_budget_is_spent() {
        let c = PhysicalConstants::<f64>::hartree_atomic();
        let start = [
            Orbital::new(3, 2, 0, Spin::Up),
            Orbital::new(3, 2, 1, Spin::Up),
        ];
        let mut atom = Atom::with_occupants(2, start).unwrap();

        let relaxation = relax(&mut atom, &c, &RelaxationConfig { max_reseats: 1 });
        assert_eq!(relaxation.moves, vec![Reseat {
            from: Orbital::new(3, 2, 1, Spin::Up),
            to: Orbital::GROUND,
        }]);
        assert!(!relaxation.converged);

        let relaxation = relax(&mut atom, &c, &RelaxationConfig::default());
        assert!(relaxation.converged);
        assert_eq!(
            atom.occupants(),
            &BTreeSet::from([Orbital::GROUND, Orbital::new(0, 0, 0, Spin::Up)])
        );
    }

    #[test]
    fn shell_limit_applies_only_to_the_self_consistent_field() {
        assert_eq!(shell_limit(&Atom::new(6)), None);
        let atom = Atom::new(6).with_field_model(FieldModel::SelfConsistent);
        assert_eq!(shell_limit(&atom), Some(2));
        let atom = Atom::new(1).with_field_model(FieldModel::SelfConsistent);
        assert_eq!(shell_limit(&atom), Some(1));
        let atom = Atom::new(11).with_field_model(FieldModel::SelfConsistent);
        assert_eq!(shell_limit(&atom), Some(3));
    }

    #[test]
    fn self_consistent_field_search_terminates_within_the_shell_limit() {
        let config = RelaxationConfig { max_reseats: 20 };
        for c in presets() {
            let mut atom = Atom::new(6).with_field_model(FieldModel::SelfConsistent);
            for _ in 0..6 {
                populate(&mut atom, &c).expect("electron should be accepted");
                relax(&mut atom, &c, &config);
            }
            let limit = shell_limit(&atom).unwrap();
            assert_eq!(atom.electron_count(), 6);
            assert!(atom.iter().all(|o| o.n <= limit));
            for occupant in atom.iter() {
                let spot = reseat_spot(&atom, &c, Some(occupant)).unwrap();
                assert!(spot.n <= limit);
            }
        }
    }
}
