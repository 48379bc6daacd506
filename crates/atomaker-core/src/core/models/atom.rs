use crate::core::energy::field::FieldModel;
use crate::core::orbital::{FineStructure, Orbital};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AtomError {
    #[error("Orbital {0} is not a valid quantum state")]
    InvalidOrbital(Orbital),
    #[error("Orbital {0} is already occupied")]
    AlreadyOccupied(Orbital),
}

/// A nucleus of charge `Z` and the states its electrons occupy.
///
/// Occupants are kept in a `BTreeSet`, so no two electrons can share a state
/// and every traversal visits them in the orbital total order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    protons: u32,
    occupants: BTreeSet<Orbital>,
    field_model: FieldModel,
    fine_structure: FineStructure,
}

impl Atom {
    pub fn new(protons: u32) -> Self {
        Self {
            protons,
            occupants: BTreeSet::new(),
            field_model: FieldModel::default(),
            fine_structure: FineStructure::default(),
        }
    }

    /// Builds an atom with a prescribed configuration, enforcing validity and
    /// Pauli exclusion.
    pub fn with_occupants(
        protons: u32,
        occupants: impl IntoIterator<Item = Orbital>,
    ) -> Result<Self, AtomError> {
        let mut atom = Self::new(protons);
        for orbital in occupants {
            if !orbital.is_valid() {
                return Err(AtomError::InvalidOrbital(orbital));
            }
            if !atom.occupy(orbital) {
                return Err(AtomError::AlreadyOccupied(orbital));
            }
        }
        Ok(atom)
    }

    pub fn with_field_model(mut self, field_model: FieldModel) -> Self {
        self.field_model = field_model;
        self
    }

    pub fn with_fine_structure(mut self, fine_structure: FineStructure) -> Self {
        self.fine_structure = fine_structure;
        self
    }

    #[inline]
    pub fn protons(&self) -> u32 {
        self.protons
    }

    #[inline]
    pub fn field_model(&self) -> FieldModel {
        self.field_model
    }

    #[inline]
    pub fn fine_structure(&self) -> FineStructure {
        self.fine_structure
    }

    #[inline]
    pub fn occupants(&self) -> &BTreeSet<Orbital> {
        &self.occupants
    }

    /// Occupied states in increasing order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Orbital> {
        self.occupants.iter()
    }

    #[inline]
    pub fn electron_count(&self) -> usize {
        self.occupants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    #[inline]
    pub fn is_occupied(&self, orbital: &Orbital) -> bool {
        self.occupants.contains(orbital)
    }

    /// Adds an electron in `orbital`. Returns `false` if the state was already taken.
    pub(crate) fn occupy(&mut self, orbital: Orbital) -> bool {
        self.occupants.insert(orbital)
    }

    /// Moves the electron in `from` to `to`. Returns `false`, leaving the atom
    /// untouched, if `from` is empty or `to` is already taken.
    pub(crate) fn relocate(&mut self, from: &Orbital, to: Orbital) -> bool {
        if !self.occupants.contains(from) || self.occupants.contains(&to) {
            return false;
        }
        self.occupants.remove(from);
        self.occupants.insert(to);
        true
    }

    /// Outermost occupants per subshell type.
    ///
    /// For every angular momentum number `l` present, keeps the occupants
    /// whose principal index equals the largest `n` reached with that `l`.
    pub fn valence_orbitals(&self) -> BTreeSet<Orbital> {
        let outermost: HashMap<u32, u32> = self
            .occupants
            .iter()
            .map(|o| (o.l, o.n))
            .into_grouping_map()
            .max();

        self.occupants
            .iter()
            .filter(|o| outermost.get(&o.l) == Some(&o.n))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orbital::Spin;

    fn o(n: u32, l: u32, m_l: i32, spin: Spin) -> Orbital {
        Orbital::new(n, l, m_l, spin)
    }

    #[test]
    fn new_atom_is_empty() {
        let atom = Atom::new(6);
        assert_eq!(atom.protons(), 6);
        assert!(atom.is_empty());
        assert_eq!(atom.field_model(), FieldModel::Off);
    }

    #[test]
    fn occupy_enforces_pauli_exclusion() {
        let mut atom = Atom::new(2);
        assert!(atom.occupy(Orbital::GROUND));
        assert!(!atom.occupy(Orbital::GROUND));
        assert_eq!(atom.electron_count(), 1);
    }

    #[test]
    fn with_occupants_rejects_duplicates_and_invalid_states() {
        let duplicate = Atom::with_occupants(2, [Orbital::GROUND, Orbital::GROUND]);
        assert_eq!(duplicate, Err(AtomError::AlreadyOccupied(Orbital::GROUND)));

        let invalid = o(0, 1, 0, Spin::Down);
        assert_eq!(
            Atom::with_occupants(2, [invalid]),
            Err(AtomError::InvalidOrbital(invalid))
        );
    }

    #[test]
    fn relocate_moves_one_electron_and_refuses_occupied_targets() {
        let up = o(0, 0, 0, Spin::Up);
        let two_s = o(1, 0, 0, Spin::Down);
        let mut atom = Atom::with_occupants(3, [Orbital::GROUND, up]).unwrap();

        assert!(!atom.relocate(&Orbital::GROUND, up));
        assert!(!atom.relocate(&two_s, Orbital::GROUND));
        assert!(atom.relocate(&up, two_s));
        assert!(atom.is_occupied(&two_s));
        assert!(!atom.is_occupied(&up));
        assert_eq!(atom.electron_count(), 2);
    }

    #[test]
    fn iteration_follows_the_orbital_order() {
        let states = [o(1, 1, 0, Spin::Down), Orbital::GROUND, o(1, 0, 0, Spin::Up)];
        let atom = Atom::with_occupants(5, states).unwrap();
        let visited: Vec<Orbital> = atom.iter().copied().collect();
        assert!(visited.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(atom.iter().next_back(), Some(&o(1, 1, 0, Spin::Down)));
    }

    #[test]
    fn valence_orbitals_of_lithium_is_the_two_s_electron() {
        let two_s = o(1, 0, 0, Spin::Down);
        let atom =
            Atom::with_occupants(3, [Orbital::GROUND, o(0, 0, 0, Spin::Up), two_s]).unwrap();
        assert_eq!(atom.valence_orbitals(), BTreeSet::from([two_s]));
    }

    #[test]
    fn valence_orbitals_keeps_outermost_shell_per_subshell_type() {
        let states = [
            Orbital::GROUND,
            o(0, 0, 0, Spin::Up),
            o(1, 0, 0, Spin::Down),
            o(1, 0, 0, Spin::Up),
            o(1, 1, -1, Spin::Down),
            o(1, 1, 0, Spin::Down),
            o(2, 0, 0, Spin::Down),
        ];
        let atom = Atom::with_occupants(11, states).unwrap();
        let expected = BTreeSet::from([
            o(1, 1, -1, Spin::Down),
            o(1, 1, 0, Spin::Down),
            o(2, 0, 0, Spin::Down),
        ]);
        assert_eq!(atom.valence_orbitals(), expected);
    }

    #[test]
    fn valence_orbitals_of_empty_atom_is_empty() {
        assert!(Atom::new(1).valence_orbitals().is_empty());
    }
}
