use super::field::FieldModel;
use crate::core::constants::PhysicalConstants;
use crate::core::models::atom::Atom;
use crate::core::numeric::{Scalar, cast, sum};
use crate::core::orbital::{FineStructure, Orbital};
use itertools::Itertools;
use std::cmp::Ordering;
use std::iter;

/// Evaluates energies of an atom's configuration under a fixed set of constants.
///
/// The scorer snapshots the occupant set on construction. Every evaluation,
/// including the hypothetical "one electron moved" energy used by the
/// placement search, is a pure function of that snapshot.
#[derive(Debug, Clone)]
pub struct Scorer<'a, T: Scalar> {
    constants: &'a PhysicalConstants<T>,
    protons: T,
    members: Vec<Orbital>,
    field_model: FieldModel,
    fine_structure: FineStructure,
}

impl<'a, T: Scalar> Scorer<'a, T> {
    pub fn new(atom: &Atom, constants: &'a PhysicalConstants<T>) -> Self {
        Self {
            constants,
            protons: cast(atom.protons() as f64),
            members: atom.iter().copied().collect(),
            field_model: atom.field_model(),
            fine_structure: atom.fine_structure(),
        }
    }

    #[inline]
    pub fn constants(&self) -> &PhysicalConstants<T> {
        self.constants
    }

    #[inline]
    pub fn is_occupied(&self, orbital: &Orbital) -> bool {
        self.members.binary_search(orbital).is_ok()
    }

    /// Total shielding felt by `orbital` from the occupants, optionally
    /// leaving one occupant out.
    pub fn shielding(&self, orbital: &Orbital, exclude: Option<&Orbital>) -> T {
        self.shielding_among(orbital, &self.members_without(exclude))
    }

    /// `Z` minus [`Scorer::shielding`].
    pub fn effective_charge(&self, orbital: &Orbital, exclude: Option<&Orbital>) -> T {
        self.protons - self.shielding(orbital, exclude)
    }

    /// Field along the quantization axis induced by all occupants except `exclude`.
    pub fn magnetic_field(&self, exclude: Option<&Orbital>) -> T {
        self.field_among(&self.members_without(exclude))
    }

    /// Energy of a single state against the current occupants, optionally
    /// ignoring one of them.
    pub fn orbital_energy(&self, orbital: &Orbital, exclude: Option<&Orbital>) -> T {
        self.energy_among(orbital, &self.members_without(exclude))
    }

    /// Sum of every occupant's energy, each screened by all the others.
    pub fn total_energy(&self) -> T {
        self.configuration_energy(&self.members)
    }

    /// Total energy of the configuration obtained by taking the electron out
    /// of `from` (or adding a new one if `from` is `None`) and putting it in `to`.
    ///
    /// `to` must not be occupied by any electron that stays in place.
    pub fn total_energy_with_move(&self, from: Option<&Orbital>, to: &Orbital) -> T {
        debug_assert!(
            Some(to) == from || !self.is_occupied(to),
            "move target {} is already occupied",
            to
        );
        let members: Vec<Orbital> = self
            .members
            .iter()
            .filter(|m| Some(*m) != from)
            .copied()
            .chain(iter::once(*to))
            .collect();
        self.configuration_energy(&members)
    }

    /// Energy needed to strip `level` electrons, taking the least bound ones first.
    ///
    /// Energies are those of the current configuration; the remaining
    /// electrons are not re-screened or relaxed between removals.
    pub fn ionization_energy(&self, level: usize) -> T {
        let removed = self
            .members
            .iter()
            .map(|o| self.orbital_energy(o, None))
            .sorted_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal))
            .take(level);
        -sum(removed)
    }

    fn members_without(&self, exclude: Option<&Orbital>) -> Vec<Orbital> {
        self.members
            .iter()
            .filter(|m| Some(*m) != exclude)
            .copied()
            .collect()
    }

    fn configuration_energy(&self, members: &[Orbital]) -> T {
        sum(members.iter().map(|o| self.energy_among(o, members)))
    }

    fn energy_among(&self, orbital: &Orbital, members: &[Orbital]) -> T {
        let z = self.protons - self.shielding_among(orbital, members);
        let b = match self.field_model {
            FieldModel::Off => cast(0.0),
            FieldModel::SelfConsistent => {
                let others: Vec<Orbital> =
                    members.iter().filter(|m| *m != orbital).copied().collect();
                self.field_among(&others)
            }
        };
        orbital.energy_with(self.constants, z, b, self.fine_structure)
    }

    fn field_among(&self, members: &[Orbital]) -> T {
        sum(members.iter().map(|m| {
            let z = self.protons - self.shielding_among(m, members);
            m.magnetic_field(self.constants, z)
        }))
    }

    fn shielding_among(&self, orbital: &Orbital, members: &[Orbital]) -> T {
        sum(members.iter().map(|m| orbital.shielding_from::<T>(m)))
    }
}
