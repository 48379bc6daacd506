/// Source of the magnetic field `B` fed into each state's Zeeman term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldModel {
    /// `B = 0` for every state. The self-consistent field is still available
    /// through the scorer but does not enter the energies.
    #[default]
    Off,
    /// `B` is the field induced by every other occupant of the atom.
    SelfConsistent,
}
