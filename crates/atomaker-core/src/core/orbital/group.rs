use super::state::{Orbital, Spin};

/// Granularity at which two states can be considered "the same place".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitalGroup {
    /// Same principal index.
    Shell,
    /// Same `n` and `l`.
    Subshell,
    /// Same `n`, `l` and `m_l`; the two spins of one spatial orbital.
    Pair,
    /// The state itself.
    Individual,
}

impl Orbital {
    pub fn same_group(&self, other: &Orbital, group: OrbitalGroup) -> bool {
        match group {
            OrbitalGroup::Shell => self.n == other.n,
            OrbitalGroup::Subshell => self.n == other.n && self.l == other.l,
            OrbitalGroup::Pair => self.n == other.n && self.l == other.l && self.m_l == other.m_l,
            OrbitalGroup::Individual => self == other,
        }
    }

    /// First state, in enumeration order, of the group containing `self`.
    pub fn lower_limit(&self, group: OrbitalGroup) -> Orbital {
        match group {
            OrbitalGroup::Shell => Orbital::shell_start(self.n),
            OrbitalGroup::Subshell => Orbital::new(self.n, self.l, -(self.l as i32), Spin::Down),
            OrbitalGroup::Pair => Orbital::new(self.n, self.l, self.m_l, Spin::Down),
            OrbitalGroup::Individual => *self,
        }
    }

    /// Last state, in enumeration order, of the group containing `self`.
    pub fn upper_limit(&self, group: OrbitalGroup) -> Orbital {
        match group {
            OrbitalGroup::Shell => Orbital::new(self.n, self.n, self.n as i32, Spin::Up),
            OrbitalGroup::Subshell => Orbital::new(self.n, self.l, self.l as i32, Spin::Up),
            OrbitalGroup::Pair => Orbital::new(self.n, self.l, self.m_l, Spin::Up),
            OrbitalGroup::Individual => *self,
        }
    }

    /// Every state of the group containing `self`, in enumeration order.
    pub fn members(&self, group: OrbitalGroup) -> impl Iterator<Item = Orbital> + use<> {
        let upper = self.upper_limit(group);
        Orbital::iter_from(self.lower_limit(group)).take_while(move |o| *o <= upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_members_span_two_n_squared_states() {
        let state = Orbital::new(2, 1, 0, Spin::Up);
        let members: Vec<Orbital> = state.members(OrbitalGroup::Shell).collect();
        assert_eq!(members.len(), 18);
        assert_eq!(members.first(), Some(&Orbital::shell_start(2)));
        assert_eq!(members.last(), Some(&Orbital::new(2, 2, 2, Spin::Up)));
    }

    #[test]
    fn subshell_members_span_two_l_plus_one_pairs() {
        let state = Orbital::new(3, 2, 1, Spin::Down);
        let members: Vec<Orbital> = state.members(OrbitalGroup::Subshell).collect();
        assert_eq!(members.len(), 10);
        assert!(members.iter().all(|o| o.same_group(&state, OrbitalGroup::Subshell)));
    }

    #[test]
    fn pair_members_differ_only_by_spin() {
        let state = Orbital::new(1, 1, -1, Spin::Up);
        let members: Vec<Orbital> = state.members(OrbitalGroup::Pair).collect();
        assert_eq!(members, vec![
            Orbital::new(1, 1, -1, Spin::Down),
            Orbital::new(1, 1, -1, Spin::Up),
        ]);
    }

    #[test]
    fn individual_group_contains_only_the_state_itself() {
        let state = Orbital::new(1, 1, 0, Spin::Up);
        assert_eq!(state.members(OrbitalGroup::Individual).collect::<Vec<_>>(), vec![state]);
        assert!(!state.same_group(&Orbital::new(1, 1, 0, Spin::Down), OrbitalGroup::Individual));
    }

    #[test]
    fn same_group_coarsens_from_individual_to_shell() {
        let a = Orbital::new(2, 1, 0, Spin::Down);
        let b = Orbital::new(2, 1, 1, Spin::Down);
        assert!(a.same_group(&b, OrbitalGroup::Shell));
        assert!(a.same_group(&b, OrbitalGroup::Subshell));
        assert!(!a.same_group(&b, OrbitalGroup::Pair));
        assert!(!a.same_group(&Orbital::new(1, 1, 0, Spin::Down), OrbitalGroup::Shell));
    }
}
