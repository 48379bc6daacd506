use std::fmt;

const SUBSHELL_LETTERS: &[u8] = b"spdfghiklmnoqrtuv";

/// Spin projection of a single electron.
///
/// `Down` sorts before `Up`, so it is the first spin visited by the enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Spin {
    /// `m_s = -1/2`.
    #[default]
    Down,
    /// `m_s = +1/2`.
    Up,
}

impl Spin {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Spin::Down => Spin::Up,
            Spin::Up => Spin::Down,
        }
    }

    #[inline]
    pub fn is_up(self) -> bool {
        self == Spin::Up
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Spin::Down => "-1/2",
            Spin::Up => "1/2",
        }
    }
}

/// A single-electron quantum state.
///
/// States are totally ordered by `(n, l, m_l, spin)` compared field by field,
/// which is exactly the order the enumerator visits them in. The derived
/// `Ord` relies on the field declaration order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Orbital {
    /// Principal index, i.e. the principal quantum number minus one.
    pub n: u32,
    /// Angular momentum number, `0 <= l <= n`.
    pub l: u32,
    /// Magnetic number, `-l <= m_l <= l`.
    pub m_l: i32,
    pub spin: Spin,
}

impl Orbital {
    /// The lowest state in the total order: `1s`, `m_l = 0`, spin down.
    pub const GROUND: Orbital = Orbital::new(0, 0, 0, Spin::Down);

    pub const fn new(n: u32, l: u32, m_l: i32, spin: Spin) -> Self {
        Self { n, l, m_l, spin }
    }

    /// The first state of principal shell `n`.
    pub const fn shell_start(n: u32) -> Self {
        Self::new(n, 0, 0, Spin::Down)
    }

    /// Whether this state actually exists (`l <= n` and `|m_l| <= l`).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.l <= self.n && self.m_l.unsigned_abs() <= self.l
    }

    /// The principal quantum number (`n + 1`).
    #[inline]
    pub fn principal_number(&self) -> u32 {
        self.n + 1
    }

    /// Combined angular momentum number plus one half, `j + 1/2`.
    ///
    /// For `l > 0` this is `l + 1` with spin up and `l` with spin down;
    /// `s` states always give 1.
    #[inline]
    pub fn j_plus_half(&self) -> u32 {
        if self.l == 0 {
            1
        } else {
            self.l + u32::from(self.spin.is_up())
        }
    }

    /// Spectroscopic label of the subshell, e.g. `2p`.
    pub fn subshell_label(&self) -> String {
        match SUBSHELL_LETTERS.get(self.l as usize) {
            Some(&letter) => format!("{}{}", self.principal_number(), letter as char),
            None => format!("{}[l={}]", self.principal_number(), self.l),
        }
    }
}

impl Default for Orbital {
    fn default() -> Self {
        Self::GROUND
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (n: {}, l: {}, m_l: {}, s: {})",
            self.subshell_label(),
            self.n,
            self.l,
            self.m_l,
            self.spin.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_compares_n_then_l_then_m_l_then_spin() {
        let a = Orbital::new(0, 0, 0, Spin::Up);
        let b = Orbital::new(1, 0, 0, Spin::Down);
        let c = Orbital::new(1, 1, -1, Spin::Down);
        let d = Orbital::new(1, 1, -1, Spin::Up);
        let e = Orbital::new(1, 1, 0, Spin::Down);
        assert!(a < b && b < c && c < d && d < e);
        assert!(Orbital::GROUND < a);
    }

    #[test]
    fn validity_requires_l_at_most_n_and_m_l_within_l() {
        assert!(Orbital::new(2, 2, -2, Spin::Up).is_valid());
        assert!(!Orbital::new(1, 2, 0, Spin::Down).is_valid());
        assert!(!Orbital::new(2, 1, 2, Spin::Down).is_valid());
        assert!(!Orbital::new(2, 1, -2, Spin::Down).is_valid());
    }

    #[test]
    fn j_plus_half_depends_on_spin_only_for_l_above_zero() {
        assert_eq!(Orbital::new(3, 0, 0, Spin::Up).j_plus_half(), 1);
        assert_eq!(Orbital::new(3, 0, 0, Spin::Down).j_plus_half(), 1);
        assert_eq!(Orbital::new(3, 2, 0, Spin::Down).j_plus_half(), 2);
        assert_eq!(Orbital::new(3, 2, 0, Spin::Up).j_plus_half(), 3);
    }

    #[test]
    fn subshell_label_uses_spectroscopic_letters() {
        assert_eq!(Orbital::GROUND.subshell_label(), "1s");
        assert_eq!(Orbital::new(1, 1, 0, Spin::Down).subshell_label(), "2p");
        assert_eq!(Orbital::new(3, 3, 0, Spin::Down).subshell_label(), "4f");
        assert_eq!(Orbital::new(40, 30, 0, Spin::Down).subshell_label(), "41[l=30]");
    }

    #[test]
    fn display_includes_all_quantum_numbers() {
        let text = Orbital::new(2, 1, -1, Spin::Up).to_string();
        assert_eq!(text, "3p (n: 2, l: 1, m_l: -1, s: 1/2)");
    }

    #[test]
    fn spin_flip_is_an_involution() {
        assert_eq!(Spin::Down.flipped(), Spin::Up);
        assert_eq!(Spin::Down.flipped().flipped(), Spin::Down);
    }
}
