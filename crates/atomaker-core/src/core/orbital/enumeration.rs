use super::state::{Orbital, Spin};
use std::iter::FusedIterator;

impl Orbital {
    /// The next state in the canonical enumeration.
    ///
    /// Spin toggles first; when it wraps back to `Down`, `m_l` advances; past
    /// `m_l = l` the next subshell starts at `m_l = -l`; past `l = n` the next
    /// principal shell starts at `l = 0`.
    pub fn succ(self) -> Self {
        let mut next = self;
        next.spin = self.spin.flipped();
        if next.spin == Spin::Down {
            next.m_l += 1;
            if next.m_l.unsigned_abs() > next.l {
                next.l += 1;
                if next.l > next.n {
                    next.l = 0;
                    next.n += 1;
                }
                next.m_l = -(next.l as i32);
            }
        }
        next
    }

    /// The previous state in the canonical enumeration, or `None` before
    /// [`Orbital::GROUND`].
    pub fn pred(self) -> Option<Self> {
        let mut prev = self;
        prev.spin = self.spin.flipped();
        if prev.spin == Spin::Up {
            prev.m_l -= 1;
            if prev.m_l.unsigned_abs() > prev.l {
                if prev.l == 0 {
                    prev.n = prev.n.checked_sub(1)?;
                    prev.l = prev.n;
                } else {
                    prev.l -= 1;
                }
                prev.m_l = prev.l as i32;
            }
        }
        Some(prev)
    }

    /// Whether this state opens a principal shell during enumeration
    /// (`l = 0` with spin down).
    #[inline]
    pub fn is_shell_start(&self) -> bool {
        self.l == 0 && self.spin == Spin::Down
    }

    /// Every state from `start` onwards, in increasing order. The iterator never ends.
    pub fn iter_from(start: Orbital) -> Orbitals {
        Orbitals { next: start }
    }

    /// Every valid state, starting from [`Orbital::GROUND`].
    pub fn all() -> Orbitals {
        Self::iter_from(Self::GROUND)
    }
}

/// Infinite, restartable walk over the canonical state enumeration.
#[derive(Debug, Clone)]
pub struct Orbitals {
    next: Orbital,
}

impl Iterator for Orbitals {
    type Item = Orbital;

    #[inline]
    fn next(&mut self) -> Option<Orbital> {
        let current = self.next;
        self.next = current.succ();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Orbitals {}

/// Termination rule for exhaustive scans over the enumerator.
///
/// A scan marks the boundary whenever the shell it is in produced something
/// worth continuing for. Crossing into a new shell consumes the mark; crossing
/// again without a fresh mark ends the scan, so the scan never runs more than
/// one quiet shell past the last marked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellBoundary {
    marked: bool,
}

impl ShellBoundary {
    pub fn new() -> Self {
        Self { marked: true }
    }

    #[inline]
    pub fn mark(&mut self) {
        self.marked = true;
    }

    /// Crosses into the next shell. Returns `false` once a whole shell has
    /// passed since the last mark.
    #[inline]
    pub fn cross(&mut self) -> bool {
        std::mem::replace(&mut self.marked, false)
    }

    /// Feeds one enumerated state to the rule, crossing if it opens a shell.
    #[inline]
    pub fn observe(&mut self, orbital: &Orbital) -> bool {
        !orbital.is_shell_start() || self.cross()
    }
}

impl Default for ShellBoundary {
    fn default() -> Self {
        Self::new()
    }
}
