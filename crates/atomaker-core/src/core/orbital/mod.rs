//! # Orbital Module
//!
//! Single-electron quantum states and everything that can be computed from one
//! state in isolation.
//!
//! - [`state`] - the [`Orbital`] value type, its total order and validity
//! - [`enumeration`] - the canonical successor/predecessor walk and the
//!   [`ShellBoundary`] rule that bounds scans over it
//! - [`group`] - shell/subshell/pair grouping and group limits
//! - [`energetics`] - shielding contributions, the per-state energy terms and
//!   the [`FineStructure`] rule
//!
//! The enumeration visits every valid state exactly once in increasing order,
//! shell by shell, which is what lets the placement engine search an unbounded
//! state space deterministically.

pub mod energetics;
pub mod enumeration;
pub mod group;
pub mod state;

pub use energetics::FineStructure;
pub use enumeration::{Orbitals, ShellBoundary};
pub use group::OrbitalGroup;
pub use state::{Orbital, Spin};
