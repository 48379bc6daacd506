//! # Core Module
//!
//! Stateless building blocks of the configuration approximator.
//!
//! ## Architecture
//!
//! - **Physical Constants** ([`constants`]) - Base constants, the quantities derived from
//!   them, and loading overrides from disk
//! - **Quantum States** ([`orbital`]) - The `(n, l, m_l, s)` tuple, its canonical enumeration,
//!   and the per-state energy terms (shielding, principal, fine structure, Zeeman)
//! - **Atomic Models** ([`models`]) - The atom as a nucleus plus an occupant set
//! - **Energy Evaluation** ([`energy`]) - Screened energies of whole configurations
//! - **Numeric Genericity** ([`numeric`]) - The `Scalar` bound shared by every formula
//!
//! Nothing here mutates an atom on its own. The placement search lives in
//! [`crate::engine`].

pub mod constants;
pub mod energy;
pub mod models;
pub mod numeric;
pub mod orbital;
