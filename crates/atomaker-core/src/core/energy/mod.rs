//! # Energy Module
//!
//! Atom-level energy evaluation on top of the per-state formulas in
//! [`crate::core::orbital::energetics`].
//!
//! - [`scoring`] - the [`Scorer`], which evaluates shielding, single-state
//!   energies, total energies (including hypothetical one-electron moves),
//!   the induced magnetic field and ionization energies
//! - [`field`] - how the magnetic field enters the Zeeman term
//!
//! ```ignore
//! use atomaker::core::energy::Scorer;
//!
//! let scorer = Scorer::new(&atom, &constants);
//! let total = scorer.total_energy();
//! ```

pub mod field;
pub mod scoring;

pub use field::FieldModel;
pub use scoring::Scorer;
