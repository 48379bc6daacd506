//! # Core Models Module
//!
//! Data structures for an atom under construction: a nucleus of charge `Z`
//! and the set of quantum states its electrons occupy.
//!
//! ## Key Components
//!
//! - [`atom`] - The occupant set, Pauli exclusion and valence queries

pub mod atom;
