//! # Constants Module
//!
//! The seven configurable base constants of the energy model and the values
//! derived from them, plus the two file formats they can be loaded from.
//!
//! - [`params`] - [`PhysicalConstants`] and the derived-constant functions
//! - [`io`] - the plain-text record format and TOML tables

pub mod io;
pub mod params;

pub use io::{ConstantsError, LoadReport};
pub use params::{ConstantField, PhysicalConstants};
