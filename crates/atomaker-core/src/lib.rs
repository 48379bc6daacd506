//! # Atomaker Core Library
//!
//! Approximates the ground-state electron configuration of an atom by placing
//! electrons one at a time into the quantum state that minimizes the total
//! energy, then relaxing the result until no single electron can lower it further.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split throughout:
//!
//! - **[`core`]: The Foundation.** Physical constants, quantum states and their
//!   enumeration, the atom model, and the pure energy formulas.
//!
//! - **[`engine`]: The Logic Core.** The placement search (`reseat_spot`), the
//!   populate/reseat steps built on it, the relaxation loop, and the configuration
//!   types and errors shared by the workflows.
//!
//! - **[`workflows`]: The Public API.** Complete procedures, such as building an
//!   atom electron by electron and tabulating state energies, with progress reporting.

pub mod core;
pub mod engine;
pub mod workflows;
