//! # Engine Module
//!
//! The stateful half of the library: everything that changes an [`Atom`]'s
//! occupant set.
//!
//! ## Overview
//!
//! Electrons are added one at a time by [`placement::populate`], each into the
//! free state that lowers the total energy the most. Afterwards
//! [`placement::reseat`] moves single electrons to better states until none can
//! improve alone. Both steps rest on [`placement::reseat_spot`], a bounded scan
//! over the canonical state enumeration.
//!
//! ## Architecture
//!
//! - **Placement** ([`placement`]) - The search, populate/reseat steps and the relaxation loop
//! - **Configuration** ([`config`]) - Run parameters, constants sources and their builders
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! [`Atom`]: crate::core::models::atom::Atom

pub mod config;
pub mod error;
pub mod placement;
pub mod progress;
