//! Core types for handoff-update.
//!
//! Currently this module hosts the crate-wide error type. Every public
//! operation in the crate reports failures through [`UpdateError`]; see
//! [`error`] for the taxonomy and the propagation policy.

pub mod error;

pub use error::UpdateError;
