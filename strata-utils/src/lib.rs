//! Shared primitive types for the strata workspace.
//!
//! Identifiers, block positions, the vanilla legacy random and the logger setup live
//! here so the registry and the processor agree on a single representation.

pub mod logger;
pub mod math;
pub mod random;
pub mod types;

pub use types::{BlockPos, Identifier, IdentifierError};
