//! Arrangement generators.
//!
//! - `exhaustive`: every permutation, built recursively.
//! - `symmetry`: strided walk over the lexicographic enumeration that skips
//!   orderings with the same balance.
//! - `random`: distinct random shuffles drawn from an injected generator.

pub mod exhaustive;
pub mod random;
pub mod symmetry;

pub use exhaustive::permute_all;
pub use random::{distinct_orderings, sample_distinct};
pub use symmetry::{SymmetryPlan, symmetry_cover};
