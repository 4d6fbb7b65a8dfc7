//! Genetics core for a guinea pig breeding game.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Gene/allele reference data |
//! | [`config`] | Breeding constants, stat rules, catalog definitions |
//! | [`engines::genetics`] | Genetic code, Punnett squares, breeding, stat derivation |
//! | [`types`] | Genotype and stat value types |

pub mod catalog;
pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use catalog::GeneCatalog;
pub use error::{CavyError, Result};
pub use types::{Allele, AllelePair, Gene, Genotype, ParentSlot, StatBundle, StatComparison, Winner};
