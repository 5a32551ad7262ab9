//! Genomy - a small rule language inspired by genomics
//!
//! Genes read the proteins active in an environment and, step by step,
//! decide which proteins exist next.

pub mod core;
pub mod rules;
pub mod simulation;

pub use crate::core::types::{Environment, Protein, NONE};
pub use crate::rules::{parse, Gene, Genome};
pub use crate::simulation::evolve;
