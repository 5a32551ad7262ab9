pub mod config;
pub mod error;
pub mod types;

pub use error::{GenomyError, Result};
pub use types::{Environment, Protein, NONE};
