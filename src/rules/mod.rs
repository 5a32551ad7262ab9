//! Genome rules: data model, parser and source loading

pub mod gene;
pub mod loader;
pub mod parser;

pub use gene::{Gene, Genome, Regulation};
pub use loader::{load_genome, read_source};
pub use parser::{parse, parse_line};
