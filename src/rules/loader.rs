//! Load genome source from a file or standard input

use crate::core::error::{GenomyError, Result};
use crate::rules::gene::Genome;
use crate::rules::parser::parse;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read rule source text
///
/// A file path takes precedence; without one the whole of standard input
/// is read.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading genome source");
            fs::read_to_string(path).map_err(|source| GenomyError::SourceRead {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            debug!("reading genome source from stdin");
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Read and parse a genome
pub fn load_genome(path: Option<&Path>) -> Result<Genome> {
    let source = read_source(path)?;
    Ok(parse(&source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("genomy_{}_{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_genome_from_file() {
        let path = temp_file("loader.genomy", "+START :OUT_H\n# note\n+OUT_H :OUT_E\n");
        let genome = load_genome(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(genome.len(), 2);
        assert_eq!(genome.genes()[1].product().as_str(), "OUT_E");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("definitely/not/here.genomy");
        let err = read_source(Some(path)).unwrap_err();
        match err {
            GenomyError::SourceRead { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
