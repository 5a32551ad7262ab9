//! Gene and genome definitions

use crate::core::types::{Environment, Protein};
use serde::Serialize;
use std::fmt;

/// A single rule: produces `product` when enhanced and not suppressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gene {
    product: Protein,
    enhancers: Vec<Protein>,
    suppressors: Vec<Protein>,
}

/// Why a gene did or did not fire against an environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regulation {
    /// A suppressor matched; overrides any enhancer
    Suppressed,
    /// No suppressor matched and an enhancer did
    Enhanced,
    /// Nothing matched
    Silent,
}

impl Gene {
    pub fn new(product: Protein, enhancers: Vec<Protein>, suppressors: Vec<Protein>) -> Self {
        Self {
            product,
            enhancers,
            suppressors,
        }
    }

    pub fn product(&self) -> &Protein {
        &self.product
    }

    pub fn enhancers(&self) -> &[Protein] {
        &self.enhancers
    }

    pub fn suppressors(&self) -> &[Protein] {
        &self.suppressors
    }

    /// Decide whether this gene fires against `env`
    pub fn regulate(&self, env: &Environment) -> Regulation {
        if self.suppressors.iter().any(|s| env.expresses(s)) {
            Regulation::Suppressed
        } else if self.enhancers.iter().any(|h| env.expresses(h)) {
            Regulation::Enhanced
        } else {
            Regulation::Silent
        }
    }

    /// The product if the gene fires, `None` if it contributes the sentinel
    pub fn express(&self, env: &Environment) -> Option<&Protein> {
        self.express_with(self.regulate(env))
    }

    /// The contribution for an already computed regulation outcome
    pub fn express_with(&self, regulation: Regulation) -> Option<&Protein> {
        match regulation {
            Regulation::Enhanced => Some(&self.product),
            Regulation::Suppressed | Regulation::Silent => None,
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.suppressors {
            write!(f, "-{} ", s)?;
        }
        for e in &self.enhancers {
            write!(f, "+{} ", e)?;
        }
        write!(f, ":{}", self.product)
    }
}

/// Ordered collection of genes, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Genome {
    genes: Vec<Gene>,
}

impl Genome {
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gene> {
        self.genes.iter()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl FromIterator<Gene> for Genome {
    fn from_iter<I: IntoIterator<Item = Gene>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Genome {
    type Item = &'a Gene;
    type IntoIter = std::slice::Iter<'a, Gene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            writeln!(f, "{}", gene)?;
        }
        Ok(())
    }
}
