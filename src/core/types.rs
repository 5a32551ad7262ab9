//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Sentinel protein meaning "no signal"
///
/// Present in every environment and never shown to the user.
pub const NONE: &str = "NONE";

/// Characters that terminate a protein name in rule source
pub const DELIMITERS: &str = "-+#: ";

/// A protein label (opaque, case-sensitive identifier)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Protein(String);

impl Protein {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `NONE` sentinel
    pub fn none() -> Self {
        Self(NONE.to_string())
    }

    pub fn is_none(&self) -> bool {
        self.0 == NONE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment: `OUT_LONG` contains `OUT_L`
    pub fn contains(&self, fragment: &Protein) -> bool {
        self.0.contains(fragment.as_str())
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Protein {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Protein {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Protein {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Set of proteins active at one simulation step
///
/// Always contains the `NONE` sentinel, so a freshly built environment
/// is already normalized for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    proteins: BTreeSet<Protein>,
}

impl Environment {
    /// An environment with nothing active
    pub fn new() -> Self {
        let mut proteins = BTreeSet::new();
        proteins.insert(Protein::none());
        Self { proteins }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.proteins.contains(name)
    }

    /// True if any protein (sentinel included) contains `fragment`
    pub fn expresses(&self, fragment: &Protein) -> bool {
        self.proteins.iter().any(|p| p.contains(fragment))
    }

    /// All members, sentinel included, in sorted order
    pub fn proteins(&self) -> impl Iterator<Item = &Protein> {
        self.proteins.iter()
    }

    /// Members other than the sentinel, in sorted order
    pub fn active(&self) -> impl Iterator<Item = &Protein> {
        self.proteins.iter().filter(|p| !p.is_none())
    }

    pub fn active_count(&self) -> usize {
        self.proteins.len() - 1
    }

    /// True if nothing but the sentinel is present
    pub fn is_quiet(&self) -> bool {
        self.active_count() == 0
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Into<Protein>> FromIterator<P> for Environment {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut env = Self::new();
        env.proteins.extend(iter.into_iter().map(Into::into));
        env
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, protein) in self.active().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", protein)?;
        }
        Ok(())
    }
}

impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.active())
    }
}
