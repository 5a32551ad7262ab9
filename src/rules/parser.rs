//! Parse genome source text into genes
//!
//! Source is line oriented. Each line may declare suppressors (`-NAME`),
//! enhancers (`+NAME`) and one or more products (`:NAME`), in any order:
//!
//! ```text
//! # comment
//! +START :OUT_H
//! -SUP_O +SUP_L :OUT_O :SUP_O
//! ```
//!
//! Every product on a line becomes its own gene carrying all of the
//! line's enhancers and suppressors. Nothing is a syntax error: anything
//! that does not look like a declaration is ignored.

use crate::core::types::{Protein, DELIMITERS};
use crate::rules::gene::{Gene, Genome};
use nom::bytes::complete::{is_not, take_while};
use nom::character::complete;
use nom::{IResult, Parser};
use tracing::{debug, trace};

const ENHANCER: char = '+';
const SUPPRESSOR: char = '-';
const BODY: char = ':';

/// Parse a whole source text
pub fn parse(source: &str) -> Genome {
    let genome: Genome = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.starts_with('#'))
        .flat_map(parse_line)
        .collect();

    debug!(genes = genome.len(), "parsed genome");
    genome
}

/// Parse one non-comment line into zero or more genes
pub fn parse_line(line: &str) -> Vec<Gene> {
    let enhancers = scan(line, ENHANCER);
    let suppressors = scan(line, SUPPRESSOR);
    let products = scan(line, BODY);

    if !products.is_empty() {
        trace!(
            line,
            products = products.len(),
            enhancers = enhancers.len(),
            suppressors = suppressors.len(),
            "parsed line"
        );
    }

    products
        .into_iter()
        .map(|product| Gene::new(product, enhancers.clone(), suppressors.clone()))
        .collect()
}

/// Collect every `anchor`-prefixed name on a line, left to right
fn scan(line: &str, anchor: char) -> Vec<Protein> {
    let mut found = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find(anchor) {
        rest = &rest[start..];
        match anchored_name(anchor, rest) {
            Ok((remaining, name)) => {
                found.push(Protein::from(name));
                rest = remaining;
            }
            Err(_) => rest = &rest[anchor.len_utf8()..],
        }
    }

    found
}

/// `anchor`, optional whitespace, then a name
///
/// The whitespace (ASCII space, `\t`, `\n`, `\x0b`, `\x0c`, `\r`) is greedy
/// but gives characters back when no name can start after it. Only the
/// space is a delimiter, so other whitespace (tabs, for instance) can
/// begin a name.
fn anchored_name(anchor: char, input: &str) -> IResult<&str, &str> {
    let anchored: IResult<&str, char> = complete::char(anchor).parse(input);
    let (after, _) = anchored?;
    let leading: IResult<&str, &str> = take_while(is_gap).parse(after);
    let (_, gap) = leading?;

    let mut result = name(&after[gap.len()..]);
    for (offset, _) in gap.char_indices().rev() {
        if result.is_ok() {
            break;
        }
        result = name(&after[offset..]);
    }
    result
}

fn is_gap(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Longest non-empty run of non-delimiter characters
fn name(input: &str) -> IResult<&str, &str> {
    is_not(DELIMITERS).parse(input)
}
