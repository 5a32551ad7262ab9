//! One simulation step: every gene reads the same environment snapshot
//!
//! Genes never see each other's products within a step, so evaluation is
//! a map over genes followed by a set union. Large genomes are mapped on
//! the rayon pool.

use crate::core::config::config;
use crate::core::types::{Environment, Protein};
use crate::rules::gene::{Gene, Genome};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Compute the next environment
///
/// Uses the global config to decide between sequential and parallel
/// evaluation; both give the same result.
pub fn evolve(genome: &Genome, env: &Environment) -> Environment {
    evolve_with_threshold(genome, env, config().parallel_threshold)
}

/// Compute the next environment, going parallel at `parallel_threshold` genes
pub fn evolve_with_threshold(
    genome: &Genome,
    env: &Environment,
    parallel_threshold: usize,
) -> Environment {
    let next: Environment = if genome.len() >= parallel_threshold {
        let products: Vec<Protein> = genome
            .genes()
            .par_iter()
            .filter_map(|gene| contribution(gene, env))
            .collect();
        products.into_iter().collect()
    } else {
        genome
            .iter()
            .filter_map(|gene| contribution(gene, env))
            .collect()
    };

    debug!(
        genes = genome.len(),
        before = env.active_count(),
        after = next.active_count(),
        "evolved environment"
    );
    next
}

fn contribution(gene: &Gene, env: &Environment) -> Option<Protein> {
    let regulation = gene.regulate(env);
    trace!(gene = %gene, ?regulation, "regulated gene");
    gene.express_with(regulation).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::NONE;
    use crate::rules::parser::parse;

    fn env(proteins: &[&str]) -> Environment {
        proteins.iter().copied().collect()
    }

    #[test]
    fn test_chain_advances_one_link_per_step() {
        let genome = parse("+START :OUT_H\n+OUT_H :OUT_E\n+OUT_E :OUT_L");

        let step1 = evolve(&genome, &env(&["START"]));
        assert_eq!(step1, env(&["OUT_H"]));

        let step2 = evolve(&genome, &step1);
        assert_eq!(step2, env(&["OUT_E"]));

        let step3 = evolve(&genome, &step2);
        assert_eq!(step3, env(&["OUT_L"]));
    }

    #[test]
    fn test_result_always_holds_sentinel() {
        let genome = parse("+A :B");
        let next = evolve(&genome, &env(&["A"]));
        assert!(next.contains(NONE));
        let next = evolve(&Genome::default(), &env(&["A"]));
        assert!(next.contains(NONE));
        assert!(next.is_quiet());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let genome = parse("+A :B");
        let before = env(&["A"]);
        let _ = evolve(&genome, &before);
        assert_eq!(before, env(&["A"]));
    }

    #[test]
    fn test_genes_read_the_same_snapshot() {
        // B appears this step, so C must not fire until the next one
        let genome = parse("+A :B\n+B :C");
        let next = evolve(&genome, &env(&["A"]));
        assert_eq!(next, env(&["B"]));
    }

    #[test]
    fn test_duplicate_products_collapse() {
        let genome = parse("+A :X\n+B :X");
        let next = evolve(&genome, &env(&["A", "B"]));
        assert_eq!(next.active_count(), 1);
        assert!(next.contains("X"));
    }

    #[test]
    fn test_suppression_wins() {
        let genome = parse("-SUP_L +OUT_L :OUT_L");
        let next = evolve(&genome, &env(&["OUT_L", "SUP_L"]));
        assert!(next.is_quiet());
    }

    #[test]
    fn test_sentinel_can_suppress() {
        // "ON" is always present through "NONE"
        let genome = parse("-ON +A :B");
        let next = evolve(&genome, &env(&["A"]));
        assert!(next.is_quiet());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let genome = parse("+A :B\n-B +A :C\n+C :D\n+ :E\n-Z +B :F");
        let start = env(&["A", "C", "Z"]);
        let sequential = evolve_with_threshold(&genome, &start, usize::MAX);
        let parallel = evolve_with_threshold(&genome, &start, 1);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential, env(&["B", "C", "D"]));
    }
}
