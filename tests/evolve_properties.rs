//! Property tests for the step function

use genomy::core::types::{Environment, Protein, NONE};
use genomy::rules::{Gene, Genome};
use genomy::simulation::{evolve, evolve_with_threshold};
use proptest::prelude::*;

fn protein() -> impl Strategy<Value = Protein> {
    "[A-D][A-D_]{0,3}".prop_map(Protein::new)
}

fn gene() -> impl Strategy<Value = Gene> {
    (
        protein(),
        prop::collection::vec(protein(), 0..3),
        prop::collection::vec(protein(), 0..3),
    )
        .prop_map(|(product, enhancers, suppressors)| Gene::new(product, enhancers, suppressors))
}

fn genome() -> impl Strategy<Value = Genome> {
    prop::collection::vec(gene(), 0..12).prop_map(Genome::new)
}

fn environment() -> impl Strategy<Value = Environment> {
    prop::collection::vec(protein(), 0..6).prop_map(|ps| ps.into_iter().collect())
}

proptest! {
    #[test]
    fn evolve_is_deterministic(genome in genome(), env in environment()) {
        prop_assert_eq!(evolve(&genome, &env), evolve(&genome, &env));
    }

    #[test]
    fn evolve_keeps_sentinel(genome in genome(), env in environment()) {
        prop_assert!(evolve(&genome, &env).contains(NONE));
    }

    #[test]
    fn products_come_from_enhanced_genes(genome in genome(), env in environment()) {
        let next = evolve(&genome, &env);
        for protein in next.active() {
            prop_assert!(genome.iter().any(|g| g.product() == protein && g.express(&env).is_some()));
        }
    }

    #[test]
    fn genes_without_enhancers_never_fire(
        product in protein(),
        suppressors in prop::collection::vec(protein(), 0..3),
        env in environment(),
    ) {
        let genome = Genome::new(vec![Gene::new(product, Vec::new(), suppressors)]);
        prop_assert!(evolve(&genome, &env).is_quiet());
    }

    #[test]
    fn suppressor_overrides_enhancer(product in protein(), signal in protein(), env in environment()) {
        let gene = Gene::new(product, vec![signal.clone()], vec![signal.clone()]);
        let env: Environment = env.active().cloned().chain([signal]).collect();
        prop_assert_eq!(gene.express(&env), None);
    }

    #[test]
    fn parallel_matches_sequential(genome in genome(), env in environment()) {
        prop_assert_eq!(
            evolve_with_threshold(&genome, &env, 1),
            evolve_with_threshold(&genome, &env, usize::MAX)
        );
    }
}
