//! Step-by-step runs of a genome

use crate::core::types::Environment;
use crate::rules::gene::Genome;
use crate::simulation::evolve::evolve;
use serde::Serialize;

/// Environment at a given step (step 0 is the initial environment)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub step: usize,
    #[serde(rename = "proteins")]
    pub environment: Environment,
}

/// Endless iterator of snapshots, starting with step 0
///
/// Fixed points and cycles are not detected; take as many steps as needed.
pub struct Trajectory<'a> {
    genome: &'a Genome,
    next: Option<Snapshot>,
}

impl<'a> Trajectory<'a> {
    pub fn new(genome: &'a Genome, initial: Environment) -> Self {
        Self {
            genome,
            next: Some(Snapshot {
                step: 0,
                environment: initial,
            }),
        }
    }
}

impl Iterator for Trajectory<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let current = self.next.take()?;
        self.next = Some(Snapshot {
            step: current.step + 1,
            environment: evolve(self.genome, &current.environment),
        });
        Some(current)
    }
}

/// Lazily run `steps` steps: step 0 followed by `steps` evolved snapshots
pub fn run(
    genome: &Genome,
    initial: Environment,
    steps: usize,
) -> std::iter::Take<Trajectory<'_>> {
    Trajectory::new(genome, initial).take(steps.saturating_add(1))
}

/// Run `steps` steps, returning `steps + 1` snapshots
pub fn simulate(genome: &Genome, initial: Environment, steps: usize) -> Vec<Snapshot> {
    run(genome, initial, steps).collect()
}

/// Format a snapshot line: `"<step>: <active proteins>"`
pub fn render_snapshot(step: usize, env: &Environment) -> String {
    if env.is_quiet() {
        format!("{}:", step)
    } else {
        format!("{}: {}", step, env)
    }
}
