pub mod evolve;
pub mod trajectory;

pub use evolve::{evolve, evolve_with_threshold};
pub use trajectory::{render_snapshot, run, simulate, Snapshot, Trajectory};
