//! Construction of initial feasible assignments.
//!
//! - [`random_topological_sequence`]: randomized Kahn ordering of all tasks
//! - [`distribute_task_counts`]: shuffled round-robin machine sizes
//! - [`build_initial_solution`]: cuts a topological sequence into machines

mod initial;
mod sequence;

pub use initial::{build_initial_solution, distribute_task_counts};
pub use sequence::random_topological_sequence;
