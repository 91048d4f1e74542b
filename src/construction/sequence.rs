//! Random topological sequencing.
//!
//! # Algorithm
//!
//! Kahn's algorithm with a random tie-break: keep the set of tasks whose
//! predecessors are all placed, pick one uniformly at random, append it,
//! and decrement the remaining-predecessor count of each successor. A
//! successor whose count reaches zero joins the ready set.
//!
//! If the ready set empties while tasks remain, the relation is cyclic and
//! sequencing fails with [`BalanceError::CyclicPrecedence`].
//!
//! # Complexity
//! O(n + e) for n tasks and e precedence pairs.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks"

use rand::Rng;
use tracing::trace;

use crate::error::{BalanceError, Result};
use crate::models::PrecedenceGraph;

/// Produces a uniformly randomized ordering consistent with every precedence pair.
///
/// # Errors
/// [`BalanceError::CyclicPrecedence`] if the relation contains a cycle
/// (including a task declared as its own predecessor).
pub fn random_topological_sequence<R: Rng>(
    graph: &PrecedenceGraph,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let total = graph.num_tasks();
    let mut unresolved = graph.predecessor_counts().to_vec();
    let mut ready: Vec<usize> = (0..total).filter(|&t| unresolved[t] == 0).collect();
    let mut sequence = Vec::with_capacity(total);

    while sequence.len() < total {
        if ready.is_empty() {
            return Err(BalanceError::CyclicPrecedence {
                placed: sequence.len(),
                total,
            });
        }

        let task = ready.swap_remove(rng.random_range(0..ready.len()));
        sequence.push(task);

        for &next in graph.successors(task) {
            unresolved[next] -= 1;
            if unresolved[next] == 0 {
                ready.push(next);
            }
        }
    }

    trace!(tasks = total, "generated topological sequence");
    Ok(sequence)
}
