//! Cross-swap neighborhood.
//!
//! A move picks two distinct machines and one task on each, removes both,
//! and appends each task to the other machine. The move is applied to a
//! private copy of the assignment, checked, and either returned or undone
//! in place before the next attempt. The caller's assignment is never
//! touched.
//!
//! Only the two machines a move touches can gain a violation, so the
//! feasibility check after a move is restricted to them. That is only
//! equivalent to a full check for a feasible input, so an infeasible input
//! is rejected up front and never yields a neighbor.

use rand::Rng;
use tracing::trace;

use crate::models::{Assignment, PrecedenceGraph};
use crate::validation::{is_feasible, is_machine_feasible};

/// Default number of swap attempts per neighbor.
pub const DEFAULT_RETRY_BUDGET: usize = 100;

/// One task exchange between two distinct machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SwapMove {
    machine_a: usize,
    position_a: usize,
    machine_b: usize,
    position_b: usize,
}

impl SwapMove {
    /// Applies the move and returns the two tasks it moved `(from a, from b)`.
    fn apply(&self, machines: &mut [Vec<usize>]) -> (usize, usize) {
        let task_a = machines[self.machine_a].remove(self.position_a);
        let task_b = machines[self.machine_b].remove(self.position_b);
        machines[self.machine_a].push(task_b);
        machines[self.machine_b].push(task_a);
        (task_a, task_b)
    }

    /// Restores both tasks to their original machines and positions.
    fn undo(&self, machines: &mut [Vec<usize>], task_a: usize, task_b: usize) {
        machines[self.machine_a].pop();
        machines[self.machine_b].pop();
        machines[self.machine_a].insert(self.position_a, task_a);
        machines[self.machine_b].insert(self.position_b, task_b);
    }
}

/// Random single-swap neighbor generator with a bounded retry budget.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_linebalance::models::{Assignment, PrecedenceGraph};
/// use u_linebalance::search::SwapNeighborhood;
///
/// let graph = PrecedenceGraph::new(4);
/// let current = Assignment::from_machines(vec![vec![0, 1], vec![2, 3]]);
/// let mut rng = SmallRng::seed_from_u64(42);
///
/// let neighbor = SwapNeighborhood::default().generate(&current, &graph, &mut rng);
/// assert!(neighbor.is_partition(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapNeighborhood {
    /// Attempts before giving up. Draws hitting an empty machine count too.
    pub retry_budget: usize,
}

impl Default for SwapNeighborhood {
    fn default() -> Self {
        Self {
            retry_budget: DEFAULT_RETRY_BUDGET,
        }
    }
}

impl SwapNeighborhood {
    /// Creates a neighborhood with the given retry budget.
    pub fn new(retry_budget: usize) -> Self {
        Self { retry_budget }
    }

    /// Tries to find a feasible swap neighbor.
    ///
    /// Returns `None` when the budget runs out, or right away when there
    /// are fewer than two machines or `assignment` already violates the
    /// precedence relation.
    pub fn try_generate<R: Rng>(
        &self,
        assignment: &Assignment,
        graph: &PrecedenceGraph,
        rng: &mut R,
    ) -> Option<Assignment> {
        let machine_count = assignment.machine_count();
        if machine_count < 2 {
            return None;
        }
        if !is_feasible(assignment, graph) {
            trace!("infeasible input, no swap attempted");
            return None;
        }

        let mut candidate = assignment.clone();
        for attempt in 0..self.retry_budget {
            let machine_a = rng.random_range(0..machine_count);
            let mut machine_b = rng.random_range(0..machine_count - 1);
            if machine_b >= machine_a {
                machine_b += 1;
            }

            let machines = candidate.machines_mut();
            if machines[machine_a].is_empty() || machines[machine_b].is_empty() {
                continue;
            }

            let mv = SwapMove {
                machine_a,
                position_a: rng.random_range(0..machines[machine_a].len()),
                machine_b,
                position_b: rng.random_range(0..machines[machine_b].len()),
            };
            let (task_a, task_b) = mv.apply(machines);

            if is_machine_feasible(&machines[machine_a], graph)
                && is_machine_feasible(&machines[machine_b], graph)
            {
                trace!(attempt, task_a, task_b, "feasible swap found");
                return Some(candidate);
            }
            mv.undo(machines, task_a, task_b);
        }

        trace!(budget = self.retry_budget, "swap retry budget exhausted");
        None
    }

    /// Produces a feasible swap neighbor, or a copy of the input if none was found.
    pub fn generate<R: Rng>(
        &self,
        assignment: &Assignment,
        graph: &PrecedenceGraph,
        rng: &mut R,
    ) -> Assignment {
        self.try_generate(assignment, graph, rng)
            .unwrap_or_else(|| assignment.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_swap_move_apply_undo() {
        let mut machines = vec![vec![0, 1, 2], vec![3, 4]];
        let original = machines.clone();
        let mv = SwapMove {
            machine_a: 0,
            position_a: 1,
            machine_b: 1,
            position_b: 0,
        };

        let (a, b) = mv.apply(&mut machines);
        assert_eq!((a, b), (1, 3));
        assert_eq!(machines, vec![vec![0, 2, 3], vec![4, 1]]);

        mv.undo(&mut machines, a, b);
        assert_eq!(machines, original);
    }

    #[test]
    fn test_neighbor_is_feasible_partition() {
        // 0 → 1 → 2, 3 → 4
        let g = PrecedenceGraph::from_pairs(6, [(0, 1), (1, 2), (3, 4)]).unwrap();
        let start = Assignment::from_machines(vec![vec![0, 1], vec![3, 2], vec![4, 5]]);
        let ns = SwapNeighborhood::default();
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..100 {
            let n = ns.generate(&start, &g, &mut rng);
            assert!(n.is_partition(6));
            assert!(is_feasible(&n, &g));
        }
    }

    #[test]
    fn test_neighbor_differs_by_one_swap() {
        let g = PrecedenceGraph::new(4);
        let start = Assignment::from_machines(vec![vec![0, 1], vec![2, 3]]);
        let mut rng = SmallRng::seed_from_u64(42);

        let n = SwapNeighborhood::default()
            .try_generate(&start, &g, &mut rng)
            .unwrap();
        let moved = (0..4)
            .filter(|&t| n.machine_of(t) != start.machine_of(t))
            .count();
        assert_eq!(moved, 2);
    }

    #[test]
    fn test_single_machine_is_noop() {
        let g = PrecedenceGraph::new(3);
        let start = Assignment::from_machines(vec![vec![0, 1, 2]]);
        let mut rng = SmallRng::seed_from_u64(42);
        let ns = SwapNeighborhood::default();

        assert!(ns.try_generate(&start, &g, &mut rng).is_none());
        assert_eq!(ns.generate(&start, &g, &mut rng), start);
    }

    #[test]
    fn test_only_one_nonempty_machine_is_noop() {
        let g = PrecedenceGraph::new(2);
        let start = Assignment::from_machines(vec![vec![0, 1], vec![], vec![]]);
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(
            SwapNeighborhood::new(20).generate(&start, &g, &mut rng),
            start
        );
    }

    #[test]
    fn test_single_task_machines_always_swap() {
        let g = PrecedenceGraph::from_pairs(2, [(0, 1)]).unwrap();
        let start = Assignment::from_machines(vec![vec![0], vec![1]]);
        let mut rng = SmallRng::seed_from_u64(42);
        let n = SwapNeighborhood::default()
            .try_generate(&start, &g, &mut rng)
            .unwrap();
        assert_eq!(n.machines(), &[vec![1], vec![0]]);
    }

    #[test]
    fn test_no_feasible_swap_returns_input() {
        // Task 1 can share a machine with neither 0 nor 2
        let g = PrecedenceGraph::from_pairs(3, [(0, 1), (1, 0), (2, 1), (1, 2)]).unwrap();
        let start = Assignment::from_machines(vec![vec![0, 2], vec![1]]);
        let mut rng = SmallRng::seed_from_u64(42);
        let ns = SwapNeighborhood::new(50);

        assert!(ns.try_generate(&start, &g, &mut rng).is_none());
        assert_eq!(ns.generate(&start, &g, &mut rng), start);
    }

    #[test]
    fn test_infeasible_input_yields_no_neighbor() {
        // Machine 0 holds 1 before its predecessor 0. A swap between
        // machines 1 and 2 would pass the local check.
        let g = PrecedenceGraph::from_pairs(6, [(0, 1)]).unwrap();
        let start = Assignment::from_machines(vec![vec![1, 0], vec![2, 3], vec![4, 5]]);
        let mut rng = SmallRng::seed_from_u64(42);
        let ns = SwapNeighborhood::new(200);

        assert!(ns.try_generate(&start, &g, &mut rng).is_none());
        assert_eq!(ns.generate(&start, &g, &mut rng), start);
    }

    #[test]
    fn test_zero_budget() {
        let g = PrecedenceGraph::new(4);
        let start = Assignment::from_machines(vec![vec![0, 1], vec![2, 3]]);
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(SwapNeighborhood::new(0)
            .try_generate(&start, &g, &mut rng)
            .is_none());
    }
}
