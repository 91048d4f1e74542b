//! Initial solution construction.
//!
//! # Algorithm
//!
//! 1. Distribute the task count round-robin over the machines, then shuffle
//!    the count vector so the machines receiving the extra tasks are random.
//! 2. Generate one random topological sequence.
//! 3. Walk the machines in order, cutting that many consecutive tasks off
//!    the front of the sequence.
//!
//! Every machine list is a contiguous, order-preserving slice of a
//! topological sequence, so the result is feasible by construction.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::random_topological_sequence;
use crate::error::{BalanceError, Result};
use crate::models::{Assignment, Instance};
use crate::objective::cycle_time;

/// Per-machine task counts: round-robin totals in shuffled order.
///
/// Counts differ by at most one and sum to `num_tasks`. When
/// `machine_count > num_tasks` some machines get zero tasks.
pub fn distribute_task_counts<R: Rng>(
    machine_count: usize,
    num_tasks: usize,
    rng: &mut R,
) -> Vec<usize> {
    if machine_count == 0 {
        return Vec::new();
    }
    let base = num_tasks / machine_count;
    let extra = num_tasks % machine_count;
    let mut counts: Vec<usize> = (0..machine_count)
        .map(|k| base + usize::from(k < extra))
        .collect();
    counts.shuffle(rng);
    counts
}

/// Builds a feasible assignment over `machine_count` machines.
///
/// Returns the assignment together with its cycle time.
///
/// # Errors
/// - [`BalanceError::InvalidMachineCount`] if `machine_count` is zero.
/// - [`BalanceError::CyclicPrecedence`] if the precedence relation is cyclic.
pub fn build_initial_solution<R: Rng>(
    machine_count: usize,
    instance: &Instance,
    rng: &mut R,
) -> Result<(Assignment, u64)> {
    if machine_count == 0 {
        return Err(BalanceError::InvalidMachineCount(machine_count));
    }

    let counts = distribute_task_counts(machine_count, instance.num_tasks(), rng);
    let sequence = random_topological_sequence(instance.precedence(), rng)?;

    let mut tasks = sequence.into_iter();
    let machines = counts
        .iter()
        .map(|&count| tasks.by_ref().take(count).collect())
        .collect();
    let assignment = Assignment::from_machines(machines);
    let value = cycle_time(&assignment, instance.costs());

    debug!(
        machines = machine_count,
        tasks = instance.num_tasks(),
        empty = assignment.empty_machine_count(),
        cycle_time = value,
        "built initial solution"
    );
    Ok((assignment, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_feasible;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sample_instance() -> Instance {
        // 4 tasks, costs [2, 3, 1, 4], task 0 before task 1
        Instance::from_pairs(vec![2, 3, 1, 4], [(0, 1)]).unwrap()
    }

    #[test]
    fn test_distribute_counts() {
        let mut rng = SmallRng::seed_from_u64(42);
        let counts = distribute_task_counts(3, 7, &mut rng);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.iter().sum::<usize>(), 7);
        let mut sorted = counts.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![2, 2, 3]);
    }

    #[test]
    fn test_distribute_more_machines_than_tasks() {
        let mut rng = SmallRng::seed_from_u64(42);
        let counts = distribute_task_counts(5, 2, &mut rng);
        assert_eq!(counts.iter().filter(|&&c| c == 0).count(), 3);
        assert_eq!(counts.iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_distribute_zero_machines() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(distribute_task_counts(0, 4, &mut rng).is_empty());
    }

    #[test]
    fn test_initial_solution_feasible() {
        let inst = sample_instance();
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..50 {
            let (a, value) = build_initial_solution(2, &inst, &mut rng).unwrap();
            assert_eq!(a.machine_count(), 2);
            assert!(a.is_partition(4));
            assert!(is_feasible(&a, inst.precedence()));
            assert_eq!(value, cycle_time(&a, inst.costs()));
            // Round-robin: 2 tasks each
            assert!(a.machines().iter().all(|m| m.len() == 2));
        }
    }

    #[test]
    fn test_initial_solution_task_zero_first() {
        let inst = sample_instance();
        let mut rng = SmallRng::seed_from_u64(3);

        for _ in 0..50 {
            let (a, _) = build_initial_solution(2, &inst, &mut rng).unwrap();
            for m in a.machines() {
                if let (Some(p0), Some(p1)) = (
                    m.iter().position(|&t| t == 0),
                    m.iter().position(|&t| t == 1),
                ) {
                    assert!(p0 < p1);
                }
            }
        }
    }

    #[test]
    fn test_initial_solution_empty_machines_allowed() {
        let inst = sample_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        let (a, _) = build_initial_solution(6, &inst, &mut rng).unwrap();
        assert_eq!(a.machine_count(), 6);
        assert_eq!(a.empty_machine_count(), 2);
        assert!(a.is_partition(4));
    }

    #[test]
    fn test_initial_solution_zero_machines() {
        let inst = sample_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(matches!(
            build_initial_solution(0, &inst, &mut rng),
            Err(BalanceError::InvalidMachineCount(0))
        ));
    }

    #[test]
    fn test_initial_solution_cyclic() {
        let inst = Instance::from_pairs(vec![1, 1], [(0, 1), (1, 0)]).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(matches!(
            build_initial_solution(2, &inst, &mut rng),
            Err(BalanceError::CyclicPrecedence { .. })
        ));
    }

    #[test]
    fn test_initial_solution_deterministic() {
        let inst = sample_instance();
        let a = build_initial_solution(2, &inst, &mut SmallRng::seed_from_u64(9)).unwrap();
        let b = build_initial_solution(2, &inst, &mut SmallRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
