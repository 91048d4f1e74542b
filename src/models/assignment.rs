//! Assignment (solution) model.
//!
//! An assignment maps every task to exactly one machine (station). Each
//! machine holds an ordered list of task ids; only membership matters for
//! the objective, but list order is what the feasibility rule inspects.
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2.2

use serde::{Deserialize, Serialize};

/// A task-to-machine assignment.
///
/// `machines[k]` lists the tasks on machine `k`. Machines may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    machines: Vec<Vec<usize>>,
}

impl Assignment {
    /// Wraps explicit per-machine task lists.
    pub fn from_machines(machines: Vec<Vec<usize>>) -> Self {
        Self { machines }
    }

    /// Number of machines.
    #[inline]
    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// All machines.
    #[inline]
    pub fn machines(&self) -> &[Vec<usize>] {
        &self.machines
    }

    pub(crate) fn machines_mut(&mut self) -> &mut [Vec<usize>] {
        &mut self.machines
    }

    /// Total number of task placements across machines.
    pub fn task_count(&self) -> usize {
        self.machines.iter().map(Vec::len).sum()
    }

    /// Number of machines holding no task.
    pub fn empty_machine_count(&self) -> usize {
        self.machines.iter().filter(|m| m.is_empty()).count()
    }

    /// Machine holding the given task, if any.
    pub fn machine_of(&self, task: usize) -> Option<usize> {
        self.machines.iter().position(|m| m.contains(&task))
    }

    /// Whether every task in `0..num_tasks` appears exactly once.
    pub fn is_partition(&self, num_tasks: usize) -> bool {
        if self.task_count() != num_tasks {
            return false;
        }
        let mut seen = vec![false; num_tasks];
        for &task in self.machines.iter().flatten() {
            match seen.get_mut(task) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        seen.iter().all(|&s| s)
    }
}
