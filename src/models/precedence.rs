//! Precedence graph model.
//!
//! Stores the relation both as a dense boolean matrix (constant-time
//! `precedes` lookups for the feasibility checker) and as successor lists
//! with predecessor counts (in-degree driven topological sequencing).
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};

/// Immutable-after-load precedence relation over tasks `0..num_tasks`.
///
/// `precedes(a, b)` holds iff task `a` must not be placed after task `b`
/// when both share a machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedenceGraph {
    num_tasks: usize,
    /// Row-major `num_tasks × num_tasks` adjacency matrix.
    matrix: Vec<bool>,
    successors: Vec<Vec<usize>>,
    predecessor_counts: Vec<usize>,
}

impl PrecedenceGraph {
    /// Creates a graph over `num_tasks` tasks with no precedence pairs.
    pub fn new(num_tasks: usize) -> Self {
        Self {
            num_tasks,
            matrix: vec![false; num_tasks * num_tasks],
            successors: vec![Vec::new(); num_tasks],
            predecessor_counts: vec![0; num_tasks],
        }
    }

    /// Builds a graph from `(before, after)` pairs (0-based).
    pub fn from_pairs(
        num_tasks: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self> {
        let mut graph = Self::new(num_tasks);
        for (before, after) in pairs {
            graph.add_precedence(before, after)?;
        }
        Ok(graph)
    }

    /// Builds a graph from a square boolean matrix, `matrix[a][b]` = a before b.
    pub fn from_matrix(matrix: &[Vec<bool>]) -> Result<Self> {
        let n = matrix.len();
        let mut graph = Self::new(n);
        for (a, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(BalanceError::DimensionMismatch {
                    expected: n,
                    found: row.len(),
                });
            }
            for (b, &set) in row.iter().enumerate() {
                if set {
                    graph.add_precedence(a, b)?;
                }
            }
        }
        Ok(graph)
    }

    /// Records that `before` must precede `after`. Duplicate pairs are ignored.
    ///
    /// Self-pairs are stored as given; they make the relation cyclic.
    pub fn add_precedence(&mut self, before: usize, after: usize) -> Result<()> {
        for task in [before, after] {
            if task >= self.num_tasks {
                return Err(BalanceError::TaskOutOfRange {
                    task,
                    num_tasks: self.num_tasks,
                });
            }
        }
        let cell = &mut self.matrix[before * self.num_tasks + after];
        if !*cell {
            *cell = true;
            self.successors[before].push(after);
            self.predecessor_counts[after] += 1;
        }
        Ok(())
    }

    /// Number of tasks.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Whether `before` is a required predecessor of `after`.
    ///
    /// Out-of-range indices yield `false`.
    #[inline]
    pub fn precedes(&self, before: usize, after: usize) -> bool {
        before < self.num_tasks
            && after < self.num_tasks
            && self.matrix[before * self.num_tasks + after]
    }

    /// Direct successors of a task.
    pub fn successors(&self, task: usize) -> &[usize] {
        self.successors.get(task).map(Vec::as_slice).unwrap_or(&[])
    }

    /// In-degree of every task, indexed by task id.
    pub fn predecessor_counts(&self) -> &[usize] {
        &self.predecessor_counts
    }

    /// Number of distinct precedence pairs.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// All `(before, after)` pairs, grouped by `before`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(before, succ)| succ.iter().map(move |&after| (before, after)))
    }
}
