//! Problem instance model.
//!
//! An instance is read once per run and never mutated afterwards:
//! per-task execution costs plus the precedence relation.

use serde::{Deserialize, Serialize};

use super::PrecedenceGraph;
use crate::error::{BalanceError, Result};

/// A line-balancing problem instance.
///
/// Task `i` has cost `costs[i]`; the precedence graph covers the same
/// `0..num_tasks` index range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    costs: Vec<u64>,
    precedence: PrecedenceGraph,
}

impl Instance {
    /// Creates an instance, checking that costs and graph cover the same tasks.
    ///
    /// The total cost must fit in a `u64`, so every machine load does too.
    pub fn new(costs: Vec<u64>, precedence: PrecedenceGraph) -> Result<Self> {
        if costs.len() != precedence.num_tasks() {
            return Err(BalanceError::DimensionMismatch {
                expected: precedence.num_tasks(),
                found: costs.len(),
            });
        }
        let mut total: u64 = 0;
        for (task, &cost) in costs.iter().enumerate() {
            total = total
                .checked_add(cost)
                .ok_or(BalanceError::CostOverflow { task })?;
        }
        Ok(Self { costs, precedence })
    }

    /// Creates an instance from costs and 0-based `(before, after)` pairs.
    pub fn from_pairs(
        costs: Vec<u64>,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self> {
        let precedence = PrecedenceGraph::from_pairs(costs.len(), pairs)?;
        Self::new(costs, precedence)
    }

    /// Number of tasks.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.costs.len()
    }

    /// Per-task costs, indexed by task id.
    #[inline]
    pub fn costs(&self) -> &[u64] {
        &self.costs
    }

    /// The precedence relation.
    #[inline]
    pub fn precedence(&self) -> &PrecedenceGraph {
        &self.precedence
    }

    /// Sum of all task costs.
    pub fn total_work(&self) -> u64 {
        self.costs.iter().fold(0, |acc, &c| acc.saturating_add(c))
    }
}
