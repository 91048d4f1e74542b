//! Line balance quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Cycle time (C) | Largest machine load |
//! | Total work | Sum of all task costs |
//! | Idle time | m * C - total work |
//! | Line efficiency | total work / (m * C) |
//! | Smoothness index | sqrt(sum over k of (C - load_k)^2) |
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2.2.2

use serde::{Deserialize, Serialize};

use super::station_loads;
use crate::models::Assignment;

/// Balance performance indicators for one assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceKpi {
    /// Largest machine load.
    pub cycle_time: u64,
    /// Sum of the loads of all machines.
    pub total_work: u64,
    /// Per-machine load, in machine order.
    pub station_loads: Vec<u64>,
    /// Unused capacity across the line at this cycle time.
    pub idle_time: u64,
    /// Fraction of line capacity doing work (0.0..=1.0).
    pub line_efficiency: f64,
    /// Spread of loads below the cycle time (0 = perfectly balanced).
    pub smoothness_index: f64,
}

impl BalanceKpi {
    /// Computes KPIs for an assignment.
    ///
    /// # Arguments
    /// * `assignment` - Machines and their tasks.
    /// * `costs` - Task costs indexed by task id.
    pub fn calculate(assignment: &Assignment, costs: &[u64]) -> Self {
        let loads = station_loads(assignment, costs);
        let cycle_time = loads.iter().copied().max().unwrap_or(0);
        let total_work = loads.iter().fold(0u64, |acc, &l| acc.saturating_add(l));
        let capacity = cycle_time.saturating_mul(loads.len() as u64);

        let line_efficiency = if capacity == 0 {
            0.0
        } else {
            total_work as f64 / capacity as f64
        };

        let smoothness_index = loads
            .iter()
            .map(|&load| {
                let gap = (cycle_time - load) as f64;
                gap * gap
            })
            .sum::<f64>()
            .sqrt();

        Self {
            cycle_time,
            total_work,
            station_loads: loads,
            idle_time: capacity.saturating_sub(total_work),
            line_efficiency,
            smoothness_index,
        }
    }
}
