//! Objective evaluation and balance metrics.
//!
//! The objective is the cycle time: the largest total cost on any single
//! machine. It is recomputed from scratch on every call and never cached.
//!
//! # KPI
//!
//! `BalanceKpi` adds the standard line-balancing indicators: idle time,
//! line efficiency, and smoothness index.
//!
//! # References
//!
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2
//! - Boysen et al. (2007), "A classification of assembly line balancing problems"

mod kpi;

pub use kpi::BalanceKpi;

use crate::models::Assignment;

/// Total cost on each machine, in machine order.
///
/// Tasks without a cost entry contribute nothing. Loads saturate at
/// `u64::MAX`, which a valid [`Instance`](crate::models::Instance) never reaches.
pub fn station_loads(assignment: &Assignment, costs: &[u64]) -> Vec<u64> {
    assignment
        .machines()
        .iter()
        .map(|tasks| machine_load(tasks, costs))
        .collect()
}

/// Cycle time: maximum machine load. An assignment with no machines yields `0`.
pub fn cycle_time(assignment: &Assignment, costs: &[u64]) -> u64 {
    assignment
        .machines()
        .iter()
        .map(|tasks| machine_load(tasks, costs))
        .max()
        .unwrap_or(0)
}

fn machine_load(tasks: &[usize], costs: &[u64]) -> u64 {
    tasks
        .iter()
        .filter_map(|&t| costs.get(t))
        .fold(0, |acc, &c| acc.saturating_add(c))
}
