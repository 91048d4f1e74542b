//! Random-descent refinement.
//!
//! # Algorithm
//!
//! Starting from a feasible assignment, repeatedly draw a random swap
//! neighbor and evaluate its cycle time. A strictly better neighbor
//! replaces the current assignment and resets the stall counter; anything
//! else (a tie, a worse value, or no feasible swap at all) increments it.
//! The search terminates once the stall counter reaches the stall limit.
//!
//! Worsening moves are never accepted, so the descent stops in a local
//! optimum. Diversification comes from independent restarts, see
//! [`crate::sweep`].
//!
//! # Reference
//! Hoos & Stützle (2004), "Stochastic Local Search", Ch. 2.1 (Iterative Improvement)

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::neighbor::{DEFAULT_RETRY_BUDGET, SwapNeighborhood};
use crate::models::{Assignment, Instance};
use crate::objective::cycle_time;

/// Default number of consecutive non-improving iterations before stopping.
pub const DEFAULT_STALL_LIMIT: usize = 100;

/// Parameters of the random descent.
///
/// # Example
///
/// ```
/// use u_linebalance::search::DescentConfig;
///
/// let config = DescentConfig::default().with_stall_limit(500);
/// assert_eq!(config.stall_limit, 500);
/// assert_eq!(config.retry_budget, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescentConfig {
    /// Consecutive non-improving iterations before termination.
    pub stall_limit: usize,
    /// Swap attempts per neighbor.
    pub retry_budget: usize,
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            stall_limit: DEFAULT_STALL_LIMIT,
            retry_budget: DEFAULT_RETRY_BUDGET,
        }
    }
}

impl DescentConfig {
    /// Sets the stall limit.
    pub fn with_stall_limit(mut self, stall_limit: usize) -> Self {
        self.stall_limit = stall_limit;
        self
    }

    /// Sets the per-neighbor retry budget.
    pub fn with_retry_budget(mut self, retry_budget: usize) -> Self {
        self.retry_budget = retry_budget;
        self
    }
}

/// Lifecycle of a descent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescentState {
    /// Still drawing neighbors.
    Searching,
    /// Stall limit reached.
    Terminated,
}

/// Outcome of a descent run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescentResult {
    /// Best assignment found.
    pub assignment: Assignment,
    /// Cycle time of `assignment`.
    pub cycle_time: u64,
    /// Cycle time of the starting assignment.
    pub initial_cycle_time: u64,
    /// Neighbors drawn.
    pub iterations: usize,
    /// Accepted improving moves.
    pub improvements: usize,
}

/// Random-descent state machine over one instance.
///
/// Drive it with [`step`](Self::step) to observe each iteration, or call
/// [`run`](Self::run) to go straight to termination.
#[derive(Debug, Clone)]
pub struct RandomDescent<'a> {
    instance: &'a Instance,
    neighborhood: SwapNeighborhood,
    stall_limit: usize,
    current: Assignment,
    best: u64,
    initial: u64,
    stall: usize,
    iterations: usize,
    improvements: usize,
}

impl<'a> RandomDescent<'a> {
    /// Starts a descent from `initial`, which must be feasible.
    pub fn new(initial: Assignment, instance: &'a Instance, config: &DescentConfig) -> Self {
        let best = cycle_time(&initial, instance.costs());
        Self {
            instance,
            neighborhood: SwapNeighborhood::new(config.retry_budget),
            stall_limit: config.stall_limit,
            current: initial,
            best,
            initial: best,
            stall: 0,
            iterations: 0,
            improvements: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> DescentState {
        if self.stall >= self.stall_limit {
            DescentState::Terminated
        } else {
            DescentState::Searching
        }
    }

    /// Best cycle time so far (always that of [`current`](Self::current)).
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Current assignment.
    pub fn current(&self) -> &Assignment {
        &self.current
    }

    /// Consecutive non-improving iterations.
    pub fn stall(&self) -> usize {
        self.stall
    }

    /// Performs one iteration. Does nothing once terminated.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> DescentState {
        if self.state() == DescentState::Terminated {
            return DescentState::Terminated;
        }
        self.iterations += 1;

        let candidate =
            self.neighborhood
                .try_generate(&self.current, self.instance.precedence(), rng);
        if let Some(candidate) = candidate {
            let value = cycle_time(&candidate, self.instance.costs());
            if value < self.best {
                debug!(
                    iteration = self.iterations,
                    from = self.best,
                    to = value,
                    "improving move accepted"
                );
                self.current = candidate;
                self.best = value;
                self.stall = 0;
                self.improvements += 1;
                return self.state();
            }
        }

        self.stall += 1;
        self.state()
    }

    /// Iterates until termination.
    pub fn run<R: Rng>(mut self, rng: &mut R) -> DescentResult {
        while self.step(rng) == DescentState::Searching {}
        debug!(
            iterations = self.iterations,
            improvements = self.improvements,
            initial = self.initial,
            cycle_time = self.best,
            "descent terminated"
        );
        DescentResult {
            assignment: self.current,
            cycle_time: self.best,
            initial_cycle_time: self.initial,
            iterations: self.iterations,
            improvements: self.improvements,
        }
    }
}

/// Refines a feasible assignment by random descent.
///
/// Returns the final assignment and its cycle time, which is never larger
/// than the cycle time of `assignment`. An infeasible `assignment` has no
/// neighbors and comes back unchanged.
pub fn refine<R: Rng>(
    assignment: Assignment,
    instance: &Instance,
    config: &DescentConfig,
    rng: &mut R,
) -> (Assignment, u64) {
    let result = RandomDescent::new(assignment, instance, config).run(rng);
    (result.assignment, result.cycle_time)
}
