//! Local search over feasible assignments.
//!
//! - [`SwapNeighborhood`]: random cross-swap of two tasks between machines,
//!   retried until precedence-feasible or out of budget
//! - [`RandomDescent`]: strict-improvement descent with a stall limit
//!
//! # Reference
//! Hoos & Stützle (2004), "Stochastic Local Search: Foundations and Applications"

mod descent;
mod neighbor;

pub use descent::{
    DEFAULT_STALL_LIMIT, DescentConfig, DescentResult, DescentState, RandomDescent, refine,
};
pub use neighbor::{DEFAULT_RETRY_BUDGET, SwapNeighborhood};
