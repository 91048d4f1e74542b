//! Line-balancing domain models.
//!
//! Provides the data types for representing balancing problems and their
//! solutions.
//!
//! # Domain Mappings
//!
//! | u-linebalance | Assembly line | Manufacturing cell | Compute cluster |
//! |---------------|---------------|--------------------|-----------------|
//! | Task | Work element | Operation | Job |
//! | Machine | Station | Machine | Worker node |
//! | Cycle time | Takt bound | Bottleneck load | Makespan |

mod assignment;
mod instance;
mod precedence;

pub use assignment::Assignment;
pub use instance::Instance;
pub use precedence::PrecedenceGraph;
