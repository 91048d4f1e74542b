//! Crate-wide error type.
//!
//! Construction and search are total for a valid instance. The only
//! failure inside the optimization core is a cyclic precedence relation;
//! everything else here comes from loading or from invalid arguments.

use thiserror::Error;

/// Errors raised by line-balancing operations.
#[derive(Error, Debug)]
pub enum BalanceError {
    /// The precedence relation contains a cycle: no remaining task is ready.
    #[error("cyclic precedence: only {placed} of {total} tasks could be sequenced")]
    CyclicPrecedence {
        /// Tasks placed before the ready set ran dry.
        placed: usize,
        /// Total number of tasks.
        total: usize,
    },

    /// The instance text could not be parsed.
    #[error("malformed instance at line {line}: {message}")]
    MalformedInstance {
        /// 1-based line number.
        line: usize,
        /// Human-readable description.
        message: String,
    },

    /// A machine count of zero cannot hold any task.
    #[error("invalid machine count: {0}")]
    InvalidMachineCount(usize),

    /// A task index outside `0..num_tasks`.
    #[error("task {task} out of range for {num_tasks} tasks")]
    TaskOutOfRange {
        /// Offending task index.
        task: usize,
        /// Number of tasks in the instance.
        num_tasks: usize,
    },

    /// Two inputs that must agree in size do not.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// The summed task costs do not fit in a `u64`.
    #[error("total cost overflows at task {task}")]
    CostOverflow {
        /// First task whose cost pushes the sum past `u64::MAX`.
        task: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BalanceError {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInstance {
            line,
            message: message.into(),
        }
    }
}

/// Result alias for line-balancing operations.
pub type Result<T> = std::result::Result<T, BalanceError>;
