//! Instance file loader.
//!
//! # Format
//!
//! ```text
//! 4          <- task count n
//! 2          <- cost of task 1
//! 3          <- ...
//! 1
//! 4          <- cost of task n
//! 1,2        <- task 1 precedes task 2 (1-based)
//! -1,-1      <- end of precedence list
//! ```
//!
//! The precedence list also ends at a blank line, at end of input, or at
//! any pair containing `-1`. Lines that do not hold exactly two
//! comma-separated fields are skipped.

use std::path::Path;

use tracing::debug;

use crate::error::{BalanceError, Result};
use crate::models::Instance;

/// Parses an instance from text.
///
/// # Errors
/// [`BalanceError::MalformedInstance`] with the 1-based line number on a
/// missing or non-integer count/cost, costs whose sum does not fit in a
/// `u64`, a non-integer pair field, or a task number outside `1..=n`.
pub fn parse_instance(text: &str) -> Result<Instance> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let (line, raw) = lines
        .next()
        .ok_or_else(|| BalanceError::malformed(1, "missing task count"))?;
    let num_tasks: usize = raw
        .parse()
        .map_err(|_| BalanceError::malformed(line, format!("invalid task count '{raw}'")))?;

    let mut costs = Vec::new();
    let mut total_work: u64 = 0;
    for task in 1..=num_tasks {
        let (line, raw) = lines.next().ok_or_else(|| {
            BalanceError::malformed(task + 1, format!("missing cost for task {task}"))
        })?;
        let cost: u64 = raw.parse().map_err(|_| {
            BalanceError::malformed(line, format!("invalid cost '{raw}' for task {task}"))
        })?;
        total_work = total_work.checked_add(cost).ok_or_else(|| {
            BalanceError::malformed(line, format!("total cost overflows at task {task}"))
        })?;
        costs.push(cost);
    }

    let mut pairs = Vec::new();
    for (line, raw) in lines {
        if raw.is_empty() || raw == "-1,-1" {
            break;
        }
        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        if fields.len() != 2 {
            continue;
        }

        let before = parse_task_field(fields[0], line)?;
        let after = parse_task_field(fields[1], line)?;
        if before == -1 || after == -1 {
            break;
        }
        pairs.push((
            to_index(before, num_tasks, line)?,
            to_index(after, num_tasks, line)?,
        ));
    }

    let instance = Instance::from_pairs(costs, pairs)?;
    debug!(
        tasks = num_tasks,
        precedences = instance.precedence().edge_count(),
        "parsed instance"
    );
    Ok(instance)
}

/// Reads and parses an instance file.
pub fn load_instance(path: impl AsRef<Path>) -> Result<Instance> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading instance");
    parse_instance(&text)
}

fn parse_task_field(raw: &str, line: usize) -> Result<i64> {
    raw.parse()
        .map_err(|_| BalanceError::malformed(line, format!("invalid task number '{raw}'")))
}

/// 1-based task number to 0-based index.
fn to_index(task: i64, num_tasks: usize, line: usize) -> Result<usize> {
    usize::try_from(task)
        .ok()
        .filter(|&t| (1..=num_tasks).contains(&t))
        .map(|t| t - 1)
        .ok_or_else(|| {
            BalanceError::malformed(
                line,
                format!("task {task} outside 1..={num_tasks}"),
            )
        })
}
