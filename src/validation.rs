//! Feasibility checking and input validation.
//!
//! The feasibility rule: within one machine's task list, a task at a later
//! position must never be a required predecessor of a task at an earlier
//! position. Empty machines are trivially feasible.
//!
//! Validation goes further and reports every structural problem at once:
//! - Self-precedence pairs and precedence cycles in an instance
//! - Missing, duplicated, or unknown tasks in an assignment
//! - Precedence violations in an assignment
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::{Assignment, Instance, PrecedenceGraph};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A task is declared as its own predecessor.
    SelfPrecedence,
    /// Precedence graph contains a cycle.
    CyclicDependency,
    /// An assignment references a task outside the instance.
    UnknownTask,
    /// A task appears more than once in an assignment.
    DuplicateTask,
    /// A task appears on no machine.
    MissingTask,
    /// A task is placed after one of its successors on the same machine.
    PrecedenceViolation,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// An ordered pair on one machine that breaks precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedenceViolation {
    /// Machine index.
    pub machine: usize,
    /// Task at the earlier list position.
    pub earlier: usize,
    /// Task at the later position, which must precede `earlier`.
    pub later: usize,
}

/// Whether one machine's task list respects precedence.
///
/// O(k²) for k tasks on the machine.
pub fn is_machine_feasible(tasks: &[usize], graph: &PrecedenceGraph) -> bool {
    tasks.iter().enumerate().all(|(i, &earlier)| {
        tasks[i + 1..]
            .iter()
            .all(|&later| !graph.precedes(later, earlier))
    })
}

/// Whether no machine of the assignment violates precedence.
pub fn is_feasible(assignment: &Assignment, graph: &PrecedenceGraph) -> bool {
    assignment
        .machines()
        .iter()
        .all(|tasks| is_machine_feasible(tasks, graph))
}

/// Lists every precedence violation in the assignment.
pub fn find_violations(
    assignment: &Assignment,
    graph: &PrecedenceGraph,
) -> Vec<PrecedenceViolation> {
    let mut violations = Vec::new();
    for (machine, tasks) in assignment.machines().iter().enumerate() {
        for (i, &earlier) in tasks.iter().enumerate() {
            for &later in &tasks[i + 1..] {
                if graph.precedes(later, earlier) {
                    violations.push(PrecedenceViolation {
                        machine,
                        earlier,
                        later,
                    });
                }
            }
        }
    }
    violations
}

/// Validates an instance's precedence relation.
///
/// Checks:
/// 1. No task precedes itself
/// 2. No circular precedence dependencies
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let graph = instance.precedence();
    let mut errors = Vec::new();

    for task in 0..graph.num_tasks() {
        if graph.precedes(task, task) {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfPrecedence,
                format!("Task {task} is declared as its own predecessor"),
            ));
        }
    }

    // Self-pairs are already reported above
    if errors.is_empty() {
        if let Some(cycle_err) = detect_cycles(graph) {
            errors.push(cycle_err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an assignment against an instance.
///
/// Checks:
/// 1. Every task id is known to the instance
/// 2. No task appears twice
/// 3. Every task appears somewhere
/// 4. No precedence violation on any machine
pub fn validate_assignment(assignment: &Assignment, instance: &Instance) -> ValidationResult {
    let num_tasks = instance.num_tasks();
    let mut errors = Vec::new();
    let mut seen = vec![false; num_tasks];

    for (machine, tasks) in assignment.machines().iter().enumerate() {
        for &task in tasks {
            match seen.get_mut(task) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTask,
                    format!("Machine {machine} holds unknown task {task}"),
                )),
                Some(true) => errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateTask,
                    format!("Task {task} is assigned more than once"),
                )),
                Some(slot) => *slot = true,
            }
        }
    }

    for task in (0..num_tasks).filter(|&t| !seen[t]) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingTask,
            format!("Task {task} is not assigned to any machine"),
        ));
    }

    for v in find_violations(assignment, instance.precedence()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::PrecedenceViolation,
            format!(
                "Machine {}: task {} is placed after its successor {}",
                v.machine, v.later, v.earlier
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the precedence graph using DFS.
///
/// # Algorithm
/// Three-colour DFS. Reaching a node that is still on the recursion
/// stack means a back edge, hence a cycle.
fn detect_cycles(graph: &PrecedenceGraph) -> Option<ValidationError> {
    let n = graph.num_tasks();
    let mut visited = vec![false; n];
    let mut in_stack = vec![false; n];

    for node in 0..n {
        if !visited[node] && has_cycle_dfs(node, graph, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task {node}"),
            ));
        }
    }

    None
}

fn has_cycle_dfs(
    node: usize,
    graph: &PrecedenceGraph,
    visited: &mut [bool],
    in_stack: &mut [bool],
) -> bool {
    visited[node] = true;
    in_stack[node] = true;

    for &next in graph.successors(node) {
        if in_stack[next] {
            return true; // Back edge → cycle
        }
        if !visited[next] && has_cycle_dfs(next, graph, visited, in_stack) {
            return true;
        }
    }

    in_stack[node] = false;
    false
}
