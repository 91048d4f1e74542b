//! Plain-text and JSON rendering of results.
//!
//! Machines and tasks are printed 1-based, matching the numbering used in
//! instance files.

use std::fmt;

use crate::models::Assignment;
use crate::sweep::SweepEntry;

const RULE: &str = "------------------------------------";

/// Displays one assignment as `Machine k: t1,t2,...` lines plus its cycle time.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentReport<'a> {
    /// Heading line.
    pub title: &'a str,
    /// Assignment to print.
    pub assignment: &'a Assignment,
    /// Its cycle time.
    pub cycle_time: u64,
}

impl fmt::Display for AssignmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        for (k, tasks) in self.assignment.machines().iter().enumerate() {
            let labels: Vec<String> = tasks.iter().map(|t| (t + 1).to_string()).collect();
            writeln!(f, "Machine {}: {}", k + 1, labels.join(","))?;
        }
        writeln!(f, "Cycle time: {}", self.cycle_time)
    }
}

/// Displays every sweep entry: initial then refined solution, separated by rules.
#[derive(Debug, Clone, Copy)]
pub struct SweepReport<'a>(pub &'a [SweepEntry]);

impl fmt::Display for SweepReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for entry in self.0 {
            writeln!(f, "Machines: {}", entry.machine_count)?;
            write!(
                f,
                "{}",
                AssignmentReport {
                    title: "Initial solution",
                    assignment: &entry.initial,
                    cycle_time: entry.initial_cycle_time,
                }
            )?;
            writeln!(f, "{RULE}")?;
            write!(
                f,
                "{}",
                AssignmentReport {
                    title: "Refined solution",
                    assignment: &entry.refined,
                    cycle_time: entry.refined_cycle_time,
                }
            )?;
            writeln!(f, "Line efficiency: {:.2}%", entry.kpi.line_efficiency * 100.0)?;
            writeln!(f, "{RULE}")?;
        }
        Ok(())
    }
}

/// Renders sweep entries as pretty-printed JSON.
pub fn sweep_to_json(entries: &[SweepEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::BalanceKpi;

    fn sample_entry() -> SweepEntry {
        let costs = [2, 3, 1, 4];
        let initial = Assignment::from_machines(vec![vec![0, 1, 2], vec![3]]);
        let refined = Assignment::from_machines(vec![vec![0, 1], vec![2, 3]]);
        SweepEntry {
            machine_count: 2,
            initial,
            initial_cycle_time: 6,
            kpi: BalanceKpi::calculate(&refined, &costs),
            refined,
            refined_cycle_time: 5,
        }
    }

    #[test]
    fn test_assignment_report() {
        let a = Assignment::from_machines(vec![vec![0, 1], vec![], vec![3, 2]]);
        let text = AssignmentReport {
            title: "Solution",
            assignment: &a,
            cycle_time: 9,
        }
        .to_string();
        assert_eq!(
            text,
            "Solution:\nMachine 1: 1,2\nMachine 2: \nMachine 3: 4,3\nCycle time: 9\n"
        );
    }

    #[test]
    fn test_sweep_report() {
        let entries = vec![sample_entry()];
        let text = SweepReport(&entries).to_string();
        assert!(text.starts_with(RULE));
        assert!(text.contains("Machines: 2"));
        assert!(text.contains("Initial solution:\nMachine 1: 1,2,3\nMachine 2: 4\nCycle time: 6"));
        assert!(text.contains("Refined solution:\nMachine 1: 1,2\nMachine 2: 3,4\nCycle time: 5"));
        assert!(text.contains("Line efficiency: 100.00%"));
    }

    #[test]
    fn test_sweep_json() {
        let entries = vec![sample_entry()];
        let json = sweep_to_json(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["machine_count"], 2);
        assert_eq!(value[0]["refined_cycle_time"], 5);
        assert_eq!(value[0]["refined"]["machines"][1][1], 3);
    }
}
