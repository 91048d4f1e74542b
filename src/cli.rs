//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::search::{DEFAULT_RETRY_BUDGET, DEFAULT_STALL_LIMIT, DescentConfig};
use crate::sweep::SweepConfig;

/// Command-line arguments for `u-linebalance`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "u-linebalance",
    version,
    about = "Balance an assembly line over a range of machine counts.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the instance file.
    #[arg(long, value_name = "PATH", default_value = "HAHN.IN2")]
    pub instance: PathBuf,

    /// Smallest machine count to try.
    #[arg(long, value_name = "N", default_value_t = 6)]
    pub min_machines: usize,

    /// Largest machine count to try.
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub max_machines: usize,

    /// Non-improving iterations before a descent stops.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_STALL_LIMIT)]
    pub stall_limit: usize,

    /// Swap attempts per neighbor.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_RETRY_BUDGET)]
    pub retry_budget: usize,

    /// Independent construct-and-refine runs per machine count.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub restarts: usize,

    /// Seed for reproducible runs. Without it the OS entropy source is used.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LINEBALANCE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// Sweep configuration described by the flags.
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig::default()
            .with_machine_range(self.min_machines, self.max_machines)
            .with_restarts(self.restarts)
            .with_descent(
                DescentConfig::default()
                    .with_stall_limit(self.stall_limit)
                    .with_retry_budget(self.retry_budget),
            )
    }
}

/// Result rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["u-linebalance"]);
        assert_eq!(args.instance, PathBuf::from("HAHN.IN2"));
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.seed, None);
        assert_eq!(args.sweep_config(), SweepConfig::default());
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::parse_from([
            "u-linebalance",
            "--instance",
            "line.in2",
            "--min-machines",
            "3",
            "--max-machines",
            "4",
            "--stall-limit",
            "250",
            "--restarts",
            "5",
            "--seed",
            "7",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]);
        let config = args.sweep_config();
        assert_eq!((config.min_machines, config.max_machines), (3, 4));
        assert_eq!(config.restarts, 5);
        assert_eq!(config.descent.stall_limit, 250);
        assert_eq!(config.descent.retry_budget, DEFAULT_RETRY_BUDGET);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }
}
