//! Assembly line balancing for the U-Engine ecosystem.
//!
//! Solves the SALBP-2 variant: given a fixed number of machines and tasks
//! with costs and precedence constraints, assign every task to one machine
//! so that the cycle time (largest machine load) is as small as possible,
//! never placing a task after one of its successors on the same machine.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `PrecedenceGraph`, `Instance`, `Assignment`
//! - **`objective`**: Cycle time and balance KPIs
//! - **`validation`**: Feasibility checking, instance and assignment validation
//! - **`construction`**: Random topological sequencing and initial solutions
//! - **`search`**: Swap neighborhood and random-descent refinement
//! - **`sweep`**: Machine-count sweep with independent restarts
//! - **`io`**: Instance loader and result reports
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_linebalance::construction::build_initial_solution;
//! use u_linebalance::models::Instance;
//! use u_linebalance::search::{refine, DescentConfig};
//!
//! let instance = Instance::from_pairs(vec![2, 3, 1, 4], [(0, 1)]).unwrap();
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let (initial, initial_ct) = build_initial_solution(2, &instance, &mut rng).unwrap();
//! let (refined, refined_ct) = refine(initial, &instance, &DescentConfig::default(), &mut rng);
//! assert!(refined_ct <= initial_ct);
//! assert!(refined.is_partition(4));
//! ```
//!
//! # References
//!
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines"
//! - Boysen et al. (2007), "A classification of assembly line balancing problems"

pub mod cli;
pub mod construction;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod objective;
pub mod search;
pub mod sweep;
pub mod validation;

pub use error::{BalanceError, Result};

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{CliArgs, OutputFormat};

/// Loads the instance, runs the sweep, and renders the results.
pub fn run(args: &CliArgs) -> anyhow::Result<String> {
    let instance = io::load_instance(&args.instance)
        .with_context(|| format!("loading instance {}", args.instance.display()))?;

    if let Err(errors) = validation::validate_instance(&instance) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        anyhow::bail!("invalid instance: {}", messages.join("; "));
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let entries = sweep::run_sweep(&instance, &args.sweep_config(), &mut rng)?;

    let rendered = match args.format {
        OutputFormat::Text => io::SweepReport(&entries).to_string(),
        OutputFormat::Json => io::sweep_to_json(&entries)?,
    };
    Ok(rendered)
}
