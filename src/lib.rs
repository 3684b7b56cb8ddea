//! Real-time GTO strategy service.
//!
//! Solves single poker decision points with a shallow counterfactual regret
//! minimization loop, caches converged results, and runs batches of scenarios
//! in the background for training clients.
//!
//! # Module Structure
//!
//! - `cards`: Card parsing, hole buckets, heuristic hand strength
//! - `gameplay`: Decision points, seats, action history, successors
//! - `solver`: Info-set keys, regret tables, the CFR loop
//! - `workers`: Bounded CPU pool for solver work
//! - `cache`: Gated strategy cache over pluggable stores
//! - `service`: Validate, look up, solve and write back
//! - `batch`: Background multi-scenario jobs with pollable progress
//! - `analysis`: Strategy to recommendation, opponent-style adjustment
//! - `hosting`: HTTP surface (server feature)
pub mod analysis;
pub mod batch;
pub mod cache;
pub mod cards;
pub mod dto;
pub mod error;
pub mod gameplay;
pub mod metrics;
pub mod service;
pub mod solver;
pub mod workers;

#[cfg(feature = "server")]
pub mod hosting;

pub use error::Error;
pub use error::ValidationError;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot sizes, stacks and bet amounts.
pub type Chips = f64;
/// Expected values, regrets and payoffs.
pub type Utility = f64;
/// Strategy weights and reach probabilities.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// SOLVER PARAMETERS
// ============================================================================
/// Iterations between exploitability samples.
pub const SAMPLE_INTERVAL: usize = 100;
/// Early-stop threshold on sampled exploitability.
pub const CONVERGENCE_EPSILON: Utility = 1e-3;
/// Ply depth explored below the root decision point.
pub const SOLVER_DEPTH: usize = 2;
/// Default iteration budget when a request omits one.
pub const DEFAULT_ITERATIONS: usize = 5000;
/// Upper bound on a single request's iteration budget.
pub const MAX_ITERATIONS: usize = 100_000;

// ============================================================================
// PAYOFF HEURISTICS
// Pot-fraction terminal values used in place of a full game-tree recursion.
// ============================================================================
/// Pot fraction credited to a call.
pub const CALL_POT_FRACTION: Utility = 0.4;
/// Pot fraction credited to a raise.
pub const RAISE_POT_FRACTION: Utility = 0.6;
/// Fold equity credited to a raise under the equity payoff.
pub const FOLD_EQUITY_BONUS: Utility = 0.3;
/// Bet or raise size as a fraction of pot (plus any amount owed).
pub const RAISE_SIZING: Chips = 0.75;

// ============================================================================
// CACHE AND BATCH
// ============================================================================
/// Results at or above this exploitability never reach the cache.
pub const CACHE_THRESHOLD: Utility = 0.01;
/// Lifetime of a cached strategy.
pub const CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(3600);
/// Lifetime of a batch progress record after its last update.
pub const PROGRESS_TTL: std::time::Duration = std::time::Duration::from_secs(600);
/// Assumed per-scenario wall time before any scenario has finished.
pub const SCENARIO_ESTIMATE: std::time::Duration = std::time::Duration::from_secs(2);

// ============================================================================
// ANALYSIS
// ============================================================================
/// Confidence multiplier applied when the uniform prior stands in for a strategy.
pub const PRIOR_CONFIDENCE_DISCOUNT: Probability = 0.5;
/// Implied odds as a multiple of pot odds.
pub const IMPLIED_ODDS_FACTOR: Probability = 1.2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Seconds since the unix epoch.
pub fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
