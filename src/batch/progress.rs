use crate::Utility;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;
use std::time::Instant;

/// Pollable state of a batch job.
///
/// `completed` counts every processed scenario, solved or skipped, so a
/// finished job reports `completed == total`. The default value doubles as
/// the sentinel for unknown or expired jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub failed: usize,
    pub current_exploitability: Utility,
    pub average_convergence_rate: Utility,
    pub estimated_time_remaining: u64,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            completed: 0,
            total: 0,
            failed: 0,
            current_exploitability: 1.0,
            average_convergence_rate: 0.0,
            estimated_time_remaining: 0,
        }
    }
}

impl Progress {
    /// initial record before any scenario has run
    pub fn start(total: usize) -> Self {
        Self {
            total,
            estimated_time_remaining: crate::SCENARIO_ESTIMATE.as_secs() * total as u64,
            ..Self::default()
        }
    }
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// A progress record stamped with its last update, for expiry.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub progress: Progress,
    pub updated: Instant,
}

impl Snapshot {
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.updated.elapsed() > ttl
    }
}

impl From<Progress> for Snapshot {
    fn from(progress: Progress) -> Self {
        Self {
            progress,
            updated: Instant::now(),
        }
    }
}

/// Running sums the worker folds each scenario into.
#[derive(Debug, Default)]
pub struct Tally {
    solved: usize,
    skipped: usize,
    rates: Utility,
    elapsed: Duration,
    last: Option<Utility>,
}

impl Tally {
    pub fn solved(&mut self, exploitability: Utility, elapsed: Duration) {
        self.solved += 1;
        self.rates += (1.0 - exploitability).clamp(0.0, 1.0);
        self.elapsed += elapsed;
        self.last = Some(exploitability);
    }
    pub fn skipped(&mut self, elapsed: Duration) {
        self.skipped += 1;
        self.elapsed += elapsed;
    }
    fn done(&self) -> usize {
        self.solved + self.skipped
    }

    pub fn progress(&self, total: usize) -> Progress {
        let done = self.done();
        let remaining = total.saturating_sub(done);
        let mean = if done > 0 {
            self.elapsed.as_secs_f64() / done as f64
        } else {
            crate::SCENARIO_ESTIMATE.as_secs_f64()
        };
        Progress {
            completed: done,
            total,
            failed: self.skipped,
            current_exploitability: self.last.unwrap_or(1.0),
            average_convergence_rate: if self.solved > 0 {
                self.rates / self.solved as Utility
            } else {
                0.0
            },
            estimated_time_remaining: (mean * remaining as f64).ceil() as u64,
        }
    }
}
