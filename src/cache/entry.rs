use crate::Utility;
use crate::solver::InfoSetKey;
use crate::solver::Policy;
use crate::solver::SolverResult;
use serde::Deserialize;
use serde::Serialize;

/// A converged root strategy as persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub strategy: Policy,
    pub info_set_key: InfoSetKey,
    pub exploitability: Utility,
    pub iterations: usize,
    pub created_at: u64,
}

impl From<&SolverResult> for CacheEntry {
    fn from(result: &SolverResult) -> Self {
        Self {
            strategy: result.root_policy().0,
            info_set_key: result.root.clone(),
            exploitability: result.exploitability,
            iterations: result.iterations,
            created_at: crate::now(),
        }
    }
}

impl CacheEntry {
    pub fn confidence(&self) -> crate::Probability {
        (1.0 - self.exploitability).clamp(0.0, 1.0)
    }
}
