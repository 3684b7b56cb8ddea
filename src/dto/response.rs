use crate::Probability;
use crate::Utility;
use crate::solver::Policy;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyResponse {
    pub strategy: Policy,
    pub exploitability: Utility,
    pub iterations: usize,
    pub confidence: Probability,
    pub info_set_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAccepted {
    pub batch_id: String,
    pub status: String,
    pub total_scenarios: usize,
    pub estimated_time: u64,
    pub check_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub cache_connected: bool,
    pub backend: String,
    pub cached_keys: Option<usize>,
    pub memory_nodes: usize,
    pub info_sets: usize,
    pub solves: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
    pub batches_tracked: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: u64,
    pub cache: String,
    pub workers: usize,
}
