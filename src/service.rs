use crate::Error;
use crate::Probability;
use crate::Utility;
use crate::ValidationError;
use crate::cache::CacheEntry;
use crate::cache::CacheKey;
use crate::cache::StrategyCache;
use crate::dto::Scenario;
use crate::dto::StrategyResponse;
use crate::gameplay::DecisionState;
use crate::metrics::Metrics;
use crate::solver::InfoSetKey;
use crate::solver::Policy;
use crate::solver::SolverResult;
use crate::workers::Pool;
use std::time::Duration;

/// Root strategy for one request, from the cache or a fresh solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub info_set_key: InfoSetKey,
    pub strategy: Policy,
    pub exploitability: Utility,
    pub iterations: usize,
    /// the uniform prior stands in because the root was never solved
    pub prior: bool,
    pub cached: bool,
}

impl Solution {
    pub fn confidence(&self) -> Probability {
        (1.0 - self.exploitability).clamp(0.0, 1.0)
    }
}

impl From<&SolverResult> for Solution {
    fn from(result: &SolverResult) -> Self {
        let (strategy, prior) = result.root_policy();
        Self {
            info_set_key: result.root.clone(),
            strategy,
            exploitability: result.exploitability,
            iterations: result.iterations,
            prior,
            cached: false,
        }
    }
}

impl From<CacheEntry> for Solution {
    fn from(entry: CacheEntry) -> Self {
        Self {
            info_set_key: entry.info_set_key,
            strategy: entry.strategy,
            exploitability: entry.exploitability,
            iterations: entry.iterations,
            prior: false,
            cached: true,
        }
    }
}

impl From<&Solution> for StrategyResponse {
    fn from(solution: &Solution) -> Self {
        Self {
            strategy: solution.strategy,
            exploitability: solution.exploitability,
            iterations: solution.iterations,
            confidence: solution.confidence(),
            info_set_key: solution.info_set_key.to_string(),
        }
    }
}

/// Validation, cache lookup, pooled solve and gated write-back,
/// shared by the request handlers and the batch worker.
pub struct Service {
    pool: Pool,
    cache: StrategyCache,
    metrics: Metrics,
    iterations: usize,
    max_iterations: usize,
    cache_ttl: Duration,
}

impl Service {
    pub fn new(pool: Pool, cache: StrategyCache, iterations: usize, max_iterations: usize, cache_ttl: Duration) -> Self {
        Self {
            pool,
            cache,
            metrics: Metrics::default(),
            iterations,
            max_iterations,
            cache_ttl,
        }
    }
    pub fn pool(&self) -> &Pool {
        &self.pool
    }
    pub fn cache(&self) -> &StrategyCache {
        &self.cache
    }
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// requested iteration budget, or the default, within bounds
    pub fn budget(&self, requested: Option<usize>) -> Result<usize, ValidationError> {
        match requested.unwrap_or(self.iterations) {
            n if n == 0 || n > self.max_iterations => Err(ValidationError::Iterations {
                got: n,
                max: self.max_iterations,
            }),
            n => Ok(n),
        }
    }

    /// solve a caller-supplied scenario, consulting the cache first
    pub async fn strategy(
        &self,
        scenario: &Scenario,
        iterations: Option<usize>,
        store: bool,
    ) -> Result<(DecisionState, Solution), Error> {
        let iterations = self.budget(iterations)?;
        let state = DecisionState::try_from(scenario)?;
        let key = CacheKey::from((scenario, iterations));
        if let Some(entry) = self.cache.get(&key).await {
            log::debug!("cache hit {}", key);
            self.metrics.hit();
            return Ok((state, Solution::from(entry)));
        }
        self.metrics.miss();
        let result = self.pool.solve(state.clone(), iterations).await?;
        self.metrics.solved(result.infos, result.nodes);
        if store {
            self.cache.put(&key, &result, self.cache_ttl).await;
        }
        Ok((state, Solution::from(&result)))
    }
}
