use crate::Error;
use crate::cache::MemoryStore;
use crate::cache::Store;
use crate::cache::StrategyCache;
use crate::service::Service;
use crate::solver::Payoff;
use crate::solver::Solver;
use crate::solver::SolverConfig;
use crate::workers::Pool;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

/// Service configuration. Every flag can also be set from the environment.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Real-time GTO strategy server", long_about = None)]
pub struct Config {
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind: String,
    #[arg(long, env = "REDIS_URL")]
    pub redis_url: Option<String>,
    #[arg(long, env = "GTO_WORKERS", default_value_t = num_cpus::get())]
    pub workers: usize,
    #[arg(long, env = "GTO_ITERATIONS", default_value_t = crate::DEFAULT_ITERATIONS)]
    pub iterations: usize,
    #[arg(long, env = "GTO_MAX_ITERATIONS", default_value_t = crate::MAX_ITERATIONS)]
    pub max_iterations: usize,
    #[arg(long, env = "GTO_DEPTH", default_value_t = crate::SOLVER_DEPTH)]
    pub depth: usize,
    #[arg(long, env = "GTO_PAYOFF", default_value = "pot")]
    pub payoff: Payoff,
    #[arg(long, env = "GTO_CACHE_THRESHOLD", default_value_t = crate::CACHE_THRESHOLD)]
    pub cache_threshold: f64,
    /// seconds
    #[arg(long, env = "GTO_CACHE_TTL", default_value_t = crate::CACHE_TTL.as_secs())]
    pub cache_ttl: u64,
    /// seconds
    #[arg(long, env = "GTO_PROGRESS_TTL", default_value_t = crate::PROGRESS_TTL.as_secs())]
    pub progress_ttl: u64,
}

impl Config {
    pub fn solver(&self) -> SolverConfig {
        SolverConfig {
            depth: self.depth,
            payoff: self.payoff,
            ..SolverConfig::default()
        }
    }
    pub fn progress_ttl(&self) -> Duration {
        Duration::from_secs(self.progress_ttl)
    }

    /// wire the solver pool and cache backend into a service
    pub async fn service(&self) -> Result<Service, Error> {
        let pool = Pool::new(self.workers, Solver::from(self.solver()))?;
        let cache = StrategyCache::new(self.store().await, self.cache_threshold);
        log::info!(
            "solver pool: {} workers, depth {}, {} payoff, {} cache",
            pool.workers(),
            self.depth,
            self.payoff,
            cache.backend()
        );
        Ok(Service::new(
            pool,
            cache,
            self.iterations,
            self.max_iterations,
            Duration::from_secs(self.cache_ttl),
        ))
    }

    #[cfg(feature = "redis")]
    async fn store(&self) -> Arc<dyn Store> {
        match self.redis_url.as_deref() {
            Some(url) => match crate::cache::RedisStore::connect(url).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    log::warn!("redis unavailable ({}), using in-memory cache", e);
                    Arc::new(MemoryStore::default())
                }
            },
            None => Arc::new(MemoryStore::default()),
        }
    }

    #[cfg(not(feature = "redis"))]
    async fn store(&self) -> Arc<dyn Store> {
        if self.redis_url.is_some() {
            log::warn!("built without redis support, using in-memory cache");
        }
        Arc::new(MemoryStore::default())
    }
}
