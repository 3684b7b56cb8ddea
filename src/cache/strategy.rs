use super::entry::CacheEntry;
use super::key::CacheKey;
use super::memory::MemoryStore;
use super::store::Store;
use crate::Utility;
use crate::solver::SolverResult;
use std::sync::Arc;
use std::time::Duration;

/// Convergence-gated strategy cache.
///
/// Only results below the exploitability threshold are written, and a
/// backend failure degrades to a miss rather than failing the request.
/// Concurrent misses on one key may both solve; the last write wins.
#[derive(Clone)]
pub struct StrategyCache {
    store: Arc<dyn Store>,
    threshold: Utility,
}

impl Default for StrategyCache {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::default()), crate::CACHE_THRESHOLD)
    }
}

impl StrategyCache {
    pub fn new(store: Arc<dyn Store>, threshold: Utility) -> Self {
        Self { store, threshold }
    }
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub async fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        match self.store.get(key.as_str()).await {
            Ok(Some(text)) => match serde_json::from_str::<CacheEntry>(&text) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("discarding unreadable cache entry {}: {}", key, e);
                    if let Err(e) = self.store.delete(key.as_str()).await {
                        log::warn!("cache delete failed for {}: {}", key, e);
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("cache read failed for {}: {}", key, e);
                None
            }
        }
    }

    /// store a result if it converged well enough, returning whether it was written
    pub async fn put(&self, key: &CacheKey, result: &SolverResult, ttl: Duration) -> bool {
        if !(result.exploitability < self.threshold) {
            log::debug!(
                "not caching {} (exploitability {:.5} >= {})",
                key,
                result.exploitability,
                self.threshold
            );
            return false;
        }
        let text = match serde_json::to_string(&CacheEntry::from(result)) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("cache entry for {} failed to serialize: {}", key, e);
                return false;
            }
        };
        match self.store.set(key.as_str(), text, ttl).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("cache write failed for {}: {}", key, e);
                false
            }
        }
    }

    pub async fn connected(&self) -> bool {
        self.store.ping().await
    }
    pub async fn size(&self) -> Option<usize> {
        match self.store.size().await {
            Ok(size) => size,
            Err(e) => {
                log::warn!("cache size unavailable: {}", e);
                None
            }
        }
    }
}
