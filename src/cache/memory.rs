use super::store::Store;
use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;
use tokio::sync::RwLock;

/// In-process store with per-key expiry. Expired keys are dropped lazily.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, (String, Instant)>>,
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let now = Instant::now();
        let stale = match self.entries.read().await.get(key) {
            Some((value, expiry)) if *expiry > now => return Ok(Some(value.clone())),
            Some(_) => true,
            None => false,
        };
        if stale {
            let mut entries = self.entries.write().await;
            if entries.get(key).is_some_and(|(_, expiry)| *expiry <= now) {
                entries.remove(key);
            }
        }
        Ok(None)
    }
    async fn set(&self, key: &str, value: String, ttl: Duration) -> anyhow::Result<()> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, (_, expiry)| *expiry > now);
        entries.insert(key.to_string(), (value, now + ttl));
        Ok(())
    }
    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
    async fn size(&self) -> anyhow::Result<Option<usize>> {
        let now = Instant::now();
        Ok(Some(
            self.entries
                .read()
                .await
                .values()
                .filter(|(_, expiry)| *expiry > now)
                .count(),
        ))
    }
    async fn ping(&self) -> bool {
        true
    }
    fn backend(&self) -> &'static str {
        "memory"
    }
}
