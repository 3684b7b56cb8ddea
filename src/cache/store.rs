use std::time::Duration;

/// Key-value backend behind the strategy cache.
///
/// Values are opaque serialized entries. Backends report their own
/// failures; the cache decides whether those are fatal.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: String, ttl: Duration) -> anyhow::Result<()>;
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
    /// live key count, None when the backend cannot say
    async fn size(&self) -> anyhow::Result<Option<usize>>;
    async fn ping(&self) -> bool;
    fn backend(&self) -> &'static str;
}
