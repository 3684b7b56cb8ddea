use super::store::Store;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use std::time::Duration;

/// Shared Redis backend. Expiry is delegated to the server.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        log::info!("connected to redis at {}", url);
        Ok(Self { conn })
    }
}

#[async_trait::async_trait]
impl Store for RedisStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.get::<_, Option<String>>(key).await?)
    }
    async fn set(&self, key: &str, value: String, ttl: Duration) -> anyhow::Result<()> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs().max(1)).await?;
        Ok(())
    }
    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await?;
        Ok(())
    }
    async fn size(&self) -> anyhow::Result<Option<usize>> {
        let mut conn = self.conn.clone();
        Ok(Some(
            redis::cmd("DBSIZE")
                .query_async::<usize>(&mut conn)
                .await?,
        ))
    }
    async fn ping(&self) -> bool {
        let mut conn = self.conn.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .is_ok()
    }
    fn backend(&self) -> &'static str {
        "redis"
    }
}
