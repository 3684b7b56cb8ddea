use super::job::BatchJob;
use super::progress::Progress;
use super::progress::Snapshot;
use crate::Error;
use crate::ValidationError;
use crate::dto::BatchAccepted;
use crate::dto::BatchRequest;
use crate::service::Service;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::sync::watch;

/// Accepts batches, runs each on its own background task, and answers
/// progress polls from the latest published snapshot.
///
/// Scenarios inside one job run sequentially. Each job's worker is the
/// only writer of its progress; pollers hold watch receivers.
#[derive(Clone)]
pub struct BatchOrchestrator {
    service: Arc<Service>,
    registry: Arc<RwLock<HashMap<String, watch::Receiver<Snapshot>>>>,
    ttl: Duration,
}

impl BatchOrchestrator {
    pub fn new(service: Arc<Service>, ttl: Duration) -> Self {
        Self {
            service,
            registry: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// register and spawn a job, returning as soon as it is queued
    pub async fn submit(&self, request: BatchRequest) -> Result<BatchAccepted, Error> {
        if request.scenarios.is_empty() {
            return Err(ValidationError::EmptyBatch.into());
        }
        let iterations = self.service.budget(request.iterations)?;
        let id = format!("batch_{}_{:08x}", crate::now(), rand::random::<u32>());
        let job = BatchJob {
            id: id.clone(),
            scenarios: request.scenarios,
            iterations,
            cache_results: request.cache_results,
        };
        let start = Progress::start(job.total());
        let accepted = BatchAccepted {
            batch_id: id.clone(),
            status: String::from("processing"),
            total_scenarios: job.total(),
            estimated_time: start.estimated_time_remaining,
            check_url: format!("/training/batch/{}/status", id),
        };
        let (tx, rx) = watch::channel(Snapshot::from(start));
        {
            let mut registry = self.registry.write().await;
            registry.retain(|_, r| !r.borrow().is_expired(self.ttl));
            registry.insert(id, rx);
        }
        tokio::spawn(job.run(self.service.clone(), tx));
        Ok(accepted)
    }

    /// latest progress, or the default sentinel for unknown and expired ids
    pub async fn status(&self, id: &str) -> Progress {
        let snapshot = self
            .registry
            .read()
            .await
            .get(id)
            .map(|rx| rx.borrow().clone());
        match snapshot {
            Some(snapshot) if !snapshot.is_expired(self.ttl) => snapshot.progress,
            Some(_) => {
                self.registry.write().await.remove(id);
                Progress::default()
            }
            None => Progress::default(),
        }
    }

    pub async fn tracked(&self) -> usize {
        self.registry.read().await.len()
    }
}
