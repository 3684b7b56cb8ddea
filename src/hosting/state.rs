use super::config::Config;
use crate::Error;
use crate::batch::BatchOrchestrator;
use crate::service::Service;
use std::sync::Arc;

/// Everything a request handler can reach, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Service>,
    pub batches: BatchOrchestrator,
}

impl AppState {
    pub fn new(service: Service, config: &Config) -> Self {
        let service = Arc::new(service);
        Self {
            batches: BatchOrchestrator::new(service.clone(), config.progress_ttl()),
            service,
        }
    }
    pub async fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self::new(config.service().await?, config))
    }
}
