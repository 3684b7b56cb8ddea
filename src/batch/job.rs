use super::progress::Progress;
use super::progress::Snapshot;
use super::progress::Tally;
use crate::dto::Scenario;
use crate::service::Service;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// A submitted batch, owned by the single worker that processes it.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub id: String,
    pub scenarios: Vec<Scenario>,
    pub iterations: usize,
    pub cache_results: bool,
}

impl BatchJob {
    pub fn total(&self) -> usize {
        self.scenarios.len()
    }

    /// solve every scenario in order, publishing progress after each
    pub async fn run(self, service: Arc<Service>, tx: watch::Sender<Snapshot>) {
        let total = self.total();
        let mut tally = Tally::default();
        log::info!("batch {} started ({} scenarios)", self.id, total);
        for (i, scenario) in self.scenarios.iter().enumerate() {
            let start = Instant::now();
            match service
                .strategy(scenario, Some(self.iterations), self.cache_results)
                .await
            {
                Ok((_, solution)) => {
                    tally.solved(solution.exploitability, start.elapsed());
                    log::info!(
                        "batch {} scenario {}/{} done in {:?} (exploitability {:.5})",
                        self.id,
                        i + 1,
                        total,
                        start.elapsed(),
                        solution.exploitability
                    );
                }
                Err(e) => {
                    tally.skipped(start.elapsed());
                    log::error!("batch {} scenario {}/{} skipped: {}", self.id, i + 1, total, e);
                }
            }
            tx.send_replace(Snapshot::from(tally.progress(total)));
        }
        let Progress { failed, .. } = tally.progress(total);
        log::info!("batch {} finished ({} skipped)", self.id, failed);
    }
}
