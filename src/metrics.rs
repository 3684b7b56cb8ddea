use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Process-wide counters surfaced by the stats endpoint.
#[derive(Debug, Default)]
pub struct Metrics {
    solves: AtomicUsize,
    hits: AtomicUsize,
    misses: AtomicUsize,
    infos: AtomicUsize,
    nodes: AtomicUsize,
}

impl Metrics {
    pub fn solved(&self, infos: usize, nodes: usize) {
        self.solves.fetch_add(1, Ordering::Relaxed);
        self.infos.store(infos, Ordering::Relaxed);
        self.nodes.store(nodes, Ordering::Relaxed);
    }
    pub fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }
    pub fn miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }
    pub fn solves(&self) -> usize {
        self.solves.load(Ordering::Relaxed)
    }
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
    /// info sets in the most recent solve
    pub fn infos(&self) -> usize {
        self.infos.load(Ordering::Relaxed)
    }
    /// decision points in the most recent solve
    pub fn nodes(&self) -> usize {
        self.nodes.load(Ordering::Relaxed)
    }
}
