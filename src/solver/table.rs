use super::key::InfoSetKey;
use super::node::InfoSetNode;
use super::policy::Policy;
use crate::Utility;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Arena of info-set nodes for a single solve.
///
/// Nodes are created lazily on first visit and addressed by a dense
/// handle, so the per-iteration loop indexes a `Vec` instead of hashing
/// keys. The table is owned by one solve and never shared.
#[derive(Debug, Default)]
pub struct InfoSetTable {
    nodes: Vec<InfoSetNode>,
    keys: Vec<InfoSetKey>,
    index: FxHashMap<InfoSetKey, usize>,
}

impl InfoSetTable {
    /// handle for a key, inserting a fresh node when unseen
    pub fn handle(&mut self, key: InfoSetKey) -> usize {
        match self.index.get(&key) {
            Some(handle) => *handle,
            None => {
                let handle = self.nodes.len();
                self.nodes.push(InfoSetNode::default());
                self.keys.push(key.clone());
                self.index.insert(key, handle);
                handle
            }
        }
    }
    pub fn node_mut(&mut self, handle: usize) -> &mut InfoSetNode {
        &mut self.nodes[handle]
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// current regret-matching strategy for every node, indexed by handle
    pub fn snapshot(&self) -> Vec<Policy> {
        self.nodes.iter().map(InfoSetNode::strategy).collect()
    }

    /// mean normalized positive regret over every node
    pub fn exploitability(&self, t: usize) -> Utility {
        if self.is_empty() {
            1.0
        } else {
            self.nodes
                .iter()
                .map(|n| n.exploitability(t))
                .sum::<Utility>()
                / self.nodes.len() as Utility
        }
    }

    /// averaged strategy per key
    pub fn averages(&self) -> BTreeMap<InfoSetKey, Policy> {
        self.keys
            .iter()
            .cloned()
            .zip(self.nodes.iter().map(InfoSetNode::average))
            .collect()
    }
}
