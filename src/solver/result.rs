use super::key::InfoSetKey;
use super::policy::Policy;
use crate::Probability;
use crate::Utility;
use serde::Serialize;
use std::collections::BTreeMap;

/// Immutable output of one solve.
#[derive(Debug, Clone, Serialize)]
pub struct SolverResult {
    pub root: InfoSetKey,
    pub strategy: BTreeMap<InfoSetKey, Policy>,
    pub exploitability: Utility,
    pub iterations: usize,
    pub convergence: Vec<Utility>,
    pub infos: usize,
    pub nodes: usize,
}

impl SolverResult {
    /// result for a root with nothing to decide
    pub fn fallback(root: InfoSetKey) -> Self {
        Self {
            root,
            strategy: BTreeMap::new(),
            exploitability: 1.0,
            iterations: 0,
            convergence: Vec::new(),
            infos: 0,
            nodes: 0,
        }
    }
    pub fn policy(&self, key: &InfoSetKey) -> Option<&Policy> {
        self.strategy.get(key)
    }
    /// averaged root strategy, or the uniform prior flagged as such
    pub fn root_policy(&self) -> (Policy, bool) {
        match self.policy(&self.root) {
            Some(policy) => (*policy, false),
            None => (Policy::uniform(), true),
        }
    }
    pub fn confidence(&self) -> Probability {
        (1.0 - self.exploitability).clamp(0.0, 1.0)
    }
    pub fn is_converged(&self) -> bool {
        self.exploitability < crate::CONVERGENCE_EPSILON
    }
}

impl std::fmt::Display for SolverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | t {} | exploitability {:.5} | {} infos {} nodes",
            self.root,
            self.root_policy().0,
            self.iterations,
            self.exploitability,
            self.infos,
            self.nodes,
        )
    }
}
