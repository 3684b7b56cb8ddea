use crate::Probability;
use crate::Utility;
use crate::gameplay::Edge;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use std::collections::BTreeMap;

/// A probability distribution over the fixed edge set.
///
/// Every constructor normalizes, so entries are non-negative and
/// sum to one within floating tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy([Probability; Edge::N]);

impl Policy {
    pub fn uniform() -> Self {
        Self([1.0 / Edge::N as Probability; Edge::N])
    }
    /// normalize non-negative weights, None when they carry no mass
    pub fn normalize(weights: [Probability; Edge::N]) -> Option<Self> {
        let weights = weights.map(|w| if w.is_finite() { w.max(0.0) } else { 0.0 });
        let denom = weights.iter().sum::<Probability>();
        if denom > 0.0 {
            Some(Self(weights.map(|w| w / denom)))
        } else {
            None
        }
    }
    /// regret matching: positive part of regret, uniform when none is positive
    pub fn matching(regret: &[Utility; Edge::N]) -> Self {
        Self::normalize(regret.map(|r| r.max(0.0))).unwrap_or_else(Self::uniform)
    }
    pub fn weight(&self, edge: Edge) -> Probability {
        self.0[edge.index()]
    }
    pub fn weights(&self) -> &[Probability; Edge::N] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = (Edge, Probability)> + '_ {
        Edge::all().into_iter().map(|e| (e, self.weight(e)))
    }
    /// expected value of a per-edge payoff vector under this policy
    pub fn expect(&self, utility: &[Utility; Edge::N]) -> Utility {
        self.0.iter().zip(utility.iter()).map(|(p, u)| p * u).sum()
    }
    /// most likely edge, ties broken toward the more aggressive choice
    pub fn best(&self) -> (Edge, Probability) {
        self.iter()
            .fold((Edge::Fold, Probability::NEG_INFINITY), |best, next| {
                if next.1 >= best.1 { next } else { best }
            })
    }
    /// remaining edges by descending probability
    pub fn ranked(&self) -> Vec<(Edge, Probability)> {
        let mut ranked = self.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(b.0.cmp(&a.0)));
        ranked
    }
    /// largest absolute difference between two policies
    pub fn distance(&self, other: &Self) -> Probability {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, Probability::max)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::uniform()
    }
}

impl Serialize for Policy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Edge::N))?;
        for (edge, p) in self.iter() {
            map.serialize_entry(&edge, &p)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<Edge, Probability>::deserialize(deserializer)?;
        let mut weights = [0.0; Edge::N];
        for (edge, p) in map {
            weights[edge.index()] = p;
        }
        Policy::normalize(weights).ok_or_else(|| serde::de::Error::custom("policy carries no mass"))
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (edge, p) in self.iter() {
            write!(f, "{:>6} {:<6.3}", edge, p)?;
        }
        Ok(())
    }
}
