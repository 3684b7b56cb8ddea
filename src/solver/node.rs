use super::policy::Policy;
use crate::Probability;
use crate::Utility;
use crate::gameplay::Edge;

/// Cumulative regret and strategy mass for one info set.
#[derive(Debug, Clone, Default)]
pub struct InfoSetNode {
    regret: [Utility; Edge::N],
    weight: [Probability; Edge::N],
    span: Utility,
}

impl InfoSetNode {
    /// current strategy by regret matching
    pub fn strategy(&self) -> Policy {
        Policy::matching(&self.regret)
    }

    /// averaged strategy, uniform until any reach has been accumulated
    pub fn average(&self) -> Policy {
        Policy::normalize(self.weight).unwrap_or_default()
    }

    /// fold one visit into the running sums and return the node's expected utility
    pub fn accumulate(
        &mut self,
        utility: &[Utility; Edge::N],
        strategy: &Policy,
        reach: Probability,
    ) -> Utility {
        let value = strategy.expect(utility);
        for (i, (u, p)) in utility.iter().zip(strategy.weights()).enumerate() {
            self.regret[i] += (u - value) * reach;
            self.weight[i] += p * reach;
        }
        let hi = utility.iter().copied().fold(Utility::NEG_INFINITY, Utility::max);
        let lo = utility.iter().copied().fold(Utility::INFINITY, Utility::min);
        self.span = self.span.max(hi - lo);
        value
    }

    /// positive regret per iteration, scaled by the utility spread seen here
    pub fn exploitability(&self, t: usize) -> Utility {
        let positive = self.regret.iter().map(|r| r.max(0.0)).sum::<Utility>();
        if t == 0 || self.span <= 0.0 {
            0.0
        } else {
            (positive / (t as Utility * self.span)).clamp(0.0, 1.0)
        }
    }

    pub fn regret(&self) -> &[Utility; Edge::N] {
        &self.regret
    }
}

impl std::fmt::Display for InfoSetNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ADVICE: {}", self.average())?;
        write!(f, " REGRET: {:<8.3?}", self.regret)?;
        Ok(())
    }
}
