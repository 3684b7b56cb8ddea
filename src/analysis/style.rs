use crate::Probability;
use crate::gameplay::Edge;
use crate::solver::Policy;
use serde::Deserialize;
use serde::Serialize;

/// Observed tendencies of the opponent, used to tilt an equilibrium
/// strategy toward an exploitative one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    Balanced,
    #[serde(alias = "tag")]
    TightAggressive,
    #[serde(alias = "lag")]
    LooseAggressive,
    TightPassive,
    LoosePassive,
    Maniac,
    #[serde(alias = "rock")]
    Nit,
    #[serde(alias = "calling-station")]
    Station,
}

impl Style {
    pub const fn all() -> [Self; 8] {
        [
            Self::Balanced,
            Self::TightAggressive,
            Self::LooseAggressive,
            Self::TightPassive,
            Self::LoosePassive,
            Self::Maniac,
            Self::Nit,
            Self::Station,
        ]
    }

    /// multiplicative tilt per edge, in `Edge::index` order
    fn tilt(&self) -> [Probability; Edge::N] {
        match self {
            Self::Balanced => [1.0, 1.0, 1.0],
            Self::TightAggressive => [1.1, 0.9, 1.0],
            Self::LooseAggressive => [0.8, 1.3, 0.9],
            Self::TightPassive => [1.0, 0.8, 1.3],
            Self::LoosePassive => [0.9, 0.8, 1.4],
            Self::Maniac => [0.6, 1.5, 0.8],
            Self::Nit => [1.3, 0.7, 1.4],
            Self::Station => [0.9, 0.7, 1.5],
        }
    }

    /// reweight and renormalize, leaving massless results unchanged
    pub fn adjust(&self, policy: &Policy) -> Policy {
        let tilt = self.tilt();
        let mut weights = *policy.weights();
        for (w, t) in weights.iter_mut().zip(tilt) {
            *w *= t;
        }
        Policy::normalize(weights).unwrap_or(*policy)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "balanced"),
            Self::TightAggressive => write!(f, "tight-aggressive"),
            Self::LooseAggressive => write!(f, "loose-aggressive"),
            Self::TightPassive => write!(f, "tight-passive"),
            Self::LoosePassive => write!(f, "loose-passive"),
            Self::Maniac => write!(f, "maniac"),
            Self::Nit => write!(f, "nit"),
            Self::Station => write!(f, "station"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustments_stay_distributions() {
        let policy = Policy::normalize([0.2, 0.3, 0.5]).unwrap();
        for style in Style::all() {
            let adjusted = style.adjust(&policy);
            let sum = adjusted.weights().iter().sum::<Probability>();
            assert!((sum - 1.0).abs() <= 1e-9);
            assert!(adjusted.weights().iter().all(|p| *p >= 0.0));
        }
    }

    #[test]
    fn balanced_is_identity() {
        let policy = Policy::normalize([0.1, 0.6, 0.3]).unwrap();
        assert!(Style::Balanced.adjust(&policy).distance(&policy) < 1e-12);
    }

    #[test]
    fn stations_get_value_bet() {
        let policy = Policy::uniform();
        let adjusted = Style::Station.adjust(&policy);
        assert!(adjusted.weight(Edge::Raise) > policy.weight(Edge::Raise));
        assert!(adjusted.weight(Edge::Call) < policy.weight(Edge::Call));
    }

    #[test]
    fn parses_kebab_names() {
        let style = serde_json::from_value::<Style>(serde_json::json!("tight-aggressive")).unwrap();
        assert!(style == Style::TightAggressive);
        let style = serde_json::from_value::<Style>(serde_json::json!("calling-station")).unwrap();
        assert!(style == Style::Station);
        assert!(style.to_string() == "station");
    }
}
