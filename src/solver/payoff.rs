use crate::CALL_POT_FRACTION;
use crate::FOLD_EQUITY_BONUS;
use crate::RAISE_POT_FRACTION;
use crate::RAISE_SIZING;
use crate::Utility;
use crate::cards::Strength;
use crate::gameplay::DecisionState;
use crate::gameplay::Edge;

/// Terminal-value heuristic standing in for a full game-tree evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Payoff {
    /// fold 0, call and raise a fixed share of the pot
    #[default]
    PotFraction,
    /// equity-weighted pot growth, with fold equity credited to raises
    Equity,
}

impl Payoff {
    /// per-edge utility for the acting seat, indexed by `Edge::index`
    pub fn utilities(&self, state: &DecisionState) -> [Utility; Edge::N] {
        let pot = state.pot();
        match self {
            Self::PotFraction => [0.0, CALL_POT_FRACTION * pot, RAISE_POT_FRACTION * pot],
            Self::Equity => {
                let owed = state.to_call();
                let stack = state.actor().map(|s| s.stack).unwrap_or(0.0);
                let equity = Strength::from((
                    state.actor().and_then(|s| s.hole.as_ref()),
                    state.board(),
                ))
                .equity();
                let size = (owed + RAISE_SIZING * (pot + owed)).min(stack).max(owed);
                let call = equity * (pot + owed) - owed;
                let raise = FOLD_EQUITY_BONUS * pot + equity * (pot + size + (size - owed)) - size;
                [0.0, call, raise]
            }
        }
    }
}

impl std::str::FromStr for Payoff {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pot" | "pot-fraction" | "potfraction" => Ok(Self::PotFraction),
            "equity" => Ok(Self::Equity),
            other => Err(format!("unknown payoff model `{}`", other)),
        }
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PotFraction => write!(f, "pot"),
            Self::Equity => write!(f, "equity"),
        }
    }
}
