use super::odds;
use super::style::Style;
use crate::Chips;
use crate::Probability;
use crate::Utility;
use crate::cards::Strength;
use crate::gameplay::DecisionState;
use crate::gameplay::Edge;
use crate::service::Solution;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub action: String,
    pub probability: Probability,
    pub ev_difference: Utility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Chips>,
    pub probability: Probability,
    pub alternatives: Vec<Alternative>,
    pub reasoning: String,
    pub exploitability: Utility,
    pub confidence: Probability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub variance: Probability,
    pub drawouts: usize,
    pub stack_to_pot: Option<Chips>,
}

/// Human-facing reading of a solved decision point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub decision: Decision,
    pub hand_strength: Probability,
    pub position: String,
    pub pot_odds: Probability,
    pub implied_odds: Probability,
    pub equity: Probability,
    pub expected_value: Utility,
    pub risk_assessment: Risk,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_style: Option<Style>,
}

impl Analysis {
    /// turn a root strategy into a recommendation for the acting seat
    pub fn new(state: &DecisionState, solution: &Solution, style: Option<Style>) -> Self {
        let pot = state.pot();
        let owed = state.to_call();
        let hole = state.actor().and_then(|s| s.hole.as_ref());
        let strength = Strength::from((hole, state.board()));
        let pot_odds = odds::pot_odds(pot, owed);
        let equity = strength.equity();
        let policy = style
            .map(|s| s.adjust(&solution.strategy))
            .unwrap_or(solution.strategy);
        let ranked = policy.ranked();
        let (best, probability) = ranked[0];
        let alternatives = ranked[1..]
            .iter()
            .map(|(edge, p)| Alternative {
                action: edge.label(owed).to_string(),
                probability: *p,
                ev_difference: (probability - p) * pot,
            })
            .collect();
        let confidence = if solution.prior {
            solution.confidence() * crate::PRIOR_CONFIDENCE_DISCOUNT
        } else {
            solution.confidence()
        };
        let decision = Decision {
            action: best.label(owed).to_string(),
            amount: best.is_aggro().then(|| state.raise_size()),
            probability,
            alternatives,
            reasoning: Self::reasoning(best, owed, strength.value(), pot_odds),
            exploitability: solution.exploitability,
            confidence,
        };
        Self {
            decision,
            hand_strength: strength.value(),
            position: state
                .actor()
                .map(|s| s.position.clone())
                .unwrap_or_default(),
            pot_odds,
            implied_odds: odds::implied_odds(pot_odds),
            equity,
            expected_value: equity * pot,
            risk_assessment: Risk {
                variance: (10.0 * solution.exploitability).min(1.0),
                drawouts: hole
                    .map(|h| Strength::outs(h, state.board()))
                    .unwrap_or(0),
                stack_to_pot: state
                    .actor()
                    .and_then(|s| odds::stack_to_pot(s.stack, pot)),
            },
            opponent_style: style,
        }
    }

    fn reasoning(edge: Edge, owed: Chips, strength: Probability, pot_odds: Probability) -> String {
        let label = edge.label(owed);
        match edge {
            Edge::Raise if strength > 0.7 => {
                format!("Strong hand: {} for value to build the pot", label)
            }
            Edge::Raise => format!("Semi-bluff {} to keep the range balanced and apply pressure", label),
            Edge::Call if owed > 0.0 => {
                format!("Call is profitable at {:.1}% pot odds", pot_odds * 100.0)
            }
            Edge::Call => String::from("Check to control the pot size and keep the range protected"),
            Edge::Fold => String::from("Hand strength is too low to continue, fold to avoid further losses"),
        }
    }
}
