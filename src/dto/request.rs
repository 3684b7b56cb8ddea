use crate::analysis::Style;
use crate::gameplay::Action;
use serde::Deserialize;
use serde::Serialize;

/// Caller-supplied decision point, as received over the wire.
/// Converted into a validated `DecisionState` before any solving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub street: String,
    pub pot: f64,
    #[serde(default)]
    pub community_cards: String,
    pub players: Vec<ScenarioPlayer>,
    #[serde(alias = "acting_player")]
    pub current_player: usize,
    #[serde(default)]
    pub history: Vec<ScenarioRecord>,
    #[serde(default)]
    pub is_terminal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPlayer {
    #[serde(default, alias = "seat")]
    pub id: Option<usize>,
    #[serde(default, alias = "holeCards")]
    pub hole_cards: Option<String>,
    #[serde(default = "ScenarioPlayer::default_stack")]
    pub stack: f64,
    #[serde(default)]
    pub invested: f64,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub folded: bool,
}

impl ScenarioPlayer {
    fn default_stack() -> f64 {
        100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub seat: usize,
    pub action: Action,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub street: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub decision_state: Scenario,
    #[serde(default)]
    pub iterations: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub decision_state: Scenario,
    #[serde(default)]
    pub iterations: Option<usize>,
    #[serde(default)]
    pub opponent_style: Option<Style>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub iterations: Option<usize>,
    #[serde(default = "default_caching")]
    pub cache_results: bool,
}

fn default_caching() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_field_names() {
        let json = serde_json::json!({
            "decision_state": {
                "street": "flop",
                "pot": 12,
                "community_cards": "Ah7d2c",
                "players": [
                    { "holeCards": "AsAc", "stack": 94, "invested": 6, "position": "BTN" },
                    { "stack": 94, "invested": 6, "position": "BB" }
                ],
                "current_player": 0,
                "history": [{ "seat": 0, "action": "raise", "amount": 4, "street": "preflop" }]
            }
        });
        let req = serde_json::from_value::<StrategyRequest>(json).unwrap();
        assert!(req.iterations.is_none());
        assert!(req.decision_state.players[0].hole_cards.as_deref() == Some("AsAc"));
        assert!(req.decision_state.players[1].hole_cards.is_none());
        assert!(req.decision_state.history[0].action == Action::Raise);
    }

    #[test]
    fn batch_defaults_to_caching() {
        let json = serde_json::json!({ "scenarios": [] });
        let req = serde_json::from_value::<BatchRequest>(json).unwrap();
        assert!(req.cache_results);
        assert!(req.scenarios.is_empty());
    }
}
