use crate::gameplay::DecisionState;
use serde::Deserialize;
use serde::Serialize;

/// Canonical identifier of what the acting player knows.
///
/// Built from street, the actor's private-card bucket, the sorted board,
/// the pot at fixed precision and the action-history summary, joined by `|`.
/// Unknown cards collapse to a single `??` bucket, so opponents never
/// contribute private information to a key.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoSetKey(String);

impl InfoSetKey {
    pub const UNKNOWN: &'static str = "??";
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&DecisionState> for InfoSetKey {
    fn from(state: &DecisionState) -> Self {
        let bucket = state
            .actor()
            .and_then(|seat| seat.hole.as_ref())
            .map(|hole| hole.class())
            .unwrap_or_else(|| String::from(Self::UNKNOWN));
        Self(format!(
            "{}|{}|{}|{:.2}|{}",
            state.street(),
            bucket,
            state.board(),
            state.pot(),
            state.summary(),
        ))
    }
}

impl From<InfoSetKey> for String {
    fn from(key: InfoSetKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for InfoSetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
