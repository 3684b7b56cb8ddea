use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// The fixed action set the solver chooses over at every decision point.
///
/// Call doubles as check and raise as bet when nothing is owed;
/// `label` gives the contextual name.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Fold,
    Call,
    Raise,
}

impl Edge {
    pub const N: usize = 3;
    pub const fn all() -> [Self; Self::N] {
        [Self::Fold, Self::Call, Self::Raise]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn is_aggro(&self) -> bool {
        matches!(self, Self::Raise)
    }
    pub fn label(&self, owed: Chips) -> &'static str {
        match (self, owed > 0.0) {
            (Self::Fold, _) => "fold",
            (Self::Call, true) => "call",
            (Self::Call, false) => "check",
            (Self::Raise, true) => "raise",
            (Self::Raise, false) => "bet",
        }
    }
}

impl From<usize> for Edge {
    fn from(i: usize) -> Self {
        Self::all()[i % Self::N]
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "raise"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_usize() {
        for edge in Edge::all() {
            assert!(edge == Edge::from(edge.index()));
        }
    }

    #[test]
    fn labels_depend_on_amount_owed() {
        assert!(Edge::Call.label(0.0) == "check");
        assert!(Edge::Raise.label(0.0) == "bet");
        assert!(Edge::Raise.label(2.0) == "raise");
    }
}
