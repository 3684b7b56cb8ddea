use serde::Deserialize;
use serde::Serialize;

/// A concrete move recorded in a hand's history.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    #[serde(alias = "allin", alias = "all-in", alias = "all_in")]
    Shove,
}

impl Action {
    /// single-character code used in info-set history summaries
    pub const fn symbol(&self) -> char {
        match self {
            Self::Fold => 'f',
            Self::Check => 'x',
            Self::Call => 'c',
            Self::Bet => 'b',
            Self::Raise => 'r',
            Self::Shove => 'a',
        }
    }
    pub const fn is_aggro(&self) -> bool {
        matches!(self, Self::Bet | Self::Raise | Self::Shove)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Check => write!(f, "check"),
            Self::Call => write!(f, "call"),
            Self::Bet => write!(f, "bet"),
            Self::Raise => write!(f, "raise"),
            Self::Shove => write!(f, "allin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allin_spellings() {
        for s in ["\"allin\"", "\"all-in\"", "\"shove\""] {
            assert!(serde_json::from_str::<Action>(s).unwrap() == Action::Shove);
        }
    }
}
