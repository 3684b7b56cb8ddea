use serde::Deserialize;
use serde::Serialize;

/// Betting round, named on the wire by its full lowercase name.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    #[serde(rename = "preflop")]
    Pref = 0isize,
    #[serde(rename = "flop")]
    Flop = 1isize,
    #[serde(rename = "turn")]
    Turn = 2isize,
    #[serde(rename = "river")]
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// None once the river betting round is over
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Pref => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::Rive),
            Self::Rive => None,
        }
    }
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
}

impl TryFrom<&str> for Street {
    type Error = crate::ValidationError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preflop" | "pref" => Ok(Self::Pref),
            "flop" => Ok(Self::Flop),
            "turn" => Ok(Self::Turn),
            "river" | "rive" => Ok(Self::Rive),
            _ => Err(crate::ValidationError::Street(s.to_string())),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}
