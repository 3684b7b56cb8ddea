use crate::Chips;
use crate::cards::Hole;

/// One player's view of the hand as the decision point sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub id: usize,
    pub hole: Option<Hole>,
    pub stack: Chips,
    pub invested: Chips,
    pub position: String,
    pub folded: bool,
}

impl Seat {
    pub fn new(id: usize, stack: Chips) -> Self {
        Self {
            id,
            hole: None,
            stack,
            invested: 0.0,
            position: String::from("BTN"),
            folded: false,
        }
    }
    pub fn hole(mut self, hole: Option<Hole>) -> Self {
        self.hole = hole;
        self
    }
    pub fn invested(mut self, invested: Chips) -> Self {
        self.invested = invested;
        self
    }
    pub fn position(mut self, position: &str) -> Self {
        self.position = position.to_string();
        self
    }
    /// still contesting the pot
    pub fn is_live(&self) -> bool {
        !self.folded
    }
    /// live with chips behind, so it can still make a choice
    pub fn can_act(&self) -> bool {
        self.is_live() && self.stack > 0.0
    }
}
