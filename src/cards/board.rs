use super::card::Card;
use super::hand::Hand;
use crate::ValidationError;

/// Community cards, kept sorted high to low so equal boards
/// compare and print identically regardless of deal order.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0.into_iter().collect()
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = ValidationError;
    fn try_from(mut cards: Vec<Card>) -> Result<Self, Self::Error> {
        let mut seen = Hand::empty();
        if let Some(dupe) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(ValidationError::Duplicate(dupe.to_string()));
        }
        cards.sort_by(|a, b| b.cmp(a));
        Ok(Self(cards))
    }
}

impl TryFrom<&str> for Board {
    type Error = ValidationError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Board::try_from(Card::parse_many(s)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
