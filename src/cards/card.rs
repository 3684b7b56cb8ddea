use super::rank::Rank;
use super::suit::Suit;
use crate::ValidationError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// ordering is rank-major so sorted boards read high to low when reversed
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// split a free-form card string ("AhKd", "Ah Kd", "ah,kd") into cards
    pub fn parse_many(s: &str) -> std::result::Result<Vec<Self>, ValidationError> {
        let chars = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect::<Vec<char>>();
        if chars.len() % 2 != 0 {
            return Err(ValidationError::Card(s.to_string()));
        }
        chars
            .chunks(2)
            .map(|pair| Card::try_from((pair[0], pair[1])))
            .collect()
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 injection
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl TryFrom<(char, char)> for Card {
    type Error = ValidationError;
    fn try_from((r, s): (char, char)) -> std::result::Result<Self, Self::Error> {
        match (Rank::try_from(r), Suit::try_from(s)) {
            (Ok(rank), Ok(suit)) => Ok(Self { rank, suit }),
            _ => Err(ValidationError::Card(format!("{}{}", r, s))),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = ValidationError;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Card::try_from((r, s)),
            _ => Err(ValidationError::Card(s.to_string())),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Card::from(rand::rng().random_range(0..52u8))
    }
}
