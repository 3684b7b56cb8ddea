use super::card::Card;
use super::rank::Rank;

/// Hand represents an unordered set of Cards as a 52-bit string.
/// Each bit represents a unique card, so set operations and
/// duplicate detection are single instructions.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// insert a card, false if it was already present
    pub fn insert(&mut self, card: Card) -> bool {
        let fresh = !self.contains(&card);
        self.0 |= u64::from(card);
        fresh
    }
    /// how many cards of each rank, deuce first
    pub fn ranks(&self) -> [u8; 13] {
        let mut counts = [0u8; 13];
        for card in self.cards() {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        counts
    }
    /// how many cards of each suit, clubs first
    pub fn suits(&self) -> [u8; 4] {
        let mut counts = [0u8; 4];
        for card in self.cards() {
            counts[u8::from(card.suit()) as usize] += 1;
        }
        counts
    }
    /// 13-bit rank presence mask
    pub fn mask(&self) -> u16 {
        self.cards()
            .map(|c| u16::from(c.rank()))
            .fold(0u16, |acc, bit| acc | bit)
    }
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        (0..52u8)
            .filter(|i| self.0 & (1u64 << i) != 0)
            .map(Card::from)
    }
    /// five consecutive ranks present, ace playing high or low
    pub fn has_straight(mask: u16) -> bool {
        let wheel = (mask << 1) | ((mask >> u8::from(Rank::Ace)) & 1);
        (0..=9).any(|i| (wheel >> i) & 0b11111 == 0b11111)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0, |a, b| a | b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_wheel_and_broadway() {
        let wheel = Card::parse_many("Ah2c3d4s5h").unwrap();
        let broad = Card::parse_many("AhKcQdJsTh").unwrap();
        let ragged = Card::parse_many("AhKcQdJs9h").unwrap();
        assert!(Hand::has_straight(wheel.into_iter().collect::<Hand>().mask()));
        assert!(Hand::has_straight(broad.into_iter().collect::<Hand>().mask()));
        assert!(!Hand::has_straight(ragged.into_iter().collect::<Hand>().mask()));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut hand = Hand::empty();
        let card = Card::try_from("Qs").unwrap();
        assert!(hand.insert(card));
        assert!(!hand.insert(card));
        assert!(hand.size() == 1);
    }
}
