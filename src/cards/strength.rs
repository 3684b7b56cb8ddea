use super::board::Board;
use super::hand::Hand;
use super::hole::Hole;
use crate::Probability;

/// Heuristic hand strength on a 0..=1 scale.
///
/// Preflop this scores pairs, high cards, suitedness and connectedness.
/// Postflop it classifies the best made-hand category across hole and
/// board cards, then adds a small bonus per broadway hole card. This is
/// a cheap proxy, not an equity enumeration.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Strength(Probability);

impl Strength {
    /// neutral prior when the hole cards are not known
    pub fn unknown() -> Self {
        Self(0.5)
    }
    pub fn value(&self) -> Probability {
        self.0
    }
    /// clamped monotone map of strength into an equity estimate
    pub fn equity(&self) -> Probability {
        self.0.clamp(0.1, 0.9)
    }

    fn preflop(hole: &Hole) -> Probability {
        let hi = hole.high().rank();
        let lo = hole.low().rank();
        if hole.is_pair() {
            0.5 + 0.45 * hi.scale()
        } else {
            let suited = if hole.is_suited() { 0.05 } else { 0.0 };
            let connected = if u8::from(hi) - u8::from(lo) == 1 { 0.03 } else { 0.0 };
            0.15 + 0.35 * hi.scale() + 0.15 * lo.scale() + suited + connected
        }
    }

    fn postflop(hole: &Hole, board: &Board) -> Probability {
        let hand = hole
            .cards()
            .into_iter()
            .chain(board.cards().iter().copied())
            .collect::<Hand>();
        let ranks = hand.ranks();
        let most = ranks.iter().copied().max().unwrap_or(0);
        let pairs = ranks.iter().filter(|n| **n == 2).count();
        let trips = ranks.iter().filter(|n| **n == 3).count();
        let flush = hand.suits().iter().any(|n| *n >= 5);
        let straight = Hand::has_straight(hand.mask());
        let made = match most {
            4 => 0.95,
            3 if pairs > 0 || trips > 1 => 0.9,
            _ if flush => 0.8,
            _ if straight => 0.75,
            3 => 0.7,
            2 if pairs >= 2 => 0.5,
            2 => 0.4,
            _ => 0.2,
        };
        let bonus = hole
            .cards()
            .iter()
            .filter(|c| c.rank().is_broadway())
            .count() as Probability
            * 0.05;
        made + bonus
    }

    /// cards that improve a drawing hand on the next street
    pub fn outs(hole: &Hole, board: &Board) -> usize {
        if !matches!(board.len(), 3 | 4) {
            return 0;
        }
        let hand = hole
            .cards()
            .into_iter()
            .chain(board.cards().iter().copied())
            .collect::<Hand>();
        let suits = hand.suits();
        let flush = hole
            .cards()
            .iter()
            .any(|c| suits[u8::from(c.suit()) as usize] == 4);
        let mask = hand.mask();
        let straight = if Hand::has_straight(mask) {
            0
        } else {
            (0..13u8)
                .map(|r| 1u16 << r)
                .filter(|bit| mask & bit == 0)
                .filter(|bit| Hand::has_straight(mask | bit))
                .count()
        };
        let outs = if flush { 9 } else { 0 } + 4 * straight;
        outs.min(15)
    }
}

impl From<(&Hole, &Board)> for Strength {
    fn from((hole, board): (&Hole, &Board)) -> Self {
        let raw = if board.is_empty() {
            Self::preflop(hole)
        } else {
            Self::postflop(hole, board)
        };
        Self(raw.clamp(0.0, 1.0))
    }
}

impl From<(Option<&Hole>, &Board)> for Strength {
    fn from((hole, board): (Option<&Hole>, &Board)) -> Self {
        hole.map(|h| Self::from((h, board)))
            .unwrap_or_else(Self::unknown)
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
