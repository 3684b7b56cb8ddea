use super::card::Card;
use crate::ValidationError;

/// A player's two private cards, stored high card first.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn high(&self) -> Card {
        self.0
    }
    pub fn low(&self) -> Card {
        self.1
    }
    pub fn is_pair(&self) -> bool {
        self.0.rank() == self.1.rank()
    }
    pub fn is_suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    /// suit-isomorphic starting hand class: AA, AKs, T9o
    pub fn class(&self) -> String {
        match (self.is_pair(), self.is_suited()) {
            (true, _) => format!("{}{}", self.0.rank(), self.1.rank()),
            (false, true) => format!("{}{}s", self.0.rank(), self.1.rank()),
            (false, false) => format!("{}{}o", self.0.rank(), self.1.rank()),
        }
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = ValidationError;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a.cmp(&b) {
            std::cmp::Ordering::Equal => Err(ValidationError::Duplicate(a.to_string())),
            std::cmp::Ordering::Greater => Ok(Self(a, b)),
            std::cmp::Ordering::Less => Ok(Self(b, a)),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = ValidationError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse_many(s)?.as_slice() {
            [a, b] => Hole::try_from((*a, *b)),
            _ => Err(ValidationError::Hole(s.to_string())),
        }
    }
}

impl Hole {
    /// parse a caller-supplied hole string, mapping unknown markers ("", "??", "unknown") to None
    pub fn parse(s: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match s.map(str::trim) {
            None | Some("") | Some("??") | Some("????") => Ok(None),
            Some(s) if s.eq_ignore_ascii_case("unknown") => Ok(None),
            Some(s) => Hole::try_from(s).map(Some),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        loop {
            let (a, b) = (<Card as crate::Arbitrary>::random(), <Card as crate::Arbitrary>::random());
            if let Ok(hole) = Hole::try_from((a, b)) {
                return hole;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_is_order_and_suit_invariant() {
        let a = Hole::try_from("KhAh").unwrap();
        let b = Hole::try_from("AsKs").unwrap();
        assert!(a.class() == "AKs");
        assert!(a.class() == b.class());
        assert!(Hole::try_from("Td9c").unwrap().class() == "T9o");
        assert!(Hole::try_from("AcAd").unwrap().class() == "AA");
    }

    #[test]
    fn unknown_markers_parse_to_none() {
        assert!(Hole::parse(None).unwrap().is_none());
        assert!(Hole::parse(Some("??")).unwrap().is_none());
        assert!(Hole::parse(Some(" unknown ")).unwrap().is_none());
        assert!(Hole::parse(Some("AhKd")).unwrap().is_some());
    }

    #[test]
    fn rejects_paired_card_and_wrong_count() {
        assert!(Hole::try_from("AhAh").is_err());
        assert!(Hole::try_from("AhKdQc").is_err());
    }

    #[test]
    fn random_holes_hold_two_distinct_cards() {
        use crate::Arbitrary;
        for _ in 0..64 {
            let hole = Hole::random();
            assert!(hole.high() != hole.low());
            assert!(Hole::try_from(hole.to_string().as_str()) == Ok(hole));
        }
    }
}
