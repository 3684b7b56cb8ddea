/// Card suit. Only its identity matters here, never its order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
    pub const fn symbol(&self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }
}

/// wraps modulo four, so any byte names a suit
impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        Self::all()[(n % 4) as usize]
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<char> for Suit {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let c = c.to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|s| s.symbol() == c)
            .ok_or(c)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_case_insensitively() {
        for suit in Suit::all() {
            assert!(Suit::try_from(suit.symbol()) == Ok(suit));
            assert!(Suit::try_from(suit.symbol().to_ascii_uppercase()) == Ok(suit));
        }
        assert!(Suit::try_from('x').is_err());
    }
}
