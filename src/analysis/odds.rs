use crate::Chips;
use crate::Probability;

/// Share of the final pot the caller contributes. Zero when nothing is owed.
pub fn pot_odds(pot: Chips, call: Chips) -> Probability {
    if call <= 0.0 || pot + call <= 0.0 {
        0.0
    } else {
        call / (pot + call)
    }
}

/// Pot odds discounted for future-street winnings.
pub fn implied_odds(pot_odds: Probability) -> Probability {
    (pot_odds * crate::IMPLIED_ODDS_FACTOR).min(1.0)
}

/// Stack depth relative to the pot, absent for an empty pot.
pub fn stack_to_pot(stack: Chips, pot: Chips) -> Option<Chips> {
    if pot > 0.0 { Some(stack / pot) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_owed_means_zero_odds() {
        assert!(pot_odds(100.0, 0.0) == 0.0);
        assert!(pot_odds(0.0, 0.0) == 0.0);
    }

    #[test]
    fn half_pot_call() {
        assert!((pot_odds(100.0, 50.0) - 50.0 / 150.0).abs() < 1e-12);
        assert!((implied_odds(0.25) - 0.3).abs() < 1e-12);
        assert!(implied_odds(0.9) == 1.0);
    }

    #[test]
    fn spr() {
        assert!(stack_to_pot(50.0, 10.0) == Some(5.0));
        assert!(stack_to_pot(50.0, 0.0).is_none());
    }
}
