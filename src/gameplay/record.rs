use super::action::Action;
use crate::Chips;
use crate::cards::Street;

/// One entry of the linear action history.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub seat: usize,
    pub street: Street,
    pub action: Action,
    pub amount: Chips,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {} {:.2}", self.street, self.seat, self.action, self.amount)
    }
}
