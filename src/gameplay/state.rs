use super::action::Action;
use super::edge::Edge;
use super::record::Record;
use super::seat::Seat;
use crate::Chips;
use crate::RAISE_SIZING;
use crate::ValidationError;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;
use crate::dto::Scenario;

/// A single decision point: who acts, what they see, and how we got here.
///
/// Constructed from caller input through `TryFrom<&Scenario>`, which rejects
/// malformed shapes, or from another state through `apply`, which walks the
/// betting round forward one choice at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionState {
    street: Street,
    pot: Chips,
    board: Board,
    seats: Vec<Seat>,
    acting: usize,
    history: Vec<Record>,
    terminal: bool,
}

impl DecisionState {
    pub fn new(street: Street, pot: Chips, board: Board, seats: Vec<Seat>, acting: usize) -> Self {
        Self {
            street,
            pot,
            board,
            seats,
            acting,
            history: Vec::new(),
            terminal: false,
        }
    }
    pub fn with_history(mut self, history: Vec<Record>) -> Self {
        for record in history.iter().filter(|r| r.action == Action::Fold) {
            if let Some(seat) = self.seats.iter_mut().find(|s| s.id == record.seat) {
                seat.folded = true;
            }
        }
        self.history = history;
        self
    }
    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    pub fn acting(&self) -> usize {
        self.acting
    }
    /// the acting seat, absent only for terminal states with a stale index
    pub fn actor(&self) -> Option<&Seat> {
        self.seats.get(self.acting)
    }
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
    pub fn is_decision(&self) -> bool {
        !self.terminal && self.actor().is_some_and(Seat::is_live)
    }

    /// chips the acting seat must add to match the largest investment
    pub fn to_call(&self) -> Chips {
        let most = self.most_invested();
        self.actor()
            .map(|s| (most - s.invested).max(0.0))
            .unwrap_or(0.0)
    }
    /// chips the acting seat adds on the raise edge, capped at its stack
    pub fn raise_size(&self) -> Chips {
        let owed = self.to_call();
        let stack = self.actor().map(|s| s.stack).unwrap_or(0.0);
        (owed + RAISE_SIZING * (self.pot + owed)).min(stack)
    }
    fn most_invested(&self) -> Chips {
        self.seats
            .iter()
            .filter(|s| s.is_live())
            .map(|s| s.invested)
            .fold(0.0, Chips::max)
    }

    /// compact history: one symbol per action, streets split by '/'
    pub fn summary(&self) -> String {
        Street::all()
            .iter()
            .filter(|s| **s <= self.street)
            .map(|street| {
                self.history
                    .iter()
                    .filter(|r| r.street == *street)
                    .map(|r| r.action.symbol())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("/")
    }

    /// hide every private card the acting seat could not see
    pub fn perspective(&self) -> Self {
        let mut state = self.clone();
        for (i, seat) in state.seats.iter_mut().enumerate() {
            if i != self.acting {
                seat.hole = None;
            }
        }
        state
    }

    /// successor decision points, one per edge, empty at terminal states
    pub fn successors(&self) -> Vec<(Edge, Self)> {
        if self.is_decision() {
            Edge::all()
                .into_iter()
                .map(|edge| (edge, self.apply(edge)))
                .collect()
        } else {
            Vec::new()
        }
    }

    /// play one edge for the acting seat and advance the betting round
    pub fn apply(&self, edge: Edge) -> Self {
        let owed = self.to_call();
        let size = self.raise_size();
        let mut next = self.clone();
        let street = next.street;
        let seat = &mut next.seats[self.acting];
        let (action, amount) = match edge {
            Edge::Fold => {
                seat.folded = true;
                (Action::Fold, 0.0)
            }
            Edge::Call => match owed.min(seat.stack) {
                x if x <= 0.0 => (Action::Check, 0.0),
                x if x >= seat.stack => (Action::Shove, x),
                x => (Action::Call, x),
            },
            Edge::Raise => match size {
                x if x >= seat.stack => (Action::Shove, x),
                x if owed > 0.0 => (Action::Raise, x),
                x => (Action::Bet, x),
            },
        };
        seat.stack -= amount;
        seat.invested += amount;
        next.pot += amount;
        next.history.push(Record {
            seat: seat.id,
            street,
            action,
            amount,
        });
        next.settle();
        next
    }

    /// pick the next actor, close the round, or end the hand
    fn settle(&mut self) {
        let live = self.seats.iter().filter(|s| s.is_live()).count();
        let able = self.seats.iter().filter(|s| s.can_act()).count();
        if live <= 1 || able == 0 {
            self.terminal = true;
        } else if self.closed() {
            match self.street.next() {
                Some(street) if able >= 2 => {
                    self.street = street;
                    self.acting = self
                        .seats
                        .iter()
                        .position(Seat::can_act)
                        .unwrap_or(self.acting);
                }
                _ => self.terminal = true,
            }
        } else {
            let n = self.seats.len();
            match (1..=n)
                .map(|k| (self.acting + k) % n)
                .find(|i| self.seats[*i].can_act())
            {
                Some(i) => self.acting = i,
                None => self.terminal = true,
            }
        }
    }

    /// every seat that can act has matched the bet and acted since the last aggression
    fn closed(&self) -> bool {
        let most = self.most_invested();
        let plays = self
            .history
            .iter()
            .filter(|r| r.street == self.street)
            .collect::<Vec<&Record>>();
        let since = plays
            .iter()
            .rposition(|r| r.action.is_aggro())
            .unwrap_or(0);
        self.seats.iter().filter(|s| s.can_act()).all(|s| {
            s.invested >= most && plays[since..].iter().any(|r| r.seat == s.id)
        })
    }

    /// structural checks a caller-supplied state must pass before solving
    pub fn validate(&self) -> Result<(), ValidationError> {
        let n = self.seats.len();
        if n < 2 {
            return Err(ValidationError::Players(n));
        }
        let amount = |field: &'static str, value: Chips| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ValidationError::Amount { field, value })
            }
        };
        amount("pot", self.pot)?;
        for (i, seat) in self.seats.iter().enumerate() {
            if self.seats[..i].iter().any(|s| s.id == seat.id) {
                return Err(ValidationError::Seat(seat.id));
            }
            amount("stack", seat.stack)?;
            amount("invested", seat.invested)?;
        }
        for record in self.history.iter() {
            if !self.seats.iter().any(|s| s.id == record.seat) {
                return Err(ValidationError::History(record.seat));
            }
            amount("history amount", record.amount)?;
        }
        if !self.terminal {
            match self.actor() {
                None => {
                    return Err(ValidationError::Acting {
                        index: self.acting,
                        players: n,
                    });
                }
                Some(seat) if seat.folded => return Err(ValidationError::Folded(self.acting)),
                Some(_) => {}
            }
        }
        let expected = self.street.n_observed();
        if !self.board.is_empty() && self.board.len() != expected {
            return Err(ValidationError::Board {
                street: self.street,
                expected,
                actual: self.board.len(),
            });
        }
        let mut seen = Hand::from(self.board.clone());
        for hole in self.seats.iter().filter_map(|s| s.hole.as_ref()) {
            for card in hole.cards() {
                if !seen.insert(card) {
                    return Err(ValidationError::Duplicate(card.to_string()));
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<&Scenario> for DecisionState {
    type Error = ValidationError;
    fn try_from(scenario: &Scenario) -> Result<Self, Self::Error> {
        let street = Street::try_from(scenario.street.as_str())?;
        let board = Board::try_from(scenario.community_cards.as_str())?;
        let seats = scenario
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| -> Result<Seat, ValidationError> {
                Ok(Seat {
                    id: p.id.unwrap_or(i),
                    hole: Hole::parse(p.hole_cards.as_deref())?,
                    stack: p.stack,
                    invested: p.invested,
                    position: p.position.clone().unwrap_or_else(|| String::from("BTN")),
                    folded: p.folded,
                })
            })
            .collect::<Result<Vec<Seat>, ValidationError>>()?;
        let history = scenario
            .history
            .iter()
            .map(|r| -> Result<Record, ValidationError> {
                Ok(Record {
                    seat: r.seat,
                    street: match r.street.as_deref() {
                        Some(s) => Street::try_from(s)?,
                        None => street,
                    },
                    action: r.action,
                    amount: r.amount,
                })
            })
            .collect::<Result<Vec<Record>, ValidationError>>()?;
        let state = DecisionState::new(street, scenario.pot, board, seats, scenario.current_player)
            .with_history(history)
            .with_terminal(scenario.is_terminal);
        state.validate()?;
        Ok(state)
    }
}

impl std::fmt::Display for DecisionState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} pot {:.2} board {} seat {} history [{}]",
            self.street,
            self.pot,
            self.board,
            self.acting,
            self.summary()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heads_up() -> DecisionState {
        let hero = Hole::try_from("AhAd").ok();
        DecisionState::new(
            Street::Pref,
            3.0,
            Board::empty(),
            vec![
                Seat::new(0, 99.0).hole(hero).invested(1.0).position("SB"),
                Seat::new(1, 98.0).invested(2.0).position("BB"),
            ],
            0,
        )
    }

    #[test]
    fn call_matches_outstanding_amount() {
        let state = heads_up();
        assert!(state.to_call() == 1.0);
        let next = state.apply(Edge::Call);
        assert!(next.pot() == 4.0);
        assert!(next.acting() == 1);
        assert!(next.to_call() == 0.0);
        assert!(!next.is_terminal());
        assert!(next.history().last().map(|r| r.action) == Some(Action::Call));
    }

    #[test]
    fn check_behind_closes_the_street() {
        let next = heads_up().apply(Edge::Call).apply(Edge::Call);
        assert!(next.street() == Street::Flop);
        assert!(next.summary() == "cx/");
        assert!(!next.is_terminal());
    }

    #[test]
    fn fold_ends_heads_up_hand() {
        let next = heads_up().apply(Edge::Fold);
        assert!(next.is_terminal());
        assert!(next.successors().is_empty());
    }

    #[test]
    fn river_check_through_ends_the_hand() {
        let state = DecisionState::new(
            Street::Rive,
            10.0,
            Board::try_from("Kh8h2c7d3s").unwrap(),
            vec![
                Seat::new(0, 50.0).invested(5.0),
                Seat::new(1, 50.0).invested(5.0),
            ],
            0,
        );
        let once = state.apply(Edge::Call);
        assert!(!once.is_terminal());
        assert!(once.acting() == 1);
        let twice = once.apply(Edge::Call);
        assert!(twice.street() == Street::Rive);
        assert!(twice.is_terminal());
        assert!(twice.successors().is_empty());
    }

    #[test]
    fn all_in_and_call_ends_betting_before_the_turn() {
        let state = DecisionState::new(
            Street::Flop,
            10.0,
            Board::try_from("Kh8h2c").unwrap(),
            vec![
                Seat::new(0, 5.0).invested(5.0),
                Seat::new(1, 5.0).invested(5.0),
            ],
            0,
        );
        let shove = state.apply(Edge::Raise);
        assert!(shove.history().last().map(|r| r.action) == Some(Action::Shove));
        assert!(!shove.is_terminal());
        assert!(shove.acting() == 1);
        let called = shove.apply(Edge::Call);
        assert!(called.seats().iter().all(|s| s.stack == 0.0));
        assert!(called.street() == Street::Flop);
        assert!(called.is_terminal());
        assert!(called.successors().is_empty());
    }

    #[test]
    fn raise_size_matches_the_applied_raise() {
        let state = heads_up();
        let size = state.raise_size();
        assert!(size == 1.0 + RAISE_SIZING * 4.0);
        let next = state.apply(Edge::Raise);
        assert!(next.history().last().map(|r| r.amount) == Some(size));
    }

    #[test]
    fn raise_reopens_action() {
        let next = heads_up().apply(Edge::Raise);
        assert!(next.history().last().map(|r| r.action) == Some(Action::Raise));
        assert!(next.acting() == 1);
        assert!(next.to_call() > 0.0);
        let back = next.apply(Edge::Call);
        assert!(back.street() == Street::Flop);
    }

    #[test]
    fn oversized_raise_is_capped_at_stack() {
        let mut state = heads_up();
        state.seats[0].stack = 2.0;
        let next = state.apply(Edge::Raise);
        assert!(next.history().last().map(|r| r.action) == Some(Action::Shove));
        assert!(next.seats()[0].stack == 0.0);
    }

    #[test]
    fn perspective_hides_opponent_cards() {
        let mut state = heads_up();
        state.seats[1].hole = Hole::try_from("KcKd").ok();
        let masked = state.perspective();
        assert!(masked.seats()[0].hole.is_some());
        assert!(masked.seats()[1].hole.is_none());
    }

    #[test]
    fn validation_rejects_bad_shapes() {
        let mut state = heads_up();
        state.acting = 5;
        assert!(matches!(state.validate(), Err(ValidationError::Acting { .. })));
        let mut state = heads_up();
        state.seats.truncate(1);
        assert!(matches!(state.validate(), Err(ValidationError::Players(1))));
        let mut state = heads_up();
        state.seats[1].hole = Hole::try_from("AhKd").ok();
        assert!(matches!(state.validate(), Err(ValidationError::Duplicate(_))));
        let mut state = heads_up();
        state.pot = f64::NAN;
        assert!(matches!(state.validate(), Err(ValidationError::Amount { .. })));
    }

    #[test]
    fn folded_actor_is_rejected_unless_terminal() {
        let state = heads_up().with_history(vec![Record {
            seat: 0,
            street: Street::Pref,
            action: Action::Fold,
            amount: 0.0,
        }]);
        assert!(matches!(state.validate(), Err(ValidationError::Folded(0))));
        assert!(state.with_terminal(true).validate().is_ok());
    }
}
