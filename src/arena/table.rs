use crate::Chips;
use crate::cards::*;
use crate::gameplay::*;
use rand::Rng;

type Position = usize;

/// One heads-up round, dealt and played to completion.
///
/// Seat 0 posts the small blind and acts first preflop; seat 1 acts
/// first on every later street. The five board cards are dealt up
/// front and revealed 3, 1, 1. At showdown hands are compared after
/// relabeling ranks with a permutation the players never see.
#[derive(Debug, Clone)]
pub struct Table {
    holes: [Hole; 2],
    board: [Card; 5],
    street: Street,
    pips: [Chips; 2],
    stacks: [Chips; 2],
    ticker: usize,
    stack: Chips,
    folded: Option<Position>,
    shown: bool,
}

impl Table {
    /// Shuffles, deals, and posts blinds.
    pub fn deal(stack: Chips, rng: &mut impl Rng) -> Self {
        let mut deck = Deck::new();
        let holes = [deck.hole(rng), deck.hole(rng)];
        let board: [Card; 5] = std::array::from_fn(|_| deck.draw(rng));
        Self::from((holes, board, stack))
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn hole(&self, seat: Position) -> Hole {
        self.holes[seat]
    }
    /// board cards face up on the current street
    pub fn board(&self) -> Board {
        Board::from(&self.board[..self.street.n_observed()])
    }
    pub fn actor(&self) -> Position {
        self.ticker % 2
    }
    pub fn is_over(&self) -> bool {
        self.folded.is_some() || self.shown
    }

    /// what the actor sees when asked to move
    pub fn spot(&self) -> Spot {
        let hero = self.actor();
        let villain = 1 - hero;
        Spot {
            legal: self.legal(),
            street: self.street,
            hole: self.holes[hero],
            board: self.board(),
            hero_pip: self.pips[hero],
            villain_pip: self.pips[villain],
            hero_stack: self.stacks[hero],
            villain_stack: self.stacks[villain],
        }
    }

    pub fn legal(&self) -> Legal {
        if self.is_over() {
            return Legal::empty();
        }
        if self.to_call() == 0 {
            let legal = Legal::empty().with(Action::Check);
            match self.may_bet() {
                true => self.with_raise(legal),
                false => legal,
            }
        } else {
            let legal = Legal::empty().with(Action::Fold).with(Action::Call);
            match self.may_raise() {
                true => self.with_raise(legal),
                false => legal,
            }
        }
    }

    /// Applies the actor's move. Illegal moves become check, else fold.
    pub fn apply(&mut self, action: Action) {
        debug_assert!(!self.is_over());
        let legal = self.legal();
        let action = if legal.contains(&action) {
            action
        } else {
            log::warn!("{:<32}{} not in {}", "illegal action replaced", action, legal);
            if legal.may_check() {
                Action::Check
            } else {
                Action::Fold
            }
        };
        match action {
            Action::Fold => self.fold(),
            Action::Check => self.check(),
            Action::Call => self.call(),
            Action::Raise(amount) => self.raise(amount),
        }
    }

    /// Chip change for each seat. Folding forfeits what the folder put
    /// in; a showdown pays the winner the loser's contribution.
    pub fn deltas(&self, secret: &Permutation) -> [Chips; 2] {
        debug_assert!(self.is_over());
        let delta = match self.folded {
            Some(0) => self.stacks[0] - self.stack,
            Some(_) => self.stack - self.stacks[1],
            None => match self.strength(0, secret).cmp(&self.strength(1, secret)) {
                std::cmp::Ordering::Greater => self.stack - self.stacks[1],
                std::cmp::Ordering::Less => self.stacks[0] - self.stack,
                std::cmp::Ordering::Equal => (self.stacks[0] - self.stacks[1]) / 2,
            },
        };
        [delta, -delta]
    }

    /// the round as reported to one seat
    pub fn outcome(&self, seat: Position, secret: &Permutation) -> Outcome {
        Outcome {
            delta: self.deltas(secret)[seat],
            street: self.street,
            hero: self.holes[seat],
            villain: self.shown.then_some(self.holes[1 - seat]),
            board: self.board(),
        }
    }

    fn strength(&self, seat: Position, secret: &Permutation) -> Strength {
        let cards = Hand::add(Hand::from(self.holes[seat]), Hand::from(self.board()));
        Strength::from(secret.image(&cards))
    }

    fn fold(&mut self) {
        self.folded = Some(self.actor());
    }
    fn check(&mut self) {
        if self.is_everyone_touched() {
            self.next_street();
        } else {
            self.ticker += 1;
        }
    }
    fn call(&mut self) {
        let cost = self.to_call();
        let actor = self.actor();
        self.pips[actor] += cost;
        self.stacks[actor] -= cost;
        if self.street == Street::Pref && self.ticker == 0 {
            self.ticker += 1;
        } else {
            self.next_street();
        }
    }
    fn raise(&mut self, amount: Chips) {
        let actor = self.actor();
        self.stacks[actor] -= amount - self.pips[actor];
        self.pips[actor] = amount;
        self.ticker += 1;
    }
    fn next_street(&mut self) {
        match self.street.next() {
            Some(street) => {
                self.street = street;
                self.ticker = 1;
                self.pips = [0, 0];
            }
            None => self.shown = true,
        }
    }

    /// both players have had a turn on this street
    fn is_everyone_touched(&self) -> bool {
        (self.street == Street::Pref && self.ticker > 0) || self.ticker > 1
    }
    fn may_bet(&self) -> bool {
        self.stacks.iter().all(|s| *s > 0)
    }
    fn may_raise(&self) -> bool {
        self.to_call() < self.stacks[self.actor()] && self.stacks[1 - self.actor()] > 0
    }
    fn with_raise(&self, legal: Legal) -> Legal {
        let (min, max) = self.raise_bounds();
        legal.bounded(min, max)
    }

    pub fn to_call(&self) -> Chips {
        self.pips[1 - self.actor()] - self.pips[self.actor()]
    }
    /// raise-to bounds: at least a full raise, at most what both can cover
    pub fn raise_bounds(&self) -> (Chips, Chips) {
        let actor = self.actor();
        let cost = self.to_call();
        let max = std::cmp::min(self.stacks[actor], self.stacks[1 - actor] + cost);
        let min = std::cmp::min(max, cost + std::cmp::max(cost, crate::B_BLIND));
        (self.pips[actor] + min, self.pips[actor] + max)
    }
}

/// a fixed deal, for replaying a known round
impl From<([Hole; 2], [Card; 5], Chips)> for Table {
    fn from((holes, board, stack): ([Hole; 2], [Card; 5], Chips)) -> Self {
        Self {
            holes,
            board,
            street: Street::Pref,
            pips: [crate::S_BLIND, crate::B_BLIND],
            stacks: [stack - crate::S_BLIND, stack - crate::B_BLIND],
            ticker: 0,
            stack,
            folded: None,
            shown: false,
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8}{} {} | {} | pips {}/{} stacks {}/{}",
            self.street,
            self.holes[0],
            self.holes[1],
            self.board(),
            self.pips[0],
            self.pips[1],
            self.stacks[0],
            self.stacks[1]
        )
    }
}
