use super::legal::Legal;
use crate::Chips;
use crate::cards::*;

/// Everything the engine tells a player when asking for an action.
///
/// Pips are chips put in on the current street; stacks are chips
/// still behind. Both are given for the acting player (`hero`)
/// and the opponent (`villain`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spot {
    pub legal: Legal,
    pub street: Street,
    pub hole: Hole,
    pub board: Board,
    pub hero_pip: Chips,
    pub villain_pip: Chips,
    pub hero_stack: Chips,
    pub villain_stack: Chips,
}

impl Spot {
    /// chips needed to stay in the pot
    pub fn continue_cost(&self) -> Chips {
        self.villain_pip - self.hero_pip
    }
    /// chips both players have put in this round, across streets
    pub fn contributions(&self, starting: Chips) -> (Chips, Chips) {
        (starting - self.hero_stack, starting - self.villain_stack)
    }
    /// the pot as it would stand after calling
    pub fn pot_after_continue(&self, starting: Chips) -> Chips {
        let (hero, villain) = self.contributions(starting);
        hero + villain + self.continue_cost()
    }
    /// hole and board cards together
    pub fn cards(&self) -> Hand {
        Hand::add(Hand::from(self.hole), Hand::from(self.board))
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8}{} {:<12}pip {}/{} stack {}/{}",
            self.street,
            self.hole,
            self.board,
            self.hero_pip,
            self.villain_pip,
            self.hero_stack,
            self.villain_stack
        )
    }
}
