use crate::Chips;
use crate::cards::*;
use std::cmp::Ordering;

/// How a showdown ended, from the hero's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Won,
    Lost,
    Split,
}

/// the sign of a payoff
impl From<Chips> for Verdict {
    fn from(delta: Chips) -> Self {
        match delta.cmp(&0) {
            Ordering::Greater => Verdict::Won,
            Ordering::Less => Verdict::Lost,
            Ordering::Equal => Verdict::Split,
        }
    }
}

/// hero's strength compared to villain's
impl From<Ordering> for Verdict {
    fn from(order: Ordering) -> Self {
        match order {
            Ordering::Greater => Verdict::Won,
            Ordering::Less => Verdict::Lost,
            Ordering::Equal => Verdict::Split,
        }
    }
}

/// A finished round where both hole pairs were revealed.
///
/// This is the only evidence about the hidden rank relabeling:
/// the engine compared both hands after relabeling, and the payoff
/// sign tells us who it thought was stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    hero: Hole,
    villain: Hole,
    board: Board,
    delta: Chips,
}

impl From<(Hole, Hole, Board, Chips)> for Showdown {
    fn from((hero, villain, board, delta): (Hole, Hole, Board, Chips)) -> Self {
        Self {
            hero,
            villain,
            board,
            delta,
        }
    }
}

impl Showdown {
    pub fn hero(&self) -> Hole {
        self.hero
    }
    pub fn villain(&self) -> Hole {
        self.villain
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn delta(&self) -> Chips {
        self.delta
    }
    /// what actually happened
    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.delta)
    }
    /// what would have happened had the engine used this relabeling
    pub fn predict(&self, permutation: &Permutation) -> Verdict {
        let board = permutation.image(&Hand::from(self.board));
        let hero = permutation.image(&Hand::from(self.hero));
        let villain = permutation.image(&Hand::from(self.villain));
        let hero = Strength::from(Hand::add(hero, board));
        let villain = Strength::from(Hand::add(villain, board));
        Verdict::from(hero.cmp(&villain))
    }
    /// the relabeling explains the payoff sign
    pub fn consistent(&self, permutation: &Permutation) -> bool {
        self.predict(permutation) == self.verdict()
    }
}

impl std::fmt::Display for Showdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} vs {} on {:<12}{:+}",
            self.hero, self.villain, self.board, self.delta
        )
    }
}
