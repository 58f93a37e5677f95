use super::showdown::Showdown;
use crate::Chips;
use crate::cards::*;

/// Reported once per round after payoffs.
///
/// `villain` is `None` when the opponent's cards were not shown,
/// which happens whenever the round ended in a fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub delta: Chips,
    pub street: Street,
    pub hero: Hole,
    pub villain: Option<Hole>,
    pub board: Board,
}

impl Outcome {
    /// the showdown evidence, if both hands were revealed
    pub fn showdown(&self) -> Option<Showdown> {
        self.villain
            .map(|villain| Showdown::from((self.hero, villain, self.board, self.delta)))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.villain {
            Some(villain) => write!(
                f,
                "{:<8}{} vs {} on {} {:+}",
                self.street, self.hero, villain, self.board, self.delta
            ),
            None => write!(
                f,
                "{:<8}{} vs ???? on {} {:+}",
                self.street, self.hero, self.board, self.delta
            ),
        }
    }
}
