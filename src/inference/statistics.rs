use super::completion::Completion;
use crate::Probability;
use crate::cards::*;
use crate::gameplay::*;

/// Win and showdown counts for one rank.
///
/// Seeded with pseudocounts so the win-rate starts at 1/2 and is
/// never a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    wins: u32,
    showdowns: u32,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            wins: crate::PRIOR_WINS,
            showdowns: crate::PRIOR_SHOWDOWNS,
        }
    }
}

impl Record {
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn showdowns(&self) -> u32 {
        self.showdowns
    }
    pub fn winrate(&self) -> Probability {
        self.wins as Probability / self.showdowns as Probability
    }
}

/// Per-rank records, accumulated over the whole match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics([Record; Rank::N]);

impl Statistics {
    pub fn record(&self, rank: Rank) -> Record {
        self.0[rank as usize]
    }
    pub fn winrate(&self, rank: Rank) -> Probability {
        self.record(rank).winrate()
    }

    /// Credits ranks from a revealed showdown.
    ///
    /// Both hole pairs count a showdown per card. The winner's hole
    /// ranks count a win per card, and the ranks its best completion
    /// adds from the board count a win and a showdown each.
    pub fn observe(&mut self, showdown: &Showdown) {
        match showdown.verdict() {
            Verdict::Won => self.credit(showdown.hero(), showdown.board()),
            Verdict::Lost => self.credit(showdown.villain(), showdown.board()),
            Verdict::Split => {}
        }
        for rank in showdown.hero().ranks() {
            self.show(rank);
        }
        for rank in showdown.villain().ranks() {
            self.show(rank);
        }
    }

    fn credit(&mut self, winner: Hole, board: Board) {
        for rank in winner.ranks() {
            self.win(rank);
        }
        if let Some(completion) = Completion::search(winner, Hand::from(board)) {
            log::trace!("{:<32}{}", "best completion", completion);
            for rank in completion.extras() {
                self.win(*rank);
                self.show(*rank);
            }
        }
    }
    fn win(&mut self, rank: Rank) {
        self.0[rank as usize].wins += 1;
    }
    fn show(&mut self, rank: Rank) {
        self.0[rank as usize].showdowns += 1;
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Rank::all() {
            let record = self.record(rank);
            writeln!(
                f,
                "{} {:>4}/{:<4} {:.3}",
                rank,
                record.wins(),
                record.showdowns(),
                record.winrate()
            )?;
        }
        Ok(())
    }
}
