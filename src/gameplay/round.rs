use crate::cards::Hole;

/// Announced at the start of every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRound {
    /// 1-based round number within the match
    pub index: usize,
    pub hole: Hole,
    /// true if this player posts the big blind
    pub blind: bool,
}

impl std::fmt::Display for NewRound {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let seat = if self.blind { "BB" } else { "SB" };
        write!(f, "round {:<6}{} {}", self.index, seat, self.hole)
    }
}
