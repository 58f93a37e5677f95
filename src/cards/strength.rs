use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// A hand's strength.
///
/// This will always be constructed from a Hand, which is an unordered
/// set of Cards. The strength is determined by the Hand's ranking, and the
/// kicker cards are used to break ties.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    /// Packs the strength into one integer, one nibble per rank.
    ///
    /// `category << 24 | r1 << 16 | r2 << 12 | r3 << 8 | r4 << 4 | r5`
    /// with defining ranks first, then kickers, highest first. Averages
    /// of scores can be held against the `TIER_*` constants.
    pub fn score(&self) -> u32 {
        self.value
            .ranks()
            .into_iter()
            .chain(Vec::<Rank>::from(self.kicks).into_iter().rev())
            .take(5)
            .zip([16u32, 12, 8, 4, 0])
            .fold(self.value.category() << 24, |score, (rank, shift)| {
                score | (u8::from(rank) as u32) << shift
            })
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}
