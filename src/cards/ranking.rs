use super::rank::Rank;

/// A poker hand's category and defining ranks.
///
/// Does not include kickers; those live in [`Kickers`](super::kicks::Kickers).
/// Variant order is hand-category order, so derived `Ord` compares category
/// first and the defining ranks second.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, the rest of the flush
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// rank bits still available to kickers
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Flush(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..) | Ranking::StraightFlush(..) | Ranking::Straight(..) => 0,
        }
    }

    /// position of the category, 0 for high card through 8 for straight flush
    pub fn category(&self) -> u32 {
        match self {
            Ranking::HighCard(_) => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(..) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush(_) => 5,
            Ranking::FullHouse(..) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
        }
    }

    /// defining ranks, most significant first
    pub fn ranks(&self) -> Vec<Rank> {
        match *self {
            Ranking::TwoPair(hi, lo) | Ranking::FullHouse(hi, lo) => vec![hi, lo],
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => vec![r],
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}
