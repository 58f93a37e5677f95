use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;

/// Community cards, zero through five.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Board(Hand);

impl Board {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// how many board cards share this rank
    pub fn matches(&self, rank: Rank) -> usize {
        self.0.n_of(rank)
    }
}

impl From<Hand> for Board {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() <= 5);
        Self(hand)
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}
impl From<&[Card]> for Board {
    fn from(cards: &[Card]) -> Self {
        Self::from(Hand::from(cards))
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            0..=5 => Ok(Self(hand)),
            n => Err(format!("board holds at most 5 cards, got {}", n)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
