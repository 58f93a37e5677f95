use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// An unordered set of Cards as a 52-bit bitstring.
///
/// One word for any number of cards, no heap allocation. Bit `rank * 4 + suit`
/// is set when that card is present, so each rank owns one nibble.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// disjoint union
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    /// every card not in this hand
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// the sub-hand of a single suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// how many cards of this rank are present, 0 through 4
    pub fn n_of(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001001100000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(cards.as_slice())
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank masks
/// a rank bit is set if any suit of that rank is present
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        Rank::all()
            .into_iter()
            .filter(|r| h.n_of(*r) > 0)
            .map(u16::from)
            .fold(0u16, |a, b| a | b)
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let hand = Self::from(cards.as_slice());
        match hand.size() == cards.len() {
            true => Ok(hand),
            false => Err(format!("duplicate cards in {}", s)),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let hand = Hand::try_from("2c 9d Ah").unwrap();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Card::try_from("2c").ok());
        assert_eq!(iter.next(), Card::try_from("Ts").ok());
        assert_eq!(iter.next(), Card::try_from("Jc").ok());
        assert_eq!(iter.next(), Card::try_from("Js").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::C)), 0b_1000100010001);
        assert_eq!(u16::from(hand.of(&Suit::D)), 0b_0001000100010);
        assert_eq!(u16::from(hand.of(&Suit::H)), 0b_0010001000100);
        assert_eq!(u16::from(hand.of(&Suit::S)), 0b_0100010001000);
    }

    #[test]
    fn rank_counts() {
        let hand = Hand::try_from("As Ad Ac 7h 7c 2d").unwrap();
        assert_eq!(hand.n_of(Rank::Ace), 3);
        assert_eq!(hand.n_of(Rank::Seven), 2);
        assert_eq!(hand.n_of(Rank::King), 0);
    }

    #[test]
    fn complement_is_disjoint() {
        let hand = Hand::try_from("As Kd").unwrap();
        let rest = hand.complement();
        assert_eq!(rest.size(), 50);
        assert_eq!(Hand::add(hand, rest).size(), 52);
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hand::try_from("As As").is_err());
    }
}
