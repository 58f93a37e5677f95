use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// A mutable deck of cards supporting random draws.
///
/// Wraps a [`Hand`] of the remaining cards. The caller supplies the RNG
/// so dealing is reproducible under a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        debug_assert!(self.0.size() > 0);
        let i = rng.random_range(0..self.0.size());
        let mut cards = self.0;
        let card = cards.nth(i).expect("index below deck size");
        self.remove(card);
        card
    }
    /// Draws n cards as a Hand.
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self, rng: &mut impl Rng) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
