use crate::cards::*;

/// The strongest hand a hole pair makes with three cards from a deck.
///
/// Triples are walked in the fixed order of [`HandIterator`] and the
/// first strict maximum is kept, so equal inputs always pick the same
/// triple. This is C(n, 3) evaluations and dominates round-end cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    triple: Hand,
    strength: Strength,
    extras: Vec<Rank>,
}

impl Completion {
    /// `None` if the deck has fewer than three cards besides the hole.
    pub fn search(hole: Hole, deck: Hand) -> Option<Self> {
        let pocket = Hand::from(hole);
        let deck = Hand::from(u64::from(deck) & !u64::from(pocket));
        let (triple, strength) = HandIterator::from((3, deck.complement()))
            .map(|triple| (triple, Strength::from(Hand::add(pocket, triple))))
            .fold(None, |best: Option<(Hand, Strength)>, (triple, strength)| match best {
                Some((_, max)) if strength <= max => best,
                _ => Some((triple, strength)),
            })?;
        let ranks = hole.ranks();
        let extras = triple
            .map(|card| card.rank())
            .filter(|rank| !ranks.contains(rank))
            .collect();
        Some(Self {
            triple,
            strength,
            extras,
        })
    }

    /// the three cards added to the hole
    pub fn triple(&self) -> Hand {
        self.triple
    }
    pub fn strength(&self) -> Strength {
        self.strength
    }
    /// ranks of the chosen cards not already held in the hole,
    /// one entry per card
    pub fn extras(&self) -> &[Rank] {
        &self.extras
    }
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.triple, self.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_best_triple() {
        let hole = Hole::try_from("Ac Ad").unwrap();
        let deck = Hand::try_from("2h 7s Ah 9d As").unwrap();
        let best = Completion::search(hole, deck).unwrap();
        assert_eq!(best.strength().ranking(), Ranking::FourOAK(Rank::Ace));
        assert!(best.triple().contains(&Card::try_from("Ah").unwrap()));
        assert!(best.triple().contains(&Card::try_from("As").unwrap()));
        assert!(best.triple().contains(&Card::try_from("9d").unwrap()));
        assert_eq!(best.extras(), &[Rank::Nine]);
    }

    #[test]
    fn is_a_true_maximum() {
        let hole = Hole::try_from("7h 8h").unwrap();
        let deck = Hand::try_from("2h 5h 9c Tc Jd Kh Qs").unwrap();
        let best = Completion::search(hole, deck).unwrap();
        let pocket = Hand::from(hole);
        for triple in HandIterator::from((3, deck.complement())) {
            assert!(Strength::from(Hand::add(pocket, triple)) <= best.strength());
        }
        assert_eq!(best.strength().ranking(), Ranking::Flush(Rank::King));
    }

    #[test]
    fn repeated_search_agrees() {
        let hole = Hole::try_from("4c 4d").unwrap();
        let deck = Hand::try_from("4h 6s 6d 9c Js").unwrap();
        let a = Completion::search(hole, deck).unwrap();
        let b = Completion::search(hole, deck).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn extras_skip_hole_ranks() {
        let hole = Hole::try_from("4c 4d").unwrap();
        let deck = Hand::try_from("4h 6s 6d 9c Js").unwrap();
        let best = Completion::search(hole, deck).unwrap();
        assert_eq!(best.strength().ranking(), Ranking::FullHouse(Rank::Four, Rank::Six));
        assert_eq!(best.extras(), &[Rank::Six, Rank::Six]);
    }

    #[test]
    fn short_deck_has_no_completion() {
        let hole = Hole::try_from("Ac Kd").unwrap();
        assert!(Completion::search(hole, Hand::empty()).is_none());
        assert!(Completion::search(hole, Hand::try_from("2c 3c").unwrap()).is_none());
        assert!(Completion::search(hole, Hand::try_from("Ac Kd 3c 5d").unwrap()).is_none());
    }
}
