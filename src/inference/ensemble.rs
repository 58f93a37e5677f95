use crate::cards::*;
use crate::gameplay::Showdown;
use rand::Rng;
use rand_distr::Geometric;

/// The live set of rank relabelings not yet contradicted by a showdown.
///
/// A plain arena of `Copy` hypotheses. Order carries no meaning and
/// duplicates are allowed. Filtering never leaves it empty: if every
/// hypothesis is contradicted, the previous set is kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ensemble(Vec<Permutation>);

impl From<Vec<Permutation>> for Ensemble {
    fn from(hypotheses: Vec<Permutation>) -> Self {
        debug_assert!(!hypotheses.is_empty());
        debug_assert!(hypotheses.iter().all(Permutation::is_bijection));
        Self(hypotheses)
    }
}

impl Ensemble {
    /// n independent draws from the near-identity prior
    pub fn sample(n: usize, prior: &Geometric, rng: &mut impl Rng) -> Self {
        Self::from(
            (0..n)
                .map(|_| Permutation::sample(prior, rng))
                .collect::<Vec<Permutation>>(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, permutation: &Permutation) -> bool {
        self.0.contains(permutation)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Permutation> {
        self.0.iter()
    }

    /// Drops every hypothesis that cannot explain the showdown.
    /// Returns how many were dropped.
    pub fn filter(&mut self, showdown: &Showdown) -> usize {
        let before = self.len();
        let survivors = self
            .0
            .iter()
            .filter(|p| showdown.consistent(p))
            .copied()
            .collect::<Vec<Permutation>>();
        if survivors.is_empty() {
            log::warn!("{:<32}{} hypotheses kept", "showdown contradicts all", before);
            0
        } else {
            self.0 = survivors;
            log::debug!("{:<32}{:>6} -> {:<6}", "ensemble filtered", before, self.len());
            before - self.len()
        }
    }

    /// Average packed score of the cards under every hypothesis.
    pub fn mean_score(&self, cards: Hand) -> f64 {
        let total = self
            .0
            .iter()
            .map(|p| p.image(&cards))
            .map(Strength::from)
            .map(|s| s.score() as u64)
            .sum::<u64>();
        total as f64 / self.len() as f64
    }
}

impl std::fmt::Display for Ensemble {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for permutation in self.0.iter() {
            writeln!(f, "{}", permutation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chips;
    use crate::gameplay::Verdict;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn showdown(hero: &str, villain: &str, board: &str, delta: Chips) -> Showdown {
        Showdown::from((
            Hole::try_from(hero).unwrap(),
            Hole::try_from(villain).unwrap(),
            Board::try_from(board).unwrap(),
            delta,
        ))
    }

    #[test]
    fn swap_is_discarded_by_deuces_win() {
        let identity = Permutation::identity();
        let swap = Permutation::swap(Rank::Two, Rank::Three);
        let mut ensemble = Ensemble::from(vec![identity, swap]);
        let dropped = ensemble.filter(&showdown("2c 2d", "2h 7c", "4h 5s 6d Kc 9h", 8));
        assert_eq!(dropped, 1);
        assert_eq!(ensemble.len(), 1);
        assert!(ensemble.contains(&identity));
        assert!(!ensemble.contains(&swap));
    }

    #[test]
    fn contradiction_keeps_previous() {
        let identity = Permutation::identity();
        let mut ensemble = Ensemble::from(vec![identity, identity]);
        let before = ensemble.clone();
        let dropped = ensemble.filter(&showdown("Ac Ad", "Kc Kd", "2h 5s 9d Jc 3h", -10));
        assert_eq!(dropped, 0);
        assert_eq!(ensemble, before);
    }

    #[test]
    fn filtering_never_grows() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let ref prior = Permutation::prior(0.25).unwrap();
        let mut ensemble = Ensemble::sample(200, prior, rng);
        let secret = Permutation::sample(prior, rng);
        for _ in 0..50 {
            let mut deck = Deck::new();
            let hero = deck.hole(rng);
            let villain = deck.hole(rng);
            let board = Board::from(deck.deal(5, rng));
            let truth = Showdown::from((hero, villain, board, 1));
            let delta = match truth.predict(&secret) {
                Verdict::Won => 10,
                Verdict::Lost => -10,
                Verdict::Split => 0,
            };
            let before = ensemble.len();
            ensemble.filter(&Showdown::from((hero, villain, board, delta)));
            assert!(ensemble.len() <= before);
            assert!(!ensemble.is_empty());
        }
    }

    #[test]
    fn mean_score_of_identical_hypotheses() {
        let ensemble = Ensemble::from(vec![Permutation::identity(); 3]);
        let cards = Hand::try_from("2c 2d Qh Ts 8c").unwrap();
        assert_eq!(ensemble.mean_score(cards), crate::TIER_LOW_PAIR as f64);
    }

    #[test]
    fn mean_score_averages() {
        let ensemble = Ensemble::from(vec![
            Permutation::identity(),
            Permutation::swap(Rank::Two, Rank::Ace),
        ]);
        let cards = Hand::try_from("2c 2d Qh Ts 8c").unwrap();
        let aces = Strength::from(Hand::try_from("Ac Ad Qh Ts 8c").unwrap()).score();
        let expected = (crate::TIER_LOW_PAIR as f64 + aces as f64) / 2.;
        assert_eq!(ensemble.mean_score(cards), expected);
    }
}
