use super::bot::Bot;
use crate::gameplay::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Example CPU player that chooses randomly from legal actions.
/// Raises go to a uniform amount within the legal bounds.
pub struct Fish(SmallRng);

impl Fish {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(SmallRng::seed_from_u64(seed)),
            None => Self(SmallRng::from_os_rng()),
        }
    }
}

impl Bot for Fish {
    fn act(&mut self, spot: &Spot) -> Action {
        let ref mut rng = self.0;
        let mut options = [Action::Fold, Action::Check, Action::Call]
            .into_iter()
            .filter(|a| spot.legal.contains(a))
            .collect::<Vec<Action>>();
        if let Some((min, max)) = spot.legal.raise_bounds() {
            options.push(Action::Raise(rng.random_range(min..=max)));
        }
        options
            .choose(rng)
            .copied()
            .unwrap_or_else(|| spot.legal.passive())
    }
    fn round_over(&mut self, _: &Outcome) {}
}
