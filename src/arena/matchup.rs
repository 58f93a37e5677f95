use super::summary::Summary;
use super::table::Table;
use crate::Chips;
use crate::cards::*;
use crate::gameplay::*;
use crate::players::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Self-play between the inference agent and any other [`Bot`].
///
/// The secret permutation stays fixed for the whole match and is only
/// consulted at showdown, so the agent learns about it exactly as it
/// would against the real engine.
pub struct Match<V: Bot> {
    hero: Sleuth,
    villain: V,
    secret: Permutation,
    stack: Chips,
    rng: SmallRng,
}

impl<V: Bot> Match<V> {
    pub fn new(hero: Sleuth, villain: V, secret: Permutation, stack: Chips, seed: Option<u64>) -> Self {
        Self {
            hero,
            villain,
            secret,
            stack,
            rng: match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            },
        }
    }

    pub fn hero(&self) -> &Sleuth {
        &self.hero
    }
    pub fn secret(&self) -> &Permutation {
        &self.secret
    }

    /// Plays `rounds` rounds, alternating blinds, and reports the result.
    pub fn play(&mut self, rounds: usize) -> Summary {
        let mut bankroll = 0;
        let mut showdowns = 0;
        for index in 1..=rounds {
            let (delta, shown) = self.round(index);
            bankroll += delta;
            showdowns += shown as usize;
            if index % 100 == 0 {
                log::info!(
                    "{:<32}{:<8}{:<16}{}",
                    "progress",
                    index,
                    bankroll,
                    self.hero.ensemble().len()
                );
            }
        }
        Summary {
            rounds,
            showdowns,
            bankroll,
            ensemble: self.hero.ensemble().len(),
            secret_survives: self.hero.ensemble().contains(&self.secret),
        }
    }

    /// One round; returns the hero's chip change and whether hands were shown.
    fn round(&mut self, index: usize) -> (Chips, bool) {
        let seat = index % 2;
        let mut table = Table::deal(self.stack, &mut self.rng);
        self.hero.new_round(&NewRound {
            index,
            hole: table.hole(seat),
            blind: seat == 1,
        });
        self.villain.new_round(&NewRound {
            index,
            hole: table.hole(1 - seat),
            blind: seat == 0,
        });
        while !table.is_over() {
            let ref spot = table.spot();
            let action = if table.actor() == seat {
                self.hero.act(spot)
            } else {
                self.villain.act(spot)
            };
            log::trace!("{:<32}{}", table, action);
            table.apply(action);
        }
        let hero = table.outcome(seat, &self.secret);
        let villain = table.outcome(1 - seat, &self.secret);
        debug_assert!(hero.delta + villain.delta == 0);
        log::debug!("{:<32}{}", "round over", hero);
        self.hero.round_over(&hero);
        self.villain.round_over(&villain);
        (hero.delta, hero.villain.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::inference::Ensemble;

    fn sleuth(ensemble: usize) -> Sleuth {
        Sleuth::new(Config {
            ensemble,
            ..Config::default().seeded(3)
        })
        .unwrap()
    }

    #[test]
    fn short_match_is_bounded() {
        let mut game = Match::new(sleuth(64), Fish::new(Some(5)), Permutation::identity(), 200, Some(9));
        let summary = game.play(40);
        assert_eq!(summary.rounds, 40);
        assert!(summary.showdowns <= 40);
        assert!(summary.bankroll.abs() <= 40 * 200);
        assert!(summary.ensemble >= 1 && summary.ensemble <= 64);
    }

    #[test]
    fn true_permutation_is_never_discarded() {
        let identity = Permutation::identity();
        let mut hypotheses = (0..31)
            .map(|_| Permutation::swap(Rank::Two, Rank::Three))
            .collect::<Vec<_>>();
        hypotheses.push(identity);
        let ensemble = Ensemble::from(hypotheses);
        let hero = Sleuth::with_ensemble(Config::default().seeded(1), ensemble).unwrap();
        let mut game = Match::new(hero, Fish::new(Some(2)), identity, 200, Some(4));
        let summary = game.play(60);
        assert!(summary.secret_survives);
        assert!(game.hero().ensemble().contains(game.secret()));
    }
}
