use super::bot::Bot;
use super::policy::Policy;
use crate::Config;
use crate::cards::*;
use crate::gameplay::*;
use crate::inference::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The inference agent.
///
/// Owns everything it learns over a match: the hypothesis ensemble
/// over hidden rank relabelings and the per-rank win statistics.
/// Showdowns narrow the first and feed the second; each decision
/// reads both through the [`Policy`].
pub struct Sleuth {
    policy: Policy,
    ensemble: Ensemble,
    statistics: Statistics,
    rng: SmallRng,
}

impl Sleuth {
    /// Samples the starting ensemble from the configured prior.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let ref prior = Permutation::prior(config.geometric)?;
        let mut rng = Self::rng(&config);
        let ensemble = Ensemble::sample(config.ensemble, prior, &mut rng);
        log::info!("{:<32}{}", "sampled hypotheses", ensemble.len());
        Ok(Self {
            policy: Policy::from(&config),
            ensemble,
            statistics: Statistics::default(),
            rng,
        })
    }

    /// Starts from a given ensemble instead of sampling one.
    pub fn with_ensemble(config: Config, ensemble: Ensemble) -> anyhow::Result<Self> {
        config.validate()?;
        if ensemble.is_empty() {
            anyhow::bail!("starting ensemble must not be empty");
        }
        Ok(Self {
            policy: Policy::from(&config),
            rng: Self::rng(&config),
            ensemble,
            statistics: Statistics::default(),
        })
    }

    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn rng(config: &Config) -> SmallRng {
        match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

impl Bot for Sleuth {
    fn new_round(&mut self, round: &NewRound) {
        log::trace!("{:<32}{}", "new round", round);
    }
    fn act(&mut self, spot: &Spot) -> Action {
        let action = self
            .policy
            .decide(spot, &self.ensemble, &self.statistics, &mut self.rng);
        log::trace!("{:<32}{:<16}{}", spot, action, spot.legal);
        action
    }
    fn round_over(&mut self, outcome: &Outcome) {
        log::trace!("{:<32}{}", "round over", outcome);
        if let Some(ref showdown) = outcome.showdown() {
            self.ensemble.filter(showdown);
            self.statistics.observe(showdown);
        }
    }
}
