use crate::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Tunable parameters of the inference agent.
///
/// Defaults come from the crate-level constants. A JSON file may override
/// any subset of fields; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hypotheses sampled at startup.
    pub ensemble: usize,
    /// Geometric success probability for the permutation prior.
    pub geometric: f64,
    /// Ensemble size at or below which the converged regime applies.
    pub converged: usize,
    /// Pot fraction used to size raises.
    pub fraction: f32,
    /// Averaged score below which the converged regime folds.
    pub low_pair: u32,
    /// Averaged score at or above which the converged regime raises.
    pub high_pair: u32,
    /// Chips each player starts a round with.
    pub stack: Chips,
    /// Seed for the agent's RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ensemble: ENSEMBLE_SIZE,
            geometric: GEOMETRIC_P,
            converged: CONVERGED_ENSEMBLE,
            fraction: RAISE_POT_FRACTION,
            low_pair: TIER_LOW_PAIR,
            high_pair: TIER_HIGH_PAIR,
            stack: STACK,
            seed: None,
        }
    }
}

impl Config {
    /// Reads a JSON config file and validates it.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects parameter combinations the agent cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ensemble == 0 {
            anyhow::bail!("ensemble size must be positive");
        }
        if !(self.geometric > 0. && self.geometric <= 1.) {
            anyhow::bail!("geometric p must lie in (0, 1], got {}", self.geometric);
        }
        if !(self.fraction >= 0.) {
            anyhow::bail!("raise fraction must be non-negative, got {}", self.fraction);
        }
        if self.low_pair > self.high_pair {
            anyhow::bail!(
                "fold threshold {} exceeds raise threshold {}",
                self.low_pair,
                self.high_pair
            );
        }
        if self.stack <= 0 {
            anyhow::bail!("starting stack must be positive, got {}", self.stack);
        }
        Ok(())
    }

    /// Same parameters with a fixed RNG seed.
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_ensemble() {
        let config = Config {
            ensemble: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_geometric() {
        for geometric in [0., -0.5, 1.5, f64::NAN] {
            let config = Config {
                geometric,
                ..Config::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn rejects_inverted_tiers() {
        let config = Config {
            low_pair: TIER_HIGH_PAIR,
            high_pair: TIER_LOW_PAIR,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = serde_json::from_str::<Config>(r#"{ "ensemble": 64, "seed": 7 }"#).unwrap();
        assert_eq!(config.ensemble, 64);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.geometric, GEOMETRIC_P);
        assert_eq!(config.high_pair, TIER_HIGH_PAIR);
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("rankshift-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "converged": 9 }"#).unwrap();
        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.converged, 9);
        assert_eq!(config.ensemble, ENSEMBLE_SIZE);
    }

    #[test]
    fn load_reports_missing_file() {
        assert!(Config::load("/nonexistent/rankshift.json").is_err());
    }
}
