//! Heads-up poker agent that infers a hidden rank permutation from showdowns.
//!
//! The engine this agent plays against relabels card ranks with a secret
//! permutation before comparing hands. The agent keeps an ensemble of
//! candidate permutations, discards the ones contradicted by each showdown,
//! tracks empirical per-rank win-rates, and blends both into its betting.
//!
//! ## Modules
//!
//! - [`cards`] — Card primitives, hand evaluation, rank permutations
//! - [`gameplay`] — Engine-facing values: actions, legal sets, spots, outcomes
//! - [`inference`] — Hypothesis ensemble, rank statistics, best-completion search
//! - [`players`] — The [`players::Bot`] trait, the inference agent, and a random opponent
//! - [`arena`] — Self-play table with a hidden permutation, for measuring inference
pub mod arena;
pub mod cards;
pub mod gameplay;
pub mod inference;
pub mod players;

mod config;
pub use config::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, pips and bet amounts in chips.
pub type Chips = i32;
/// Win-rates and sampling biases.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Chips each player starts every round with.
pub const STACK: Chips = 200;
/// Big blind amount.
pub const B_BLIND: Chips = 2;
/// Small blind amount.
pub const S_BLIND: Chips = 1;
/// Rounds in a full match.
pub const N_ROUNDS: usize = 1000;

// ============================================================================
// PERMUTATION INFERENCE
// Candidate rank relabelings, narrowed by showdown evidence.
// ============================================================================
/// Hypotheses drawn at startup. Trades inference fidelity against per-round cost.
pub const ENSEMBLE_SIZE: usize = 1000;
/// Success probability of the geometric offsets in the permutation prior.
pub const GEOMETRIC_P: f64 = 0.25;
/// At or below this many hypotheses the ensemble is trusted for hand strength.
pub const CONVERGED_ENSEMBLE: usize = 5;

// ============================================================================
// RANK STATISTICS
// Pseudocounts so every rank starts at a 50% win-rate.
// ============================================================================
/// Seeded win count per rank.
pub const PRIOR_WINS: u32 = 1;
/// Seeded showdown count per rank.
pub const PRIOR_SHOWDOWNS: u32 = 2;

// ============================================================================
// BETTING
// ============================================================================
/// Fraction of the pot-after-call added on top of the call when raising.
pub const RAISE_POT_FRACTION: f32 = 0.77;
/// Win-rate both hole ranks must exceed to raise without board support.
pub const WINRATE_RAISE: Probability = 0.5;

// ============================================================================
// STRENGTH TIERS
// Packed scores from `Strength::score`; calibration constants.
// ============================================================================
/// Ace-high with queen, ten, eight, four.
pub const TIER_HIGH_CARD: u32 = 829538;
/// Pair of deuces with queen, ten, eight. Folding threshold.
pub const TIER_LOW_PAIR: u32 = 16820320;
/// Aces and deuces with a ten. Raising threshold.
pub const TIER_HIGH_PAIR: u32 = 34342912;
/// Eight-high straight flush.
pub const TIER_STRAIGHT_FLUSH: u32 = 134610944;
/// Ace-high straight flush.
pub const TIER_ROYAL_FLUSH: u32 = 135004160;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
