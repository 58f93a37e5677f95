//! Simulate Binary
//!
//! Plays the inference agent against a random opponent at a table whose
//! showdowns are decided under a hidden rank permutation.
//!
//! Options: --rounds, --seed, --config, --ensemble, --secret

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rankshift::arena::Match;
use rankshift::cards::Permutation;
use rankshift::players::Fish;
use rankshift::players::Sleuth;
use rankshift::*;

#[derive(Parser, Debug)]
#[command(about = "Self-play against a hidden rank permutation")]
struct Args {
    /// rounds to play
    #[arg(short, long, default_value_t = N_ROUNDS)]
    rounds: usize,
    /// seed for the agent, the opponent, the deck and the secret
    #[arg(short, long)]
    seed: Option<u64>,
    /// JSON file overriding agent parameters
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// number of hypotheses to start from
    #[arg(short, long)]
    ensemble: Option<usize>,
    /// fixed secret as thirteen rank characters, lowest first, e.g. 32456789TJQKA
    #[arg(long)]
    secret: Option<String>,
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let mut config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(ensemble) = args.ensemble {
        config.ensemble = ensemble;
    }
    if let Some(seed) = args.seed {
        config = config.seeded(seed);
    }
    let secret = match args.secret {
        Some(ref secret) => Permutation::try_from(secret.as_str()).map_err(anyhow::Error::msg)?,
        None => {
            let ref prior = Permutation::prior(config.geometric)?;
            let ref mut rng = match args.seed {
                Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
                None => SmallRng::from_os_rng(),
            };
            Permutation::sample(prior, rng)
        }
    };
    log::info!("{:<32}{}", "secret permutation", secret);
    let stack = config.stack;
    let hero = Sleuth::new(config)?;
    let villain = Fish::new(args.seed.map(|s| s.wrapping_add(2)));
    let mut arena = Match::new(hero, villain, secret, stack, args.seed.map(|s| s.wrapping_add(3)));
    let summary = arena.play(args.rounds);
    log::info!("match summary\n{}", summary);
    Ok(())
}
