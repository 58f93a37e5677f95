use crate::Chips;
use crate::Config;
use crate::cards::*;
use crate::gameplay::*;
use crate::inference::*;
use rand::Rng;

/// Which signal drives aggression, chosen by ensemble size alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Few hypotheses left: trust them to score the hand on the river.
    Converged,
    /// Many hypotheses left: lean on board agreement and rank win-rates.
    Exploratory,
}

/// Named bands of the averaged packed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Trash,
    HighCard,
    LowPair,
    HighPair,
    StraightFlush,
    RoyalFlush,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tier::Trash => write!(f, "trash"),
            Tier::HighCard => write!(f, "high card"),
            Tier::LowPair => write!(f, "low pair"),
            Tier::HighPair => write!(f, "high pair"),
            Tier::StraightFlush => write!(f, "straight flush"),
            Tier::RoyalFlush => write!(f, "royal flush"),
        }
    }
}

/// Two-regime betting rule.
///
/// Stateless apart from its calibration; everything it learns from
/// is passed in per decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    converged: usize,
    fraction: f32,
    low_pair: u32,
    high_pair: u32,
    stack: Chips,
}

impl From<&Config> for Policy {
    fn from(config: &Config) -> Self {
        Self {
            converged: config.converged,
            fraction: config.fraction,
            low_pair: config.low_pair,
            high_pair: config.high_pair,
            stack: config.stack,
        }
    }
}

impl Policy {
    pub fn regime(&self, ensemble: &Ensemble) -> Regime {
        if ensemble.len() <= self.converged {
            Regime::Converged
        } else {
            Regime::Exploratory
        }
    }

    pub fn tier(&self, score: f64) -> Tier {
        match score {
            s if s >= crate::TIER_ROYAL_FLUSH as f64 => Tier::RoyalFlush,
            s if s >= crate::TIER_STRAIGHT_FLUSH as f64 => Tier::StraightFlush,
            s if s >= self.high_pair as f64 => Tier::HighPair,
            s if s >= self.low_pair as f64 => Tier::LowPair,
            s if s >= crate::TIER_HIGH_CARD as f64 => Tier::HighCard,
            _ => Tier::Trash,
        }
    }

    /// Call, then add a fixed fraction of the pot as it would stand
    /// after calling. Clamped into the legal raise-to bounds.
    pub fn raise_to(&self, spot: &Spot) -> Option<Chips> {
        spot.legal.raise_bounds().map(|(min, max)| {
            let pot = spot.pot_after_continue(self.stack);
            let bump = (self.fraction * pot as f32) as Chips;
            (spot.hero_pip + spot.continue_cost() + bump).min(max).max(min)
        })
    }

    /// Picks an action that is always in `spot.legal`.
    ///
    /// Aggression is only considered while raising is legal. Anything
    /// not chosen, or chosen but illegal, becomes check, call or fold
    /// in that order of preference.
    pub fn decide(
        &self,
        spot: &Spot,
        ensemble: &Ensemble,
        statistics: &Statistics,
        rng: &mut impl Rng,
    ) -> Action {
        let choice = self.raise_to(spot).and_then(|raise| match self.regime(ensemble) {
            Regime::Converged => self.converged(spot, ensemble, raise),
            Regime::Exploratory => self.exploratory(spot, statistics, raise, rng),
        });
        spot.legal.filter(choice.unwrap_or_else(|| spot.legal.passive()))
    }

    fn converged(&self, spot: &Spot, ensemble: &Ensemble, raise: Chips) -> Option<Action> {
        if spot.street != Street::Rive {
            return None;
        }
        let score = ensemble.mean_score(spot.cards());
        let tier = self.tier(score);
        log::debug!("{:<32}{:<16}{:.0}", "converged strength", tier, score);
        match tier {
            Tier::Trash | Tier::HighCard => Some(Action::Fold),
            Tier::LowPair => None,
            _ => Some(Action::Raise(raise)),
        }
    }

    fn exploratory(
        &self,
        spot: &Spot,
        statistics: &Statistics,
        raise: Chips,
        rng: &mut impl Rng,
    ) -> Option<Action> {
        let ranks = spot.hole.ranks();
        let agree = ranks.map(|r| spot.board.matches(r));
        let rates = ranks.map(|r| statistics.winrate(r));
        let aggro = Some(Action::Raise(raise));
        if agree[0] + agree[1] >= 2 {
            return aggro;
        }
        if agree[0] == 1 && rng.random::<f32>() < rates[0] {
            return aggro;
        }
        if agree[1] == 1 && rng.random::<f32>() < rates[1] {
            return aggro;
        }
        if spot.hole.is_pair() && rng.random::<f32>() < rates[0] {
            return aggro;
        }
        if rates[0] > crate::WINRATE_RAISE && rates[1] > crate::WINRATE_RAISE {
            return aggro;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn spot(legal: Legal, street: Street, hole: &str, board: &str) -> Spot {
        Spot {
            legal,
            street,
            hole: Hole::try_from(hole).unwrap(),
            board: Board::try_from(board).unwrap(),
            hero_pip: 0,
            villain_pip: 0,
            hero_stack: 180,
            villain_stack: 180,
        }
    }

    fn checking() -> Legal {
        Legal::empty().with(Action::Check).bounded(2, 180)
    }

    fn facing() -> Legal {
        Legal::empty().with(Action::Fold).with(Action::Call).bounded(20, 180)
    }

    fn converged() -> Ensemble {
        Ensemble::from(vec![Permutation::identity(); 3])
    }

    fn exploratory() -> Ensemble {
        Ensemble::from(vec![Permutation::identity(); 50])
    }

    #[test]
    fn regime_by_size() {
        let policy = Policy::from(&Config::default());
        assert_eq!(policy.regime(&converged()), Regime::Converged);
        assert_eq!(policy.regime(&exploratory()), Regime::Exploratory);
        let five = Ensemble::from(vec![Permutation::identity(); 5]);
        assert_eq!(policy.regime(&five), Regime::Converged);
    }

    #[test]
    fn tiers_follow_thresholds() {
        let policy = Policy::from(&Config::default());
        assert_eq!(policy.tier(0.), Tier::Trash);
        assert_eq!(policy.tier(crate::TIER_HIGH_CARD as f64), Tier::HighCard);
        assert_eq!(policy.tier(crate::TIER_LOW_PAIR as f64 - 1.), Tier::HighCard);
        assert_eq!(policy.tier(crate::TIER_LOW_PAIR as f64), Tier::LowPair);
        assert_eq!(policy.tier(crate::TIER_HIGH_PAIR as f64), Tier::HighPair);
        assert_eq!(policy.tier(crate::TIER_ROYAL_FLUSH as f64), Tier::RoyalFlush);
    }

    #[test]
    fn raise_size_within_bounds() {
        let policy = Policy::from(&Config::default());
        let mut s = spot(facing(), Street::Flop, "Ac Kd", "2c 7h 9s");
        s.hero_pip = 0;
        s.villain_pip = 10;
        s.hero_stack = 190;
        s.villain_stack = 180;
        // 0 + 10 + floor(0.77 * 40)
        assert_eq!(policy.raise_to(&s), Some(40));
        s.legal = Legal::empty().with(Action::Fold).with(Action::Call).bounded(60, 180);
        assert_eq!(policy.raise_to(&s), Some(60));
        s.legal = Legal::empty().with(Action::Fold).with(Action::Call).bounded(20, 30);
        assert_eq!(policy.raise_to(&s), Some(30));
        s.legal = Legal::empty().with(Action::Fold).with(Action::Call);
        assert_eq!(policy.raise_to(&s), None);
    }

    #[test]
    fn check_or_call_prefers_check() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(0);
        let legal = Legal::empty().with(Action::Check).with(Action::Call);
        let stats = Statistics::default();
        for ensemble in [converged(), exploratory()] {
            for hole in ["Ac Ad", "7c 2d", "Ah Kh"] {
                let s = spot(legal, Street::Rive, hole, "As Kd 7h 2s 3c");
                assert_eq!(policy.decide(&s, &ensemble, &stats, rng), Action::Check);
            }
        }
    }

    #[test]
    fn converged_folds_weak_river() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(1);
        let stats = Statistics::default();
        let s = spot(facing(), Street::Rive, "7c 2d", "As Kd Jh 9s 4c");
        assert_eq!(policy.decide(&s, &converged(), &stats, rng), Action::Fold);
    }

    #[test]
    fn converged_raises_strong_river() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(2);
        let stats = Statistics::default();
        let s = spot(checking(), Street::Rive, "Ac Ad", "As Kd Jh 9s 4c");
        let action = policy.decide(&s, &converged(), &stats, rng);
        assert!(action.is_aggro());
        assert!(s.legal.contains(&action));
    }

    #[test]
    fn converged_checks_middling_river() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(3);
        let stats = Statistics::default();
        let s = spot(checking(), Street::Rive, "7c 7d", "As Kd Jh 9s 4c");
        assert_eq!(policy.decide(&s, &converged(), &stats, rng), Action::Check);
    }

    #[test]
    fn converged_waits_for_river() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(4);
        let stats = Statistics::default();
        let s = spot(facing(), Street::Turn, "7c 2d", "As Kd Jh 9s");
        assert_eq!(policy.decide(&s, &converged(), &stats, rng), Action::Call);
    }

    #[test]
    fn folding_needs_fold_to_be_legal() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(5);
        let stats = Statistics::default();
        let s = spot(checking(), Street::Rive, "7c 2d", "As Kd Jh 9s 4c");
        assert_eq!(policy.decide(&s, &converged(), &stats, rng), Action::Check);
    }

    #[test]
    fn exploratory_raises_two_agreements() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(6);
        let stats = Statistics::default();
        let s = spot(facing(), Street::Flop, "9c 4d", "9s 4h Kd");
        assert!(policy.decide(&s, &exploratory(), &stats, rng).is_aggro());
    }

    #[test]
    fn exploratory_passive_without_signal() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(7);
        let stats = Statistics::default();
        let s = spot(facing(), Street::Flop, "9c 4d", "As 7h Kd");
        assert_eq!(policy.decide(&s, &exploratory(), &stats, rng), Action::Call);
    }

    /// twenty showdowns where ace-king beats deuce-trey
    fn trained() -> Statistics {
        let mut stats = Statistics::default();
        let showdown = Showdown::from((
            Hole::try_from("Ah Kd").unwrap(),
            Hole::try_from("2c 3d").unwrap(),
            Board::try_from("Ac Kh 7s 8d 9c").unwrap(),
            10,
        ));
        for _ in 0..20 {
            stats.observe(&showdown);
        }
        stats
    }

    fn raises(policy: &Policy, s: &Spot, stats: &Statistics, rng: &mut SmallRng, n: usize) -> usize {
        (0..n)
            .map(|_| policy.decide(s, &exploratory(), stats, rng))
            .filter(Action::is_aggro)
            .count()
    }

    #[test]
    fn exploratory_raises_winning_ranks() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(9);
        let stats = trained();
        assert!(stats.winrate(Rank::Ace) > 0.5);
        assert!(stats.winrate(Rank::King) > 0.5);
        let s = spot(facing(), Street::Flop, "Ah Ks", "7c 8d Jh");
        assert!(policy.decide(&s, &exploratory(), &stats, rng).is_aggro());
        let s = spot(facing(), Street::Flop, "2h 3s", "7c 8d Jh");
        assert_eq!(policy.decide(&s, &exploratory(), &stats, rng), Action::Call);
    }

    #[test]
    fn exploratory_single_agreement_raises_at_winrate() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(10);
        let stats = trained();
        let rate = stats.winrate(Rank::Two);
        assert!(rate < 0.05);
        let s = spot(facing(), Street::Flop, "2h 9s", "2d Jc Qh");
        let n = raises(&policy, &s, &stats, rng, 2000);
        assert!(n > 40 && n < 160, "{} raises at rate {}", n, rate);
    }

    #[test]
    fn exploratory_pocket_pair_raises_at_winrate() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(11);
        let stats = Statistics::default();
        let s = spot(facing(), Street::Flop, "5c 5d", "Jc Qh 2s");
        let n = raises(&policy, &s, &stats, rng, 2000);
        assert!(n > 900 && n < 1100, "{} raises at rate 0.5", n);
    }

    #[test]
    fn never_illegal() {
        let policy = Policy::from(&Config::default());
        let ref mut rng = SmallRng::seed_from_u64(8);
        let stats = Statistics::default();
        let mut deck = Deck::new();
        let hole = deck.hole(rng);
        let board = Board::from(deck.deal(5, rng));
        let legals = [
            checking(),
            facing(),
            Legal::empty().with(Action::Check),
            Legal::empty().with(Action::Fold).with(Action::Call),
            Legal::empty().with(Action::Check).with(Action::Call),
        ];
        for legal in legals {
            for ensemble in [converged(), exploratory()] {
                let s = Spot {
                    legal,
                    street: Street::Rive,
                    hole,
                    board,
                    hero_pip: 0,
                    villain_pip: 0,
                    hero_stack: 180,
                    villain_stack: 180,
                };
                for _ in 0..20 {
                    let action = policy.decide(&s, &ensemble, &stats, rng);
                    assert!(legal.contains(&action), "{} not in {}", action, legal);
                }
            }
        }
    }
}
