use crate::gameplay::*;

/// Trait for entities that play against the engine.
///
/// Mirrors the engine's three callbacks. Every hook takes `&mut self`,
/// so a bot owns whatever it learns and nothing is shared.
pub trait Bot {
    /// Called at the start of every round with this player's hole cards.
    /// Default implementation ignores it.
    fn new_round(&mut self, _: &NewRound) {}
    /// Make a decision. The returned action must be in `spot.legal`.
    fn act(&mut self, spot: &Spot) -> Action;
    /// Called once the round is settled, with the payoff and any
    /// cards the opponent was made to show.
    fn round_over(&mut self, outcome: &Outcome);
}
