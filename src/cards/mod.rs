//! Card representation, hand evaluation, and rank relabeling.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` pair encoded in one byte
//! - [`Hand`] — An unordered set of cards as a 64-bit bitmask
//! - [`Hole`] — A player's two private cards
//! - [`Board`] — The community cards
//! - [`Deck`] — Remaining cards for random dealing
//!
//! ## Evaluation
//!
//! - [`Evaluator`] — Bitwise hand evaluator for 2 to 7 cards
//! - [`Strength`] — Evaluated ranking with kickers, packable into a `u32` score
//! - [`Ranking`] — Hand category (high card through straight flush)
//!
//! ## Relabeling
//!
//! - [`Permutation`] — A bijection over ranks with a near-identity prior
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod hole;
pub use hole::*;

pub mod kicks;
pub use kicks::*;

pub mod permutation;
pub use permutation::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod street;
pub use street::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
