//! Values exchanged with the engine.
//!
//! - [`Action`] — Fold, check, call, or raise-to
//! - [`Legal`] — Which actions the engine accepts, with raise bounds
//! - [`Spot`] — A decision point: legal set, cards, pips, and stacks
//! - [`NewRound`] — Round start announcement
//! - [`Outcome`] — Round end report, which may contain a [`Showdown`]
pub mod action;
pub use action::*;

pub mod legal;
pub use legal::*;

pub mod outcome;
pub use outcome::*;

pub mod round;
pub use round::*;

pub mod showdown;
pub use showdown::*;

pub mod spot;
pub use spot::*;
