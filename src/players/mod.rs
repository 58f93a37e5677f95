//! Players that sit at the engine's table.
//!
//! - [`Bot`] — The engine's three callbacks as a trait
//! - [`Sleuth`] — Infers the hidden rank relabeling and bets on it
//! - [`Policy`] — Sleuth's two-regime betting rule
//! - [`Fish`] — Uniformly random legal actions
pub mod bot;
pub use bot::*;

pub mod fish;
pub use fish::*;

pub mod policy;
pub use policy::*;

pub mod sleuth;
pub use sleuth::*;
