//! Self-play harness with a hidden rank permutation.
//!
//! [`Table`] runs one heads-up round under the engine's betting rules;
//! [`Match`] strings rounds together between [`crate::players::Sleuth`]
//! and another bot and reports a [`Summary`].
pub mod matchup;
pub use matchup::*;

pub mod summary;
pub use summary::*;

pub mod table;
pub use table::*;
