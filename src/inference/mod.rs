//! Inference over the hidden rank relabeling.
//!
//! - [`Ensemble`] — Candidate permutations, narrowed by each showdown
//! - [`Statistics`] — Per-rank win and showdown counts
//! - [`Completion`] — Best three-card completion of a hole pair
pub mod completion;
pub use completion::*;

pub mod ensemble;
pub use ensemble::*;

pub mod statistics;
pub use statistics::*;
