//! Compute module - Trajectory simulation, scoring, evaluation and search.

mod engine;
mod scorer;
mod simulator;

pub mod search;

pub use engine::*;
pub use scorer::*;
pub use simulator::*;
