//! Schema module - Board, program and configuration types for the panel search.

mod board;
mod config;
mod panel;
mod program;
mod search;

pub use board::*;
pub use config::*;
pub use panel::*;
pub use program::*;
pub use search::*;
