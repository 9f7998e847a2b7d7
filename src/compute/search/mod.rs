//! Local search over panel boards.
//!
//! The search repeatedly proposes a single-cell edit, evaluates it
//! incrementally against the current [`Engine`](crate::compute::Engine) and
//! accepts or rejects it:
//!
//! - **Mutation** (`mutation`): seeded proposals of one cell and a new panel
//! - **Schedule** (`schedule`): wall-clock deadline and annealing temperature
//! - **Driver** (`driver`): hill climbing or simulated annealing until the
//!   deadline expires
//!
//! # Example
//!
//! ```rust,no_run
//! use robot_panels::compute::{Engine, search::SearchDriver};
//! use robot_panels::schema::{Board, Problem, SearchConfig};
//!
//! let problem = Problem::parse("2 9 4\nSSRS\nLSSS\n").unwrap();
//! let config = SearchConfig::default();
//! let side = problem.board_side(config.border).unwrap();
//!
//! let engine = Engine::new(Board::new(side), problem.programs.into(), config.rewards);
//! let result = SearchDriver::new(config, engine).run();
//! println!("best score: {}", result.stats.best_score);
//! ```

mod driver;
mod mutation;
mod schedule;

pub use driver::SearchDriver;
pub use mutation::MutationRng;
pub use schedule::{Deadline, linear_temperature};
