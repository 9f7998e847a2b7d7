//! Robot panels - Time-bounded local search over panel grids.
//!
//! Hundreds of robots run fixed instruction programs from the center of a
//! square board. Panels placed on the board change how far an advance goes
//! and how turns rotate. The search looks for a panel layout that spreads
//! the robots' final positions so that as many cells as possible hold
//! exactly one robot.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Board, panel, program and configuration types
//! - `compute`: Trajectory simulation, scoring, incremental evaluation and search
//!
//! # Example
//!
//! ```rust,no_run
//! use robot_panels::{
//!     compute::{Engine, search::SearchDriver},
//!     schema::{Board, Problem, SearchConfig},
//! };
//!
//! let input = std::io::read_to_string(std::io::stdin()).unwrap();
//! let problem = Problem::parse(&input).unwrap();
//! let config = SearchConfig::default();
//!
//! // Full evaluation of the empty board
//! let side = problem.board_side(config.border).unwrap();
//! let engine = Engine::new(Board::new(side), problem.programs.into(), config.rewards);
//!
//! // Search until the time budget is spent
//! let border = config.border;
//! let result = SearchDriver::new(config, engine).run();
//! print!("{}", result.board.render(border));
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Engine, Mutation, search::SearchDriver};
pub use schema::{Board, PanelKind, Problem, SearchConfig};
