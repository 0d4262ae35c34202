//! go5-agent: an alpha-beta Go player for the 5x5 board.
//!
//! Given the current board, the board before the opponent's last move, and
//! the color to move, the engine returns a point to play or a pass.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, search depth and evaluation weights
//! - [`board`] - The `Copy` board value type and its text form
//! - [`rules`] - Groups, liberties, captures, suicide and single-step ko
//! - [`eval`] - Heuristic evaluation of leaf positions
//! - [`search`] - Depth-limited alpha-beta minimax
//! - [`driver`] - Referee input/output format
//!
//! ## Example
//!
//! ```
//! use go5_agent::board::{Board, Color};
//! use go5_agent::search::{Action, Searcher};
//!
//! let empty = Board::new();
//! let mut searcher = Searcher::new(Color::Black);
//! let result = searcher.best_action(&empty, &empty);
//! assert_eq!(result.action, Action::Place((2, 2)));
//! ```

pub mod board;
pub mod constants;
pub mod driver;
pub mod eval;
pub mod rules;
pub mod search;
