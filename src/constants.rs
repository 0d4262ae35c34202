//! Constants for board geometry, search depth, and evaluation weights.
//!
//! The engine only plays on a 5x5 board, so everything here is fixed at
//! compile time. Runtime overrides (currently just the search depth) go
//! through [`crate::search::SearchConfig`].

use crate::board::Point;

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 5;

/// Number of points on the board.
pub const BOARD_POINTS: usize = N * N;

/// The fixed opening point for Black on an empty board.
pub const CENTER: Point = (N / 2, N / 2);

/// The four corner points, in row-major order.
pub const CORNERS: [Point; 4] = [(0, 0), (0, N - 1), (N - 1, 0), (N - 1, N - 1)];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const MAX_DEPTH: u32 = 4;

/// Number of consecutive passes that ends a search line.
pub const PASS_LIMIT: u32 = 2;

// =============================================================================
// Evaluation Parameters
// =============================================================================

/// Compensation added to White's stone count.
pub const KOMI: f64 = 2.5;

/// The liberty balance is clamped to `[-LIBERTY_CLAMP, LIBERTY_CLAMP]`.
pub const LIBERTY_CLAMP: i32 = 4;

/// Weight of the stone balance when the agent plays Black.
pub const BLACK_STONE_WEIGHT: f64 = 5.0;

/// Weight of the stone balance when the agent plays White.
pub const WHITE_STONE_WEIGHT: f64 = 1.0;

/// Weight of the eye-shape difference (subtracted).
pub const EYE_WEIGHT: f64 = 4.0;

/// Weight of the corner occupancy difference (subtracted).
pub const CORNER_WEIGHT: f64 = 1.0;
