//! Static evaluation of a board from the agent's point of view.
//!
//! The score combines five terms:
//! - stone balance (White gets [`KOMI`] added to its count)
//! - liberty balance, clamped to `[-LIBERTY_CLAMP, LIBERTY_CLAMP]`
//! - an Euler-number proxy for eye shape, from 2x2 window counts
//! - corner occupancy
//! - captures made by the agent minus captures made by the opponent
//!
//! The weights differ depending on which color the agent plays.

use std::collections::BTreeSet;

use crate::board::{Board, Color, Point, neighbors};
use crate::constants::{
    BLACK_STONE_WEIGHT, BOARD_POINTS, CORNERS, CORNER_WEIGHT, EYE_WEIGHT, KOMI, LIBERTY_CLAMP, N,
    WHITE_STONE_WEIGHT,
};

/// Score `board` for the agent playing `side`.
///
/// `max_captures` and `min_captures` are the stones captured so far along the
/// search line by the agent and by the opponent. Their difference always
/// counts in the agent's favor, whichever color it plays.
///
/// # Panics
/// If the board holds more stones than it has points.
pub fn evaluate(board: &Board, side: Color, max_captures: usize, min_captures: usize) -> f64 {
    let black_stones = board.count(Color::Black);
    let white_stones = board.count(Color::White);
    assert!(
        black_stones + white_stones <= BOARD_POINTS,
        "board holds {} stones",
        black_stones + white_stones
    );

    let black = black_stones as f64;
    let white = white_stones as f64 + KOMI;
    let liberty = liberty_balance(board, side) as f64;
    let black_eye = eye_number(board, Color::Black);
    let white_eye = eye_number(board, Color::White);
    let black_corners = corner_count(board, Color::Black) as f64;
    let white_corners = corner_count(board, Color::White) as f64;
    let captures = max_captures as f64 - min_captures as f64;

    match side {
        Color::Black => {
            BLACK_STONE_WEIGHT * (black - white) + liberty
                - EYE_WEIGHT * (black_eye - white_eye)
                - CORNER_WEIGHT * (black_corners - white_corners)
                + captures
        }
        Color::White => {
            WHITE_STONE_WEIGHT * (white - black) + liberty
                - EYE_WEIGHT * (white_eye - black_eye)
                - CORNER_WEIGHT * (white_corners - black_corners)
                + captures
        }
    }
}

/// Number of distinct points orthogonally adjacent to any `color` stone.
///
/// Every stone contributes its own neighbors; groups are not formed, and the
/// neighbor's content is not inspected.
pub fn liberty_tally(board: &Board, color: Color) -> usize {
    board
        .stones(color)
        .flat_map(neighbors)
        .collect::<BTreeSet<Point>>()
        .len()
}

/// `side`'s liberty tally minus the opponent's, clamped.
pub fn liberty_balance(board: &Board, side: Color) -> i32 {
    let own = liberty_tally(board, side) as i32;
    let other = liberty_tally(board, side.opponent()) as i32;
    (own - other).clamp(-LIBERTY_CLAMP, LIBERTY_CLAMP)
}

/// Euler-number estimate for the stones of `color`.
///
/// Opponent stones are treated as empty and the board is padded with one
/// empty ring. Every 2x2 window of the padded grid is classified:
/// `q1` has one stone, `q3` has three, `qd` has exactly a diagonal pair.
/// The result is `(q1 - q3 + 2 * qd) / 4`.
pub fn eye_number(board: &Board, color: Color) -> f64 {
    const P: usize = N + 2;
    let mut padded = [[false; P]; P];
    for pt in board.stones(color) {
        padded[pt.0 + 1][pt.1 + 1] = true;
    }

    let (mut q1, mut q3, mut qd) = (0i32, 0i32, 0i32);
    for row in 0..P - 1 {
        for col in 0..P - 1 {
            let tl = padded[row][col];
            let tr = padded[row][col + 1];
            let bl = padded[row + 1][col];
            let br = padded[row + 1][col + 1];
            match [tl, tr, bl, br].iter().filter(|&&s| s).count() {
                1 => q1 += 1,
                3 => q3 += 1,
                2 if tl == br => qd += 1,
                _ => {}
            }
        }
    }
    f64::from(q1 - q3 + 2 * qd) / 4.0
}

/// Number of the four corner points holding `color`.
pub fn corner_count(board: &Board, color: Color) -> usize {
    CORNERS
        .iter()
        .filter(|&&pt| board.get(pt) == Some(color))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("valid test board")
    }

    #[test]
    fn test_eye_number_single_stone() {
        let center = board("00000\n00000\n00100\n00000\n00000");
        assert_eq!(eye_number(&center, Color::Black), 1.0);

        let corner = board("10000\n00000\n00000\n00000\n00000");
        assert_eq!(eye_number(&corner, Color::Black), 1.0);
        assert_eq!(eye_number(&corner, Color::White), 0.0);
    }

    #[test]
    fn test_eye_number_ring_has_hole() {
        let solid = board("00000\n01100\n01100\n00000\n00000");
        assert_eq!(eye_number(&solid, Color::Black), 1.0);

        let ring = board("00000\n01110\n01010\n01110\n00000");
        assert_eq!(eye_number(&ring, Color::Black), 0.0);
    }

    #[test]
    fn test_eye_number_diagonal_pair() {
        let b = board("00000\n01000\n00100\n00000\n00000");
        assert_eq!(eye_number(&b, Color::Black), 2.0);
    }

    #[test]
    fn test_eye_number_masks_opponent() {
        let with_white = board("22222\n21112\n21012\n21112\n22222");
        let alone = board("00000\n01110\n01010\n01110\n00000");
        assert_eq!(
            eye_number(&with_white, Color::Black),
            eye_number(&alone, Color::Black)
        );
    }

    #[test]
    fn test_liberty_tally_counts_neighbor_cells() {
        let b = board("00000\n00000\n00110\n00000\n00000");
        assert_eq!(liberty_tally(&b, Color::Black), 8);

        let corner = board("10000\n00000\n00000\n00000\n00000");
        assert_eq!(liberty_tally(&corner, Color::Black), 2);
    }

    #[test]
    fn test_liberty_balance_clamped() {
        let b = board("00000\n01010\n00000\n01010\n00000");
        assert_eq!(liberty_tally(&b, Color::Black), 12);
        assert_eq!(liberty_balance(&b, Color::Black), 4);
        assert_eq!(liberty_balance(&b, Color::White), -4);
    }

    #[test]
    fn test_corner_count() {
        let b = board("10002\n00000\n00000\n00000\n10001");
        assert_eq!(corner_count(&b, Color::Black), 3);
        assert_eq!(corner_count(&b, Color::White), 1);
    }

    #[test]
    fn test_evaluate_empty_board() {
        let b = Board::new();
        assert_eq!(evaluate(&b, Color::Black, 0, 0), -12.5);
        assert_eq!(evaluate(&b, Color::White, 0, 0), 2.5);
    }

    #[test]
    fn test_evaluate_capture_term_favors_agent() {
        let b = board("00000\n00000\n00100\n00000\n00000");
        // 5 * (1 - 2.5) + 4 - 4 * 1
        assert_eq!(evaluate(&b, Color::Black, 0, 0), -7.5);
        assert_eq!(evaluate(&b, Color::Black, 2, 1), -6.5);
        // (2.5 - 1) - 4 + 4 * 1
        assert_eq!(evaluate(&b, Color::White, 0, 0), 1.5);
        assert_eq!(evaluate(&b, Color::White, 2, 1), 2.5);
    }
}
