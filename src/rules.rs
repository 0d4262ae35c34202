//! Go rules on a 5x5 board: groups, liberties, captures and ko.
//!
//! Every function here is pure. Hypothetical placements are made on a copy
//! of the caller's board, and groups and liberties are recomputed from
//! scratch on each call.
//!
//! Ko is only checked one ply back: a move is rejected when the board it
//! produces is identical to the board before the opponent's last move.
//! This is weaker than positional superko.

use std::collections::{BTreeSet, VecDeque};

use crate::board::{Board, Color, Point, neighbors, on_board, points};

/// Reason a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Point is outside the board
    OffBoard,
    /// Point is not empty
    Occupied,
    /// Move would leave the placed group without liberties after captures
    Suicide,
    /// Move recreates the previous board
    Ko,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OffBoard => write!(f, "illegal move: point is off the board"),
            MoveError::Occupied => write!(f, "illegal move: point not empty"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
            MoveError::Ko => write!(f, "illegal move: retakes ko"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Find the group of `color` stones connected to `seed`.
///
/// Breadth-first flood fill over orthogonal neighbors holding `color`. The
/// seed itself is always part of the result, whatever it holds, as long as
/// it is on the board. An off-board seed yields an empty set.
pub fn find_group(board: &Board, seed: Point, color: Color) -> BTreeSet<Point> {
    let mut group = BTreeSet::new();
    if !on_board(seed) {
        return group;
    }

    let mut queue = VecDeque::from([seed]);
    group.insert(seed);
    while let Some(pt) = queue.pop_front() {
        for n in neighbors(pt) {
            if board.get(n) == Some(color) && group.insert(n) {
                queue.push_back(n);
            }
        }
    }
    group
}

/// Whether a `color` stone at `pt` would belong to a group with a liberty.
///
/// The stone is placed on a copy of `board`; the caller's board is never
/// touched. Off-board points have no liberty.
pub fn has_liberty(board: &Board, pt: Point, color: Color) -> bool {
    if !on_board(pt) {
        return false;
    }
    let mut placed = *board;
    placed.set(pt, Some(color));

    find_group(&placed, pt, color)
        .into_iter()
        .any(|member| neighbors(member).any(|n| placed.is_vacant(n)))
}

/// Opponent stones (relative to `color`) that have no liberty.
///
/// Each stone is checked on its own, in row-major order. Since every member
/// of a dead group sees the same liberty-less group, whole groups come out.
pub fn captured_stones(board: &Board, color: Color) -> Vec<Point> {
    let opponent = color.opponent();
    board
        .stones(opponent)
        .filter(|&pt| !has_liberty(board, pt, opponent))
        .collect()
}

/// A copy of `board` with every listed point cleared.
pub fn remove_stones(board: &Board, stones: &[Point]) -> Board {
    let mut cleared = *board;
    for &pt in stones {
        cleared.set(pt, None);
    }
    cleared
}

/// Whether `candidate` is cell-for-cell identical to `previous`.
#[inline]
pub fn is_immediate_repeat(previous: &Board, candidate: &Board) -> bool {
    previous == candidate
}

/// Place a stone and resolve captures.
///
/// Returns the resulting board and the number of opponent stones removed.
/// Legality is not checked; see [`check_move`].
pub fn play(board: &Board, pt: Point, color: Color) -> (Board, usize) {
    let mut placed = *board;
    placed.set(pt, Some(color));
    let dead = captured_stones(&placed, color);
    if dead.is_empty() {
        return (placed, 0);
    }
    (remove_stones(&placed, &dead), dead.len())
}

/// Check whether `color` may play at `pt`.
///
/// A move with an immediate liberty is always legal. Otherwise the captures
/// it makes are resolved first: if the placed group still has no liberty the
/// move is suicide, and if the resulting board equals `previous` it is ko.
pub fn check_move(
    current: &Board,
    previous: &Board,
    pt: Point,
    color: Color,
) -> Result<(), MoveError> {
    if !on_board(pt) {
        return Err(MoveError::OffBoard);
    }
    if current.get(pt).is_some() {
        return Err(MoveError::Occupied);
    }
    if has_liberty(current, pt, color) {
        return Ok(());
    }

    let (after, _) = play(current, pt, color);
    if !has_liberty(&after, pt, color) {
        return Err(MoveError::Suicide);
    }
    if is_immediate_repeat(previous, &after) {
        return Err(MoveError::Ko);
    }
    Ok(())
}

/// Whether `color` may play at `pt`.
#[inline]
pub fn is_legal_move(current: &Board, previous: &Board, pt: Point, color: Color) -> bool {
    check_move(current, previous, pt, color).is_ok()
}

/// All legal moves for `color`, in row-major order.
pub fn legal_moves(current: &Board, previous: &Board, color: Color) -> Vec<Point> {
    points()
        .filter(|&pt| is_legal_move(current, previous, pt, color))
        .collect()
}
