//! Depth-limited alpha-beta minimax.
//!
//! The agent (Max) plays a fixed color for the whole search and the
//! opponent (Min) plays the other one; the roles alternate strictly by ply.
//! A line ends at the configured depth or after two consecutive passes, and
//! the leaf is scored with [`evaluate`].
//!
//! All per-line state (boards, bounds, capture counts, pass counter) lives
//! in a [`Node`] passed by value, so sibling branches never see each other's
//! counts.

use std::fmt;
use std::time::Instant;

use log::debug;

use crate::board::{Board, Color, Point};
use crate::constants::{CENTER, MAX_DEPTH, PASS_LIMIT};
use crate::eval::evaluate;
use crate::rules::{legal_moves, play};

/// The move chosen by the search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Place(Point),
    Pass,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place((row, col)) => write!(f, "{row},{col}"),
            Action::Pass => write!(f, "PASS"),
        }
    }
}

/// Runtime search parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched before the evaluator is called.
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

/// Outcome of one top-level search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub action: Action,
    /// Minimax value of the root from the agent's point of view
    pub value: f64,
    /// Number of nodes visited (diagnostic)
    pub nodes: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Role {
    Max,
    Min,
}

impl Role {
    fn other(self) -> Role {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }
}

/// State of one search line.
#[derive(Copy, Clone, Debug)]
struct Node {
    current: Board,
    previous: Board,
    depth: u32,
    alpha: f64,
    beta: f64,
    max_captures: usize,
    min_captures: usize,
    passes: u32,
}

/// Alpha-beta searcher for a fixed agent color.
pub struct Searcher {
    side: Color,
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with the default depth.
    pub fn new(side: Color) -> Self {
        Self::with_config(side, SearchConfig::default())
    }

    pub fn with_config(side: Color, config: SearchConfig) -> Self {
        Self {
            side,
            config,
            nodes: 0,
        }
    }

    /// Choose a move for the agent.
    ///
    /// `previous` is the board before the opponent's last move and is only
    /// used for the ko check.
    pub fn best_action(&mut self, current: &Board, previous: &Board) -> SearchResult {
        self.nodes = 0;
        let start = Instant::now();

        let root = Node {
            current: *current,
            previous: *previous,
            depth: 0,
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
            max_captures: 0,
            min_captures: 0,
            passes: 0,
        };
        let (value, action) = self.alpha_beta(root, Role::Max);
        // Only a zero-depth search returns no action.
        let action = action.unwrap_or(Action::Pass);

        debug!(
            "{} searched {} nodes to depth {} in {:.3?}: {} (value {:.2})",
            self.side,
            self.nodes,
            self.config.max_depth,
            start.elapsed(),
            action,
            value
        );
        SearchResult {
            action,
            value,
            nodes: self.nodes,
        }
    }

    fn alpha_beta(&mut self, node: Node, role: Role) -> (f64, Option<Action>) {
        self.nodes += 1;

        if node.depth >= self.config.max_depth || node.passes >= PASS_LIMIT {
            let value = evaluate(
                &node.current,
                self.side,
                node.max_captures,
                node.min_captures,
            );
            return (value, None);
        }

        // Fixed opening: Black takes the center of an empty board.
        if role == Role::Max
            && node.depth == 0
            && self.side == Color::Black
            && node.current.is_empty()
        {
            return (0.0, Some(Action::Place(CENTER)));
        }

        let color = match role {
            Role::Max => self.side,
            Role::Min => self.side.opponent(),
        };
        let moves = legal_moves(&node.current, &node.previous, color);

        if moves.is_empty() {
            let child = Node {
                previous: node.current,
                depth: node.depth + 1,
                passes: node.passes + 1,
                ..node
            };
            let (value, _) = self.alpha_beta(child, role.other());
            return (value, Some(Action::Pass));
        }

        let mut alpha = node.alpha;
        let mut beta = node.beta;
        let mut best = match role {
            Role::Max => f64::NEG_INFINITY,
            Role::Min => f64::INFINITY,
        };
        let mut action = None;

        for pt in moves {
            let (next, captured) = play(&node.current, pt, color);
            let (max_captures, min_captures) = match role {
                Role::Max => (node.max_captures + captured, node.min_captures),
                Role::Min => (node.max_captures, node.min_captures + captured),
            };
            let child = Node {
                current: next,
                previous: node.current,
                depth: node.depth + 1,
                alpha,
                beta,
                max_captures,
                min_captures,
                passes: 0,
            };
            let (value, _) = self.alpha_beta(child, role.other());

            // Strict comparison keeps the first best move in row-major order.
            match role {
                Role::Max => {
                    if value > best {
                        best = value;
                        action = Some(Action::Place(pt));
                    }
                    alpha = alpha.max(best);
                }
                Role::Min => {
                    if value < best {
                        best = value;
                        action = Some(Action::Place(pt));
                    }
                    beta = beta.min(best);
                }
            }
            if alpha >= beta {
                return (best, action);
            }
        }

        (best, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("valid test board")
    }

    #[test]
    fn test_opening_takes_center() {
        let mut searcher = Searcher::new(Color::Black);
        let result = searcher.best_action(&Board::new(), &Board::new());
        assert_eq!(result.action, Action::Place(CENTER));
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_white_on_empty_board_searches() {
        let config = SearchConfig { max_depth: 2 };
        let mut searcher = Searcher::with_config(Color::White, config);
        let result = searcher.best_action(&Board::new(), &Board::new());
        assert!(matches!(result.action, Action::Place(_)));
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_full_board_double_pass() {
        let full = board(
            "12121
             21212
             12121
             21212
             12121",
        );
        let config = SearchConfig { max_depth: 10 };
        let mut searcher = Searcher::with_config(Color::White, config);
        let result = searcher.best_action(&full, &full);
        assert_eq!(result.action, Action::Pass);
        assert_eq!(result.value, evaluate(&full, Color::White, 0, 0));
        // root pass, opponent pass, evaluated leaf
        assert_eq!(result.nodes, 3);
    }

    #[test]
    fn test_zero_depth_passes() {
        let b = board("00000\n00000\n00100\n00000\n00000");
        let mut searcher = Searcher::with_config(Color::White, SearchConfig { max_depth: 0 });
        let result = searcher.best_action(&b, &Board::new());
        assert_eq!(result.action, Action::Pass);
        assert_eq!(result.value, evaluate(&b, Color::White, 0, 0));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Place((1, 3)).to_string(), "1,3");
        assert_eq!(Action::Pass.to_string(), "PASS");
    }
}
