//! Referee wire format.
//!
//! The referee hands the agent a text file:
//!
//! ```text
//! 1          <- color to move (1 = Black, 2 = White)
//! 00000      <- 5 rows of the board before the opponent's last move
//! ...
//! 00000      <- 5 rows of the current board
//! ...
//! ```
//!
//! and expects back either `row,col` or `PASS`. The search core never
//! depends on this module.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::board::{Board, Color};
use crate::constants::N;
use crate::search::Action;

/// One request from the referee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameInput {
    pub color: Color,
    pub previous: Board,
    pub current: Board,
}

/// Parse the referee's input text.
pub fn parse_input(text: &str) -> Result<GameInput> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() != 1 + 2 * N {
        bail!("expected {} non-empty lines, got {}", 1 + 2 * N, lines.len());
    }

    let index: u8 = lines[0]
        .parse()
        .with_context(|| format!("invalid color line '{}'", lines[0]))?;
    let color = match Color::from_index(index) {
        Some(c) => c,
        None => bail!("color must be 1 or 2, got {index}"),
    };

    let previous: Board = lines[1..=N]
        .join("\n")
        .parse()
        .context("invalid previous board")?;
    let current: Board = lines[N + 1..]
        .join("\n")
        .parse()
        .context("invalid current board")?;

    Ok(GameInput {
        color,
        previous,
        current,
    })
}

/// Read and parse the referee's input file.
pub fn read_input(path: &Path) -> Result<GameInput> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_input(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Write the chosen action in the referee's output format.
pub fn write_output(path: &Path, action: Action) -> Result<()> {
    fs::write(path, action.to_string())
        .with_context(|| format!("failed to write {}", path.display()))
}
