//! go5-agent: picks a move for a 5x5 Go position.
//!
//! ## Usage
//!
//! - `go5-agent` - Read `input.txt`, write the move to `output.txt`
//! - `go5-agent -i game.txt -o -` - Print the move to stdout instead
//! - `RUST_LOG=debug go5-agent` - Show search statistics

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use go5_agent::driver::{read_input, write_output};
use go5_agent::search::{SearchConfig, Searcher};

/// go5-agent: alpha-beta move selection for 5x5 Go
#[derive(Parser)]
#[command(name = "go5-agent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Referee input file (color, previous board, current board)
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Where to write the move; `-` prints it to stdout
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Search depth in plies
    #[arg(short, long, default_value_t = SearchConfig::default().max_depth,
          value_parser = clap::value_parser!(u32).range(1..=8))]
    depth: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = read_input(&cli.input)?;
    let config = SearchConfig {
        max_depth: cli.depth,
    };
    let mut searcher = Searcher::with_config(input.color, config);
    let result = searcher.best_action(&input.current, &input.previous);
    info!("{} plays {}", input.color, result.action);

    if cli.output.as_os_str() == "-" {
        println!("{}", result.action);
    } else {
        write_output(&cli.output, result.action)?;
    }
    Ok(())
}
