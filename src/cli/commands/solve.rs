//! Solve command - Exact value and best move for a position

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    search::{Minimax, SearchConfig},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Solve a position with exhaustive minimax")]
pub struct SolveArgs {
    /// Board cells as 9 or 27 characters of X, O and '.' (separators '|' and '/' allowed)
    #[arg(long, short = 'b')]
    pub board: String,

    /// Player to move (inferred from piece counts when omitted)
    #[arg(long, short = 't')]
    pub to_move: Option<Player>,

    /// Maximum number of cached positions
    #[arg(long)]
    pub cache_capacity: Option<usize>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("Failed to parse board '{}'", args.board))?;
    let to_move = match args.to_move {
        Some(player) => player,
        None => board.inferred_to_move()?,
    };

    print_section(&format!("{} position, {to_move} to move", board.dimensionality()));
    println!("{board}");

    if board.is_terminal() {
        print_kv("Result", &board.result().to_string());
        return Ok(());
    }

    let mut config = SearchConfig::new();
    if let Some(capacity) = args.cache_capacity {
        config = config.with_cache_capacity(capacity);
    }
    let mut engine = Minimax::with_config(config);

    let spinner = create_spinner("Searching...")?;
    let value = engine.value(&board, to_move);
    let best = engine.best_move(&board, to_move)?;
    let moves = engine.evaluate_moves(&board, to_move);
    spinner.finish_and_clear();

    print_kv("Value", &value.to_string());
    print_kv("Best move", &best.to_string());
    print_kv("Cached positions", &format_number(engine.cache_len() as u64));

    println!("\nMove values:");
    for (coordinate, value) in moves {
        let marker = if coordinate == best { " *" } else { "" };
        print_kv(&coordinate.to_string(), &format!("{value}{marker}"));
    }
    Ok(())
}
