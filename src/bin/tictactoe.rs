//! tictactoe CLI - exact minimax play and analysis on 3x3 and 3x3x3 boards

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe on 3x3 and 3x3x3 boards with perfect play", long_about = None)]
struct Cli {
    /// Log search and session details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine, a random agent or another human
    Play(tictactoe_nd::cli::commands::play::PlayArgs),

    /// Compute the value and best move of a position
    Solve(tictactoe_nd::cli::commands::solve::SolveArgs),

    /// Print the winning line table
    Lines(tictactoe_nd::cli::commands::lines::LinesArgs),
}

/// `-v` sets the default level to `debug`; per-target `RUST_LOG` directives still apply
fn log_filter(filter: EnvFilter, verbose: bool) -> EnvFilter {
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn init_logging(verbose: bool) {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = log_filter(base, verbose);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => tictactoe_nd::cli::commands::play::execute(args),
        Commands::Solve(args) => tictactoe_nd::cli::commands::solve::execute(args),
        Commands::Lines(args) => tictactoe_nd::cli::commands::lines::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_default_level() {
        let quiet = log_filter(EnvFilter::new("warn"), false);
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::WARN));

        let verbose = log_filter(EnvFilter::new("warn"), true);
        assert_eq!(verbose.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_verbose_keeps_target_directives() {
        let filter = log_filter(EnvFilter::new("warn,tictactoe_nd::search=trace"), true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_verbose_flag_parses_after_the_subcommand() {
        let cli = Cli::parse_from(["tictactoe", "lines", "-d", "3", "-v"]);
        assert!(cli.verbose);
    }
}
