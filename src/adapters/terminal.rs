//! Line-driven text UI
//!
//! Commands, one per line:
//! - `l` / `right`, `h` / `left`: next or previous legal move
//! - `j` / `down`, `k` / `up`: jump to the next or previous slice
//! - a coordinate such as `1 0 2`: select that cell
//! - empty line or `p`: play the selected move

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use super::{cursor::MoveCursor, render::render};
use crate::{
    Error, Result,
    ports::Presentation,
    tictactoe::{Board, Coordinate, Game, GameResult, Player},
};

const HELP: &str = "commands: l/h next/previous move, j/k next/previous slice, \
                    a coordinate like '1 0 2' to select, empty line or p to play";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    SliceDown,
    SliceUp,
    Commit,
    Select(Coordinate),
    Help,
}

fn parse_command(input: &str) -> Command {
    match input.trim() {
        "" | "p" | "play" => Command::Commit,
        "l" | "right" => Command::Next,
        "h" | "left" => Command::Previous,
        "j" | "down" => Command::SliceDown,
        "k" | "up" => Command::SliceUp,
        other => other
            .parse::<Coordinate>()
            .map(Command::Select)
            .unwrap_or(Command::Help),
    }
}

/// Text presentation over a reader and a writer
pub struct TerminalPresentation<R, W> {
    input: R,
    output: W,
}

impl TerminalPresentation<StdinLock<'static>, Stdout> {
    /// Read commands from stdin and draw on stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPresentation<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_command(&mut self) -> Result<Command> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read a command".to_string(),
            source,
        })?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(parse_command(&line))
    }
}

impl<R: BufRead, W: Write> Presentation for TerminalPresentation<R, W> {
    fn show(&mut self, board: &Board, to_move: Player) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render(board, None))?;
        writeln!(self.output, "{to_move} to move")?;
        Ok(())
    }

    fn choose_move(
        &mut self,
        board: &Board,
        to_move: Player,
        legal_moves: &[Coordinate],
    ) -> Result<Coordinate> {
        let mut cursor = MoveCursor::new(legal_moves.to_vec())?;
        loop {
            write!(self.output, "{}", render(board, Some(cursor.current())))?;
            write!(self.output, "{to_move} selects {} > ", cursor.current())?;
            self.output.flush()?;

            match self.read_command()? {
                Command::Commit => return Ok(cursor.current()),
                Command::Next => {
                    cursor.next();
                }
                Command::Previous => {
                    cursor.previous();
                }
                Command::SliceDown => {
                    cursor.slice_step(1);
                }
                Command::SliceUp => {
                    cursor.slice_step(-1);
                }
                Command::Select(coordinate) => {
                    if !cursor.select(coordinate) {
                        writeln!(self.output, "{coordinate} is not a legal move")?;
                    }
                }
                Command::Help => writeln!(self.output, "{HELP}")?,
            }
        }
    }

    fn announce_move(&mut self, player: Player, coordinate: Coordinate) -> Result<()> {
        writeln!(self.output, "{player} plays {coordinate}")?;
        Ok(())
    }

    fn finish(&mut self, game: &Game) -> Result<()> {
        let summary = match game.outcome {
            GameResult::Win(player) => format!("Game over: {player} has won."),
            GameResult::Tie => "Game over: tied.".to_string(),
            GameResult::InProgress => {
                return Err(Error::PreconditionViolated {
                    message: "finish called on a game still in progress".to_string(),
                });
            }
        };
        writeln!(self.output)?;
        write!(self.output, "{}", render(&game.current_board(), None))?;
        writeln!(self.output, "{summary}")?;
        writeln!(self.output, "States reached (flattened):")?;
        for board in game.state_sequence()? {
            writeln!(self.output, "{}", board.encode())?;
        }
        self.output.flush()?;
        Ok(())
    }
}
