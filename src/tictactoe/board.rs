//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Length of every board axis
pub const SIDE: usize = 3;

/// Highest supported number of axes
pub const MAX_DIMENSIONS: usize = 3;

/// Cell count of the largest supported board
pub const MAX_CELLS: usize = 27;

/// A mark occupying a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | ' ' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' | '0' => Some(Mark::O),
            _ => None,
        }
    }
}

/// A player in the game. X is always the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// Number of axes of a board, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Dimensionality {
    /// The classic 3×3 board
    Two,
    /// The 3×3×3 cube
    Three,
}

impl Dimensionality {
    /// Number of axes
    pub fn rank(self) -> usize {
        match self {
            Dimensionality::Two => 2,
            Dimensionality::Three => 3,
        }
    }

    /// Number of cells on a board of this shape (3^rank)
    pub fn cell_count(self) -> usize {
        match self {
            Dimensionality::Two => 9,
            Dimensionality::Three => 27,
        }
    }

    fn from_cell_count(count: usize) -> Option<Self> {
        match count {
            9 => Some(Dimensionality::Two),
            27 => Some(Dimensionality::Three),
            _ => None,
        }
    }
}

impl TryFrom<usize> for Dimensionality {
    type Error = crate::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Dimensionality::Two),
            3 => Ok(Dimensionality::Three),
            got => Err(crate::Error::InvalidDimensionality { got }),
        }
    }
}

impl From<Dimensionality> for usize {
    fn from(value: Dimensionality) -> Self {
        value.rank()
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.rank())
    }
}

/// An ordered tuple of axis indices.
///
/// Ordering is lexicographic over the axes, which matches the order of the
/// flattened cell indices. Values outside `[0, 3)` can be represented so that
/// [`Board::apply`] is the one place that rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Coordinate {
    axes: [usize; MAX_DIMENSIONS],
    rank: usize,
}

impl Coordinate {
    /// Build a coordinate from 2 or 3 axis values
    pub fn new(axes: &[usize]) -> Result<Self, crate::Error> {
        if !(2..=MAX_DIMENSIONS).contains(&axes.len()) {
            return Err(crate::Error::InvalidDimensionality { got: axes.len() });
        }
        let mut stored = [0; MAX_DIMENSIONS];
        stored[..axes.len()].copy_from_slice(axes);
        Ok(Coordinate {
            axes: stored,
            rank: axes.len(),
        })
    }

    /// A (row, column) coordinate on the 3×3 board
    pub fn planar(row: usize, col: usize) -> Self {
        Coordinate {
            axes: [row, col, 0],
            rank: 2,
        }
    }

    /// A (plane, row, column) coordinate in the cube
    pub fn spatial(plane: usize, row: usize, col: usize) -> Self {
        Coordinate {
            axes: [plane, row, col],
            rank: 3,
        }
    }

    /// The coordinate of a flattened cell index
    pub fn from_index(index: usize, dimensionality: Dimensionality) -> Self {
        let rank = dimensionality.rank();
        let mut axes = [0; MAX_DIMENSIONS];
        let mut rest = index;
        for axis in (0..rank).rev() {
            axes[axis] = rest % SIDE;
            rest /= SIDE;
        }
        Coordinate { axes, rank }
    }

    pub fn axes(&self) -> &[usize] {
        &self.axes[..self.rank]
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Value on one axis; axes beyond the rank read as 0
    pub fn axis(&self, axis: usize) -> usize {
        self.axes.get(axis).copied().unwrap_or(0)
    }

    /// Flattened index of this coordinate on a board of the given shape
    pub fn index(&self, dimensionality: Dimensionality) -> Result<usize, crate::Error> {
        if self.rank != dimensionality.rank() {
            return Err(self.invalid(format!(
                "expected {} axes for a {dimensionality} board",
                dimensionality.rank()
            )));
        }
        if let Some(&axis) = self.axes().iter().find(|&&axis| axis >= SIDE) {
            return Err(self.invalid(format!("axis index {axis} is outside 0..{SIDE}")));
        }
        Ok(self.axes().iter().fold(0, |acc, &axis| acc * SIDE + axis))
    }

    fn invalid(&self, reason: String) -> crate::Error {
        crate::Error::InvalidMove {
            coordinate: self.to_string(),
            reason,
        }
    }
}

impl TryFrom<Vec<usize>> for Coordinate {
    type Error = crate::Error;

    fn try_from(axes: Vec<usize>) -> Result<Self, Self::Error> {
        Coordinate::new(&axes)
    }
}

impl From<Coordinate> for Vec<usize> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.axes().to_vec()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, axis) in self.axes().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{axis}")?;
        }
        write!(f, ")")
    }
}

impl FromStr for Coordinate {
    type Err = crate::Error;

    /// Parse `"1 0 2"`, `"1,0,2"` or `"(1, 0, 2)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| crate::Error::InvalidCoordinate {
            input: s.to_string(),
            reason,
        };
        let axes = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|e| invalid(format!("'{part}' is not an axis index: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Coordinate::new(&axes)
            .map_err(|_| invalid(format!("expected 2 or 3 axes, got {}", axes.len())))
    }
}

/// Outcome of a position, derived from its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win(Player),
    Tie,
    InProgress,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(player) => write!(f, "{player} wins"),
            GameResult::Tie => write!(f, "tie"),
            GameResult::InProgress => write!(f, "in progress"),
        }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

/// An immutable tic-tac-toe position.
///
/// Moves never mutate a board; [`Board::apply`] returns a new one. Equality and
/// hashing are structural, so boards can be used directly as cache keys. Cells
/// past `cell_count()` are always `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    dimensionality: Dimensionality,
    cells: [Mark; MAX_CELLS],
}

impl Board {
    /// Create an empty board of the given shape
    pub fn new(dimensionality: Dimensionality) -> Self {
        Board {
            dimensionality,
            cells: [Mark::Empty; MAX_CELLS],
        }
    }

    /// Create an empty board with 2 or 3 axes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensionality`] for any other value.
    pub fn empty(dimensionality: usize) -> Result<Self, crate::Error> {
        Ok(Self::new(Dimensionality::try_from(dimensionality)?))
    }

    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    pub fn cell_count(&self) -> usize {
        self.dimensionality.cell_count()
    }

    /// The cells in flattened order
    pub fn cells(&self) -> &[Mark] {
        &self.cells[..self.cell_count()]
    }

    /// Mark at a coordinate
    pub fn get(&self, coordinate: Coordinate) -> Result<Mark, crate::Error> {
        Ok(self.cells[coordinate.index(self.dimensionality)?])
    }

    /// Mark at a flattened index
    pub fn mark_at(&self, index: usize) -> Mark {
        self.cells()[index]
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in self.cells() {
            match cell {
                Mark::X => count.x += 1,
                Mark::O => count.o += 1,
                Mark::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    pub fn is_full(&self) -> bool {
        self.count_pieces().empty == 0
    }

    /// Flattened indices of the empty cells, ascending
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells()
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(i, _)| i)
    }

    /// Every empty cell in lexicographic coordinate order.
    ///
    /// This does not look at whether the game is already won; it is empty
    /// exactly when the board is full.
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        self.empty_indices()
            .map(|i| Coordinate::from_index(i, self.dimensionality))
            .collect()
    }

    /// Place a player's mark and return the new board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the coordinate has the wrong
    /// number of axes, any axis is outside `[0, 3)`, or the cell is occupied.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, coordinate: Coordinate, player: Player) -> Result<Board, crate::Error> {
        let index = coordinate.index(self.dimensionality)?;
        if self.cells[index] != Mark::Empty {
            return Err(crate::Error::InvalidMove {
                coordinate: coordinate.to_string(),
                reason: format!("cell is already occupied by {}", self.cells[index].to_char()),
            });
        }
        Ok(self.place(index, player))
    }

    /// Place a mark on a flattened index known to be empty
    #[must_use = "place returns a new board; the original is unchanged"]
    pub(crate) fn place(&self, index: usize, player: Player) -> Board {
        debug_assert_eq!(self.cells[index], Mark::Empty);
        let mut next = *self;
        next.cells[index] = player.mark();
        next
    }

    /// Whether placing the player's mark on an empty index completes a line
    pub fn wins_at(&self, index: usize, player: Player) -> bool {
        LineAnalyzer::completes_line(self.cells(), self.dimensionality, index, player)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(self.cells(), self.dimensionality, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// The completed line of the winner, as coordinates
    pub fn winning_line(&self) -> Option<[Coordinate; 3]> {
        let player = self.winner()?;
        let line = LineAnalyzer::winning_line_for(self.cells(), self.dimensionality, player)?;
        Some(line.map(|i| Coordinate::from_index(i, self.dimensionality)))
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn result(&self) -> GameResult {
        match self.winner() {
            Some(player) => GameResult::Win(player),
            None if self.is_full() => GameResult::Tie,
            None => GameResult::InProgress,
        }
    }

    /// Player to move under X-first alternation
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] unless X has as many marks as
    /// O or exactly one more.
    pub fn inferred_to_move(&self) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Create a board from a string of 9 or 27 cell characters.
    ///
    /// Whitespace and the slice separators `|` and `/` are ignored, so a cube
    /// can be written as `"X........|.O.......|........."`. The number of cells
    /// decides the dimensionality.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is neither 9 nor 27 or any character is
    /// not a valid mark.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        let dimensionality = Dimensionality::from_cell_count(chars.len()).ok_or_else(|| {
            crate::Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            }
        })?;

        let mut board = Board::new(dimensionality);
        for (i, &c) in chars.iter().enumerate() {
            board.cells[i] = Mark::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(board)
    }

    /// Flattened one-character-per-cell representation
    pub fn encode(&self) -> String {
        self.cells().iter().map(|&c| c.to_char()).collect()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.encode()
    }
}

impl TryFrom<String> for Board {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Board::from_string(&value)
    }
}

impl fmt::Display for Board {
    /// Rows of three, with a blank line between the slices of a cube
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.cell_count() - 1;
        for (i, &cell) in self.cells().iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if i == last {
                break;
            }
            if (i + 1).is_multiple_of(SIDE) {
                writeln!(f)?;
            }
            if (i + 1).is_multiple_of(SIDE * SIDE) {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
