//! Text layout of a board as a row of 3×3 slices

use crate::tictactoe::{Board, Coordinate, Dimensionality, Mark, SIDE};

const CURSOR: char = '_';
const SLICE_GAP: &str = "   ";

/// Render a board with row and column labels.
///
/// A cube is drawn as its three axis-0 slices side by side. The cursor, when
/// it points at an empty cell, is drawn as `_`.
///
/// ```
/// use tictactoe_nd::{adapters::render, tictactoe::{Board, Coordinate}};
///
/// let board = Board::from_string("X...O....").unwrap();
/// let text = render(&board, Some(Coordinate::planar(2, 2)));
/// assert_eq!(text, "  0 1 2\n0 X . .\n1 . O .\n2 . . _\n");
/// ```
pub fn render(board: &Board, cursor: Option<Coordinate>) -> String {
    let cursor_index = cursor.and_then(|c| c.index(board.dimensionality()).ok());
    let slices = match board.dimensionality() {
        Dimensionality::Two => 1,
        Dimensionality::Three => SIDE,
    };

    let columns: Vec<Vec<String>> = (0..slices)
        .map(|slice| render_slice(board, slice, cursor_index, slices > 1))
        .collect();

    let mut out = String::new();
    for line in 0..columns[0].len() {
        let row: Vec<&str> = columns.iter().map(|lines| lines[line].as_str()).collect();
        out.push_str(row.join(SLICE_GAP).trim_end());
        out.push('\n');
    }
    out
}

fn render_slice(
    board: &Board,
    slice: usize,
    cursor_index: Option<usize>,
    with_title: bool,
) -> Vec<String> {
    let offset = slice * SIDE * SIDE;
    let mut lines = Vec::with_capacity(SIDE + 2);
    if with_title {
        lines.push(format!("{:<7}", format!("plane {slice}")));
    }
    lines.push("  0 1 2".to_string());
    for row in 0..SIDE {
        let cells: Vec<String> = (0..SIDE)
            .map(|col| {
                let index = offset + row * SIDE + col;
                let mark = board.mark_at(index);
                if cursor_index == Some(index) && mark == Mark::Empty {
                    CURSOR.to_string()
                } else {
                    mark.to_char().to_string()
                }
            })
            .collect();
        lines.push(format!("{row} {}", cells.join(" ")));
    }
    lines
}
