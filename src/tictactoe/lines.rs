//! Winning line tables for the 3×3 and 3×3×3 boards
//!
//! Lines are stored as flattened cell indices (row-major, axis 0 most
//! significant). Both tables are built at compile time.

use std::sync::LazyLock;

use super::board::{Dimensionality, Mark, Player};

/// Rows, columns and diagonals of one 3×3 slice as (row, column) pairs
const PLANAR_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)], // diagonals
];

/// The four corner-to-corner diagonals through the centre of the cube
const SPACE_DIAGONALS: [[[usize; 3]; 3]; 4] = [
    [[0, 0, 0], [1, 1, 1], [2, 2, 2]],
    [[0, 0, 2], [1, 1, 1], [2, 2, 0]],
    [[0, 2, 0], [1, 1, 1], [2, 0, 2]],
    [[2, 0, 0], [1, 1, 1], [0, 2, 2]],
];

/// Winning lines on the 3×3 board
pub const WINNING_LINES_2D: [[usize; 3]; 8] = build_planar_lines();

/// Winning lines on the 3×3×3 board: the 8 planar lines of each of the 9
/// axis-aligned slices, followed by the 4 space diagonals.
///
/// Axis-parallel lines lie in two slices and therefore appear twice, which
/// leaves 49 distinct lines among the 76 entries.
pub const WINNING_LINES_3D: [[usize; 3]; 76] = build_spatial_lines();

const fn flatten_spatial(axes: [usize; 3]) -> usize {
    axes[0] * 9 + axes[1] * 3 + axes[2]
}

const fn build_planar_lines() -> [[usize; 3]; 8] {
    let mut lines = [[0; 3]; 8];
    let mut i = 0;
    while i < 8 {
        let mut j = 0;
        while j < 3 {
            let (row, col) = PLANAR_LINES[i][j];
            lines[i][j] = row * 3 + col;
            j += 1;
        }
        i += 1;
    }
    lines
}

const fn build_spatial_lines() -> [[usize; 3]; 76] {
    let mut lines = [[0; 3]; 76];
    let mut n = 0;

    let mut fixed = 0;
    while fixed < 3 {
        // the two free axes of the slice keep their relative order
        let (first, second) = match fixed {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        let mut slice = 0;
        while slice < 3 {
            let mut i = 0;
            while i < 8 {
                let mut j = 0;
                while j < 3 {
                    let (row, col) = PLANAR_LINES[i][j];
                    let mut axes = [0; 3];
                    axes[fixed] = slice;
                    axes[first] = row;
                    axes[second] = col;
                    lines[n][j] = flatten_spatial(axes);
                    j += 1;
                }
                n += 1;
                i += 1;
            }
            slice += 1;
        }
        fixed += 1;
    }

    let mut d = 0;
    while d < 4 {
        let mut j = 0;
        while j < 3 {
            lines[n][j] = flatten_spatial(SPACE_DIAGONALS[d][j]);
            j += 1;
        }
        n += 1;
        d += 1;
    }

    lines
}

static LINES_THROUGH_2D: LazyLock<Vec<Vec<[usize; 3]>>> =
    LazyLock::new(|| index_by_cell(&WINNING_LINES_2D, Dimensionality::Two.cell_count()));

static LINES_THROUGH_3D: LazyLock<Vec<Vec<[usize; 3]>>> =
    LazyLock::new(|| index_by_cell(&WINNING_LINES_3D, Dimensionality::Three.cell_count()));

fn sorted(line: &[usize; 3]) -> [usize; 3] {
    let mut cells = *line;
    cells.sort_unstable();
    cells
}

/// Group the distinct lines by the cells they pass through.
fn index_by_cell(lines: &[[usize; 3]], cells: usize) -> Vec<Vec<[usize; 3]>> {
    let mut by_cell: Vec<Vec<[usize; 3]>> = vec![Vec::new(); cells];
    for line in lines {
        let key = sorted(line);
        for &cell in line {
            if !by_cell[cell].iter().any(|known| sorted(known) == key) {
                by_cell[cell].push(*line);
            }
        }
    }
    by_cell
}

/// Full line table for a dimensionality, duplicates included
pub fn winning_lines(dimensionality: Dimensionality) -> &'static [[usize; 3]] {
    match dimensionality {
        Dimensionality::Two => &WINNING_LINES_2D,
        Dimensionality::Three => &WINNING_LINES_3D,
    }
}

/// Distinct lines, each with its cells in ascending order, sorted
pub fn distinct_lines(dimensionality: Dimensionality) -> Vec<[usize; 3]> {
    let mut lines: Vec<_> = winning_lines(dimensionality).iter().map(sorted).collect();
    lines.sort_unstable();
    lines.dedup();
    lines
}

/// Distinct lines passing through a cell
pub fn lines_through(dimensionality: Dimensionality, cell: usize) -> &'static [[usize; 3]] {
    match dimensionality {
        Dimensionality::Two => &LINES_THROUGH_2D[cell],
        Dimensionality::Three => &LINES_THROUGH_3D[cell],
    }
}

/// Utility for analyzing winning lines over a flattened cell slice
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row anywhere
    pub fn has_won(cells: &[Mark], dimensionality: Dimensionality, player: Player) -> bool {
        Self::winning_line_for(cells, dimensionality, player).is_some()
    }

    /// First line in table order completed by the player
    pub fn winning_line_for(
        cells: &[Mark],
        dimensionality: Dimensionality,
        player: Player,
    ) -> Option<[usize; 3]> {
        let target = player.mark();
        winning_lines(dimensionality)
            .iter()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
    }

    /// Whether placing the player's mark on `cell` would complete a line.
    ///
    /// The cell itself is treated as already holding the mark.
    pub fn completes_line(
        cells: &[Mark],
        dimensionality: Dimensionality,
        cell: usize,
        player: Player,
    ) -> bool {
        let target = player.mark();
        lines_through(dimensionality, cell).iter().any(|line| {
            line.iter().all(|&idx| idx == cell || cells[idx] == target)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spatial(plane: usize, row: usize, col: usize) -> usize {
        plane * 9 + row * 3 + col
    }

    #[test]
    fn test_planar_table_matches_rows_columns_diagonals() {
        assert_eq!(
            WINNING_LINES_2D,
            [
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [6, 4, 2],
            ]
        );
    }

    #[test]
    fn test_spatial_table_has_76_entries_and_49_distinct_lines() {
        assert_eq!(WINNING_LINES_3D.len(), 76);
        assert_eq!(distinct_lines(Dimensionality::Three).len(), 49);
        assert_eq!(distinct_lines(Dimensionality::Two).len(), 8);
    }

    #[test]
    fn test_space_diagonals_close_the_table() {
        let tail = &WINNING_LINES_3D[72..];
        assert_eq!(tail[0], [spatial(0, 0, 0), 13, spatial(2, 2, 2)]);
        assert_eq!(tail[1], [spatial(0, 0, 2), 13, spatial(2, 2, 0)]);
        assert_eq!(tail[2], [spatial(0, 2, 0), 13, spatial(2, 0, 2)]);
        assert_eq!(tail[3], [spatial(2, 0, 0), 13, spatial(0, 2, 2)]);
    }

    #[test]
    fn test_distinct_lines_are_exactly_the_monotonic_triples() {
        // every line through the cube moves each axis by a fixed step of -1, 0 or +1
        let mut expected = Vec::new();
        for start in 0..27 {
            let origin = [start / 9, (start / 3) % 3, start % 3];
            for step in 0..27usize {
                let delta = [
                    (step / 9) as isize - 1,
                    ((step / 3) % 3) as isize - 1,
                    (step % 3) as isize - 1,
                ];
                if delta == [0, 0, 0] {
                    continue;
                }
                let cells: Option<Vec<usize>> = (0..3)
                    .map(|k| {
                        let mut idx = 0;
                        for axis in 0..3 {
                            let v = origin[axis] as isize + delta[axis] * k;
                            if !(0..3).contains(&v) {
                                return None;
                            }
                            idx = idx * 3 + v as usize;
                        }
                        Some(idx)
                    })
                    .collect();
                if let Some(cells) = cells {
                    let mut line = [cells[0], cells[1], cells[2]];
                    line.sort_unstable();
                    expected.push(line);
                }
            }
        }
        expected.sort_unstable();
        expected.dedup();

        assert_eq!(distinct_lines(Dimensionality::Three), expected);
    }

    #[test]
    fn test_lines_through_centre_and_corner() {
        assert_eq!(lines_through(Dimensionality::Two, 4).len(), 4);
        assert_eq!(lines_through(Dimensionality::Two, 0).len(), 3);
        assert_eq!(lines_through(Dimensionality::Three, 13).len(), 13);
        assert_eq!(lines_through(Dimensionality::Three, 0).len(), 7);
    }

    #[test]
    fn test_has_won_space_diagonal() {
        let mut cells = [Mark::Empty; 27];
        cells[spatial(0, 0, 2)] = Mark::O;
        cells[spatial(1, 1, 1)] = Mark::O;
        cells[spatial(2, 2, 0)] = Mark::O;

        assert!(LineAnalyzer::has_won(&cells, Dimensionality::Three, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Dimensionality::Three, Player::X));
    }

    #[test]
    fn test_completes_line() {
        let mut cells = [Mark::Empty; 9];
        cells[0] = Mark::X;
        cells[2] = Mark::X;

        assert!(LineAnalyzer::completes_line(&cells, Dimensionality::Two, 1, Player::X));
        assert!(!LineAnalyzer::completes_line(&cells, Dimensionality::Two, 4, Player::X));
        assert!(!LineAnalyzer::completes_line(&cells, Dimensionality::Two, 1, Player::O));
    }
}
