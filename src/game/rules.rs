//! Four-in-a-row detection.
//!
//! A candidate line starts at a cell and takes three more steps along one of
//! four direction vectors. It wins when every cell is on the board and held by
//! the seat being checked. Scans run row-major (row ascending, then column
//! ascending), trying directions in [`Direction::ALL`] order at each start
//! cell, and stop at the first winning line.

use super::{Board, Cell, Coord, Seat};

/// Number of pieces in a winning line
pub const CONNECT: usize = 4;

/// Four winning cells: the start cell, then each step along the direction
pub type WinningLine = [Coord; CONNECT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// Scan order within a start cell
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Step as `(row, col)`
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// The four signed coordinates of the line starting at `start`.
/// Cells may fall outside the board.
pub fn candidate_line(start: (isize, isize), dir: Direction) -> [(isize, isize); CONNECT] {
    let (dr, dc) = dir.delta();
    std::array::from_fn(|step| {
        let step = step as isize;
        (start.0 + dr * step, start.1 + dc * step)
    })
}

/// True when all cells are on the board and held by `seat`
pub fn is_winning_line(board: &Board, seat: Seat, cells: &[(isize, isize)]) -> bool {
    cells
        .iter()
        .all(|&(row, col)| board.checked(row, col) == Some(Cell::Occupied(seat)))
}

fn to_line(cells: [(isize, isize); CONNECT]) -> WinningLine {
    cells.map(|(row, col)| Coord::new(row as usize, col as usize))
}

/// Scan the whole board for the first winning line of `seat`
pub fn find_winning_line(board: &Board, seat: Seat) -> Option<WinningLine> {
    for row in 0..board.height() as isize {
        for col in 0..board.width() as isize {
            for dir in Direction::ALL {
                let cells = candidate_line((row, col), dir);
                if is_winning_line(board, seat, &cells) {
                    return Some(to_line(cells));
                }
            }
        }
    }
    None
}

/// First winning line of `seat` that passes through `at`.
///
/// Only start cells within reach of `at` are visited, in the same order as
/// [`find_winning_line`]. When `seat` had no winning line before its piece
/// landed on `at`, every winning line it has now goes through `at`, so both
/// functions report the same line.
pub fn winning_line_through(board: &Board, seat: Seat, at: Coord) -> Option<WinningLine> {
    let reach = CONNECT as isize - 1;
    let (row, col) = (at.row as isize, at.col as isize);

    for start_row in (row - reach).max(0)..=row {
        for start_col in (col - reach).max(0)..=(col + reach).min(board.width() as isize - 1) {
            for dir in Direction::ALL {
                let cells = candidate_line((start_row, start_col), dir);
                if cells.contains(&(row, col)) && is_winning_line(board, seat, &cells) {
                    return Some(to_line(cells));
                }
            }
        }
    }
    None
}

/// A tie is a full board. Only meaningful once no win was found.
pub fn is_tie(board: &Board) -> bool {
    board.is_full()
}
