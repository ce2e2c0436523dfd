use crate::error::{BoardError, MoveError};

use super::Seat;

/// Default board height, used when no dimensions are given
pub const DEFAULT_ROWS: usize = 6;
/// Default board width, used when no dimensions are given
pub const DEFAULT_COLS: usize = 7;
/// Smallest dimension on which four in a row can ever be completed
pub const MIN_DIMENSION: usize = 4;

/// A position on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Seat),
}

impl Cell {
    pub fn occupant(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(seat) => Some(seat),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Grid of `height` rows by `width` columns.
///
/// Cells only ever go from empty to occupied; nothing clears them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board of the given size
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(BoardError::TooSmall { height, width });
        }

        Ok(Board {
            height,
            width,
            cells: vec![vec![Cell::Empty; width]; height],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Seat occupying a position, if any
    pub fn occupant_at(&self, row: usize, col: usize) -> Option<Seat> {
        self.get(row, col).occupant()
    }

    /// Bounds-checked lookup for signed coordinates, `None` when off the board
    pub fn checked(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
    }

    fn check_column(&self, col: usize) -> Result<(), MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Lowest empty row in a column, scanning from the bottom up.
    /// `None` when the column is full.
    pub fn landing_row(&self, col: usize) -> Result<Option<usize>, MoveError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row][col].is_empty()))
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Mark a cell as occupied. The caller resolves the cell through
    /// [`Board::landing_row`], so it is always empty.
    pub fn place(&mut self, at: Coord, seat: Seat) {
        debug_assert!(
            self.cells[at.row][at.col].is_empty(),
            "cell {at:?} is already occupied"
        );
        self.cells[at.row][at.col] = Cell::Occupied(seat);
    }

    /// Drop a piece in a column, returns the position where it landed
    pub fn drop_piece(&mut self, col: usize, seat: Seat) -> Result<Coord, MoveError> {
        let row = self
            .landing_row(col)?
            .ok_or(MoveError::ColumnFull { column: col })?;
        let at = Coord::new(row, col);
        self.place(at, seat);
        Ok(at)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
            cells: vec![vec![Cell::Empty; DEFAULT_COLS]; DEFAULT_ROWS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7).unwrap();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
                assert_eq!(board.occupant_at(row, col), None);
            }
        }
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_rejects_small_boards() {
        assert_eq!(
            Board::new(3, 7),
            Err(BoardError::TooSmall {
                height: 3,
                width: 7
            })
        );
        assert!(Board::new(6, 0).is_err());
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_landing_row_empty_column_is_bottom() {
        for (height, width) in [(4, 4), (6, 7), (9, 5)] {
            let board = Board::new(height, width).unwrap();
            for col in 0..width {
                assert_eq!(board.landing_row(col), Ok(Some(height - 1)));
            }
        }
    }

    #[test]
    fn test_landing_row_full_column_is_none() {
        let mut board = Board::default();
        for _ in 0..DEFAULT_ROWS {
            board.drop_piece(4, Seat::First).unwrap();
        }
        assert_eq!(board.landing_row(4), Ok(None));
        assert_eq!(board.landing_row(3), Ok(Some(5)));
    }

    #[test]
    fn test_landing_row_invalid_column() {
        let board = Board::default();
        assert_eq!(
            board.landing_row(7),
            Err(MoveError::InvalidColumn {
                column: 7,
                width: 7
            })
        );
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        // Drop first piece in column 3
        let at = board.drop_piece(3, Seat::First).unwrap();
        assert_eq!(at, Coord::new(5, 3)); // Should land at bottom
        assert_eq!(board.occupant_at(5, 3), Some(Seat::First));

        // Drop second piece in same column
        let at = board.drop_piece(3, Seat::Second).unwrap();
        assert_eq!(at, Coord::new(4, 3)); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Occupied(Seat::Second));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();

        // Fill column 0
        for _ in 0..DEFAULT_ROWS {
            board.drop_piece(0, Seat::First).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Seat::Second),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_place_marks_cell() {
        let mut board = Board::new(4, 5).unwrap();
        board.place(Coord::new(3, 4), Seat::Second);
        assert_eq!(board.occupant_at(3, 4), Some(Seat::Second));
        assert_eq!(board.landing_row(4), Ok(Some(2)));
    }

    #[test]
    fn test_checked_bounds() {
        let mut board = Board::new(4, 4).unwrap();
        board.place(Coord::new(3, 0), Seat::First);
        assert_eq!(board.checked(3, 0), Some(Cell::Occupied(Seat::First)));
        assert_eq!(board.checked(0, 0), Some(Cell::Empty));
        assert_eq!(board.checked(-1, 0), None);
        assert_eq!(board.checked(0, -1), None);
        assert_eq!(board.checked(4, 0), None);
        assert_eq!(board.checked(0, 4), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 4).unwrap();
        assert!(!board.is_full());
        for col in 0..4 {
            for _ in 0..4 {
                board.drop_piece(col, Seat::First).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }
}
