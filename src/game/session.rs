use tracing::{debug, info};

use crate::error::{BoardError, MoveError};

use super::rules::{self, WinningLine};
use super::{Board, Coord, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
    Tie,
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game goes on; `next` moves now
    Continue { next: Seat },
    /// The mover completed `line`
    Win { winner: Seat, line: WinningLine },
    Tie,
}

/// Everything the presentation layer needs to react to one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub seat: Seat,
    pub placed: Coord,
    pub outcome: Outcome,
}

/// A single game between two players.
///
/// `P` is whatever the front end uses to describe a player (a color, a name).
/// The session never inspects it; the board tracks players by [`Seat`].
///
/// Once the game is won or tied the session is frozen: every further
/// [`GameSession::play_move`] returns [`MoveError::GameAlreadyOver`].
#[derive(Debug, Clone)]
pub struct GameSession<P> {
    board: Board,
    players: [P; 2],
    current: Seat,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    move_count: usize,
}

impl<P> GameSession<P> {
    /// Start a game on the default 6x7 board. `first` moves first.
    pub fn new(first: P, second: P) -> Self {
        Self::with_board(first, second, Board::default())
    }

    /// Start a game on a board of the given size
    pub fn with_size(first: P, second: P, height: usize, width: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(first, second, Board::new(height, width)?))
    }

    fn with_board(first: P, second: P, board: Board) -> Self {
        info!(
            height = board.height(),
            width = board.width(),
            "new game session"
        );
        GameSession {
            board,
            players: [first, second],
            current: Seat::First,
            status: GameStatus::InProgress,
            winning_line: None,
            move_count: 0,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Seat whose turn it is. Frozen at the mover once the game ends.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &P {
        self.player(self.current)
    }

    pub fn player(&self, seat: Seat) -> &P {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[P; 2] {
        &self.players
    }

    /// Player descriptor occupying a cell, if any
    pub fn occupant_at(&self, row: usize, col: usize) -> Option<&P> {
        self.board.occupant_at(row, col).map(|seat| self.player(seat))
    }

    /// The line that ended the game, if it was won
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Number of accepted moves so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns that accept a move right now
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Validation happens before the board changes; a rejected move leaves
    /// the session exactly as it was and does not pass the turn.
    pub fn play_move(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let row = self
            .board
            .landing_row(column)?
            .ok_or(MoveError::ColumnFull { column })?;

        let seat = self.current;
        let placed = Coord::new(row, column);
        self.board.place(placed, seat);
        self.move_count += 1;
        debug!(seat = seat.name(), row, column, "piece placed");

        let outcome = if let Some(line) = rules::winning_line_through(&self.board, seat, placed) {
            self.status = GameStatus::Won(seat);
            self.winning_line = Some(line);
            info!(seat = seat.name(), moves = self.move_count, ?line, "game won");
            Outcome::Win { winner: seat, line }
        } else if rules::is_tie(&self.board) {
            self.status = GameStatus::Tie;
            info!(moves = self.move_count, "game tied");
            Outcome::Tie
        } else {
            self.current = seat.other();
            Outcome::Continue { next: self.current }
        };

        Ok(MoveReport {
            seat,
            placed,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Column sequence that fills a 6x7 board without four in a row
    const TIE_SEQUENCE: [usize; 42] = [
        0, 1, 0, 1, 0, 1, 2, 3, 2, 3, 2, 3, 4, 5, 4, 5, 4, 5, 6, 0, 6, 0, 6, 0, 1, 2, 1, 2, 1, 2,
        3, 4, 3, 4, 3, 4, 5, 6, 5, 6, 5, 6,
    ];

    fn session() -> GameSession<&'static str> {
        GameSession::new("red", "yellow")
    }

    /// Play every column and return the report of the last move
    fn play_all(game: &mut GameSession<&'static str>, columns: &[usize]) -> MoveReport {
        let mut last = None;
        for &col in columns {
            last = Some(game.play_move(col).unwrap());
        }
        last.expect("at least one move")
    }

    fn coords(cells: &[(usize, usize)]) -> Vec<Coord> {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    fn expect_win(report: MoveReport) -> (Seat, Vec<Coord>) {
        match report.outcome {
            Outcome::Win { winner, line } => (winner, line.to_vec()),
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_state() {
        let game = session();
        assert_eq!(game.current_seat(), Seat::First);
        assert_eq!(*game.current_player(), "red");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_over());
        assert_eq!(game.legal_columns().len(), 7);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_with_size() {
        let game = GameSession::with_size('a', 'b', 5, 9).unwrap();
        assert_eq!(game.board().height(), 5);
        assert_eq!(game.board().width(), 9);
        assert!(GameSession::with_size('a', 'b', 3, 3).is_err());
    }

    #[test]
    fn test_play_move() {
        let mut game = session();
        let report = game.play_move(3).unwrap();

        assert_eq!(report.seat, Seat::First);
        assert_eq!(report.placed, Coord::new(5, 3));
        assert_eq!(
            report.outcome,
            Outcome::Continue { next: Seat::Second }
        );
        assert_eq!(game.current_seat(), Seat::Second);
        assert_eq!(game.occupant_at(5, 3), Some(&"red"));
        assert_eq!(game.occupant_at(4, 3), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = session();
        let mut expected = Seat::First;
        for col in [0, 1, 2, 3, 4, 5, 6, 0, 1] {
            assert_eq!(game.current_seat(), expected);
            let report = game.play_move(col).unwrap();
            assert_eq!(report.seat, expected);
            expected = expected.other();
            assert_eq!(report.outcome, Outcome::Continue { next: expected });
        }
    }

    #[test]
    fn test_invalid_column_does_not_mutate() {
        let mut game = session();
        game.play_move(2).unwrap();
        let before = game.board().clone();

        assert_eq!(
            game.play_move(7),
            Err(MoveError::InvalidColumn {
                column: 7,
                width: 7
            })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_seat(), Seat::Second);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_full_column_rejection_is_idempotent() {
        let mut game = session();
        play_all(&mut game, &[0, 0, 0, 0, 0, 0]);
        let before = game.board().clone();
        let seat = game.current_seat();

        for _ in 0..5 {
            assert_eq!(game.play_move(0), Err(MoveError::ColumnFull { column: 0 }));
            assert_eq!(game.board(), &before);
            assert_eq!(game.current_seat(), seat);
        }
        assert_eq!(game.move_count(), 6);
        assert!(!game.legal_columns().contains(&0));
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = session();
        let report = play_all(&mut game, &[0, 0, 1, 1, 2, 2, 3]);

        let (winner, line) = expect_win(report);
        assert_eq!(winner, Seat::First);
        assert_eq!(line, coords(&[(5, 0), (5, 1), (5, 2), (5, 3)]));
        assert_eq!(game.status(), GameStatus::Won(Seat::First));
        assert!(game.is_over());
    }

    #[test]
    fn test_horizontal_win_completed_from_left() {
        let mut game = session();
        let report = play_all(&mut game, &[3, 3, 2, 2, 1, 1, 0]);

        let (_, line) = expect_win(report);
        assert_eq!(report.placed, Coord::new(5, 0));
        assert_eq!(line, coords(&[(5, 0), (5, 1), (5, 2), (5, 3)]));
    }

    #[test]
    fn test_vertical_win() {
        let mut game = session();
        let report = play_all(&mut game, &[0, 1, 0, 1, 0, 1, 0]);

        let (winner, line) = expect_win(report);
        assert_eq!(winner, Seat::First);
        assert_eq!(line, coords(&[(2, 0), (3, 0), (4, 0), (5, 0)]));
    }

    #[test]
    fn test_second_player_can_win() {
        let mut game = session();
        let report = play_all(&mut game, &[6, 0, 5, 0, 6, 0, 5, 0]);

        let (winner, line) = expect_win(report);
        assert_eq!(winner, Seat::Second);
        assert_eq!(*game.player(winner), "yellow");
        assert_eq!(line, coords(&[(2, 0), (3, 0), (4, 0), (5, 0)]));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut game = session();
        let report = play_all(&mut game, &[3, 2, 2, 1, 1, 0, 1, 0, 0, 6, 0]);

        let (winner, line) = expect_win(report);
        assert_eq!(winner, Seat::First);
        assert_eq!(line, coords(&[(2, 0), (3, 1), (4, 2), (5, 3)]));
        assert_eq!(game.winning_line().map(|l| l.to_vec()), Some(line));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut game = session();
        let report = play_all(&mut game, &[3, 4, 4, 5, 5, 6, 5, 6, 6, 0, 6]);

        let (winner, line) = expect_win(report);
        assert_eq!(winner, Seat::First);
        assert_eq!(line, coords(&[(2, 6), (3, 5), (4, 4), (5, 3)]));
    }

    #[test]
    fn test_tie() {
        let mut game = session();
        let report = play_all(&mut game, &TIE_SEQUENCE[..41]);
        assert_eq!(report.outcome, Outcome::Continue { next: Seat::Second });

        let report = game.play_move(TIE_SEQUENCE[41]).unwrap();
        assert_eq!(report.outcome, Outcome::Tie);
        assert_eq!(game.status(), GameStatus::Tie);
        assert!(game.board().is_full());
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.move_count(), 42);
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        let mut game = session();
        play_all(&mut game, &[0, 1, 0, 1, 0, 1, 0]);
        let before = game.board().clone();

        for col in [0, 1, 5, 6, 42] {
            assert_eq!(game.play_move(col), Err(MoveError::GameAlreadyOver));
        }
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_seat(), Seat::First);
        assert_eq!(game.status(), GameStatus::Won(Seat::First));
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_moves_after_tie_are_rejected() {
        let mut game = session();
        play_all(&mut game, &TIE_SEQUENCE);
        let seat = game.current_seat();

        assert_eq!(game.play_move(3), Err(MoveError::GameAlreadyOver));
        assert_eq!(game.current_seat(), seat);
        assert_eq!(game.status(), GameStatus::Tie);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        // The sixteenth piece fills a 4x4 board and completes a diagonal.
        let mut game = GameSession::with_size("x", "o", 4, 4).unwrap();
        let report = play_all(
            &mut game,
            &[1, 0, 3, 2, 2, 1, 0, 2, 0, 1, 0, 1, 2, 3, 3, 3],
        );
        assert!(game.board().is_full());

        let (winner, line) = expect_win(report);
        assert_eq!(winner, Seat::Second);
        assert_eq!(line, coords(&[(0, 3), (1, 2), (2, 1), (3, 0)]));
        assert_eq!(game.status(), GameStatus::Won(Seat::Second));
    }
}
