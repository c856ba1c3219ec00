use tracing::{debug, info};

use super::{Board, Marker, PlaceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Won(Marker),
    Draw,
}

impl Phase {
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Place(#[from] PlaceError),
}

/// One game of Connect Four: the board, whose turn it is, and the column the
/// current player is pointing at.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectFour {
    board: Board,
    first_marker: Marker,
    current_marker: Marker,
    selected_column: usize,
    phase: Phase,
}

impl ConnectFour {
    /// Create a game on an empty `rows` x `columns` board
    pub fn new(rows: usize, columns: usize, first_marker: Marker) -> Self {
        ConnectFour {
            board: Board::new(rows, columns),
            first_marker,
            current_marker: first_marker,
            selected_column: 0,
            phase: Phase::NotStarted,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker that drops next
    pub fn current_marker(&self) -> Marker {
        self.current_marker
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Marker> {
        match self.phase {
            Phase::Won(marker) => Some(marker),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn move_left(&mut self) {
        self.selected_column = self.selected_column.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let last = self.board.column_count().saturating_sub(1);
        if self.selected_column < last {
            self.selected_column += 1;
        }
    }

    /// Drop the current marker into the selected column
    pub fn drop_piece(&mut self) -> Result<Phase, MoveError> {
        self.drop_in(self.selected_column)
    }

    /// Drop the current marker into `column` and advance the game.
    ///
    /// The winner is checked against the board after the move lands.
    pub fn drop_in(&mut self, column: usize) -> Result<Phase, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let marker = self.current_marker;
        let row = self.board.place(column, marker)?;
        debug!(%marker, column, row, "marker placed");

        self.phase = if let Some(winner) = self.board.winner() {
            info!(%winner, moves = self.board.move_count(), "game won");
            Phase::Won(winner)
        } else if self.board.is_full() {
            info!(moves = self.board.move_count(), "game drawn");
            Phase::Draw
        } else {
            Phase::InProgress
        };

        self.current_marker = marker.other();
        Ok(self.phase)
    }

    /// Discard the board and start over
    pub fn reset(&mut self) {
        *self = ConnectFour::new(
            self.board.row_count(),
            self.board.column_count(),
            self.first_marker,
        );
        debug!("connect four reset");
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        ConnectFour::new(super::ROWS, super::COLS, Marker::X)
    }
}
