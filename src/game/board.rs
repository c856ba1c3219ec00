use super::Marker;

/// Standard Connect Four dimensions.
pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of equal markers in a line that wins the game.
pub const LINE_LENGTH: usize = 4;

/// A single cell: a marker, or `None` when unoccupied.
pub type Cell = Option<Marker>;

/// A Connect Four grid stored as column stacks.
///
/// Each stack is bottom-first: index 0 is the first marker dropped into that
/// column, which sits on row 0. Rows are derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    row_count: usize,
    column_count: usize,
    columns: Vec<Vec<Marker>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("column {column} is out of bounds (board has {columns} columns)")]
    OutOfBounds { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected {expected} columns, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("column {column} holds {len} markers but the board has {rows} rows")]
    ColumnOverflow { column: usize, len: usize, rows: usize },
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            row_count: rows,
            column_count: columns,
            columns: vec![Vec::new(); columns],
        }
    }

    /// Create a board from existing column stacks (bottom-first).
    pub fn from_columns(rows: usize, columns: Vec<Vec<Marker>>) -> Result<Self, BoardError> {
        for (column, stack) in columns.iter().enumerate() {
            if stack.len() > rows {
                return Err(BoardError::ColumnOverflow {
                    column,
                    len: stack.len(),
                    rows,
                });
            }
        }

        Ok(Board {
            row_count: rows,
            column_count: columns.len(),
            columns,
        })
    }

    /// Like [`Board::from_columns`], but also checks the column count.
    pub fn with_columns(
        rows: usize,
        column_count: usize,
        columns: Vec<Vec<Marker>>,
    ) -> Result<Self, BoardError> {
        if columns.len() != column_count {
            return Err(BoardError::ColumnCountMismatch {
                expected: column_count,
                actual: columns.len(),
            });
        }
        Self::from_columns(rows, columns)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.columns.get(col)?.get(row).copied()
    }

    /// The markers in a column, bottom-first
    pub fn column(&self, col: usize) -> Option<&[Marker]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    pub fn column_height(&self, col: usize) -> usize {
        self.columns.get(col).map_or(0, Vec::len)
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.columns.get(col) {
            Some(stack) => stack.len() >= self.row_count,
            None => true,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.column_count).all(|col| self.is_column_full(col))
    }

    /// Total markers placed so far
    pub fn move_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Columns that can still take a marker
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.column_count)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a marker into a column, returns the row where it landed.
    ///
    /// On error the board is left untouched.
    pub fn place(&mut self, col: usize, marker: Marker) -> Result<usize, PlaceError> {
        let columns = self.column_count;
        let row_count = self.row_count;
        let stack = self
            .columns
            .get_mut(col)
            .ok_or(PlaceError::OutOfBounds { column: col, columns })?;
        if stack.len() >= row_count {
            return Err(PlaceError::ColumnFull(col));
        }

        stack.push(marker);
        Ok(stack.len() - 1)
    }

    /// Row projection: `row_count` rows of `column_count` cells, bottom row first.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.row_count)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|stack| stack.get(row).copied())
                    .collect()
            })
            .collect()
    }

    /// Diagonals running up and to the right (/).
    ///
    /// Starts from every bottom-row cell, then from every left-column cell
    /// above the bottom-left corner.
    pub fn ascending_diagonals(&self) -> Vec<Vec<Cell>> {
        let starts = (0..self.column_count)
            .map(|col| (0, col))
            .chain((1..self.row_count).map(|row| (row, 0)));

        starts
            .map(|(row, col)| {
                (0..)
                    .map(|step| (row + step, col + step))
                    .take_while(|&(r, c)| r < self.row_count && c < self.column_count)
                    .map(|(r, c)| self.get(r, c))
                    .collect()
            })
            .collect()
    }

    /// Diagonals running down and to the right (\).
    ///
    /// Starts from every top-row cell, then from every left-column cell below
    /// the top-left corner.
    pub fn descending_diagonals(&self) -> Vec<Vec<Cell>> {
        if self.row_count == 0 {
            return Vec::new();
        }
        let top = self.row_count - 1;
        let starts = (0..self.column_count)
            .map(|col| (top, col))
            .chain((0..top).rev().map(|row| (row, 0)));

        starts
            .map(|(row, col)| {
                (0..=row)
                    .map(|step| (row - step, col + step))
                    .take_while(|&(_, c)| c < self.column_count)
                    .map(|(r, c)| self.get(r, c))
                    .collect()
            })
            .collect()
    }

    /// The marker with a line of four, if any.
    ///
    /// Checks columns, then rows, then ascending and descending diagonals,
    /// and returns the first line found.
    pub fn winner(&self) -> Option<Marker> {
        self.columns
            .iter()
            .find_map(|stack| line_of_four(stack.iter().copied().map(Some)))
            .or_else(|| self.rows().into_iter().find_map(line_of_four))
            .or_else(|| self.ascending_diagonals().into_iter().find_map(line_of_four))
            .or_else(|| self.descending_diagonals().into_iter().find_map(line_of_four))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ROWS, COLS)
    }
}

/// Find [`LINE_LENGTH`] consecutive equal markers in a sequence of cells.
/// Empty cells break any run.
pub fn line_of_four<I>(cells: I) -> Option<Marker>
where
    I: IntoIterator<Item = Cell>,
{
    let mut run: Option<(Marker, usize)> = None;

    for cell in cells {
        run = match (cell, run) {
            (Some(marker), Some((prev, count))) if marker == prev => Some((marker, count + 1)),
            (Some(marker), _) => Some((marker, 1)),
            (None, _) => None,
        };

        if let Some((marker, count)) = run {
            if count >= LINE_LENGTH {
                return Some(marker);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use Marker::{O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.row_count(), ROWS);
        assert_eq!(board.column_count(), COLS);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), None);
            }
        }
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_place() {
        let mut board = Board::default();

        // First marker lands on the bottom row
        let row = board.place(3, X).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Some(X));

        // Second marker stacks on top
        let row = board.place(3, O).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Some(O));
        assert_eq!(board.column(3).unwrap(), &[X, O]);
    }

    #[test]
    fn test_column_fills_bottom_up_then_rejects() {
        let mut board = Board::default();
        let mut marker = X;

        for expected_row in 0..ROWS {
            assert_eq!(board.place(0, marker), Ok(expected_row));
            marker = marker.other();
        }

        assert!(board.is_column_full(0));
        let before = board.clone();
        assert_eq!(board.place(0, marker), Err(PlaceError::ColumnFull(0)));
        assert_eq!(board.column_height(0), ROWS);
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_column_leaves_board_unchanged() {
        let mut board = Board::default();
        board.place(2, X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(COLS, O),
            Err(PlaceError::OutOfBounds {
                column: COLS,
                columns: COLS
            })
        );
        assert_eq!(
            board.place(usize::MAX, O),
            Err(PlaceError::OutOfBounds {
                column: usize::MAX,
                columns: COLS
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place(col, X).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_legal_columns_skip_full() {
        let mut board = Board::new(2, 3);
        board.place(1, X).unwrap();
        board.place(1, O).unwrap();
        assert_eq!(board.legal_columns(), vec![0, 2]);
    }

    #[test]
    fn test_rows_of_empty_board() {
        let board = Board::default();
        let rows = board.rows();
        assert_eq!(rows.len(), ROWS);
        for row in &rows {
            assert_eq!(row, &vec![None; COLS]);
        }
    }

    #[test]
    fn test_rows_projection() {
        let mut board = Board::new(3, 3);
        board.place(0, X).unwrap();
        board.place(0, O).unwrap();
        board.place(2, O).unwrap();

        assert_eq!(
            board.rows(),
            vec![
                vec![Some(X), None, Some(O)],
                vec![Some(O), None, None],
                vec![None, None, None],
            ]
        );
    }

    #[test]
    fn test_rows_is_idempotent() {
        let mut board = Board::default();
        board.place(4, O).unwrap();
        board.place(5, X).unwrap();
        assert_eq!(board.rows(), board.rows());
    }

    #[test]
    fn test_from_columns() {
        let board = Board::with_columns(3, 2, vec![vec![X, O], vec![]]).unwrap();
        assert_eq!(board.get(1, 0), Some(O));
        assert_eq!(board.column_height(1), 0);

        assert_eq!(
            Board::with_columns(3, 2, vec![vec![X]]),
            Err(BoardError::ColumnCountMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            Board::from_columns(1, vec![vec![X, X]]),
            Err(BoardError::ColumnOverflow {
                column: 0,
                len: 2,
                rows: 1
            })
        );
    }

    #[test]
    fn test_diagonal_counts() {
        let board = Board::default();
        // Every bottom-row cell plus every left-column cell above the corner
        assert_eq!(board.ascending_diagonals().len(), COLS + ROWS - 1);
        assert_eq!(board.descending_diagonals().len(), COLS + ROWS - 1);
        // The longest diagonal from the bottom-left corner spans all six rows
        assert_eq!(board.ascending_diagonals()[0].len(), ROWS);
        assert_eq!(board.descending_diagonals()[0].len(), ROWS);
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(Board::default().winner(), None);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.place(0, X).unwrap();
        }
        assert_eq!(board.winner(), Some(X));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            board.place(col, X).unwrap();
        }
        assert_eq!(board.winner(), Some(X));
    }

    #[test]
    fn test_horizontal_win_on_upper_row() {
        let mut board = Board::default();
        for col in 2..6 {
            board.place(col, X).unwrap();
            board.place(col, O).unwrap();
        }
        // Bottom row is X X X X, so X wins first on the row scan
        assert_eq!(board.winner(), Some(X));

        let mut board = Board::default();
        for col in 2..6 {
            let bottom = if col % 2 == 0 { X } else { O };
            board.place(col, bottom).unwrap();
            board.place(col, O).unwrap();
        }
        assert_eq!(board.winner(), Some(O));
    }

    #[test]
    fn test_ascending_diagonal_win() {
        let mut board = Board::default();
        // Create diagonal / pattern
        board.place(0, O).unwrap();

        board.place(1, X).unwrap();
        board.place(1, O).unwrap();

        board.place(2, X).unwrap();
        board.place(2, X).unwrap();
        board.place(2, O).unwrap();

        board.place(3, X).unwrap();
        board.place(3, X).unwrap();
        board.place(3, O).unwrap();
        assert_eq!(board.winner(), None);

        board.place(3, O).unwrap();
        assert_eq!(board.winner(), Some(O));
    }

    #[test]
    fn test_ascending_diagonal_from_left_column() {
        // Starts at row 1 of column 0
        let board = Board::with_columns(
            ROWS,
            COLS,
            vec![
                vec![O, X],
                vec![O, O, X],
                vec![X, O, X, X],
                vec![O, X, X, O, X],
                vec![],
                vec![],
                vec![],
            ],
        )
        .unwrap();
        assert_eq!(board.winner(), Some(X));
    }

    #[test]
    fn test_descending_diagonal_win() {
        let mut board = Board::default();
        // Create diagonal \ pattern
        board.place(6, X).unwrap();

        board.place(5, O).unwrap();
        board.place(5, X).unwrap();

        board.place(4, O).unwrap();
        board.place(4, O).unwrap();
        board.place(4, X).unwrap();

        board.place(3, O).unwrap();
        board.place(3, O).unwrap();
        board.place(3, O).unwrap();
        assert_eq!(board.winner(), None);

        board.place(3, X).unwrap();
        assert_eq!(board.winner(), Some(X));
    }

    #[test]
    fn test_descending_diagonal_from_top_row() {
        // Runs from the top of column 1 down to row 2 of column 4
        let board = Board::with_columns(
            ROWS,
            COLS,
            vec![
                vec![],
                vec![X, O, X, O, X, O],
                vec![O, X, O, X, O],
                vec![X, O, X, O],
                vec![O, O, O],
                vec![],
                vec![],
            ],
        )
        .unwrap();
        assert_eq!(board.winner(), Some(O));
    }

    #[test]
    fn test_descending_diagonal_from_left_column() {
        // Runs from row 4 of column 0 down to row 1 of column 3
        let board = Board::with_columns(
            ROWS,
            COLS,
            vec![
                vec![O, X, O, O, X],
                vec![X, O, X, X],
                vec![O, O, X],
                vec![X, X],
                vec![],
                vec![],
                vec![],
            ],
        )
        .unwrap();

        // First start below the top-left corner
        let diagonal = &board.descending_diagonals()[COLS];
        assert_eq!(diagonal, &vec![Some(X), Some(X), Some(X), Some(X), None]);
        assert_eq!(board.winner(), Some(X));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.place(col, X).unwrap();
        }
        for _ in 0..3 {
            board.place(6, O).unwrap();
        }
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_gap_breaks_run() {
        let cells = vec![Some(X), Some(X), None, Some(X), Some(X)];
        assert_eq!(line_of_four(cells), None);

        let cells = vec![Some(O), Some(X), Some(X), Some(X), Some(X)];
        assert_eq!(line_of_four(cells), Some(X));
    }

    #[test]
    fn test_small_board_cannot_win() {
        let mut board = Board::new(3, 3);
        for col in 0..3 {
            for _ in 0..3 {
                board.place(col, X).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }
}
