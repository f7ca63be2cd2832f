pub mod error;
pub mod player;
pub mod position;
pub mod winning_line;

mod display;

pub use error::BoardError;
pub use player::Player;
pub use winning_line::{Axis, WinningLine};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COLUMN: usize = 3;
pub const WINNING_LENGTH: usize = 4;

/// Columns ordered from the middle of the board outwards. Center columns take
/// part in more potential lines, so they are tried first.
pub const CENTER_FIRST_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// A 6x7 Connect Four grid. Row 0 is the top row and row 5 the bottom one.
///
/// Callers normally mutate the board with `drop_piece`, which respects gravity.
/// `place_piece` and `remove_piece` write individual cells and leave gravity to
/// the caller, which lets the search probe and undo hypothetical moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Player>; COLS]; ROWS],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the piece at the given cell, or `None` for empty and
    /// out-of-bounds cells.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied().flatten()
    }

    pub fn is_valid_position(row: isize, col: isize) -> bool {
        (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col)
    }

    /// Scans `col` from the bottom row up and returns the first empty row.
    /// `None` means the column is full (or does not exist).
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }

        (0..ROWS).rev().find(|&row| self.cells[row][col].is_none())
    }

    /// Row of the topmost piece in `col`, if the column holds any.
    pub fn top_piece_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }

        (0..ROWS).find(|&row| self.cells[row][col].is_some())
    }

    pub fn is_column_playable(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_some()
    }

    /// Playable columns in natural order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_column_playable(col)).collect()
    }

    pub fn place_piece(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        let cell = self.cell_mut(row, col)?;
        *cell = Some(player);
        Ok(())
    }

    pub fn remove_piece(&mut self, row: usize, col: usize) -> Result<Option<Player>, BoardError> {
        let cell = self.cell_mut(row, col)?;
        Ok(cell.take())
    }

    /// Drops a piece into `col`, where it lands on the lowest empty row.
    /// Returns the row the piece landed on.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        if col >= COLS {
            return Err(BoardError::ColumnOutOfRange { col });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(BoardError::ColumnFull { col })?;
        self.cells[row][col] = Some(player);
        Ok(row)
    }

    /// Pieces settle from the bottom up, so a full top row means a full board.
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(Option::is_some)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Iterates over every occupied cell in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|player| (row, col, player)))
        })
    }

    /// Canonical key of the cell contents: two bits per cell, row-major.
    /// Distinct boards always produce distinct keys.
    pub fn position_key(&self) -> u128 {
        self.cells.iter().flatten().fold(0u128, |key, cell| {
            let bits = match cell {
                None => 0,
                Some(Player::One) => 1,
                Some(Player::Two) => 2,
            };
            (key << 2) | bits
        })
    }

    /// The board reflected left to right.
    pub fn mirrored(&self) -> Self {
        let mut mirrored = *self;
        for row in mirrored.cells.iter_mut() {
            row.reverse();
        }
        mirrored
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Option<Player>, BoardError> {
        self.cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(BoardError::PositionOutOfBounds { row, col })
    }
}
