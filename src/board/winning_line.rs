use super::{Board, Player, WINNING_LENGTH};

/// The four lines a connection can run along, in the order they are checked.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Row and column grow together (top-left to bottom-right).
    Diagonal,
    /// Row grows while column shrinks (top-right to bottom-left).
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// The two (row, col) steps walked outward from a cell along this axis.
    pub fn directions(&self) -> [(isize, isize); 2] {
        match self {
            Axis::Horizontal => [(0, 1), (0, -1)],
            Axis::Vertical => [(1, 0), (-1, 0)],
            Axis::Diagonal => [(1, 1), (-1, -1)],
            Axis::AntiDiagonal => [(1, -1), (-1, 1)],
        }
    }

    /// The same axis seen on a left-to-right mirrored board.
    pub fn mirrored(&self) -> Self {
        match self {
            Axis::Diagonal => Axis::AntiDiagonal,
            Axis::AntiDiagonal => Axis::Diagonal,
            axis => *axis,
        }
    }
}

/// A run of four or more connected pieces, reported for highlighting.
///
/// `cells` starts with the cell the check was made from, followed by the
/// cells found walking the first direction of the axis, then the second.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WinningLine {
    pub player: Player,
    pub axis: Axis,
    pub cells: Vec<(usize, usize)>,
}

impl WinningLine {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

impl Board {
    /// Checks whether `player` has four in a row through (row, col). The cell
    /// itself always counts for `player`, so this also answers "would a piece
    /// placed here win" without touching the board.
    ///
    /// Axes are checked in `Axis::ALL` order and the first winning one is
    /// reported.
    pub fn check_win_at(&self, row: usize, col: usize, player: Player) -> Option<WinningLine> {
        Axis::ALL.iter().find_map(|&axis| {
            let cells = self.run_along(row, col, player, axis);

            (cells.len() >= WINNING_LENGTH).then(|| WinningLine {
                player,
                axis,
                cells,
            })
        })
    }

    /// The connected run of `player`'s cells through (row, col) on one axis:
    /// the cell itself, then each direction of the axis walked outward.
    pub fn run_along(
        &self,
        row: usize,
        col: usize,
        player: Player,
        axis: Axis,
    ) -> Vec<(usize, usize)> {
        let mut cells = vec![(row, col)];
        for direction in axis.directions() {
            cells.extend(self.walk(row, col, player, direction));
        }
        cells
    }

    /// Allocation-free form of `check_win_at`, used by the search.
    pub fn has_win_at(&self, row: usize, col: usize, player: Player) -> bool {
        Axis::ALL.iter().any(|axis| {
            let count: usize = axis
                .directions()
                .iter()
                .map(|&direction| self.walk(row, col, player, direction).count())
                .sum();
            count + 1 >= WINNING_LENGTH
        })
    }

    /// Cells owned by `player` reached by stepping from (row, col) in
    /// `direction`, stopping at the first cell that is not theirs.
    fn walk(
        &self,
        row: usize,
        col: usize,
        player: Player,
        (row_step, col_step): (isize, isize),
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..)
            .map(move |distance| {
                (
                    row as isize + row_step * distance,
                    col as isize + col_step * distance,
                )
            })
            .take_while(move |&(r, c)| {
                Board::is_valid_position(r, c) && self.get(r as usize, c as usize) == Some(player)
            })
            .map(|(r, c)| (r as usize, c as usize))
    }
}
