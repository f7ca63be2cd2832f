use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Column {col} does not exist, columns are numbered 0 through 6")]
    ColumnOutOfRange { col: usize },
    #[error("Cell ({row}, {col}) is outside of the 6x7 board")]
    PositionOutOfBounds { row: usize, col: usize },
    #[error("Cannot drop a piece into column {col}, it is already full")]
    ColumnFull { col: usize },
    #[error("Cannot lift a piece out of column {col}, it is empty")]
    ColumnEmpty { col: usize },
    #[error("Invalid position: {reason}")]
    InvalidPosition { reason: String },
    #[error("The piece at ({row}, {col}) is floating above an empty cell")]
    FloatingPiece { row: usize, col: usize },
}
