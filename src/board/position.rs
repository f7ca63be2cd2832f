//! Text form of a board: six rows from top to bottom separated by `/`, seven
//! characters each, `.` for an empty cell, `X` for player one and `O` for
//! player two.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Board, BoardError, Player, COLS, ROWS};

pub const EMPTY_POSITION: &str = "......./......./......./......./......./.......";

static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[.XOxo]{7}(/[.XOxo]{7}){5}$").expect("POSITION_RE regex should be valid")
});

/// Parses a position string, rejecting boards where a piece sits above an
/// empty cell.
pub fn parse_position(position: &str) -> Result<Board, BoardError> {
    let position = position.trim();
    if !POSITION_RE.is_match(position) {
        return Err(BoardError::InvalidPosition {
            reason: format!(
                "expected {} rows of {} cells separated by '/', got {:?}",
                ROWS, COLS, position
            ),
        });
    }

    let mut board = Board::new();
    for (row, cells) in position.split('/').enumerate() {
        for (col, c) in cells.chars().enumerate() {
            if let Some(player) = Player::from_char(c) {
                board.place_piece(row, col, player)?;
            }
        }
    }

    validate_gravity(&board)?;
    Ok(board)
}

fn validate_gravity(board: &Board) -> Result<(), BoardError> {
    for col in 0..COLS {
        for row in 0..ROWS - 1 {
            if board.get(row, col).is_some() && board.get(row + 1, col).is_none() {
                return Err(BoardError::FloatingPiece { row, col });
            }
        }
    }
    Ok(())
}

impl Board {
    pub fn to_position_string(&self) -> String {
        (0..ROWS)
            .map(|row| {
                (0..COLS)
                    .map(|col| self.get(row, col).map_or('.', |player| player.to_char()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

// used for parsing cli args
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        parse_position(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect_four_position;

    #[test]
    fn test_parse_empty_position() {
        assert_eq!(Board::new(), parse_position(EMPTY_POSITION).unwrap());
    }

    #[test]
    fn test_parse_position() {
        let board: Board = "......./......./......./......./...o.../..xXo.."
            .parse()
            .unwrap();
        let expected = connect_four_position! {
            .......
            .......
            .......
            .......
            ...O...
            ..XXO..
        };
        assert_eq!(expected, board);
    }

    #[test]
    fn test_position_string_round_trip() {
        let board = connect_four_position! {
            .......
            .......
            ......O
            X.....X
            XO...OX
            OXOXXOX
        };
        let position = board.to_position_string();
        assert_eq!(
            "......./......./......O/X.....X/XO...OX/OXOXXOX",
            position
        );
        assert_eq!(board, position.parse().unwrap());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        for bad in [
            "",
            "......./......./......./......./.......",
            "......./......./......./......./......./......",
            "......./......./......./......./......./......Z",
        ] {
            assert!(matches!(
                parse_position(bad),
                Err(BoardError::InvalidPosition { .. })
            ));
        }
    }

    #[test]
    fn test_parse_rejects_floating_piece() {
        assert_eq!(
            Err(BoardError::FloatingPiece { row: 3, col: 2 }),
            parse_position("......./......./......./..X..../......./..O....")
        );
    }
}
