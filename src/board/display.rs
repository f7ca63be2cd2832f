use super::{Board, COLS, ROWS};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..ROWS {
            let cells: Vec<String> = (0..COLS)
                .map(|col| {
                    self.get(row, col)
                        .map_or('.', |player| player.to_char())
                        .to_string()
                })
                .collect();
            writeln!(f, "| {} |", cells.join(" "))?;
        }
        let labels: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
        write!(f, "  {}", labels.join(" "))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board({})", self.to_position_string())
    }
}

#[macro_export]
macro_rules! connect_four_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(cells.len(), 42, "Invalid number of cells. Expected 42, got {}", cells.len());
        // Row-major from the top row, the way the board is printed.
        for (i, &c) in cells.iter().enumerate() {
            let player = match c {
                '.' => continue,
                'X' => $crate::board::Player::One,
                'O' => $crate::board::Player::Two,
                _ => panic!("Invalid character in connect four position"),
            };
            board
                .place_piece(i / $crate::board::COLS, i % $crate::board::COLS, player)
                .unwrap();
        }
        board
    }};
}
