//! One-ply heuristic play used by the easier difficulty tiers.

use log::debug;

use crate::board::{Board, Player, CENTER_FIRST_ORDER};

/// Returns a column that completes four in a row for `ai_player`, else one
/// that stops the opponent from completing theirs, else the most central
/// playable column. Candidates are always tried in center-first order.
pub fn greedy_column(board: &Board, ai_player: Player) -> Option<usize> {
    if let Some(col) = winning_drop(board, ai_player) {
        debug!("greedy: winning in column {}", col);
        return Some(col);
    }

    if let Some(col) = winning_drop(board, ai_player.opposite()) {
        debug!("greedy: blocking column {}", col);
        return Some(col);
    }

    CENTER_FIRST_ORDER
        .into_iter()
        .find(|&col| board.is_column_playable(col))
}

/// First column, in center-first order, where dropping a piece for `player`
/// would win immediately.
pub fn winning_drop(board: &Board, player: Player) -> Option<usize> {
    CENTER_FIRST_ORDER.into_iter().find(|&col| {
        board
            .lowest_empty_row(col)
            .map_or(false, |row| board.has_win_at(row, col, player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect_four_position;

    #[test]
    fn test_takes_the_win() {
        let board = connect_four_position! {
            .......
            .......
            .......
            O......
            O......
            O.XX...
        };

        assert_eq!(Some(0), greedy_column(&board, Player::Two));
    }

    #[test]
    fn test_prefers_winning_over_blocking() {
        let board = connect_four_position! {
            .......
            .......
            .......
            ......O
            ......O
            XXX...O
        };

        assert_eq!(Some(6), greedy_column(&board, Player::Two));
        assert_eq!(Some(3), greedy_column(&board, Player::One));
    }

    #[test]
    fn test_blocks_the_opponent() {
        let board = connect_four_position! {
            .......
            .......
            .......
            .......
            OO.....
            XXX....
        };

        assert_eq!(Some(3), greedy_column(&board, Player::Two));
    }

    #[test]
    fn test_wins_are_searched_center_first() {
        // Player two can win in column 1 (vertical) and column 6 (horizontal).
        let board = connect_four_position! {
            .......
            .......
            .......
            .O.....
            .O.....
            XOXOOO.
        };

        assert_eq!(None, winning_drop(&board, Player::One));
        assert_eq!(Some(1), winning_drop(&board, Player::Two));
    }

    #[test]
    fn test_falls_back_to_the_center() {
        assert_eq!(Some(3), greedy_column(&Board::new(), Player::One));

        let board = connect_four_position! {
            ...O...
            ...X...
            ...O...
            ...X...
            ...O...
            ...X...
        };
        assert_eq!(Some(2), greedy_column(&board, Player::One));
    }

    #[test]
    fn test_full_board_has_no_column() {
        let board: Board = "XXOOXXO/OOXXOOX/XXOOXXO/OOXXOOX/XXOOXXO/OOXXOOX"
            .parse()
            .unwrap();
        assert_eq!(None, greedy_column(&board, Player::One));
    }
}
