use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;

/// Picks uniformly among the columns that still have room.
pub fn random_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.legal_columns().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_only_returns_legal_columns() {
        let board: Board = "XOXO.OX/OXOX.XO/XOXO.OX/OXOX.XO/XOXO.OX/OXOXXXO"
            .parse()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            assert_eq!(Some(4), random_column(&board, &mut rng));
        }
    }

    #[test]
    fn test_full_board_has_no_column() {
        let mut board = Board::new();
        let mut player = Player::One;
        for col in 0..7 {
            for _ in 0..6 {
                board.drop_piece(col, player).unwrap();
                player = player.opposite();
            }
        }
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(None, random_column(&board, &mut rng));
    }
}
