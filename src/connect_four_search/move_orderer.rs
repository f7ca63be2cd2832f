//! Center-first move ordering for Connect Four.

use crate::alpha_beta_searcher::MoveOrderer;
use crate::board::CENTER_FIRST_ORDER;

use super::implementation::{DropMove, SearchPosition};

/// Orders drops as 3, 2, 4, 1, 5, 0, 6. Central drops take part in more lines
/// and tend to refute other moves early, and at the root this order also
/// decides which of several equally scored columns is played.
#[derive(Clone, Default, Debug)]
pub struct CenterFirstMoveOrderer;

impl MoveOrderer<SearchPosition, DropMove> for CenterFirstMoveOrderer {
    #[inline]
    fn order_moves(&self, moves: &mut [DropMove], _state: &SearchPosition) {
        moves.sort_by_key(|drop| center_rank(drop.column));
    }
}

fn center_rank(column: usize) -> usize {
    CENTER_FIRST_ORDER
        .iter()
        .position(|&col| col == column)
        .unwrap_or(CENTER_FIRST_ORDER.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Player};

    #[test]
    fn test_orders_center_first() {
        let position = SearchPosition::new(Board::new(), Player::Two, Player::Two);
        let mut moves: Vec<DropMove> = (0..7).map(DropMove::new).collect();

        CenterFirstMoveOrderer.order_moves(&mut moves, &position);

        let columns: Vec<usize> = moves.iter().map(|drop| drop.column).collect();
        assert_eq!(vec![3, 2, 4, 1, 5, 0, 6], columns);
    }

    #[test]
    fn test_keeps_only_given_columns() {
        let position = SearchPosition::new(Board::new(), Player::Two, Player::Two);
        let mut moves = vec![DropMove::new(6), DropMove::new(0), DropMove::new(4)];

        CenterFirstMoveOrderer.order_moves(&mut moves, &position);

        let columns: Vec<usize> = moves.iter().map(|drop| drop.column).collect();
        assert_eq!(vec![4, 0, 6], columns);
    }
}
