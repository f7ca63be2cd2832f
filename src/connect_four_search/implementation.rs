//! Connect Four trait implementations for the alpha-beta search.

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, SearchContext, SearchError,
};
use crate::board::{Board, BoardError, Player};
use crate::evaluate::{self, Score};

use super::move_orderer::CenterFirstMoveOrderer;

/// A scratch board searched in place, together with the side to move and the
/// side the search is playing for. The AI is always the maximizing player.
#[derive(Clone, Debug)]
pub struct SearchPosition {
    board: Board,
    to_move: Player,
    ai_player: Player,
}

impl SearchPosition {
    pub fn new(board: Board, to_move: Player, ai_player: Player) -> Self {
        Self {
            board,
            to_move,
            ai_player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn ai_player(&self) -> Player {
        self.ai_player
    }
}

impl GameState for SearchPosition {
    #[inline]
    fn position_key(&self) -> u128 {
        self.board.position_key()
    }

    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.to_move == self.ai_player
    }

    #[inline]
    fn toggle_turn(&mut self) {
        self.to_move = self.to_move.opposite();
    }
}

/// Dropping a piece for the side to move into `column`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropMove {
    pub column: usize,
}

impl DropMove {
    pub fn new(column: usize) -> Self {
        Self { column }
    }
}

impl GameMove for DropMove {
    type State = SearchPosition;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &mut SearchPosition) -> Result<(), BoardError> {
        state.board.drop_piece(self.column, state.to_move)?;
        Ok(())
    }

    /// Lifts the top piece back out of the column.
    #[inline]
    fn undo(&self, state: &mut SearchPosition) -> Result<(), BoardError> {
        let row = state
            .board
            .top_piece_row(self.column)
            .ok_or(BoardError::ColumnEmpty { col: self.column })?;
        state.board.remove_piece(row, self.column)?;
        Ok(())
    }
}

/// Produces one drop per playable column, in natural column order.
#[derive(Clone, Default)]
pub struct ConnectFourMoveGenerator;

impl MoveGenerator<SearchPosition> for ConnectFourMoveGenerator {
    type Move = DropMove;

    #[inline]
    fn generate_moves(&self, state: &SearchPosition) -> Vec<DropMove> {
        state
            .board
            .legal_columns()
            .into_iter()
            .map(DropMove::new)
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct ConnectFourEvaluator;

impl Evaluator<SearchPosition> for ConnectFourEvaluator {
    #[inline]
    fn evaluate(&self, state: &SearchPosition, _remaining_depth: u8) -> Score {
        evaluate::score(&state.board, state.ai_player)
    }

    #[inline]
    fn terminal_score(&self, state: &SearchPosition, remaining_depth: u8) -> Option<Score> {
        evaluate::terminal_score(&state.board, state.ai_player, remaining_depth)
    }
}

/// Searches for the column `ai_player` should play, to the context's depth.
/// Clears the context's statistics and transposition table first.
pub fn search_best_column(
    context: &mut SearchContext,
    board: &Board,
    ai_player: Player,
) -> Result<usize, SearchError> {
    context.reset_stats();

    let mut position = SearchPosition::new(*board, ai_player, ai_player);
    let best_move = alpha_beta_search(
        context,
        &mut position,
        &ConnectFourMoveGenerator,
        &ConnectFourEvaluator,
        &CenterFirstMoveOrderer,
    )?;

    Ok(best_move.column)
}
