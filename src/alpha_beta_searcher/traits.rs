//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

use crate::evaluate::Score;

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone {
    /// Returns a key that uniquely identifies the position for transposition
    /// table lookups. Unlike a hash, two different positions never share a key.
    fn position_key(&self) -> u128;

    /// Returns true if the current player is the maximizing player.
    fn is_maximizing_player(&self) -> bool;

    /// Switches to the next player's turn.
    fn toggle_turn(&mut self);
}

/// Represents an action that can be applied to and undone from a game state.
pub trait GameMove: Clone + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Applies this move to the given state.
    fn apply(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Undoes this move on the given state.
    fn undo(&self, state: &mut Self::State) -> Result<(), Self::Error>;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState> {
    type Move: GameMove<State = S>;

    /// Generates all legal moves for the current player. An empty list means
    /// the game cannot continue and the position is scored statically.
    fn generate_moves(&self, state: &S) -> Vec<Self::Move>;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState> {
    /// Evaluates the given state. Higher scores favor the maximizing player.
    fn evaluate(&self, state: &S, remaining_depth: u8) -> Score;

    /// Returns the score of a position that is already decided. Checked at
    /// every node before the depth limit, so decided positions are recognized
    /// even at the search horizon.
    /// Default implementation returns None (no early termination).
    fn terminal_score(&self, _state: &S, _remaining_depth: u8) -> Option<Score> {
        None
    }
}

/// Orders moves to improve alpha-beta pruning efficiency.
pub trait MoveOrderer<S: GameState, M> {
    /// Sorts moves in-place, placing "better" moves first. The order also
    /// decides ties at the root: the first of several equally scored moves wins.
    fn order_moves(&self, moves: &mut [M], state: &S);
}

/// A no-op move orderer for games without move ordering heuristics.
#[derive(Clone, Default, Debug)]
pub struct NoOpMoveOrderer;

impl<S: GameState, M> MoveOrderer<S, M> for NoOpMoveOrderer {
    #[inline(always)]
    fn order_moves(&self, _moves: &mut [M], _state: &S) {}
}
