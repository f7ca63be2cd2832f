//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Moves that fall outside this window can be
//! pruned without affecting the final result. The algorithm guarantees finding the same move as
//! minimax but explores fewer nodes.
//!
//! The search is fail-soft: a node whose best score falls outside its window returns that score
//! rather than clamping it to the window edge. Scores strictly inside the window are exact.
//!
//! # Root Selection
//!
//! Root moves are visited in the order produced by the `MoveOrderer`, and a later move only
//! replaces the current best when it scores strictly better. Among equally scored moves the
//! first one visited is chosen.
//!
//! # Transposition Table
//!
//! Caches node results by (position key, remaining depth, side to move). Each entry records
//! whether its score is exact or only a lower / upper bound, so a result produced by a cutoff is
//! never reused as an exact score. With this rule the table changes how much is searched, never
//! which move is returned.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use super::transposition_table::{BoundType, TTKey, TranspositionTable};
use super::{Evaluator, GameMove, GameState, MoveGenerator, MoveOrderer};
use crate::evaluate::Score;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("move could not be applied during search: {reason}")]
    InvalidMove { reason: String },
}

/// Statistics collected during search.
#[derive(Default)]
struct SearchStats {
    position_count: usize,
    cutoff_count: usize,
    tt_stores: usize,
    last_score: Option<Score>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: Score, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

/// Search configuration, statistics and transposition table for a sequence of searches.
pub struct SearchContext {
    depth: u8,
    stats: SearchStats,
    transposition_table: TranspositionTable,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
            transposition_table: TranspositionTable::default(),
        }
    }

    pub fn with_tt_capacity(depth: u8, capacity: usize) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
            transposition_table: TranspositionTable::new(capacity),
        }
    }

    /// Clears statistics and the transposition table. Called at the start of
    /// every independent search so cached scores never leak between them.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.transposition_table.clear();
    }

    pub fn search_depth(&self) -> u8 {
        self.depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        if depth != self.depth {
            self.transposition_table.clear();
        }
        self.depth = depth;
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoff_count
    }

    pub fn last_score(&self) -> Option<Score> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn tt_hits(&self) -> usize {
        self.transposition_table.hits()
    }

    pub fn tt_misses(&self) -> usize {
        self.transposition_table.misses()
    }

    pub fn tt_stores(&self) -> usize {
        self.stats.tt_stores
    }

    pub fn tt_size(&self) -> usize {
        self.transposition_table.size()
    }

    pub fn tt_capacity(&self) -> usize {
        self.transposition_table.capacity()
    }

    fn store(&mut self, key: TTKey, score: Score, bound_type: BoundType) {
        if self.transposition_table.is_enabled() {
            self.stats.tt_stores += 1;
        }
        self.transposition_table.store(key, score, bound_type);
    }
}

/// Applies a move, executes a closure with the new state, then undoes the move.
/// Handles turn toggling automatically.
fn with_move_applied<S, M, F, R>(game_move: &M, state: &mut S, f: F) -> Result<R, SearchError>
where
    S: GameState,
    M: GameMove<State = S>,
    F: FnOnce(&mut S) -> Result<R, SearchError>,
{
    game_move.apply(state).map_err(|error| SearchError::InvalidMove {
        reason: format!("apply {:?}: {:?}", game_move, error),
    })?;
    state.toggle_turn();

    let result = f(state);

    game_move.undo(state).map_err(|error| SearchError::InvalidMove {
        reason: format!("undo {:?}: {:?}", game_move, error),
    })?;
    state.toggle_turn();

    result
}

/// Updates best score and move if new score is strictly better.
/// Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: Score,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut Score,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = if maximizing_player {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better || best_move.is_none() {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

/// Searches for the best move using alpha-beta pruning to the context's depth.
///
/// # Returns
///
/// - `Ok(best_move)` - The best move found, ties going to the earliest move in
///   the order chosen by `move_orderer`
/// - `Err(SearchError::DepthTooLow)` - If search depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If no legal moves available
#[must_use = "search returns the best move found"]
pub fn alpha_beta_search<S, G, E, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
) -> Result<G::Move, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let depth = context.search_depth();
    debug!("alpha-beta search depth: {}", depth);

    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    let start = Instant::now();
    let maximizing_player = state.is_maximizing_player();
    let mut candidates = move_generator.generate_moves(state);

    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    move_orderer.order_moves(&mut candidates, state);

    let (best_score, best_move) = search_root(
        context,
        state,
        move_generator,
        evaluator,
        move_orderer,
        &candidates,
        depth,
        maximizing_player,
    )?;
    let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;

    context.stats.record_result(best_score, start.elapsed());
    debug!(
        "best move {:?} (score {}), {} positions searched, {} cutoffs, {} tt hits",
        best_move,
        best_score,
        context.searched_position_count(),
        context.cutoff_count(),
        context.tt_hits()
    );

    Ok(best_move)
}

#[allow(clippy::too_many_arguments)]
fn search_root<S, G, E, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    candidates: &[G::Move],
    depth: u8,
    maximizing_player: bool,
) -> Result<(Score, Option<G::Move>), SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let mut best_score = if maximizing_player {
        Score::MIN
    } else {
        Score::MAX
    };
    let mut best_move = None;
    let mut alpha = Score::MIN;
    let mut beta = Score::MAX;

    for game_move in candidates {
        // Once a best score is known, later moves only need to prove whether
        // they beat it, which lets their subtrees prune against it.
        let score = with_move_applied(game_move, state, |state| {
            alpha_beta_minimax(
                context,
                state,
                move_generator,
                evaluator,
                move_orderer,
                depth - 1,
                alpha,
                beta,
                !maximizing_player,
            )
        })?;
        debug!("root move {:?} scored {}", game_move, score);

        update_best(
            score,
            game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );

        if maximizing_player {
            alpha = max(alpha, score);
        } else {
            beta = min(beta, score);
        }
    }

    Ok((best_score, best_move))
}

/// Minimax search with alpha-beta pruning.
///
/// Decided positions are scored first, then positions at the horizon (or
/// without moves) are evaluated statically. Otherwise every move is searched
/// until the window closes (`beta <= alpha`).
#[allow(clippy::too_many_arguments)]
fn alpha_beta_minimax<S, G, E, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing_player: bool,
) -> Result<Score, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    context.stats.position_count += 1;

    if let Some(score) = evaluator.terminal_score(state, depth) {
        return Ok(score);
    }

    if depth == 0 {
        return Ok(evaluator.evaluate(state, depth));
    }

    let key = TTKey {
        position: state.position_key(),
        depth,
        maximizing: maximizing_player,
    };
    if let Some(score) = context.transposition_table.probe(key, alpha, beta) {
        return Ok(score);
    }

    let mut candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Ok(evaluator.evaluate(state, depth));
    }
    move_orderer.order_moves(&mut candidates, state);

    let original_alpha = alpha;
    let original_beta = beta;
    let mut best_score = if maximizing_player {
        Score::MIN
    } else {
        Score::MAX
    };

    for game_move in candidates.iter() {
        let score = with_move_applied(game_move, state, |state| {
            alpha_beta_minimax(
                context,
                state,
                move_generator,
                evaluator,
                move_orderer,
                depth - 1,
                alpha,
                beta,
                !maximizing_player,
            )
        })?;

        if maximizing_player {
            best_score = max(best_score, score);
            alpha = max(alpha, score);
        } else {
            best_score = min(best_score, score);
            beta = min(beta, score);
        }

        if beta <= alpha {
            context.stats.cutoff_count += 1;
            break;
        }
    }

    let bound_type = if best_score <= original_alpha {
        BoundType::Upper
    } else if best_score >= original_beta {
        BoundType::Lower
    } else {
        BoundType::Exact
    };
    context.store(key, best_score, bound_type);

    Ok(best_score)
}
