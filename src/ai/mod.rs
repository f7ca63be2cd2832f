//! Column selection for the computer player.
//!
//! Every decision first rolls against the profile's random-move chance, which
//! keeps the easier tiers beatable. Otherwise the profile's strategy picks the
//! column: a one-ply greedy check for the easier tiers and a full alpha-beta
//! search for the hard tier. If the strategy comes back empty-handed the AI
//! falls back to a random legal column.

pub mod difficulty;
pub mod greedy;
pub mod random;

use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchContext, DEFAULT_TT_CAPACITY};
use crate::board::{Board, Player};
use crate::connect_four_search::search_best_column;

pub use difficulty::{Difficulty, DifficultyError, DifficultyProfile, Strategy};
pub use greedy::greedy_column;
pub use random::random_column;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("no legal move: the board is full")]
    NoLegalMove,
}

/// A computer player: a difficulty profile plus the search context (and
/// transposition table) reused across its decisions.
pub struct AiPlayer {
    profile: DifficultyProfile,
    search_context: SearchContext,
}

impl AiPlayer {
    pub fn new(profile: DifficultyProfile) -> Self {
        Self::with_cache_capacity(profile, DEFAULT_TT_CAPACITY)
    }

    /// A capacity of zero turns the transposition table off.
    pub fn with_cache_capacity(profile: DifficultyProfile, cache_capacity: usize) -> Self {
        let search_context =
            SearchContext::with_tt_capacity(profile.look_ahead_depth(), cache_capacity);
        Self {
            profile,
            search_context,
        }
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn set_profile(&mut self, profile: DifficultyProfile) {
        self.search_context
            .set_search_depth(profile.look_ahead_depth());
        self.profile = profile;
    }

    pub fn search_context(&self) -> &SearchContext {
        &self.search_context
    }

    /// Chooses a column for `ai_player` using the thread-local RNG.
    pub fn select_move(&mut self, board: &Board, ai_player: Player) -> Result<usize, AiError> {
        self.select_move_with_rng(board, ai_player, &mut rand::thread_rng())
    }

    /// Chooses a column for `ai_player`. Deterministic for a seeded `rng`.
    pub fn select_move_with_rng<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        ai_player: Player,
        rng: &mut R,
    ) -> Result<usize, AiError> {
        self.search_context.reset_stats();

        if board.legal_columns().is_empty() {
            return Err(AiError::NoLegalMove);
        }

        let roll: f64 = rng.gen();
        if roll < self.profile.random_move_chance() {
            let col = random_column(board, rng).ok_or(AiError::NoLegalMove)?;
            debug!(
                "{}: random move in column {} (rolled {:.3})",
                self.profile.name(),
                col,
                roll
            );
            return Ok(col);
        }

        debug!(
            "{}: choosing a {} move for {}",
            self.profile.name(),
            self.profile.strategy(),
            ai_player
        );
        let strategic = match self.profile.strategy() {
            Strategy::Greedy => greedy_column(board, ai_player),
            Strategy::Minimax => self.minimax_column(board, ai_player),
        };

        match strategic {
            Some(col) => Ok(col),
            None => {
                warn!(
                    "{}: no strategic column found, playing randomly",
                    self.profile.name()
                );
                random_column(board, rng).ok_or(AiError::NoLegalMove)
            }
        }
    }

    fn minimax_column(&mut self, board: &Board, ai_player: Player) -> Option<usize> {
        self.search_context
            .set_search_depth(self.profile.look_ahead_depth());

        match search_best_column(&mut self.search_context, board, ai_player) {
            Ok(col) => Some(col),
            Err(error) => {
                warn!("{}: search failed: {}", self.profile.name(), error);
                None
            }
        }
    }
}

/// One-off decision with a call-scoped cache.
pub fn select_move(
    board: &Board,
    ai_player: Player,
    profile: &DifficultyProfile,
) -> Result<usize, AiError> {
    AiPlayer::new(profile.clone()).select_move(board, ai_player)
}
