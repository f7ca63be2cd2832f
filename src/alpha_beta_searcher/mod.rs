//! Game-agnostic minimax search with alpha-beta pruning.
//!
//! The search only talks to a game through the traits in `traits`; the Connect
//! Four bindings live in `crate::connect_four_search`.

mod search;
mod traits;
mod transposition_table;


pub use search::{alpha_beta_search, SearchContext, SearchError};
pub use traits::{Evaluator, GameMove, GameState, MoveGenerator, MoveOrderer, NoOpMoveOrderer};
pub use transposition_table::{BoundType, TTEntry, TTKey, TranspositionTable, DEFAULT_TT_CAPACITY};
