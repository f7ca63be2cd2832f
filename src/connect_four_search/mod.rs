//! Connect Four implementation of the alpha-beta search traits.

pub mod implementation;
mod move_orderer;


pub use implementation::{
    search_best_column, ConnectFourEvaluator, ConnectFourMoveGenerator, DropMove, SearchPosition,
};
pub use move_orderer::CenterFirstMoveOrderer;
