pub mod ai;
pub mod alpha_beta_searcher;
pub mod board;
pub mod connect_four_search;
pub mod evaluate;
pub mod game;
