use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::ai::{AiError, AiPlayer, DifficultyProfile};
use crate::alpha_beta_searcher::DEFAULT_TT_CAPACITY;
use crate::board::{Board, BoardError, Player};
use crate::evaluate::{self, GameEnding, Score};

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub difficulty: DifficultyProfile,
    pub starting_position: Board,
    /// Who moved first from the empty board. Together with the number of
    /// pieces on the starting position this decides whose turn it is.
    pub first_player: Player,
    /// Transposition table entries kept per AI search; zero disables it.
    pub cache_capacity: usize,
    /// Seeds the AI's random choices. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: DifficultyProfile::default(),
            starting_position: Board::default(),
            first_player: Player::One,
            cache_capacity: DEFAULT_TT_CAPACITY,
            seed: None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid move in column {column}: {error}")]
    InvalidMove { column: usize, error: BoardError },
    #[error("The game is already over")]
    GameOver,
    #[error("AI error: {error}")]
    AiError { error: AiError },
}

/// Game state and runtime info
#[derive(Clone)]
struct GameState {
    board: Board,
    to_move: Player,
    move_history: Vec<usize>,
    outcome: Option<GameEnding>,
}

impl GameState {
    fn new(starting_position: Board, first_player: Player) -> Self {
        let to_move = if starting_position.piece_count() % 2 == 0 {
            first_player
        } else {
            first_player.opposite()
        };

        Self {
            board: starting_position,
            to_move,
            move_history: Vec::new(),
            outcome: evaluate::game_ending(&starting_position),
        }
    }
}

/// A game of Connect Four with a computer player available to either side.
pub struct Engine {
    state: GameState,
    ai: AiPlayer,
    rng: StdRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            state: GameState::new(config.starting_position, config.first_player),
            ai: AiPlayer::with_cache_capacity(config.difficulty, config.cache_capacity),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn to_move(&self) -> Player {
        self.state.to_move
    }

    /// Columns played since the starting position, oldest first.
    pub fn move_history(&self) -> &[usize] {
        &self.state.move_history
    }

    pub fn last_move(&self) -> Option<usize> {
        self.state.move_history.last().copied()
    }

    pub fn difficulty(&self) -> &DifficultyProfile {
        self.ai.profile()
    }

    pub fn set_difficulty(&mut self, profile: DifficultyProfile) {
        self.ai.set_profile(profile);
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        self.state.outcome.clone()
    }

    /// Drops a piece for the side to move and returns the row it landed in.
    /// Ends the game on four in a row or a full board, otherwise passes the
    /// turn.
    pub fn make_move(&mut self, column: usize) -> Result<usize, EngineError> {
        if self.state.outcome.is_some() {
            return Err(EngineError::GameOver);
        }

        let player = self.state.to_move;
        let row = self
            .state
            .board
            .drop_piece(column, player)
            .map_err(|error| EngineError::InvalidMove { column, error })?;
        self.state.move_history.push(column);
        debug!("{} dropped into column {} (row {})", player, column, row);

        if let Some(line) = self.state.board.check_win_at(row, column, player) {
            info!("{} wins with a {:?} line", player, line.axis);
            self.state.outcome = Some(GameEnding::Win {
                winner: player,
                line,
            });
        } else if self.state.board.is_full() {
            info!("the board is full, the game is a draw");
            self.state.outcome = Some(GameEnding::Draw);
        } else {
            self.state.to_move = player.opposite();
        }

        Ok(row)
    }

    /// The column the computer would play for the side to move.
    pub fn best_move(&mut self) -> Result<usize, EngineError> {
        if self.state.outcome.is_some() {
            return Err(EngineError::GameOver);
        }

        self.ai
            .select_move_with_rng(&self.state.board, self.state.to_move, &mut self.rng)
            .map_err(|error| EngineError::AiError { error })
    }

    pub fn make_best_move(&mut self) -> Result<usize, EngineError> {
        let column = self.best_move()?;
        self.make_move(column)?;
        Ok(column)
    }

    /// Static evaluation of the current board from `player`'s perspective.
    pub fn get_score(&self, player: Player) -> Score {
        evaluate::score(&self.state.board, player)
    }

    pub fn get_search_stats(&self) -> SearchStats {
        let context = self.ai.search_context();
        SearchStats {
            positions_searched: context.searched_position_count(),
            depth: context.search_depth(),
            last_score: context.last_score(),
            last_search_duration: context.last_search_duration(),
            cache_hits: context.tt_hits(),
            cache_misses: context.tt_misses(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub depth: u8,
    pub last_score: Option<Score>,
    pub last_search_duration: Option<Duration>,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{Difficulty, Strategy};
    use crate::board::Axis;
    use crate::connect_four_position;

    fn hard_engine(starting_position: Board) -> Engine {
        Engine::with_config(EngineConfig {
            difficulty: Difficulty::Hard.profile(),
            starting_position,
            seed: Some(1),
            ..EngineConfig::default()
        })
    }

    #[test]
    fn test_players_alternate_from_player_one() {
        let mut engine = Engine::new();
        assert_eq!(Player::One, engine.to_move());

        assert_eq!(Ok(5), engine.make_move(3));
        assert_eq!(Player::Two, engine.to_move());
        assert_eq!(Ok(4), engine.make_move(3));
        assert_eq!(Player::One, engine.to_move());

        assert_eq!(&[3, 3], engine.move_history());
        assert_eq!(Some(3), engine.last_move());
        assert_eq!(Some(Player::One), engine.board().get(5, 3));
        assert_eq!(Some(Player::Two), engine.board().get(4, 3));
    }

    #[test]
    fn test_side_to_move_follows_piece_count() {
        let starting_position = connect_four_position! {
            .......
            .......
            .......
            .......
            .......
            ...X...
        };

        let engine = Engine::with_config(EngineConfig {
            starting_position,
            ..EngineConfig::default()
        });
        assert_eq!(Player::Two, engine.to_move());

        let engine = Engine::with_config(EngineConfig {
            starting_position,
            first_player: Player::Two,
            ..EngineConfig::default()
        });
        assert_eq!(Player::One, engine.to_move());
    }

    #[test]
    fn test_invalid_moves_are_rejected() {
        let mut engine = Engine::new();
        assert_eq!(
            Err(EngineError::InvalidMove {
                column: 7,
                error: BoardError::ColumnOutOfRange { col: 7 }
            }),
            engine.make_move(7)
        );

        for _ in 0..6 {
            engine.make_move(0).unwrap();
        }
        assert_eq!(
            Err(EngineError::InvalidMove {
                column: 0,
                error: BoardError::ColumnFull { col: 0 }
            }),
            engine.make_move(0)
        );
        assert_eq!(6, engine.move_history().len());
    }

    #[test]
    fn test_detects_a_win_and_stops_the_game() {
        let mut engine = Engine::new();
        for column in [0, 1, 0, 1, 0, 1] {
            engine.make_move(column).unwrap();
        }
        assert_eq!(None, engine.check_game_over());

        engine.make_move(0).unwrap();

        match engine.check_game_over() {
            Some(GameEnding::Win { winner, line }) => {
                assert_eq!(Player::One, winner);
                assert_eq!(Axis::Vertical, line.axis);
                assert_eq!(4, line.len());
                assert!(line.contains(2, 0));
            }
            ending => panic!("expected a win, got {:?}", ending),
        }
        assert_eq!(Player::One, engine.to_move());
        assert_eq!(Err(EngineError::GameOver), engine.make_move(2));
        assert_eq!(Err(EngineError::GameOver), engine.best_move());
    }

    #[test]
    fn test_make_move_plays_a_full_game_to_a_draw() {
        let columns = [
            3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 6, 4, 4, 4, 4, 4, 4, 1, 1, 1, 1, 1, 1, 5, 5, 5,
            5, 5, 5, 0, 0, 0, 0, 0, 0, 6, 6, 6, 6, 6,
        ];
        let mut engine = Engine::new();

        for (ply, &column) in columns.iter().enumerate() {
            assert_eq!(None, engine.check_game_over(), "ended early at ply {}", ply);
            let mover = engine.to_move();
            assert_eq!(if ply % 2 == 0 { Player::One } else { Player::Two }, mover);
            engine.make_move(column).unwrap();
        }

        assert_eq!(Some(GameEnding::Draw), engine.check_game_over());
        assert_eq!(columns.as_slice(), engine.move_history());
        assert_eq!(
            "XXOOXXO/OOXXOOX/XXOOXXO/OOXXOOX/XXOOXXO/OOXXOOX",
            engine.board().to_position_string()
        );
    }

    #[test]
    fn test_make_move_plays_a_full_game_to_a_win() {
        let mut engine = Engine::new();
        for column in [3, 4, 2, 4, 1, 5] {
            engine.make_move(column).unwrap();
            assert_eq!(None, engine.check_game_over());
        }

        engine.make_move(0).unwrap();

        match engine.check_game_over() {
            Some(GameEnding::Win { winner, line }) => {
                assert_eq!(Player::One, winner);
                assert_eq!(Axis::Horizontal, line.axis);
                assert!((0..4).all(|col| line.contains(5, col)));
            }
            ending => panic!("expected a win, got {:?}", ending),
        }
    }

    #[test]
    fn test_detects_a_draw() {
        let starting_position: Board = ".XOOXXO/OOXXOOX/XXOOXXO/OOXXOOX/XXOOXXO/OOXXOOX"
            .parse()
            .unwrap();
        let mut engine = Engine::with_config(EngineConfig {
            starting_position,
            first_player: Player::Two,
            ..EngineConfig::default()
        });
        assert_eq!(Player::One, engine.to_move());
        assert_eq!(None, engine.check_game_over());

        engine.make_move(0).unwrap();

        assert_eq!(Some(GameEnding::Draw), engine.check_game_over());
    }

    #[test]
    fn test_won_starting_position_is_already_over() {
        let starting_position = connect_four_position! {
            .......
            .......
            .......
            .......
            OOO....
            XXXX...
        };
        let mut engine = Engine::with_config(EngineConfig {
            starting_position,
            ..EngineConfig::default()
        });

        assert!(matches!(
            engine.check_game_over(),
            Some(GameEnding::Win {
                winner: Player::One,
                ..
            })
        ));
        assert_eq!(Err(EngineError::GameOver), engine.make_move(4));
    }

    #[test]
    fn test_best_move_finds_the_win() {
        let starting_position = connect_four_position! {
            .......
            .......
            .......
            O......
            O.....X
            OXX...X
        };
        let mut engine = hard_engine(starting_position);
        assert_eq!(Player::Two, engine.to_move());

        assert_eq!(Ok(0), engine.make_best_move());
        assert!(matches!(
            engine.check_game_over(),
            Some(GameEnding::Win {
                winner: Player::Two,
                ..
            })
        ));

        let stats = engine.get_search_stats();
        assert_eq!(7, stats.depth);
        assert!(stats.positions_searched > 0);
        assert_eq!(Some(evaluate::WIN_SCORE + 6), stats.last_score);
        assert!(stats.last_search_duration.is_some());
        assert!(stats.cache_hits + stats.cache_misses > 0);
    }

    #[test]
    fn test_seeded_games_repeat() {
        let play = || {
            let mut engine = Engine::with_config(EngineConfig {
                difficulty: Difficulty::Easy.profile(),
                seed: Some(8),
                ..EngineConfig::default()
            });
            while engine.check_game_over().is_none() {
                engine.make_best_move().unwrap();
            }
            engine.move_history().to_vec()
        };

        assert_eq!(play(), play());
    }

    #[test]
    fn test_computer_plays_both_sides_to_the_end() {
        let mut engine = Engine::with_config(EngineConfig {
            difficulty: DifficultyProfile::new("quick", 0.1, 2, Strategy::Minimax).unwrap(),
            seed: Some(3),
            ..EngineConfig::default()
        });

        while engine.check_game_over().is_none() {
            engine.make_best_move().unwrap();
        }

        assert!(engine.move_history().len() >= 7);
        assert!(engine.move_history().len() <= 42);
    }

    #[test]
    fn test_set_difficulty() {
        let mut engine = Engine::new();
        assert_eq!("medium", engine.difficulty().name());

        engine.set_difficulty(Difficulty::Hard.profile());
        assert_eq!("hard", engine.difficulty().name());
        assert_eq!(7, engine.get_search_stats().depth);
    }

    #[test]
    fn test_score_is_from_the_given_perspective() {
        let mut engine = Engine::new();
        engine.make_move(3).unwrap();

        assert!(engine.get_score(Player::One) > 0);
        assert!(engine.get_score(Player::Two) < 0);
    }
}
