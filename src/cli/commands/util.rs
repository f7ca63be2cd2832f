//! Shared utilities for CLI commands.

use connect_four::ai::{Difficulty, DifficultyError, DifficultyProfile};
use connect_four::board::Board;
use connect_four::evaluate::GameEnding;
use connect_four::game::{Engine, EngineConfig};
use log::info;

use crate::cli::input::{read_move_input, MoveInput};

pub(crate) enum HumanTurn {
    Moved,
    Retry,
    Quit,
}

/// Builds an engine configuration, overriding the difficulty's look-ahead
/// depth when `depth` is given.
pub(crate) fn create_config(
    difficulty: Difficulty,
    depth: Option<u8>,
    starting_position: Board,
    seed: Option<u64>,
) -> Result<EngineConfig, DifficultyError> {
    let profile: DifficultyProfile = match depth {
        Some(depth) => difficulty.profile().with_look_ahead_depth(depth)?,
        None => difficulty.profile(),
    };

    Ok(EngineConfig {
        difficulty: profile,
        starting_position,
        seed,
        ..EngineConfig::default()
    })
}

pub(crate) fn print_result(engine: &Engine) {
    match engine.check_game_over() {
        Some(GameEnding::Win { winner, line }) => {
            let cells: Vec<String> = line
                .cells
                .iter()
                .map(|(row, col)| format!("({}, {})", row + 1, col + 1))
                .collect();
            info!("game over after {} moves", engine.move_history().len());
            println!("{} wins! Winning cells: {}", winner, cells.join(" "));
        }
        Some(GameEnding::Draw) => {
            info!("game over after {} moves", engine.move_history().len());
            println!("The board is full. It's a draw!");
        }
        None => {}
    }
}

/// Prompts the side to move for a column and plays it. Bad input and illegal
/// columns are reported and leave the turn with the same player.
pub(crate) fn take_human_turn(engine: &mut Engine) -> HumanTurn {
    let mover = engine.to_move();
    let prompt = format!("{} ({}), choose a column: ", mover, mover.to_char());

    match read_move_input(&prompt) {
        Ok(MoveInput::Column { column }) => match engine.make_move(column) {
            Ok(_) => HumanTurn::Moved,
            Err(err) => {
                println!("{}", err);
                HumanTurn::Retry
            }
        },
        Ok(MoveInput::Quit) => HumanTurn::Quit,
        Err(err) => {
            println!("{}", err);
            HumanTurn::Retry
        }
    }
}
