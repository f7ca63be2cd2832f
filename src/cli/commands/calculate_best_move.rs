//! Calculate best move command - determine the best column from a position.

use connect_four::ai::Difficulty;
use connect_four::board::{Board, Player};
use connect_four::game::Engine;
use structopt::StructOpt;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(long, default_value = "hard")]
    pub difficulty: Difficulty,
    #[structopt(short, long, help = "Override the difficulty's look-ahead depth")]
    pub depth: Option<u8>,
    #[structopt(long = "position")]
    pub starting_position: Board,
    #[structopt(
        long = "ai-player",
        help = "Side to find a move for (default: the side to move)"
    )]
    pub ai_player: Option<Player>,
    #[structopt(long, help = "Seed for the computer's random choices")]
    pub seed: Option<u64>,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let mut config = match create_config(
            self.difficulty,
            self.depth,
            self.starting_position,
            self.seed,
        ) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };

        // The first player is whoever makes the side to move come out right.
        if let Some(ai_player) = self.ai_player {
            config.first_player = if self.starting_position.piece_count() % 2 == 0 {
                ai_player
            } else {
                ai_player.opposite()
            };
        }
        let mut engine = Engine::with_config(config);

        match engine.best_move() {
            Ok(column) => println!("{}", column + 1),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
