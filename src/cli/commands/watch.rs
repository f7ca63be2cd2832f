//! Watch command - watch the computer play against itself.

use std::time::Duration;

use connect_four::ai::Difficulty;
use connect_four::board::position::EMPTY_POSITION;
use connect_four::board::Board;
use connect_four::game::Engine;
use log::debug;
use structopt::StructOpt;

use super::util::{create_config, print_result};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long, default_value = "hard")]
    pub difficulty: Difficulty,
    #[structopt(short, long, help = "Override the difficulty's look-ahead depth")]
    pub depth: Option<u8>,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
    #[structopt(long, help = "Seed for the computer's random choices")]
    pub seed: Option<u64>,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = match create_config(
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
        let mut engine = Engine::with_config(config);
        println!("{}", engine.board());

        while engine.check_game_over().is_none() {
            let mover = engine.to_move();
            match engine.make_best_move() {
                Ok(column) => {
                    println!("\n{} plays column {}.", mover, column + 1);
                    println!("{}", engine.board());
                    debug!("{:?}", engine.get_search_stats());
                }
                Err(err) => {
                    eprintln!("{} could not move: {}", mover, err);
                    return;
                }
            }

            std::thread::sleep(Duration::from_millis(self.delay_ms));
        }

        print_result(&engine);
    }
}
