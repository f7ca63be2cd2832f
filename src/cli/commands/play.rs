//! Play command - play a game against the computer.

use connect_four::ai::Difficulty;
use connect_four::board::position::EMPTY_POSITION;
use connect_four::board::{Board, Player};
use connect_four::game::Engine;
use structopt::StructOpt;

use super::util::{create_config, print_result, take_human_turn, HumanTurn};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(short, long, help = "Override the difficulty's look-ahead depth")]
    pub depth: Option<u8>,
    #[structopt(
        long = "ai-player",
        default_value = "two",
        help = "Side the computer plays: one, two or random"
    )]
    pub ai_player: Player,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
    #[structopt(long, help = "Seed for the computer's random choices")]
    pub seed: Option<u64>,
}

impl Command for PlayArgs {
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

        println!("You are {}, the computer is {}.", self.ai_player.opposite(), self.ai_player);
        println!("{}", engine.board());

        while engine.check_game_over().is_none() {
            let mover = engine.to_move();

            if mover == self.ai_player {
                match engine.make_best_move() {
                    Ok(column) => println!("The computer plays column {}.", column + 1),
                    Err(err) => {
                        eprintln!("The computer could not move: {}", err);
                        return;
                    }
                }
            } else {
                match take_human_turn(&mut engine) {
                    HumanTurn::Moved => {}
                    HumanTurn::Retry => continue,
                    HumanTurn::Quit => return,
                }
            }

            println!("{}", engine.board());
        }

        print_result(&engine);
    }
}
