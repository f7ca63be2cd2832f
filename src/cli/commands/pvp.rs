//! PvP command - play a game against another human.

use connect_four::board::position::EMPTY_POSITION;
use connect_four::board::Board;
use connect_four::game::{Engine, EngineConfig};
use structopt::StructOpt;

use super::util::{print_result, take_human_turn, HumanTurn};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
}

impl Command for PvpArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(EngineConfig {
            starting_position: self.starting_position,
            ..EngineConfig::default()
        });
        println!("{}", engine.board());

        while engine.check_game_over().is_none() {
            match take_human_turn(&mut engine) {
                HumanTurn::Moved => println!("{}", engine.board()),
                HumanTurn::Retry => continue,
                HumanTurn::Quit => return,
            }
        }

        print_result(&engine);
    }
}
