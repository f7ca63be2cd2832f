mod cli;

use cli::commands::Command;
use cli::ConnectFour;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    ConnectFour::from_args().execute();
}
