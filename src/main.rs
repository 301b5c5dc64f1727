mod player;
mod remote;
mod util;

use std::process::ExitCode;

use clap::Parser;

use crate::player::{MpdPlayer, Player};
use crate::util::LogType;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: remote::Command,
}

fn run(command: remote::Command) -> Result<(), String> {
    let player = MpdPlayer::connect()?;
    execute(player, command)
}

// Takes ownership of the player, so the connection is closed here,
// exactly once, whether the command succeeds or fails.
fn execute(mut player: impl Player, command: remote::Command) -> Result<(), String> {
    remote::run(&mut player, command)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit 1; help and version output are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            util::log(msg, LogType::Error);
            ExitCode::FAILURE
        }
    }
}
