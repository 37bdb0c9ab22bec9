//! Interactive War card game.

use std::io;
use std::process::ExitCode;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use wargame::Scoreboard;
use wargame::shell::{Shell, ShellConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let config = ShellConfig::from_env();
    let scoreboard = Scoreboard::load(config.scoreboard_path.clone()).unwrap_or_else(|err| {
        warn!(%err, path = %config.scoreboard_path.display(), "starting with an empty scoreboard");
        Scoreboard::empty(config.scoreboard_path.clone())
    });

    let mut shell = Shell::new(config, scoreboard, io::stdin().lock(), io::stdout().lock());
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "shell stopped");
            ExitCode::FAILURE
        }
    }
}
