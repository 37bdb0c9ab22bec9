//! Interactive command shell.
//!
//! The shell reads one command per line, drives a [`Game`], and records
//! finished games on a [`Scoreboard`]. Commands that need a game print a hint
//! and do nothing when none has been started.

use alloc::string::String;
use alloc::vec::Vec;
use std::io::{self, BufRead, Write};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{error, warn};

use crate::game::{Game, Seat};
use crate::options::{Difficulty, GameOptions};
use crate::scoreboard::Scoreboard;

mod config;

pub use config::{DEFAULT_SCOREBOARD_PATH, SCOREBOARD_ENV, SEED_ENV, ShellConfig};

/// Prompt shown before each command.
pub const PROMPT: &str = "(war) ";

const INTRO: &str = "Welcome to the War game! Type help or ? to list commands.";

const NO_GAME: &str = "No game in progress. Type 'start' to begin.";

const RULES: &str = "\
RULES OF WAR
- The deck is shuffled and split evenly between two players.
- Each round both players reveal their top card. The higher card wins both.
- Cards rank 2 (low) through Ace (high). Suits do not matter.
- On a tie there is a war: each player puts down three cards face down and
  one face up. The higher face-up card takes every card on the table.
  Another tie starts another war.
- A player who cannot put down four cards for a war loses the game.
- The game ends when one player has no cards left.
- On hard difficulty the computer usually plays the stronger of its top and
  bottom cards, and reshuffles its hand after winning a round.";

const HELP: &str = "\
Commands:
  start [name1] [name2]      Start a game (two names for two-player mode)
  set_name <p1|p2> <name>    Rename a player
  set_ai <normal|hard>       Set the computer's difficulty
  play_one_round             Play a single round
  auto_play [n]              Play n rounds (default from configuration)
  show_status                Show round number and card counts
  show_rules                 Show the rules
  restart_game               Start over with the same players
  cheat                      Fast-forward to the end of the game
  show_scoreboard            Show win/loss statistics
  exit, quit                 Leave the game";

/// What the shell should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop reading commands.
    Exit,
}

/// The interactive shell.
///
/// Input and output are generic so the shell can be driven by stdin/stdout
/// or by in-memory buffers.
pub struct Shell<I, O> {
    config: ShellConfig,
    scoreboard: Scoreboard,
    game: Option<Game>,
    two_player: bool,
    result_recorded: bool,
    seeds: ChaCha8Rng,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Shell<I, O> {
    /// Creates a shell with no game in progress.
    pub fn new(config: ShellConfig, scoreboard: Scoreboard, input: I, output: O) -> Self {
        let seeds = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            scoreboard,
            game: None,
            two_player: false,
            result_recorded: false,
            seeds,
            input,
            output,
        }
    }

    /// Returns the current game, if one has been started.
    #[must_use]
    pub const fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Returns the current game mutably, if one has been started.
    pub const fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    /// Returns whether the current game is a two-player game.
    #[must_use]
    pub const fn is_two_player(&self) -> bool {
        self.two_player
    }

    /// Returns the scoreboard.
    #[must_use]
    pub const fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Reads and executes commands until `exit`, `quit`, or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{INTRO}")?;
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                self.execute("exit")?;
                return Ok(());
            }

            if self.execute(&line)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Executes a single command line.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn execute(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        let (command, args) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, args)| (command, args.trim()));

        match command {
            "" => {}
            "start" => self.start(args)?,
            "set_name" => self.set_name(args)?,
            "set_ai" => self.set_ai(args)?,
            "play_one_round" => self.play_one_round()?,
            "auto_play" => self.auto_play(args)?,
            "show_status" => self.show_status()?,
            "show_rules" => writeln!(self.output, "{RULES}")?,
            "restart_game" => self.restart_game()?,
            "cheat" => self.cheat()?,
            "show_scoreboard" => writeln!(self.output, "{}", self.scoreboard)?,
            "help" | "?" => writeln!(self.output, "{HELP}")?,
            "exit" | "quit" | "EOF" => {
                writeln!(self.output, "Goodbye, commander!")?;
                return Ok(Flow::Exit);
            }
            other => writeln!(
                self.output,
                "Unknown command: {other}. Type 'help' to list commands."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn new_game(&mut self, options: GameOptions) -> io::Result<()> {
        match Game::new(options, self.seeds.next_u64()) {
            Ok(mut game) => {
                if let Err(err) = game.start() {
                    writeln!(self.output, "Could not start game: {err}.")?;
                    return Ok(());
                }
                self.game = Some(game);
                self.result_recorded = false;
            }
            Err(err) => writeln!(self.output, "Could not start game: {err}.")?,
        }
        Ok(())
    }

    fn start(&mut self, args: &str) -> io::Result<()> {
        let names: Vec<&str> = args.split_whitespace().collect();
        let defaults = GameOptions::default();
        let (player1, player2, two_player) = match names.as_slice() {
            [] => (defaults.player1_name, defaults.player2_name, false),
            [name] => ((*name).into(), defaults.player2_name, false),
            [name1, name2] => ((*name1).into(), (*name2).into(), true),
            _ => {
                writeln!(self.output, "Usage: start [name1] [name2]")?;
                return Ok(());
            }
        };

        self.two_player = two_player;
        let options = GameOptions::default()
            .with_player1_name(player1)
            .with_player2_name(player2);
        self.new_game(options)?;

        if let Some(game) = &self.game {
            let mode = if self.two_player {
                "two-player"
            } else {
                "single-player"
            };
            writeln!(
                self.output,
                "Starting a new {mode} game: {} vs {}.",
                game.player1().name(),
                game.player2().name()
            )?;
            writeln!(
                self.output,
                "Each player has {} cards. Type 'play_one_round' to begin.",
                game.player1().card_count()
            )?;
        }
        Ok(())
    }

    fn set_name(&mut self, args: &str) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return writeln!(self.output, "{NO_GAME}");
        };
        let Some((target, name)) = args.split_once(char::is_whitespace) else {
            return writeln!(self.output, "Usage: set_name <p1|p2> <new_name>");
        };
        let seat = match target {
            "p1" => Seat::One,
            "p2" => Seat::Two,
            _ => return writeln!(self.output, "Invalid player. Use p1 or p2."),
        };

        match game.set_player_name(seat, name.trim()) {
            Ok(()) => writeln!(
                self.output,
                "{target} is now called {}.",
                game.player(seat).name()
            ),
            Err(err) => writeln!(self.output, "Could not rename {target}: {err}."),
        }
    }

    fn set_ai(&mut self, args: &str) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return writeln!(self.output, "{NO_GAME}");
        };
        if self.two_player {
            return writeln!(
                self.output,
                "AI difficulty only applies to single-player games."
            );
        }

        match args.parse::<Difficulty>() {
            Ok(difficulty) => {
                game.set_difficulty(difficulty);
                writeln!(self.output, "AI difficulty set to {difficulty}.")
            }
            Err(err) => writeln!(self.output, "Usage: set_ai <normal|hard> ({err})"),
        }
    }

    fn wait_for_reveal(&mut self, seat: Seat) -> io::Result<()> {
        let Some(game) = &self.game else {
            return Ok(());
        };
        write!(
            self.output,
            "{}, press Enter to reveal your card...",
            game.player(seat).name()
        )?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    /// Plays one round and prints its narrative. Returns whether a round was
    /// actually played.
    fn play_and_report(&mut self) -> io::Result<bool> {
        let Some(game) = self.game.as_mut() else {
            writeln!(self.output, "{NO_GAME}")?;
            return Ok(false);
        };

        match game.play_round() {
            Ok(outcome) => {
                writeln!(self.output, "{}", game.narrative(&outcome))?;
                self.record_if_over()?;
                Ok(true)
            }
            Err(err) => {
                writeln!(self.output, "Cannot play: {err}.")?;
                Ok(false)
            }
        }
    }

    fn game_over_notice(&mut self) -> io::Result<bool> {
        let Some(winner) = self.game.as_ref().and_then(Game::winner) else {
            return Ok(false);
        };
        writeln!(
            self.output,
            "The game is over: {} won. Type 'restart_game' or 'start' to play again.",
            winner.name()
        )?;
        Ok(true)
    }

    fn play_one_round(&mut self) -> io::Result<()> {
        if self.game.is_none() {
            return writeln!(self.output, "{NO_GAME}");
        }
        if self.game_over_notice()? {
            return Ok(());
        }

        let both_hold_cards = self
            .game
            .as_ref()
            .is_some_and(|game| game.player1().has_cards() && game.player2().has_cards());
        if self.two_player && both_hold_cards {
            self.wait_for_reveal(Seat::One)?;
            self.wait_for_reveal(Seat::Two)?;
        }
        self.play_and_report()?;
        Ok(())
    }

    fn auto_play(&mut self, args: &str) -> io::Result<()> {
        if self.game.is_none() {
            return writeln!(self.output, "{NO_GAME}");
        }
        let rounds = if args.is_empty() {
            self.config.auto_play_rounds
        } else if let Ok(rounds) = args.parse::<u32>() {
            rounds
        } else {
            return writeln!(self.output, "Usage: auto_play [number_of_rounds]");
        };

        for _ in 0..rounds {
            if self.game_over_notice()? || !self.play_and_report()? {
                break;
            }
        }
        Ok(())
    }

    fn show_status(&mut self) -> io::Result<()> {
        let Some(game) = &self.game else {
            return writeln!(self.output, "{NO_GAME}");
        };
        write!(self.output, "{game}")?;
        if self.two_player {
            writeln!(self.output, "Mode: two-player")?;
        } else {
            writeln!(self.output, "AI difficulty: {}", game.difficulty())?;
        }
        if let Some(winner) = game.winner() {
            writeln!(self.output, "Winner: {}", winner.name())?;
        }
        Ok(())
    }

    fn restart_game(&mut self) -> io::Result<()> {
        let Some(game) = &self.game else {
            return writeln!(self.output, "{NO_GAME}");
        };
        let difficulty = game.difficulty();
        let options = GameOptions::default()
            .with_player1_name(game.player1().name())
            .with_player2_name(game.player2().name())
            .with_difficulty(difficulty);

        self.new_game(options)?;
        writeln!(self.output, "Game restarted with a fresh shuffle.")
    }

    fn cheat(&mut self) -> io::Result<()> {
        if self.game.is_none() {
            return writeln!(self.output, "{NO_GAME}");
        }
        if self.game_over_notice()? {
            return Ok(());
        }
        let limit = self.config.cheat_round_limit;
        let Some(game) = self.game.as_mut() else {
            return Ok(());
        };

        writeln!(self.output, "Fast-forwarding the game...")?;
        let mut played = 0;
        while played < limit && !game.is_game_over() {
            if let Err(err) = game.play_round() {
                writeln!(self.output, "Cannot play: {err}.")?;
                return Ok(());
            }
            played += 1;
        }

        if let Some(winner) = game.winner() {
            writeln!(
                self.output,
                "{} wins the game after {} rounds!",
                winner.name(),
                game.round_count()
            )?;
            self.record_if_over()
        } else {
            warn!(limit, "cheat stopped without a winner");
            writeln!(
                self.output,
                "No winner after {limit} rounds. The game is a draw."
            )
        }
    }

    fn record_if_over(&mut self) -> io::Result<()> {
        if self.result_recorded {
            return Ok(());
        }
        let Some(game) = &self.game else {
            return Ok(());
        };
        let (Some(winner), Some(loser)) = (game.winner(), game.loser()) else {
            return Ok(());
        };

        self.result_recorded = true;
        if let Err(err) = self.scoreboard.record_result(winner.name(), loser.name()) {
            error!(%err, path = %self.scoreboard.path().display(), "failed to save scoreboard");
            writeln!(self.output, "Could not save scoreboard: {err}")?;
        }
        Ok(())
    }
}
