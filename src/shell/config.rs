//! Shell configuration.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable naming the scoreboard file.
pub const SCOREBOARD_ENV: &str = "WARGAME_SCOREBOARD";

/// Environment variable holding a fixed `u64` seed.
pub const SEED_ENV: &str = "WARGAME_SEED";

/// Default scoreboard location, relative to the working directory.
pub const DEFAULT_SCOREBOARD_PATH: &str = "data/scoreboard.json";

/// Configuration for the interactive [`Shell`](super::Shell).
///
/// ```
/// use wargame::shell::ShellConfig;
///
/// let config = ShellConfig::default()
///     .with_seed(7)
///     .with_cheat_round_limit(200);
/// assert_eq!(config.auto_play_rounds, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// File the scoreboard is loaded from and saved to.
    pub scoreboard_path: PathBuf,
    /// Seed for the generator that seeds each new game.
    pub seed: u64,
    /// Rounds played by `auto_play` when no count is given.
    pub auto_play_rounds: u32,
    /// Maximum rounds `cheat` plays before calling the game a draw.
    pub cheat_round_limit: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            scoreboard_path: PathBuf::from(DEFAULT_SCOREBOARD_PATH),
            seed: 0,
            auto_play_rounds: 5,
            cheat_round_limit: 1000,
        }
    }
}

impl ShellConfig {
    /// Reads [`SCOREBOARD_ENV`] and [`SEED_ENV`], falling back to the default
    /// path and a clock-derived seed.
    #[must_use]
    pub fn from_env() -> Self {
        let scoreboard_path = env::var_os(SCOREBOARD_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_SCOREBOARD_PATH), PathBuf::from);
        let seed = env::var(SEED_ENV)
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            scoreboard_path,
            seed,
            ..Self::default()
        }
    }

    /// Sets the scoreboard file.
    #[must_use]
    pub fn with_scoreboard_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scoreboard_path = path.into();
        self
    }

    /// Sets the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the default number of `auto_play` rounds.
    #[must_use]
    pub const fn with_auto_play_rounds(mut self, rounds: u32) -> Self {
        self.auto_play_rounds = rounds;
        self
    }

    /// Sets the `cheat` round limit.
    #[must_use]
    pub const fn with_cheat_round_limit(mut self, limit: u32) -> Self {
        self.cheat_round_limit = limit;
        self
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
