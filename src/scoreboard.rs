//! Persistent win/loss statistics.
//!
//! The whole table is stored as pretty-printed JSON, read once when loaded and
//! rewritten in full after every recorded result.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScoreboardError;

/// Statistics for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Games finished.
    pub games_played: u32,
    /// Games won.
    pub games_won: u32,
    /// Games lost.
    pub games_lost: u32,
}

impl PlayerStats {
    /// Returns the win rate as a percentage, or 0 if no games were played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played) * 100.0
    }
}

/// Win/loss counters keyed by player name, backed by a JSON file.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    path: PathBuf,
    scores: BTreeMap<String, PlayerStats>,
}

impl Scoreboard {
    /// Creates an empty scoreboard that will be saved to `path`.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            scores: BTreeMap::new(),
        }
    }

    /// Loads the scoreboard stored at `path`.
    ///
    /// A missing file yields an empty scoreboard. The parent directory is
    /// created if needed so later saves succeed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the file cannot be
    /// read, or its contents are not a valid scoreboard.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ScoreboardError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if !path.exists() {
            debug!(path = %path.display(), "no scoreboard file, starting empty");
            return Ok(Self::empty(path));
        }

        let text = fs::read_to_string(&path)?;
        let scores = serde_json::from_str(&text)?;
        Ok(Self { path, scores })
    }

    /// Returns the file the scoreboard is saved to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records a finished game and saves the scoreboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the scoreboard cannot be written. The counters are
    /// updated in memory either way.
    pub fn record_result(&mut self, winner: &str, loser: &str) -> Result<(), ScoreboardError> {
        let stats = self.scores.entry(winner.into()).or_default();
        stats.games_played += 1;
        stats.games_won += 1;

        let stats = self.scores.entry(loser.into()).or_default();
        stats.games_played += 1;
        stats.games_lost += 1;

        debug!(winner, loser, "recorded result");
        self.save()
    }

    fn save(&self) -> Result<(), ScoreboardError> {
        let text = serde_json::to_string_pretty(&self.scores)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Returns the statistics for a player.
    #[must_use]
    pub fn stats(&self, name: &str) -> Option<&PlayerStats> {
        self.scores.get(name)
    }

    /// Returns the number of players on the scoreboard.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns whether no games have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scores.is_empty() {
            return f.write_str("No games have been played yet.");
        }

        let mut rows: Vec<_> = self.scores.iter().collect();
        rows.sort_by(|a, b| b.1.games_won.cmp(&a.1.games_won));

        f.write_str("SCOREBOARD")?;
        for (name, stats) in rows {
            write!(
                f,
                "\n{name:<15} | Wins: {:<3} | Losses: {:<3} | Win rate: {:5.1}%",
                stats.games_won,
                stats.games_lost,
                stats.win_rate()
            )?;
        }
        Ok(())
    }
}
