//! Game configuration options.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::DifficultyError;

/// Opponent difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// The opponent always plays its front card.
    #[default]
    Normal,
    /// The opponent usually plays the stronger of its front and back cards.
    Hard,
}

impl Difficulty {
    /// Returns the lowercase name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("normal") => Ok(Self::Normal),
            s if s.eq_ignore_ascii_case("hard") => Ok(Self::Hard),
            _ => Err(DifficultyError::InvalidDifficulty),
        }
    }
}

/// Default probability that a hard opponent plays its stronger end card.
pub const HARD_BEST_CARD_CHANCE: f64 = 0.8;

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use wargame::{Difficulty, GameOptions};
///
/// let options = GameOptions::default()
///     .with_player1_name("Noah")
///     .with_difficulty(Difficulty::Hard);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Name of the first player.
    pub player1_name: String,
    /// Name of the second player (the computer in single-player games).
    pub player2_name: String,
    /// Opponent difficulty.
    pub difficulty: Difficulty,
    /// Chance in `[0, 1]` that a hard opponent plays its stronger end card.
    pub hard_best_card_chance: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player1_name: String::from("Player 1"),
            player2_name: String::from("Computer"),
            difficulty: Difficulty::Normal,
            hard_best_card_chance: HARD_BEST_CARD_CHANCE,
        }
    }
}

impl GameOptions {
    /// Sets the first player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use wargame::GameOptions;
    ///
    /// let options = GameOptions::default().with_player1_name("Noah");
    /// assert_eq!(options.player1_name, "Noah");
    /// ```
    #[must_use]
    pub fn with_player1_name(mut self, name: impl Into<String>) -> Self {
        self.player1_name = name.into();
        self
    }

    /// Sets the second player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use wargame::GameOptions;
    ///
    /// let options = GameOptions::default().with_player2_name("Erik");
    /// assert_eq!(options.player2_name, "Erik");
    /// ```
    #[must_use]
    pub fn with_player2_name(mut self, name: impl Into<String>) -> Self {
        self.player2_name = name.into();
        self
    }

    /// Sets the opponent difficulty.
    ///
    /// # Example
    ///
    /// ```
    /// use wargame::{Difficulty, GameOptions};
    ///
    /// let options = GameOptions::default().with_difficulty(Difficulty::Hard);
    /// assert_eq!(options.difficulty, Difficulty::Hard);
    /// ```
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets how often a hard opponent plays its stronger end card.
    ///
    /// # Example
    ///
    /// ```
    /// use wargame::GameOptions;
    ///
    /// let options = GameOptions::default().with_hard_best_card_chance(1.0);
    /// assert_eq!(options.hard_best_card_chance, 1.0);
    /// ```
    #[must_use]
    pub const fn with_hard_best_card_chance(mut self, chance: f64) -> Self {
        self.hard_best_card_chance = chance;
        self
    }
}
