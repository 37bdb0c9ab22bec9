//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when parsing a rank, suit, or card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Rank is not one of the thirteen known ranks.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit is not one of the four known suits.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no more cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when playing from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// No cards left in the hand.
    #[error("no cards left to play")]
    EmptyHand,
}

/// Errors that can occur when naming a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Name is empty.
    #[error("player name must be a non-empty string")]
    InvalidName,
}

/// Errors that can occur when choosing an opponent difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DifficultyError {
    /// Difficulty is neither `normal` nor `hard`.
    #[error("invalid difficulty, choose 'normal' or 'hard'")]
    InvalidDifficulty,
}

/// Errors that can occur when dealing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The game has already been dealt.
    #[error("game has already been started")]
    AlreadyStarted,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The game has not been dealt yet.
    #[error("game has not been started")]
    NotStarted,
    /// The game already has a winner.
    #[error("game is already over")]
    GameOver,
    /// A hand ran out of cards mid-round.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors that can occur while loading or saving the scoreboard.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ScoreboardError {
    /// Reading or writing the scoreboard file failed.
    #[error("scoreboard i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The scoreboard file is not valid JSON.
    #[error("scoreboard file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}
