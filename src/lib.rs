//! A War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a shuffled deck to two
//! players and resolves rounds, including repeated wars, until one player
//! holds every card. The second seat picks its cards through an
//! [`OpponentStrategy`], chosen by [`Difficulty`] or supplied by the caller.
//!
//! With the `std` feature the crate also provides a JSON-backed
//! [`Scoreboard`] and the interactive [`shell`].
//!
//! # Example
//!
//! ```
//! use wargame::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.start().unwrap();
//!
//! let outcome = game.play_round().unwrap();
//! println!("{}", game.narrative(&outcome));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
#[cfg(feature = "std")]
pub mod scoreboard;
#[cfg(feature = "std")]
pub mod shell;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::ScoreboardError;
pub use error::{
    DeckError, DifficultyError, HandError, ParseCardError, PlayerError, RoundError, StartError,
};
pub use game::{Game, GameState, Narrative, Seat, WAR_FACE_DOWN, WAR_STAKE};
pub use hand::Player;
pub use options::{Difficulty, GameOptions, HARD_BEST_CARD_CHANCE};
pub use result::{Reveal, RoundOutcome, WarOutcome, WarResolution};
#[cfg(feature = "std")]
pub use scoreboard::{PlayerStats, Scoreboard};
pub use strategy::{BestOfEnds, FrontCard, OpponentStrategy};
