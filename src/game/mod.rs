//! Game engine and state management.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::deck::Deck;
use crate::error::{PlayerError, StartError};
use crate::hand::Player;
use crate::options::{Difficulty, GameOptions};
use crate::strategy::{self, OpponentStrategy};

mod narrative;
mod round;
pub mod state;

pub use narrative::Narrative;
pub use round::{WAR_FACE_DOWN, WAR_STAKE};
pub use state::{GameState, Seat};

/// A game of War between two players.
///
/// The game owns the deck, both players, and the random number generator.
/// It is generic over the generator so callers can supply their own; the
/// default is a seeded [`ChaCha8Rng`].
pub struct Game<R = ChaCha8Rng> {
    /// The first player.
    player1: Player,
    /// The second player.
    player2: Player,
    /// Cards not yet dealt.
    deck: Deck,
    /// Number of rounds played.
    round_count: u32,
    /// Current game state.
    state: GameState,
    /// Opponent difficulty label.
    difficulty: Difficulty,
    /// Card-selection policy for the second seat.
    strategy: Box<dyn OpponentStrategy>,
    /// Game options.
    options: GameOptions,
    /// Random number generator.
    rng: R,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if either player name is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use wargame::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42).unwrap();
    /// game.start().unwrap();
    /// assert_eq!(game.player1().card_count(), 26);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, PlayerError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new game driven by the given random number generator.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if either player name is blank.
    pub fn with_rng(options: GameOptions, rng: R) -> Result<Self, PlayerError> {
        let player1 = Player::new(options.player1_name.clone())?;
        let player2 = Player::new(options.player2_name.clone())?;
        let strategy = strategy::for_difficulty(options.difficulty, &options);

        Ok(Self {
            player1,
            player2,
            deck: Deck::ordered(),
            round_count: 0,
            state: GameState::NotStarted,
            difficulty: options.difficulty,
            strategy,
            options,
            rng,
        })
    }

    /// Shuffles a fresh deck and deals it out, alternating from the first player.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::AlreadyStarted`] if the game has been dealt before.
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.state != GameState::NotStarted {
            return Err(StartError::AlreadyStarted);
        }

        self.deck.reset(&mut self.rng);
        self.player1.clear();
        self.player2.clear();

        let mut seat = Seat::One;
        while let Ok(card) = self.deck.draw() {
            self.player_mut(seat).add_card(card);
            seat = seat.other();
        }

        self.state = GameState::InProgress;
        info!(
            player1 = self.player1.name(),
            player2 = self.player2.name(),
            difficulty = %self.difficulty,
            "game started"
        );
        Ok(())
    }

    /// Sets the opponent difficulty and installs its built-in policy.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.strategy = strategy::for_difficulty(difficulty, &self.options);
    }

    /// Installs a custom card-selection policy for the second seat.
    ///
    /// The difficulty label is left unchanged.
    pub fn set_strategy(&mut self, strategy: Box<dyn OpponentStrategy>) {
        self.strategy = strategy;
    }

    /// Returns the random number generator.
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R> Game<R> {
    /// Returns the player in the given seat.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player1,
            Seat::Two => &self.player2,
        }
    }

    /// Returns the player in the given seat mutably.
    pub const fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::One => &mut self.player1,
            Seat::Two => &mut self.player2,
        }
    }

    /// Returns the first player.
    #[must_use]
    pub const fn player1(&self) -> &Player {
        &self.player1
    }

    /// Returns the second player.
    #[must_use]
    pub const fn player2(&self) -> &Player {
        &self.player2
    }

    /// Renames the player in the given seat.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if the name is blank.
    pub fn set_player_name(
        &mut self,
        seat: Seat,
        name: impl Into<String>,
    ) -> Result<(), PlayerError> {
        self.player_mut(seat).set_name(name)
    }

    /// Returns the undealt deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub const fn round_count(&self) -> u32 {
        self.round_count
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the opponent difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns whether the game has a winner.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::Over(_))
    }

    /// Returns the winning seat, if the game is over.
    #[must_use]
    pub const fn winner_seat(&self) -> Option<Seat> {
        match self.state {
            GameState::Over(seat) => Some(seat),
            _ => None,
        }
    }

    /// Returns the winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner_seat().map(|seat| self.player(seat))
    }

    /// Returns the loser, if the game is over.
    #[must_use]
    pub fn loser(&self) -> Option<&Player> {
        self.winner_seat().map(|seat| self.player(seat.other()))
    }

    /// Returns the number of cards held by both players.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.player1.card_count() + self.player2.card_count()
    }
}

impl<R> fmt::Display for Game<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Round {} ---", self.round_count)?;
        writeln!(f, "{}: {} cards", self.player1.name(), self.player1.card_count())?;
        writeln!(f, "{}: {} cards", self.player2.name(), self.player2.card_count())
    }
}
