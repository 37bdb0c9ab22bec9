//! Structured round results.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Seat;

/// The two face-up cards revealed in one war battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// Card revealed by the first player.
    pub card1: Card,
    /// Card revealed by the second player.
    pub card2: Card,
}

/// How a war ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarResolution {
    /// One side revealed a higher card and took the piles.
    Won {
        /// The side that won the war.
        winner: Seat,
        /// Total number of cards taken.
        cards: usize,
    },
    /// One side had fewer than four cards and lost the game.
    Forfeit {
        /// The side that could not continue.
        forfeiter: Seat,
    },
}

/// Result of a war, including any repeated ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarOutcome {
    /// Face-up reveals in order. Every reveal but the last was a tie.
    pub reveals: Vec<Reveal>,
    /// How the war ended.
    pub resolution: WarResolution,
}

impl WarOutcome {
    /// Returns the side that won the war or the game.
    #[must_use]
    pub const fn winner(&self) -> Seat {
        match self.resolution {
            WarResolution::Won { winner, .. } => winner,
            WarResolution::Forfeit { forfeiter } => forfeiter.other(),
        }
    }

    /// Returns whether the war ended the game.
    #[must_use]
    pub const fn ends_game(&self) -> bool {
        matches!(self.resolution, WarResolution::Forfeit { .. })
    }
}

/// Result of a single call to [`Game::play_round`](crate::Game::play_round).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A player entered the round without cards; the other player wins.
    GameOver {
        /// The winner of the game.
        winner: Seat,
    },
    /// The higher card took both cards.
    Won {
        /// Round number.
        round: u32,
        /// Card played by the first player.
        card1: Card,
        /// Card played by the second player.
        card2: Card,
        /// The side that won the round.
        winner: Seat,
    },
    /// The cards tied and a war decided the round.
    War {
        /// Round number.
        round: u32,
        /// Card played by the first player.
        card1: Card,
        /// Card played by the second player.
        card2: Card,
        /// The war that followed the tie.
        war: WarOutcome,
    },
}

impl RoundOutcome {
    /// Returns the game winner if this round ended the game.
    #[must_use]
    pub const fn game_winner(&self) -> Option<Seat> {
        match self {
            Self::GameOver { winner } => Some(*winner),
            Self::War { war, .. } if war.ends_game() => Some(war.winner()),
            _ => None,
        }
    }

    /// Returns the side that took the cards this round, if any.
    #[must_use]
    pub const fn round_winner(&self) -> Option<Seat> {
        match self {
            Self::GameOver { .. } => None,
            Self::Won { winner, .. } => Some(*winner),
            Self::War { war, .. } => Some(war.winner()),
        }
    }
}
