//! Opponent card-selection policies.

use alloc::boxed::Box;
use core::fmt;

use rand::{Rng, RngCore};

use crate::card::Card;
use crate::error::HandError;
use crate::hand::Player;
use crate::options::{Difficulty, GameOptions};

/// Decides which card the second seat plays each round.
///
/// War battles always use front cards; a strategy only picks the card for an
/// ordinary round.
pub trait OpponentStrategy: fmt::Debug {
    /// Removes and returns the card to play from `player`'s hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if the hand is empty.
    fn select_card(&mut self, player: &mut Player, rng: &mut dyn RngCore)
    -> Result<Card, HandError>;

    /// Called after the player has won an ordinary round and taken the cards.
    fn after_round_won(&mut self, _player: &mut Player, _rng: &mut dyn RngCore) {}
}

/// Always plays the front card. Used for normal difficulty and human seats.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontCard;

impl OpponentStrategy for FrontCard {
    fn select_card(
        &mut self,
        player: &mut Player,
        _rng: &mut dyn RngCore,
    ) -> Result<Card, HandError> {
        player.play_card()
    }
}

/// Hard difficulty: usually plays the stronger of the front and back cards,
/// and reshuffles its hand after winning a round.
#[derive(Debug, Clone, Copy)]
pub struct BestOfEnds {
    best_card_chance: f64,
}

impl BestOfEnds {
    /// Creates the policy. `best_card_chance` is the probability of playing
    /// the stronger end card; otherwise the front card is played.
    #[must_use]
    pub const fn new(best_card_chance: f64) -> Self {
        Self { best_card_chance }
    }

    /// Returns whether the back card should be played for a given roll in `[0, 1)`.
    ///
    /// Ties favor the front card.
    #[must_use]
    pub fn plays_back(&self, front: &Card, back: &Card, roll: f64) -> bool {
        roll < self.best_card_chance && back > front
    }
}

impl OpponentStrategy for BestOfEnds {
    fn select_card(
        &mut self,
        player: &mut Player,
        rng: &mut dyn RngCore,
    ) -> Result<Card, HandError> {
        let (Some(front), Some(back)) = (player.front_card(), player.back_card()) else {
            return Err(HandError::EmptyHand);
        };
        let roll: f64 = rng.random();

        if self.plays_back(front, back, roll) {
            player.play_back_card()
        } else {
            player.play_card()
        }
    }

    fn after_round_won(&mut self, player: &mut Player, rng: &mut dyn RngCore) {
        player.shuffle_hand(rng);
    }
}

/// Builds the built-in policy for a difficulty.
#[must_use]
pub fn for_difficulty(difficulty: Difficulty, options: &GameOptions) -> Box<dyn OpponentStrategy> {
    match difficulty {
        Difficulty::Normal => Box::new(FrontCard),
        Difficulty::Hard => Box::new(BestOfEnds::new(options.hard_best_card_chance)),
    }
}
