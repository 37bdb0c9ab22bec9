//! Players and the hands they hold.

use alloc::collections::VecDeque;
use alloc::string::String;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::{HandError, PlayerError};

/// A participant holding an ordered hand of cards.
///
/// The front of the hand is the next card to play; won cards go to the back.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards in the hand, front first.
    hand: VecDeque<Card>,
}

fn validate_name(name: String) -> Result<String, PlayerError> {
    if name.trim().is_empty() {
        return Err(PlayerError::InvalidName);
    }
    Ok(name)
}

impl Player {
    /// Creates a player with an empty hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if the name is empty or blank.
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerError> {
        Ok(Self {
            name: validate_name(name.into())?,
            hand: VecDeque::new(),
        })
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if the name is empty or blank.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), PlayerError> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    /// Adds a card to the back of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    /// Adds cards to the back of the hand, keeping their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if the hand is empty.
    pub fn play_card(&mut self) -> Result<Card, HandError> {
        self.hand.pop_front().ok_or(HandError::EmptyHand)
    }

    /// Removes and returns the back card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if the hand is empty.
    pub fn play_back_card(&mut self) -> Result<Card, HandError> {
        self.hand.pop_back().ok_or(HandError::EmptyHand)
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn front_card(&self) -> Option<&Card> {
        self.hand.front()
    }

    /// Returns the back card without removing it.
    #[must_use]
    pub fn back_card(&self) -> Option<&Card> {
        self.hand.back()
    }

    /// Returns whether the player still has cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Iterates over the hand, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter()
    }

    /// Discards every card in the hand.
    pub fn clear(&mut self) {
        self.hand.clear();
    }

    /// Shuffles the hand in place.
    pub fn shuffle_hand<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.hand.make_contiguous().shuffle(rng);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cards)", self.name, self.hand.len())
    }
}
