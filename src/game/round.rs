use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::RngCore;
use tracing::{debug, info, trace};

use crate::card::Card;
use crate::error::RoundError;
use crate::result::{Reveal, RoundOutcome, WarOutcome, WarResolution};

use super::{Game, GameState, Seat};

/// Cards each side commits face down in a war.
pub const WAR_FACE_DOWN: usize = 3;

/// Cards a player must hold to take part in a war: the face-down cards plus
/// one face-up card.
pub const WAR_STAKE: usize = WAR_FACE_DOWN + 1;

impl<R: RngCore> Game<R> {
    fn ensure_in_progress(&self) -> Result<(), RoundError> {
        match self.state {
            GameState::NotStarted => Err(RoundError::NotStarted),
            GameState::Over(_) => Err(RoundError::GameOver),
            GameState::InProgress => Ok(()),
        }
    }

    fn finish(&mut self, winner: Seat) {
        self.state = GameState::Over(winner);
        info!(
            winner = self.player(winner).name(),
            rounds = self.round_count,
            "game over"
        );
    }

    /// Plays one round.
    ///
    /// If either player has no cards the other player wins and no card is
    /// played. Otherwise both players play a card, the round counter
    /// increases, and the higher card takes both. A tie starts a war.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NotStarted`] before [`Game::start`],
    /// [`RoundError::GameOver`] once the game has a winner, or
    /// [`RoundError::Hand`] if an opponent strategy fails to produce a card.
    pub fn play_round(&mut self) -> Result<RoundOutcome, RoundError> {
        self.ensure_in_progress()?;

        if !self.player1.has_cards() {
            self.finish(Seat::Two);
            return Ok(RoundOutcome::GameOver { winner: Seat::Two });
        }
        if !self.player2.has_cards() {
            self.finish(Seat::One);
            return Ok(RoundOutcome::GameOver { winner: Seat::One });
        }

        let card1 = self.player1.play_card()?;
        let card2 = self.strategy.select_card(&mut self.player2, &mut self.rng)?;

        self.round_count += 1;
        let round = self.round_count;

        let outcome = match card1.cmp(&card2) {
            Ordering::Greater => {
                self.player1.add_cards([card1, card2]);
                RoundOutcome::Won {
                    round,
                    card1,
                    card2,
                    winner: Seat::One,
                }
            }
            Ordering::Less => {
                self.player2.add_cards([card1, card2]);
                self.strategy
                    .after_round_won(&mut self.player2, &mut self.rng);
                RoundOutcome::Won {
                    round,
                    card1,
                    card2,
                    winner: Seat::Two,
                }
            }
            Ordering::Equal => {
                let war = self.resolve_war(vec![card1], vec![card2])?;
                RoundOutcome::War {
                    round,
                    card1,
                    card2,
                    war,
                }
            }
        };

        debug!(
            round,
            %card1,
            %card2,
            winner = ?outcome.round_winner(),
            player1_cards = self.player1.card_count(),
            player2_cards = self.player2.card_count(),
            "round resolved"
        );
        Ok(outcome)
    }

    /// Resolves a war over the given piles.
    ///
    /// Each battle first checks that both players hold at least
    /// [`WAR_STAKE`] cards; a player who does not forfeits the game and the
    /// piles go to the other player. Otherwise each side adds
    /// [`WAR_FACE_DOWN`] face-down cards and one face-up card to its pile.
    /// The higher face-up card takes both piles, first pile first. Ties keep
    /// growing the piles until one side wins or cannot continue.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NotStarted`] or [`RoundError::GameOver`] if the
    /// game is not in progress.
    pub fn resolve_war(
        &mut self,
        mut pile1: Vec<Card>,
        mut pile2: Vec<Card>,
    ) -> Result<WarOutcome, RoundError> {
        self.ensure_in_progress()?;
        let mut reveals = Vec::new();

        loop {
            let forfeiter = if self.player1.card_count() < WAR_STAKE {
                Some(Seat::One)
            } else if self.player2.card_count() < WAR_STAKE {
                Some(Seat::Two)
            } else {
                None
            };

            if let Some(forfeiter) = forfeiter {
                let winner = forfeiter.other();
                self.player_mut(winner)
                    .add_cards(pile1.drain(..).chain(pile2.drain(..)));
                self.finish(winner);
                return Ok(WarOutcome {
                    reveals,
                    resolution: WarResolution::Forfeit { forfeiter },
                });
            }

            for _ in 0..WAR_FACE_DOWN {
                pile1.push(self.player1.play_card()?);
                pile2.push(self.player2.play_card()?);
            }
            let card1 = self.player1.play_card()?;
            let card2 = self.player2.play_card()?;
            pile1.push(card1);
            pile2.push(card2);
            reveals.push(Reveal { card1, card2 });

            trace!(
                battle = reveals.len(),
                %card1,
                %card2,
                at_stake = pile1.len() + pile2.len(),
                "war battle"
            );

            let winner = match card1.cmp(&card2) {
                Ordering::Greater => Seat::One,
                Ordering::Less => Seat::Two,
                Ordering::Equal => continue,
            };

            let cards = pile1.len() + pile2.len();
            self.player_mut(winner)
                .add_cards(pile1.into_iter().chain(pile2));
            return Ok(WarOutcome {
                reveals,
                resolution: WarResolution::Won { winner, cards },
            });
        }
    }
}
