use alloc::string::{String, ToString};
use core::fmt;

use crate::result::{Reveal, RoundOutcome, WarOutcome, WarResolution};

use super::{Game, Seat};

const WAR_ANNOUNCEMENT: &str =
    "War! Each player draws three face-down cards and one face-up card.";

/// Human-readable text for a [`RoundOutcome`].
///
/// Created with [`Game::narrative`].
#[derive(Debug, Clone, Copy)]
pub struct Narrative<'a> {
    names: [&'a str; 2],
    outcome: &'a RoundOutcome,
}

impl Narrative<'_> {
    const fn name(&self, seat: Seat) -> &str {
        match seat {
            Seat::One => self.names[0],
            Seat::Two => self.names[1],
        }
    }

    fn write_war(&self, f: &mut fmt::Formatter<'_>, war: &WarOutcome) -> fmt::Result {
        write!(f, "\n{WAR_ANNOUNCEMENT}\n")?;
        for Reveal { card1, card2 } in &war.reveals {
            writeln!(
                f,
                "{} reveals {card1}, {} reveals {card2}.",
                self.names[0], self.names[1]
            )?;
            if card1 == card2 {
                write!(f, "Another tie! War continues!\n\n{WAR_ANNOUNCEMENT}\n")?;
            }
        }

        match war.resolution {
            WarResolution::Won { winner, .. } => write!(f, "{} wins the war!", self.name(winner)),
            WarResolution::Forfeit { forfeiter } => write!(
                f,
                "{} cannot continue war. {} wins the game!",
                self.name(forfeiter),
                self.name(forfeiter.other())
            ),
        }
    }
}

impl fmt::Display for Narrative<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            RoundOutcome::GameOver { winner } => {
                write!(f, "Game Over: {} wins!", self.name(*winner))
            }
            RoundOutcome::Won {
                round,
                card1,
                card2,
                winner,
            } => {
                writeln!(
                    f,
                    "Round {round}: {} plays {card1}, {} plays {card2}.",
                    self.names[0], self.names[1]
                )?;
                write!(f, "{} wins the round!", self.name(*winner))
            }
            RoundOutcome::War {
                round,
                card1,
                card2,
                war,
            } => {
                writeln!(
                    f,
                    "Round {round}: {} plays {card1}, {} plays {card2}.",
                    self.names[0], self.names[1]
                )?;
                self.write_war(f, war)
            }
        }
    }
}

impl<R> Game<R> {
    /// Returns a displayable description of `outcome` using the current
    /// player names.
    #[must_use]
    pub fn narrative<'a>(&'a self, outcome: &'a RoundOutcome) -> Narrative<'a> {
        Narrative {
            names: [self.player1.name(), self.player2.name()],
            outcome,
        }
    }

    /// Describes `outcome` as text.
    ///
    /// ```
    /// use wargame::{Game, GameOptions, RoundOutcome, Seat};
    ///
    /// let game = Game::new(GameOptions::default(), 1).unwrap();
    /// let text = game.narrate(&RoundOutcome::GameOver { winner: Seat::Two });
    /// assert_eq!(text, "Game Over: Computer wins!");
    /// ```
    #[must_use]
    pub fn narrate(&self, outcome: &RoundOutcome) -> String {
        self.narrative(outcome).to_string()
    }
}
