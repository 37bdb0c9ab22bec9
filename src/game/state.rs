//! Game state types.

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first player, who always plays the front card.
    One,
    /// The second player, the computer in single-player games.
    Two,
}

impl Seat {
    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards have not been dealt.
    NotStarted,
    /// Rounds are being played.
    InProgress,
    /// The game has a winner. No transition leaves this state.
    Over(Seat),
}
