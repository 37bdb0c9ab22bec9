//! Helpers shared by the integration tests.

use std::collections::VecDeque;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wargame::{Card, Game, GameOptions, Rank, Seat, Suit};

/// A generator that returns queued `u64` values before falling back to ChaCha.
#[derive(Clone)]
pub struct ScriptedRng {
    script: VecDeque<u64>,
    fallback: ChaCha8Rng,
}

impl ScriptedRng {
    pub fn new(seed: u64) -> Self {
        Self {
            script: VecDeque::new(),
            fallback: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Queues a value that `rng.random::<f64>()` turns into `roll`.
    pub fn push_roll(&mut self, roll: f64) {
        let bits = (roll * (1_u64 << 53) as f64) as u64;
        self.script.push_back(bits << 11);
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.fallback.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.script
            .pop_front()
            .unwrap_or_else(|| self.fallback.next_u64())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.fallback.fill_bytes(dst);
    }
}

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// A started game between "Noah" and "Computer" driven by a scripted generator.
pub fn scripted_game(options: GameOptions) -> Game<ScriptedRng> {
    let options = options.with_player1_name("Noah");
    let mut game = Game::with_rng(options, ScriptedRng::new(11)).unwrap();
    game.start().unwrap();
    game
}

/// Replaces a player's hand.
pub fn set_hand<R>(game: &mut Game<R>, seat: Seat, cards: &[Card]) {
    let player = game.player_mut(seat);
    player.clear();
    player.add_cards(cards.iter().copied());
}

pub fn values<R>(game: &Game<R>, seat: Seat) -> Vec<u8> {
    game.player(seat).cards().map(Card::value).collect()
}
