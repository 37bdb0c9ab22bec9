//! Property tests for cards, the deck, and round resolution.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wargame::{
    Card, DECK_SIZE, Deck, DeckError, Difficulty, Game, GameOptions, HandError, Player, Rank,
    RoundOutcome, Suit,
};

fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

#[test]
fn rank_values_increase_from_two_to_fourteen() {
    let values: Vec<u8> = Rank::ALL.iter().map(|rank| rank.value()).collect();

    assert_eq!(values.first(), Some(&2));
    assert_eq!(values.last(), Some(&14));
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn empty_deck_and_hand_refuse_to_give_cards() {
    let mut deck = Deck::from_cards([]);
    assert_eq!(deck.draw().unwrap_err(), DeckError::EmptyDeck);

    let mut player = Player::new("Noah").unwrap();
    assert_eq!(player.play_card().unwrap_err(), HandError::EmptyHand);
    assert_eq!(player.play_back_card().unwrap_err(), HandError::EmptyHand);
}

proptest! {
    #[test]
    fn card_order_ignores_suit(rank in rank(), a in suit(), b in suit()) {
        let first = Card::new(rank, a);
        let second = Card::new(rank, b);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first.cmp(&second), core::cmp::Ordering::Equal);
        prop_assert_eq!(first.is_same_card(&second), a == b);
    }

    #[test]
    fn card_order_follows_value(r1 in rank(), r2 in rank(), s1 in suit(), s2 in suit()) {
        let first = Card::new(r1, s1);
        let second = Card::new(r2, s2);

        prop_assert_eq!(first < second, r1.value() < r2.value());
        prop_assert!(first.to_string().parse::<Card>().unwrap().is_same_card(&first));
    }

    #[test]
    fn deck_holds_every_card_once(seed in any::<u64>(), draws in 0..=DECK_SIZE) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new(&mut rng);

        let unique: HashSet<(Rank, Suit)> = deck.cards().map(|c| (c.rank, c.suit)).collect();
        prop_assert_eq!(deck.size(), DECK_SIZE);
        prop_assert_eq!(unique.len(), DECK_SIZE);

        for _ in 0..draws {
            deck.draw().unwrap();
        }
        prop_assert_eq!(deck.size(), DECK_SIZE - draws);
        prop_assert_eq!(deck.is_empty(), draws == DECK_SIZE);

        deck.reset(&mut rng);
        prop_assert_eq!(deck.size(), DECK_SIZE);
    }

    #[test]
    fn rounds_conserve_cards(seed in any::<u64>(), hard in any::<bool>(), rounds in 1_usize..300) {
        let difficulty = if hard { Difficulty::Hard } else { Difficulty::Normal };
        let mut game = Game::new(GameOptions::default().with_difficulty(difficulty), seed).unwrap();
        game.start().unwrap();

        for _ in 0..rounds {
            if game.is_game_over() {
                break;
            }
            let before = game.round_count();
            let outcome = game.play_round().unwrap();

            prop_assert_eq!(game.cards_in_hands(), DECK_SIZE);
            let expected = if matches!(outcome, RoundOutcome::GameOver { .. }) {
                before
            } else {
                before + 1
            };
            prop_assert_eq!(game.round_count(), expected);
            prop_assert_eq!(outcome.game_winner().is_some(), game.is_game_over());
        }
    }
}
