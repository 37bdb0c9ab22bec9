//! Card and player tests.

use wargame::{Card, ParseCardError, Player, PlayerError, Rank, Suit};

#[test]
fn cards_parse_from_names() {
    let card = Card::from_names("Queen", "Hearts").unwrap();
    assert_eq!(card.rank, Rank::Queen);
    assert_eq!(card.suit, Suit::Hearts);
    assert_eq!(card.value(), 12);
    assert_eq!(card.to_string(), "Queen of Hearts");

    assert_eq!(
        Card::from_names("Joker", "Hearts").unwrap_err(),
        ParseCardError::InvalidRank
    );
    assert_eq!(
        Card::from_names("Ace", "Stars").unwrap_err(),
        ParseCardError::InvalidSuit
    );
    assert_eq!("1".parse::<Rank>().unwrap_err(), ParseCardError::InvalidRank);
}

#[test]
fn cards_parse_from_display_form() {
    let card: Card = "10 of Clubs".parse().unwrap();
    assert_eq!(card.value(), 10);
    assert!(card.is_same_card(&Card::new(Rank::Ten, Suit::Clubs)));
    assert!("Ten Clubs".parse::<Card>().is_err());
}

#[test]
fn equal_values_compare_equal_across_suits() {
    let hearts = Card::new(Rank::Queen, Suit::Hearts);
    let spades = Card::new(Rank::Queen, Suit::Spades);
    let king = Card::new(Rank::King, Suit::Clubs);

    assert_eq!(hearts, spades);
    assert!(!hearts.is_same_card(&spades));
    assert!(hearts < king);
    assert!(king > spades);
    assert_eq!(Card::new(Rank::Two, Suit::Clubs).value(), 2);
    assert_eq!(Card::new(Rank::Ace, Suit::Clubs).value(), 14);
}

#[test]
fn player_hand_is_first_in_first_out() {
    let mut player = Player::new("Noah").unwrap();
    assert!(!player.has_cards());

    player.add_card(Card::new(Rank::Two, Suit::Hearts));
    player.add_cards([
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Four, Suit::Hearts),
    ]);

    assert_eq!(player.card_count(), 3);
    assert_eq!(player.front_card().map(Card::value), Some(2));
    assert_eq!(player.back_card().map(Card::value), Some(4));
    assert_eq!(player.play_card().unwrap().value(), 2);
    assert_eq!(player.play_card().unwrap().value(), 3);
    assert_eq!(player.to_string(), "Noah (1 cards)");

    player.clear();
    assert_eq!(player.card_count(), 0);
}

#[test]
fn player_names_must_not_be_blank() {
    assert_eq!(Player::new("").unwrap_err(), PlayerError::InvalidName);
    assert_eq!(Player::new("   ").unwrap_err(), PlayerError::InvalidName);

    let mut player = Player::new("Noah").unwrap();
    assert_eq!(player.set_name("").unwrap_err(), PlayerError::InvalidName);
    assert_eq!(player.name(), "Noah");
}
