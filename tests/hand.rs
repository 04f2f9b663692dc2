//! Scoring and card model tests.

use deckjack::{Card, Hand, ProviderError, Rank, Suit, hand_value, is_soft};

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .map(|&rank| Card::new(rank, Suit::Clubs))
        .collect()
}

#[test]
fn empty_hand_is_worth_nothing() {
    assert_eq!(hand_value(&[]), 0);
    assert!(Hand::new().is_empty());
    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn aces_downgrade_one_at_a_time() {
    assert_eq!(hand_value(&cards(&[Rank::Ace])), 11);
    assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::King])), 21);
    assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::Nine, Rank::Ace])), 21);
    assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::Five, Rank::Nine])), 15);
    assert_eq!(hand_value(&cards(&[Rank::Ace; 11])), 21);
}

#[test]
fn huge_all_ace_hand_saturates_without_panicking() {
    let aces = vec![Card::new(Rank::Ace, Suit::Spades); 70_000];
    assert_eq!(hand_value(&aces), u16::MAX);
    assert!(!is_soft(&aces));

    let aces = vec![Card::new(Rank::Ace, Suit::Spades); 60_000];
    assert_eq!(hand_value(&aces), 60_010);
}

#[test]
fn bust_without_aces_is_not_rescued() {
    assert_eq!(hand_value(&cards(&[Rank::King, Rank::Queen, Rank::Jack])), 30);
    assert_eq!(
        hand_value(&cards(&[Rank::King, Rank::Queen, Rank::Ace, Rank::Ace])),
        22
    );
}

#[test]
fn soft_hands_are_detected() {
    assert!(is_soft(&cards(&[Rank::Ace, Rank::Six])));
    assert!(!is_soft(&cards(&[Rank::Ace, Rank::Six, Rank::Ten])));
    assert!(!is_soft(&cards(&[Rank::Ten, Rank::Seven])));

    let hand: Hand = cards(&[Rank::Ace, Rank::Ace]).into_iter().collect();
    assert!(hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn hand_keeps_draw_order() {
    let mut hand = Hand::new();
    hand.add_card(Card::new(Rank::Five, Suit::Hearts));
    hand.add_card(Card::new(Rank::Two, Suit::Spades));
    hand.add_card(Card::new(Rank::King, Suit::Diamonds));

    let ranks: Vec<Rank> = hand.cards().iter().map(|card| card.rank).collect();
    assert_eq!(ranks, [Rank::Five, Rank::Two, Rank::King]);
    assert_eq!(hand.first().map(|card| card.suit), Some(Suit::Hearts));
    assert!(!hand.is_bust());
    assert_eq!(hand.value(), 17);
}

#[test]
fn rank_table_values() {
    let values: Vec<u8> = Rank::ALL.iter().map(|rank| rank.value()).collect();
    assert_eq!(values, [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11]);
}

#[test]
fn ranks_parse_from_deck_api_names() {
    assert_eq!("2".parse::<Rank>(), Ok(Rank::Two));
    assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
    assert_eq!("JACK".parse::<Rank>(), Ok(Rank::Jack));
    assert_eq!("queen".parse::<Rank>(), Ok(Rank::Queen));
    assert_eq!("ACE".parse::<Rank>(), Ok(Rank::Ace));
    assert_eq!("HEARTS".parse::<Suit>(), Ok(Suit::Hearts));

    assert_eq!(
        "1".parse::<Rank>(),
        Err(ProviderError::UnknownRank("1".into()))
    );
    assert_eq!(
        "010".parse::<Rank>(),
        Err(ProviderError::UnknownRank("010".into()))
    );
    assert_eq!(
        "STARS".parse::<Suit>(),
        Err(ProviderError::UnknownSuit("STARS".into()))
    );
}

#[test]
fn cards_display_rank_and_suit() {
    let card = Card::new(Rank::Queen, Suit::Hearts).with_image("QH.png");
    assert_eq!(card.to_string(), "QUEEN of HEARTS");
    assert_eq!(card.image.as_deref(), Some("QH.png"));
    assert_eq!(card.value(), 10);
}
