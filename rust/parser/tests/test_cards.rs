use railbird_parser::cards::{all_ranks, all_suits, Card, Combo, Rank, Suit};

#[test]
fn every_token_round_trips() {
    for &suit in &all_suits() {
        for &rank in &all_ranks() {
            let token = format!("{}{}", rank.to_char(), suit.to_char());
            let card = Card::parse(&token).unwrap();
            assert_eq!(card.rank, rank);
            assert_eq!(card.suit, suit);
            assert_eq!(card.to_string(), token);
        }
    }
}

#[test]
fn unknown_rank_or_suit_fails() {
    for token in ["Zd", "Tx", "ad", "AD", "", "A", "Ad2"] {
        assert!(Card::parse(token).is_err(), "token {token:?} should fail");
    }
}

#[test]
fn combo_from_token_preserves_parse_order() {
    let combo = Combo::parse("KcAd").unwrap();
    assert_eq!(combo.first.rank, Rank::King);
    assert_eq!(combo.second.rank, Rank::Ace);
    assert_eq!(combo.to_string(), "KcAd");
}

#[test]
fn combo_equality_ignores_order() {
    let a = Combo::parse("AdKc").unwrap();
    let b = Combo::parse("KcAd").unwrap();
    assert_eq!(a, b);
}

#[test]
fn duplicate_cards_never_form_a_combo() {
    let card = Card::parse("Ad").unwrap();
    assert!(Combo::from_cards(card, card).is_err());
    assert!(Combo::parse("AdAd").is_err());
}

#[test]
fn distinct_suits_of_one_rank_are_distinct_cards() {
    let a = Card {
        rank: Rank::Nine,
        suit: Suit::Clubs,
    };
    let b = Card {
        rank: Rank::Nine,
        suit: Suit::Spades,
    };
    assert_ne!(a, b);
    assert!(Combo::from_cards(a, b).is_ok());
}
