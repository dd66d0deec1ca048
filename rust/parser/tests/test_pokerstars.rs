use railbird_parser::cards::Combo;
use railbird_parser::constants::{ActionKind, Currency, Game, GameType, Limit, MoneyType};
use railbird_parser::errors::ParseError;
use railbird_parser::handhistory::RoomParser;
use railbird_parser::pokerstars::PokerStars;

const HAND_SHOWDOWN: &str = "\
PokerStars Hand #243690727176:  Hold'em No Limit ($0.01/$0.02 USD) - 2022/08/10 9:12:36 ET
Table 'Aludra' 6-max Seat #3 is the button
Seat 1: ROMPAL76 ($2.14 in chips)
Seat 3: pokerhero ($1.86 in chips)
Seat 5: heureka3 ($2 in chips)
heureka3: posts small blind $0.01
ROMPAL76: posts big blind $0.02
*** HOLE CARDS ***
Dealt to pokerhero [Ah Kd]
pokerhero: raises $0.04 to $0.06
heureka3: folds
ROMPAL76: calls $0.04
*** FLOP *** [3c 3h 3s]
ROMPAL76: checks
pokerhero: bets $0.07
ROMPAL76: calls $0.07
*** TURN *** [3c 3h 3s] [7c]
ROMPAL76: checks
pokerhero: checks
*** RIVER *** [3c 3h 3s 7c] [Ks]
ROMPAL76: checks
pokerhero: bets $0.12
ROMPAL76: calls $0.12
*** SHOW DOWN ***
pokerhero: shows [Ah Kd] (a full house, Threes full of Kings)
ROMPAL76: mucks hand
pokerhero collected $0.49 from pot
*** SUMMARY ***
Total pot $0.51 | Rake $0.02
Board [3c 3h 3s 7c Ks]
Seat 1: ROMPAL76 (big blind) mucked [Qs Jh]
Seat 3: pokerhero (button) showed [Ah Kd] and won ($0.49) with a full house, Threes full of Kings
Seat 5: heureka3 (small blind) folded before Flop
";

const HAND_WALK: &str = "\
PokerStars Hand #243690727177:  Hold'em No Limit ($0.01/$0.02 USD) - 2022/08/10 9:14:01 ET
Table 'Aludra' 6-max Seat #3 is the button
Seat 3: pokerhero ($2 in chips)
Seat 5: heureka3 ($1.95 in chips)
heureka3: posts small blind $0.01
pokerhero: posts big blind $0.02
*** HOLE CARDS ***
Dealt to pokerhero [7d 2c]
heureka3: folds
Uncalled bet ($0.01) returned to pokerhero
pokerhero collected $0.02 from pot
pokerhero: doesn't show hand
*** SUMMARY ***
Total pot $0.02 | Rake $0
Seat 3: pokerhero (button) (big blind) collected ($0.02)
Seat 5: heureka3 (small blind) folded before Flop (didn't bet)
";

const HAND_FOLD_TO_RAISE: &str = "\
PokerStars Hand #243700000002:  Hold'em No Limit ($0.01/$0.02 USD) - 2022/08/10 9:31:00 ET
Table 'Aludra' 6-max Seat #1 is the button
Seat 1: ROMPAL76 ($2 in chips)
Seat 3: pokerhero ($2 in chips)
Seat 5: heureka3 ($2 in chips)
heureka3: posts small blind $0.01
pokerhero: posts big blind $0.02
*** HOLE CARDS ***
Dealt to pokerhero [7d 2c]
ROMPAL76: raises $0.04 to $0.06
heureka3: folds
pokerhero: folds
Uncalled bet ($0.04) returned to ROMPAL76
ROMPAL76 collected $0.05 from pot
ROMPAL76: doesn't show hand
*** SUMMARY ***
Total pot $0.05 | Rake $0
Seat 1: ROMPAL76 (button) collected ($0.05)
Seat 3: pokerhero (big blind) folded before Flop
Seat 5: heureka3 (small blind) folded before Flop
";

const HAND_ALL_IN: &str = "\
PokerStars Hand #243700000001:  Hold'em No Limit ($0.01/$0.02 USD) - 2022/08/10 9:30:00 ET
Table 'Aludra' 6-max Seat #1 is the button
Seat 1: ROMPAL76 ($1 in chips)
Seat 3: pokerhero ($1 in chips)
ROMPAL76: posts small blind $0.01
pokerhero: posts big blind $0.02
*** HOLE CARDS ***
Dealt to pokerhero [As Ad]
ROMPAL76: raises $0.98 to $1 and is all-in
pokerhero: calls $0.98 and is all-in
*** FLOP *** [2h 5d 8c]
*** TURN *** [2h 5d 8c] [9d]
*** RIVER *** [2h 5d 8c 9d] [Jc]
*** SHOW DOWN ***
ROMPAL76: shows [Kh Ks] (a pair of Kings)
pokerhero: shows [As Ad] (a pair of Aces)
pokerhero collected $1.93 from pot
*** SUMMARY ***
Total pot $2 | Rake $0.07
Board [2h 5d 8c 9d Jc]
Seat 1: ROMPAL76 (button) (small blind) showed [Kh Ks] and lost with a pair of Kings
Seat 3: pokerhero (big blind) showed [As Ad] and won ($1.93) with a pair of Aces
";

const HAND_TOURNAMENT: &str = "\
PokerStars Hand #243004648846: Tournament #3361296355, $0.98+$0.12 USD Hold'em No Limit - Level I (10/20) - 2022/07/25 14:03:09 ET
Table '3361296355 1' 9-max Seat #1 is the button
Seat 1: adevlupec (500 in chips)
Seat 2: Dette32 (500 in chips)
Seat 3: pokerhero (500 in chips)
Dette32: posts small blind 10
pokerhero: posts big blind 20
*** HOLE CARDS ***
Dealt to pokerhero [Ac Qd]
adevlupec: folds
Dette32: calls 10
pokerhero: checks
*** FLOP *** [2h 5d 8c]
Dette32: checks
pokerhero: checks
*** TURN *** [2h 5d 8c] [9d]
Dette32: bets 20
pokerhero: folds
Uncalled bet (20) returned to Dette32
Dette32 collected 40 from pot
Dette32: doesn't show hand
*** SUMMARY ***
Total pot 40 | Rake 0
Board [2h 5d 8c 9d]
Seat 1: adevlupec (button) folded before Flop (didn't bet)
Seat 2: Dette32 (small blind) collected (40)
Seat 3: pokerhero (big blind) folded on the Turn
";

const HAND_PLAY_MONEY: &str = "\
PokerStars Hand #223344556677:  Hold'em No Limit (10/20) - 2022/08/10 9:12:36 ET
Table 'Hyakutake' 6-max Seat #3 is the button
Seat 3: pokerhero (2000 in chips)
Seat 5: heureka3 (1950 in chips)
heureka3: posts small blind 10
pokerhero: posts big blind 20
*** HOLE CARDS ***
Dealt to pokerhero [7d 2c]
heureka3: folds
Uncalled bet (10) returned to pokerhero
pokerhero collected 20 from pot
pokerhero: doesn't show hand
*** SUMMARY ***
Total pot 20 | Rake 0
Seat 3: pokerhero (button) (big blind) collected (20)
Seat 5: heureka3 (small blind) folded before Flop (didn't bet)
";

#[test]
fn header_phase_alone_parses_identity_and_stakes() {
    let header = PokerStars.parse_header(HAND_SHOWDOWN).unwrap();
    assert_eq!(header.ident, 243690727176);
    assert_eq!(header.game, Game::Holdem);
    assert_eq!(header.limit, Limit::NoLimit);
    assert_eq!(header.game_type, GameType::Cash);
    assert_eq!(header.sb, 0.01);
    assert_eq!(header.bb, 0.02);
    assert_eq!(header.currency, Some(Currency::Usd));
    assert_eq!(header.money_type, Some(MoneyType::Real));
    assert!(header.tournament_ident.is_none());
    assert_eq!(header.date.to_string(), "2022-08-10 09:12:36 -04:00");
}

#[test]
fn showdown_hand_parses_end_to_end() {
    let hand = PokerStars.parse(HAND_SHOWDOWN).unwrap();
    assert_eq!(hand.ident, 243690727176);
    assert_eq!(hand.table_name, "Aludra");
    assert_eq!(hand.max_players, 6);
    assert_eq!(hand.players.len(), 6);
    assert_eq!(hand.hero().name, "pokerhero");
    assert_eq!(hand.button().name, "pokerhero");
    assert_eq!(hand.hero().combo, Some(Combo::parse("AhKd").unwrap()));
    assert_eq!(hand.total_pot, Some(0.51));
    assert_eq!(hand.rake, Some(0.02));
    assert_eq!(hand.winners, vec!["pokerhero".to_string()]);

    let board = hand.board();
    assert_eq!(board.len(), 5);
    assert_eq!(board[4].to_string(), "Ks");

    let river = hand.river.as_ref().unwrap();
    assert_eq!(river.cards.as_ref().unwrap().len(), 5);
    assert_eq!(river.actions.as_ref().unwrap().len(), 3);
}

#[test]
fn unmentioned_seats_stay_empty_placeholders() {
    let hand = PokerStars.parse(HAND_SHOWDOWN).unwrap();
    assert!(hand.players[1].is_empty_seat());
    assert_eq!(hand.players[1].name, "Empty Seat 2");
    assert_eq!(hand.players[1].stack, 0.0);
    assert!(!hand.players[0].is_empty_seat());
    assert_eq!(hand.players[0].name, "ROMPAL76");
    assert_eq!(hand.players[0].stack, 2.14);
}

#[test]
fn blind_posts_replay_at_the_front_of_preflop() {
    let hand = PokerStars.parse(HAND_SHOWDOWN).unwrap();
    let actions = hand.preflop.as_ref().unwrap().actions.as_ref().unwrap();
    assert_eq!(actions[0].action, ActionKind::PostSb);
    assert_eq!(actions[0].name, "heureka3");
    assert_eq!(actions[1].action, ActionKind::PostBb);
    assert_eq!(actions[1].name, "ROMPAL76");
    assert_eq!(actions[2].action, ActionKind::Raise);
    assert_eq!(actions[2].amount, Some(0.06));
}

#[test]
fn only_winning_showdown_lines_reveal_combos() {
    let hand = PokerStars.parse(HAND_SHOWDOWN).unwrap();
    // the mucked-and-shown losing hand in the summary stays hidden
    assert!(hand.players[0].combo.is_none());
    assert_eq!(hand.players[2].combo, Some(Combo::parse("AhKd").unwrap()));
}

#[test]
fn showdown_hand_earnings_net_all_streets() {
    let hand = PokerStars.parse(HAND_SHOWDOWN).unwrap();
    // -0.06 preflop, -0.07 flop, -0.12 river, +0.49 collected
    assert!((hand.earnings.unwrap() - 0.24).abs() < 1e-9);
}

#[test]
fn walk_leaves_postflop_streets_unreached() {
    let hand = PokerStars.parse(HAND_WALK).unwrap();
    assert!(hand.preflop.is_some());
    assert!(hand.flop.is_none());
    assert!(hand.turn.is_none());
    assert!(hand.river.is_none());
    assert!(hand.show_down.is_none());
    assert!(hand.board().is_empty());
    assert_eq!(hand.winners, vec!["pokerhero".to_string()]);
    // -0.02 blind, +0.01 returned, +0.02 collected
    assert_eq!(hand.earnings, Some(0.01));
}

#[test]
fn posting_and_folding_costs_exactly_the_blind() {
    let hand = PokerStars.parse(HAND_FOLD_TO_RAISE).unwrap();
    assert_eq!(hand.earnings, Some(-0.02));
    assert_eq!(hand.winners, vec!["ROMPAL76".to_string()]);
    assert_eq!(hand.button().name, "ROMPAL76");
}

#[test]
fn all_in_runout_streets_have_cards_but_no_actions() {
    let hand = PokerStars.parse(HAND_ALL_IN).unwrap();
    let flop = hand.flop.as_ref().unwrap();
    assert!(flop.cards.is_some());
    assert!(flop.actions.is_none());
    let turn = hand.turn.as_ref().unwrap();
    assert_eq!(turn.cards.as_ref().unwrap().len(), 4);
    assert!(turn.actions.is_none());
    assert_eq!(hand.winners, vec!["pokerhero".to_string()]);
    // -0.02 blind, -0.98 call, +1.93 collected
    assert!((hand.earnings.unwrap() - 0.93).abs() < 1e-9);
}

#[test]
fn tournament_header_fields_carry_through() {
    let hand = PokerStars.parse(HAND_TOURNAMENT).unwrap();
    assert_eq!(hand.game_type, GameType::Tour);
    assert_eq!(hand.tournament_ident, Some(3361296355));
    assert_eq!(hand.tournament_level.as_deref(), Some("I"));
    assert_eq!(hand.buyin, Some(0.98));
    assert_eq!(hand.buyin_rake, Some(0.12));
    assert_eq!(hand.currency, Some(Currency::Usd));
    assert_eq!(hand.money_type, Some(MoneyType::Real));
    assert_eq!(hand.sb, 10.0);
    assert_eq!(hand.bb, 20.0);
    assert_eq!(hand.table_name, "3361296355 1");
    assert_eq!(hand.max_players, 9);
}

#[test]
fn tournament_hand_resolves_winner_and_earnings() {
    let hand = PokerStars.parse(HAND_TOURNAMENT).unwrap();
    assert_eq!(hand.winners, vec!["Dette32".to_string()]);
    assert_eq!(hand.earnings, Some(-20.0));
    assert_eq!(hand.board().len(), 4);
    assert_eq!(hand.total_pot, Some(40.0));
    assert_eq!(hand.rake, Some(0.0));
}

#[test]
fn unlabeled_stakes_mean_play_money() {
    let hand = PokerStars.parse(HAND_PLAY_MONEY).unwrap();
    assert_eq!(hand.game_type, GameType::Cash);
    assert_eq!(hand.money_type, Some(MoneyType::Play));
    assert_eq!(hand.currency, None);
    assert_eq!(hand.sb, 10.0);
    assert_eq!(hand.bb, 20.0);
    assert_eq!(hand.winners, vec!["pokerhero".to_string()]);
}

#[test]
fn summary_board_mismatch_is_a_consistency_error() {
    let raw = HAND_SHOWDOWN.replace("Board [3c 3h 3s 7c Ks]", "Board [3c 3h 3s 7c Qs]");
    let err = PokerStars.parse(&raw).unwrap_err();
    assert!(matches!(err, ParseError::Consistency(_)), "got {err:?}");
}

#[test]
fn turn_must_extend_the_flop() {
    let raw = HAND_SHOWDOWN.replace("*** TURN *** [3c 3h 3s] [7c]", "*** TURN *** [2c 2h 2s] [7c]");
    let err = PokerStars.parse(&raw).unwrap_err();
    assert!(matches!(err, ParseError::Consistency(_)), "got {err:?}");
}

#[test]
fn missing_table_line_is_a_structural_error() {
    let raw = HAND_SHOWDOWN.replacen("Table 'Aludra' 6-max", "Tble 'Aludra' 6-max", 1);
    let err = PokerStars.parse(&raw).unwrap_err();
    assert!(matches!(err, ParseError::Structural { section: "table", .. }), "got {err:?}");
}

#[test]
fn button_seat_outside_the_table_is_rejected() {
    let raw = HAND_SHOWDOWN.replacen("Seat #3 is the button", "Seat #7 is the button", 1);
    let err = PokerStars.parse(&raw).unwrap_err();
    assert!(matches!(err, ParseError::Structural { section: "table", .. }), "got {err:?}");
}

#[test]
fn unseated_hero_is_rejected() {
    let raw = HAND_SHOWDOWN.replacen("Dealt to pokerhero", "Dealt to stranger", 1);
    let err = PokerStars.parse(&raw).unwrap_err();
    assert!(matches!(err, ParseError::Structural { section: "hero", .. }), "got {err:?}");
}

#[test]
fn winter_hands_carry_the_standard_offset() {
    let raw = HAND_SHOWDOWN.replacen("2022/08/10 9:12:36 ET", "2022/01/10 9:12:36 ET", 1);
    let hand = PokerStars.parse(&raw).unwrap();
    assert_eq!(hand.date.to_string(), "2022-01-10 09:12:36 -05:00");
}
