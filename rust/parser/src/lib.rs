//! # railbird-parser: Poker Hand-History Parser
//!
//! Parses one room's hand-history text exports into a structured,
//! serializable representation of a hand: header metadata, seated
//! players, betting actions per street, board cards, showdown results
//! and computed hero earnings.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card and hole-combo value types and token parsing
//! - [`constants`] - Closed vocabularies (actions, games, limits, currencies)
//! - [`street`] - One betting round: action grammar and board-texture flags
//! - [`handhistory`] - The parsed aggregate and the `RoomParser` contract
//! - [`pokerstars`] - Line-oriented parser for the PokerStars format
//! - [`encoding`] - Key-ordered JSON mapping of the aggregate
//! - [`errors`] - Error types for parse failures
//!
//! ## Quick Start
//!
//! ```rust
//! use railbird_parser::handhistory::RoomParser;
//! use railbird_parser::pokerstars::PokerStars;
//!
//! let raw = "\
//! PokerStars Hand #243690727177:  Hold'em No Limit ($0.01/$0.02 USD) - 2022/08/10 9:14:01 ET
//! Table 'Aludra' 6-max Seat #3 is the button
//! Seat 3: pokerhero ($2 in chips)
//! Seat 5: heureka3 ($1.95 in chips)
//! heureka3: posts small blind $0.01
//! pokerhero: posts big blind $0.02
//! *** HOLE CARDS ***
//! Dealt to pokerhero [7d 2c]
//! heureka3: folds
//! Uncalled bet ($0.01) returned to pokerhero
//! pokerhero collected $0.02 from pot
//! pokerhero: doesn't show hand
//! *** SUMMARY ***
//! Total pot $0.02 | Rake $0
//! Seat 3: pokerhero (button) (big blind) collected ($0.02)
//! Seat 5: heureka3 (small blind) folded before Flop (didn't bet)";
//!
//! let hand = PokerStars.parse(raw)?;
//! assert_eq!(hand.hero().name, "pokerhero");
//! assert!(hand.flop.is_none());
//! assert_eq!(hand.winners, vec!["pokerhero".to_string()]);
//! # Ok::<(), railbird_parser::errors::ParseError>(())
//! ```
//!
//! ## Batch parsing
//!
//! Parsing is pure, synchronous, CPU-bound text processing with no
//! shared state between hands; a malformed hand fails with a
//! [`errors::ParseError`] and should not abort a batch, so catch
//! per-hand failures and continue. Independent hands may be parsed
//! from worker threads with no coordination.

pub mod cards;
pub mod constants;
pub mod encoding;
pub mod errors;
pub mod handhistory;
pub mod pokerstars;
pub mod street;
