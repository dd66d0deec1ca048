//! The parsed hand aggregate and the shared parsing contract room
//! parsers implement.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Combo};
use crate::constants::{Currency, Game, GameType, Limit, MoneyType};
use crate::errors::ParseError;
use crate::street::Street;

/// A seat at the table. Seats the room never mentioned stay
/// `Empty Seat N` placeholders with a zero stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique within a hand; the join key for actions.
    pub name: String,
    pub stack: f64,
    /// 1-based seat number.
    pub seat: u8,
    /// Known for the hero and, post-showdown, for players who showed.
    pub combo: Option<Combo>,
}

impl Player {
    pub fn empty_seat(seat: u8) -> Player {
        Player {
            name: format!("Empty Seat {seat}"),
            stack: 0.0,
            seat,
            combo: None,
        }
    }

    pub fn is_empty_seat(&self) -> bool {
        self.name.starts_with("Empty Seat ")
    }
}

/// Typed view of the header grammar's capture groups. Downstream logic
/// consumes these fields instead of re-parsing header strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub ident: u64,
    pub game: Game,
    pub limit: Limit,
    pub game_type: GameType,
    pub sb: f64,
    pub bb: f64,
    pub tournament_ident: Option<u64>,
    pub tournament_level: Option<String>,
    /// Tournament buy-in and its rake share (header only, not part of
    /// the serialization contract).
    pub buyin: Option<f64>,
    pub buyin_rake: Option<f64>,
    pub currency: Option<Currency>,
    pub money_type: Option<MoneyType>,
    pub date: DateTime<FixedOffset>,
}

/// The aggregate root: one fully parsed hand. Read-only once parsing
/// completes.
#[derive(Debug, Clone, PartialEq)]
pub struct HandHistory {
    pub ident: u64,
    pub date: DateTime<FixedOffset>,
    pub table_name: String,
    pub max_players: u8,
    pub sb: f64,
    pub bb: f64,
    pub game: Game,
    pub game_type: GameType,
    pub limit: Limit,
    pub tournament_ident: Option<u64>,
    pub tournament_level: Option<String>,
    pub buyin: Option<f64>,
    pub buyin_rake: Option<f64>,
    pub currency: Option<Currency>,
    pub money_type: Option<MoneyType>,
    /// Fixed-size seat list, one entry per seat up to `max_players`.
    pub players: Vec<Player>,
    pub(crate) button: usize,
    pub(crate) hero: usize,
    pub preflop: Option<Street>,
    pub flop: Option<Street>,
    pub turn: Option<Street>,
    pub river: Option<Street>,
    pub show_down: Option<Street>,
    pub total_pot: Option<f64>,
    pub rake: Option<f64>,
    /// Deduplicated winner names in first-seen order, positional
    /// annotations stripped.
    pub winners: Vec<String>,
    /// Hero's net result: inflows minus outflows across all streets.
    pub earnings: Option<f64>,
}

impl HandHistory {
    pub fn hero(&self) -> &Player {
        &self.players[self.hero]
    }

    /// The dealer-position seat. Indexes into the same seat list as
    /// `hero()`, so a hero on the button reflects the revealed combo.
    pub fn button(&self) -> &Player {
        &self.players[self.button]
    }

    /// The community cards dealt so far: empty, 3, 4 or 5 cards. Each
    /// street's card list extends the previous one, so the deepest
    /// street reached carries the whole board.
    pub fn board(&self) -> Vec<Card> {
        for street in [&self.river, &self.turn, &self.flop] {
            if let Some(street) = street {
                if let Some(cards) = &street.cards {
                    return cards.clone();
                }
            }
        }
        Vec::new()
    }
}

/// Shared parsing contract: raw hand-history text in, aggregate or
/// parse error out. One implementing type per room format; the room is
/// known at call time, so no runtime discovery is involved.
pub trait RoomParser {
    /// Lightweight first phase: identity, stakes and timestamp only.
    fn parse_header(&self, raw: &str) -> Result<Header, ParseError>;

    /// Full two-phase parse of one hand-history blob.
    fn parse(&self, raw: &str) -> Result<HandHistory, ParseError>;
}
