use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no ordering semantics; derived `Ord` exists only so
/// cards can be sorted into a canonical order for hashing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Maps the one-character suit code used in hand-history tokens.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Suit name as it appears in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "CLUBS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values follow the canonical rank table "2".."9","T","J","Q","K","A".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Numeric value 2..=14, used for straight-window arithmetic.
    pub fn value(self) -> u8 {
        self as u8
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// A single playing card, parsed from a 2-character token such as "Ad".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn parse(token: &str) -> Result<Card, ParseError> {
        let invalid = || ParseError::InvalidToken {
            token: token.to_string(),
        };
        let mut chars = token.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = Rank::from_char(r).ok_or_else(invalid)?;
        let suit = Suit::from_char(s).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Card, ParseError> {
        Card::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

/// A player's two hidden hole cards.
///
/// `first`/`second` keep the order they were parsed in for display,
/// but equality and hashing ignore order: "AdKc" and "KcAd" are the
/// same combo.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Combo {
    pub first: Card,
    pub second: Card,
}

impl Combo {
    /// Parses a 4-character token such as "AdKc".
    pub fn parse(token: &str) -> Result<Combo, ParseError> {
        let invalid = || ParseError::InvalidToken {
            token: token.to_string(),
        };
        if token.chars().count() != 4 {
            return Err(invalid());
        }
        let first = Card::parse(token.get(..2).ok_or_else(invalid)?)?;
        let second = Card::parse(token.get(2..).ok_or_else(invalid)?)?;
        Combo::from_cards(first, second)
    }

    pub fn from_cards(first: Card, second: Card) -> Result<Combo, ParseError> {
        if first == second {
            return Err(ParseError::InvalidCombo(format!("duplicate card {first}")));
        }
        Ok(Combo { first, second })
    }
}

impl PartialEq for Combo {
    fn eq(&self, other: &Combo) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for Combo {}

impl Hash for Combo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // hash a sorted pair so Hash stays consistent with the
        // order-insensitive Eq
        let mut pair = [self.first, self.second];
        pair.sort();
        pair.hash(state);
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}
