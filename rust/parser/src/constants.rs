//! Closed vocabularies shared across the parser: action kinds, game
//! variants, limit types, currencies and money types. Each enum knows
//! the spellings used by the source hand-history format and the
//! canonical string emitted by the serializer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of event recorded inside a betting street.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    PostSb,
    PostBb,
    Ante,
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    Win,
    Muck,
    /// Uncalled-bet return to the bettor.
    Return,
    CashOut,
}

impl ActionKind {
    /// Maps the first keyword after the colon of a generic action line,
    /// or the blind text of a post line, to an action kind.
    pub fn from_verb(verb: &str) -> Option<ActionKind> {
        match verb {
            "folds" => Some(ActionKind::Fold),
            "checks" => Some(ActionKind::Check),
            "calls" => Some(ActionKind::Call),
            "bets" => Some(ActionKind::Bet),
            "raises" => Some(ActionKind::Raise),
            "small blind" => Some(ActionKind::PostSb),
            "big blind" => Some(ActionKind::PostBb),
            "the ante" => Some(ActionKind::Ante),
            "cashed out" => Some(ActionKind::CashOut),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::PostSb => "POST_SB",
            ActionKind::PostBb => "POST_BB",
            ActionKind::Ante => "ANTE",
            ActionKind::Fold => "FOLD",
            ActionKind::Check => "CHECK",
            ActionKind::Call => "CALL",
            ActionKind::Bet => "BET",
            ActionKind::Raise => "RAISE",
            ActionKind::Win => "WIN",
            ActionKind::Muck => "MUCK",
            ActionKind::Return => "RETURN",
            ActionKind::CashOut => "CASH_OUT",
        }
    }

    /// Hero money leaving the stack; contributes negatively to earnings.
    pub fn is_outflow(self) -> bool {
        matches!(
            self,
            ActionKind::Bet
                | ActionKind::Raise
                | ActionKind::Call
                | ActionKind::PostSb
                | ActionKind::PostBb
        )
    }

    /// Hero money coming back; contributes positively to earnings.
    pub fn is_inflow(self) -> bool {
        matches!(
            self,
            ActionKind::Win | ActionKind::CashOut | ActionKind::Return
        )
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Poker variant named in the hand header.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Game {
    Holdem,
    Omaha,
    OmahaHiLo,
}

impl Game {
    pub fn from_header(text: &str) -> Option<Game> {
        match text {
            "Hold'em" => Some(Game::Holdem),
            "Omaha" => Some(Game::Omaha),
            "Omaha Hi/Lo" => Some(Game::OmahaHiLo),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Game::Holdem => "Hold'em",
            Game::Omaha => "Omaha",
            Game::OmahaHiLo => "Omaha Hi/Lo",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cash hand or tournament hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Cash,
    Tour,
}

impl GameType {
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Cash => "CASH",
            GameType::Tour => "TOUR",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Betting structure named in the hand header.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Limit {
    NoLimit,
    PotLimit,
    FixedLimit,
}

impl Limit {
    pub fn from_header(text: &str) -> Option<Limit> {
        match text {
            "No Limit" => Some(Limit::NoLimit),
            "Pot Limit" => Some(Limit::PotLimit),
            "Limit" => Some(Limit::FixedLimit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Limit::NoLimit => "NL",
            Limit::PotLimit => "PL",
            Limit::FixedLimit => "FL",
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Real-money currencies the room reports.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn from_code(code: &str) -> Option<Currency> {
        match code {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the hand was played for real money or play money.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MoneyType {
    Real,
    Play,
}

impl MoneyType {
    pub fn as_str(self) -> &'static str {
        match self {
            MoneyType::Real => "Real money",
            MoneyType::Play => "Play money",
        }
    }
}

impl fmt::Display for MoneyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
