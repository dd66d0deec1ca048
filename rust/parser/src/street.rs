//! One betting round: its ordered action sequence, the community cards
//! dealt by that point, and the board-texture flags derived from them.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::constants::ActionKind;
use crate::errors::ParseError;

static BLIND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?): posts (?P<blind>\w+ \w+) \D?(?P<amount>\d+(?:\.\d+)?)").unwrap()
});

static RAISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?): raises \D?\d+(?:\.\d+)? to \D?(?P<amount>\d+(?:\.\d+)?)").unwrap()
});

static CASH_OUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?) cashed out the hand for \D?(?P<amount>\d+(?:\.\d+)?)").unwrap()
});

static COLLECTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?) collected \D?(?P<amount>\d+(?:\.\d+)?)").unwrap()
});

/// A single event within a street, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAction {
    pub name: String,
    pub action: ActionKind,
    /// Present for all monetary kinds, absent for FOLD/CHECK/MUCK.
    pub amount: Option<f64>,
}

/// A betting round. `cards` is absent for preflop and showdown;
/// `actions` is absent when the round had no modeled actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Street {
    pub cards: Option<Vec<Card>>,
    pub actions: Option<Vec<PlayerAction>>,
}

impl Street {
    /// Parses the raw lines of one betting round. A leading board line
    /// of the form `[<card> <card> ...]` supplies the community cards
    /// (turn/river lines repeat the earlier board in a second bracket
    /// group); every other line is classified as an action.
    pub fn parse(lines: &[&str]) -> Result<Street, ParseError> {
        let (cards, action_lines) = match lines.first() {
            Some(first) if first.starts_with('[') => {
                (Some(parse_card_tokens(first)?), &lines[1..])
            }
            _ => (None, lines),
        };
        let actions = parse_actions(action_lines)?;
        Ok(Street { cards, actions })
    }

    fn board_cards(&self) -> &[Card] {
        self.cards.as_deref().unwrap_or(&[])
    }

    /// All cards share one suit.
    pub fn is_monotone(&self) -> bool {
        let cards = self.board_cards();
        !cards.is_empty() && cards.iter().all(|c| c.suit == cards[0].suit)
    }

    /// All cards share one rank.
    pub fn is_triplet(&self) -> bool {
        let cards = self.board_cards();
        !cards.is_empty() && cards.iter().all(|c| c.rank == cards[0].rank)
    }

    /// Exactly two cards share a rank (and the board is not a triplet).
    pub fn has_pair(&self) -> bool {
        if self.is_triplet() {
            return false;
        }
        let cards = self.board_cards();
        cards
            .iter()
            .any(|c| cards.iter().filter(|o| o.rank == c.rank).count() == 2)
    }

    /// At least two cards share a suit.
    pub fn has_flushdraw(&self) -> bool {
        let cards = self.board_cards();
        cards
            .iter()
            .enumerate()
            .any(|(i, c)| cards[i + 1..].iter().any(|o| o.suit == c.suit))
    }

    /// Some three distinct ranks span at most four steps with at least
    /// one rank missing inside the window.
    pub fn has_straightdraw(&self) -> bool {
        self.rank_windows().0
    }

    /// Some three distinct ranks have exactly one rank missing inside
    /// the window.
    pub fn has_gutshot(&self) -> bool {
        self.rank_windows().1
    }

    fn rank_windows(&self) -> (bool, bool) {
        let mut vals: Vec<u8> = self.board_cards().iter().map(|c| c.rank.value()).collect();
        vals.sort_unstable();
        vals.dedup();
        let mut straightdraw = false;
        let mut gutshot = false;
        for i in 0..vals.len() {
            for k in i + 2..vals.len() {
                // any middle rank between i and k completes a 3-rank window
                let span = vals[k] - vals[i];
                if span == 3 {
                    straightdraw = true;
                    gutshot = true;
                } else if span == 4 {
                    straightdraw = true;
                }
            }
        }
        (straightdraw, gutshot)
    }
}

/// Scans a board line (`[3c 3h 3s]`, `[3c 3h 3s] [7c]`, ...) into its
/// card tokens.
pub(crate) fn parse_card_tokens(line: &str) -> Result<Vec<Card>, ParseError> {
    let mut cards = Vec::new();
    for token in line.split(['[', ']', ' ']).filter(|t| !t.is_empty()) {
        cards.push(Card::parse(token)?);
    }
    if !(3..=5).contains(&cards.len()) {
        return Err(ParseError::structural(
            "street",
            format!("bad board line {line:?}"),
        ));
    }
    Ok(cards)
}

/// Classifies action lines in fixed priority order; the rules are not
/// mutually exclusive, so order is the tie-break.
fn parse_actions(lines: &[&str]) -> Result<Option<Vec<PlayerAction>>, ParseError> {
    let mut actions = Vec::new();
    for &line in lines {
        if line.starts_with("Uncalled bet") {
            actions.push(parse_uncalled(line)?);
        } else if line.contains("collected") {
            actions.push(parse_collected(line)?);
        } else if line.contains("doesn't show hand") {
            actions.push(parse_muck(line)?);
        } else if line.contains(" said, \"") {
            trace!("skipping chat line: {line}");
        } else if line.contains("posts") {
            actions.push(parse_blind(line)?);
        } else if line.contains("raises") {
            actions.push(parse_raise(line)?);
        } else if line.contains("leaves")
            || line.contains("connected")
            || line.contains("removed from the table")
        {
            trace!("skipping table-state line: {line}");
        } else if line.contains("cashed out") {
            actions.push(parse_cashed_out(line)?);
        } else if line.contains("shows") || line.contains("mucks") || line.contains("finished") {
            trace!("skipping showdown narration: {line}");
        } else if line.contains(':') {
            actions.push(parse_player_action(line)?);
        } else {
            return Err(ParseError::UnrecognizedLine(line.to_string()));
        }
    }
    Ok(if actions.is_empty() {
        None
    } else {
        Some(actions)
    })
}

pub(crate) fn parse_amount(token: &str) -> Result<f64, ParseError> {
    token
        .replace('$', "")
        .parse()
        .map_err(|_| ParseError::InvalidAmount {
            token: token.to_string(),
        })
}

fn parse_uncalled(line: &str) -> Result<PlayerAction, ParseError> {
    let unrecognized = || ParseError::UnrecognizedLine(line.to_string());
    let open = line.find('(').ok_or_else(unrecognized)?;
    let close = line.find(')').ok_or_else(unrecognized)?;
    if close <= open {
        return Err(unrecognized());
    }
    let amount = parse_amount(&line[open + 1..close])?;
    let name_start = line.find("to ").ok_or_else(unrecognized)? + 3;
    Ok(PlayerAction {
        name: line[name_start..].to_string(),
        action: ActionKind::Return,
        amount: Some(amount),
    })
}

fn parse_collected(line: &str) -> Result<PlayerAction, ParseError> {
    let caps = COLLECTED_RE
        .captures(line)
        .ok_or_else(|| ParseError::UnrecognizedLine(line.to_string()))?;
    Ok(PlayerAction {
        name: caps["name"].to_string(),
        action: ActionKind::Win,
        amount: Some(parse_amount(&caps["amount"])?),
    })
}

fn parse_muck(line: &str) -> Result<PlayerAction, ParseError> {
    let (name, _) = line
        .split_once(':')
        .ok_or_else(|| ParseError::UnrecognizedLine(line.to_string()))?;
    Ok(PlayerAction {
        name: name.to_string(),
        action: ActionKind::Muck,
        amount: None,
    })
}

fn parse_blind(line: &str) -> Result<PlayerAction, ParseError> {
    let caps = BLIND_RE
        .captures(line)
        .ok_or_else(|| ParseError::UnrecognizedLine(line.to_string()))?;
    let action = ActionKind::from_verb(&caps["blind"])
        .ok_or_else(|| ParseError::UnrecognizedLine(line.to_string()))?;
    Ok(PlayerAction {
        name: caps["name"].to_string(),
        action,
        amount: Some(parse_amount(&caps["amount"])?),
    })
}

fn parse_raise(line: &str) -> Result<PlayerAction, ParseError> {
    let caps = RAISE_RE
        .captures(line)
        .ok_or_else(|| ParseError::UnrecognizedLine(line.to_string()))?;
    // the "to" figure is the raise's resulting total, not the increment
    Ok(PlayerAction {
        name: caps["name"].to_string(),
        action: ActionKind::Raise,
        amount: Some(parse_amount(&caps["amount"])?),
    })
}

fn parse_cashed_out(line: &str) -> Result<PlayerAction, ParseError> {
    let caps = CASH_OUT_RE
        .captures(line)
        .ok_or_else(|| ParseError::UnrecognizedLine(line.to_string()))?;
    Ok(PlayerAction {
        name: caps["name"].to_string(),
        action: ActionKind::CashOut,
        amount: Some(parse_amount(&caps["amount"])?),
    })
}

fn parse_player_action(line: &str) -> Result<PlayerAction, ParseError> {
    let unrecognized = || ParseError::UnrecognizedLine(line.to_string());
    let (name, rest) = line.split_once(": ").ok_or_else(unrecognized)?;
    let mut tokens = rest.split(' ');
    let verb = tokens.next().ok_or_else(unrecognized)?;
    let action = ActionKind::from_verb(verb).ok_or_else(unrecognized)?;
    let amount = match tokens.next() {
        Some(token) if !token.is_empty() => Some(parse_amount(token)?),
        _ => None,
    };
    Ok(PlayerAction {
        name: name.to_string(),
        action,
        amount,
    })
}
