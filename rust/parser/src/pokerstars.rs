//! Room-specific parser for the PokerStars export format.
//!
//! The raw text is split into sections on the `***` markers and
//! newlines; parsing then walks the sections in a fixed order: header,
//! table, seats, hero, preflop, flop/turn/river, showdown, summary.
//! Any mandatory pattern that fails to match aborts the hand with a
//! structural error; optional sections are presence-checked and their
//! absence is modeled, not an error.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use chrono_tz::America::New_York;
use log::debug;
use regex::Regex;

use crate::cards::{Card, Combo};
use crate::constants::{Currency, Game, GameType, Limit, MoneyType};
use crate::errors::ParseError;
use crate::handhistory::{HandHistory, Header, Player, RoomParser};
use crate::street::{parse_amount, parse_card_tokens, Street};

/// Header dates are localized to US Eastern time with a literal zone
/// suffix.
const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S ET";

static SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?\*\*\* ?\n?|\n").unwrap());

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^PokerStars\s+                                    # room marker
        Hand\s+\#(?P<ident>\d+):\s+                       # hand history id
        (?:Tournament\s+\#(?P<tournament_ident>\d+),\s+   # tournament number
         (?:(?P<freeroll>Freeroll)|                       # buy-in is freeroll
          \$?(?P<buyin>\d+(?:\.\d+)?)                     # or a buy-in
          (?:\+\$?(?P<rake>\d+(?:\.\d+)?))?               # plus its rake
          (?:\s+(?P<currency>[A-Z]+))?                    # and currency
         )\s+
        )?
        (?P<game>.+?)\s+                                  # game variant
        (?P<limit>(?:Pot\s+|No\s+|)Limit)\s+              # limit type
        (?:-\s+Level\s+(?P<tournament_level>\S+)\s+)?     # level (optional)
        \(
         (?:(?P<sb>\d+)/(?P<bb>\d+)|                      # tournament blinds
          \$(?P<cash_sb>\d+(?:\.\d+)?)/                   # cash small blind
          \$(?P<cash_bb>\d+(?:\.\d+)?)                    # cash big blind
          (?:\s+(?P<cash_currency>\S+))?                  # cash currency
         )
        \)\s+
        -\s+
        (?P<date>.+)                                      # ET date
        ",
    )
    .unwrap()
});

static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Table '(?P<name>.*)' (?P<max>\d+)-max Seat \#(?P<button>\d+) is the button")
        .unwrap()
});

static SEAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Seat (?P<seat>\d+): (?P<name>.+?) \(\$?(?P<stack>\d+(?:\.\d+)?) in chips\)")
        .unwrap()
});

static HERO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Dealt to (?P<name>.+?) \[(?P<first>..) (?P<second>..)\]").unwrap()
});

static POT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Total pot \$?(?P<pot>\d+(?:\.\d+)?) .*\| Rake \$?(?P<rake>\d+(?:\.\d+)?)")
        .unwrap()
});

static WINNER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Seat (?P<seat>\d+): (?P<name>.+?) collected \(\$?(?P<amount>\d+(?:\.\d+)?)\)")
        .unwrap()
});

static SHOWDOWN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Seat (?P<seat>\d+): (?P<name>.+?) showed \[(?P<cards>.+?)\] and won").unwrap()
});

/// Parser for PokerStars cash and tournament hand histories.
pub struct PokerStars;

impl RoomParser for PokerStars {
    fn parse_header(&self, raw: &str) -> Result<Header, ParseError> {
        let raw = raw.trim();
        let first = SPLIT_RE.split(raw).next().unwrap_or("");
        parse_header_line(first)
    }

    fn parse(&self, raw: &str) -> Result<HandHistory, ParseError> {
        let raw = raw.trim();
        let (splitted, sections) = split_raw(raw);
        if sections.len() < 2 {
            return Err(ParseError::structural(
                "sections",
                format!("expected at least 2 section markers, found {}", sections.len()),
            ));
        }
        let header = parse_header_line(splitted[0])?;
        debug!("parsing hand #{}", header.ident);

        // TABLE
        let table_line = splitted.get(1).copied().unwrap_or("");
        let table = TABLE_RE.captures(table_line).ok_or_else(|| {
            ParseError::structural("table", format!("unmatched table line {table_line:?}"))
        })?;
        let table_name = table["name"].to_string();
        let max_players: u8 = table["max"]
            .parse()
            .map_err(|_| ParseError::structural("table", "bad max players"))?;
        let button_seat: u8 = table["button"]
            .parse()
            .map_err(|_| ParseError::structural("table", "bad button seat"))?;
        if button_seat == 0 || button_seat > max_players {
            return Err(ParseError::structural(
                "table",
                format!("button seat {button_seat} out of range 1..={max_players}"),
            ));
        }

        // SEATS; blind posts emitted before the HOLE CARDS marker are
        // captured here and replayed at the front of the preflop street
        let first_section = sections[0];
        let mut players: Vec<Player> = (1..=max_players).map(Player::empty_seat).collect();
        let mut small_blind_line: Option<&str> = None;
        let mut big_blind_line: Option<&str> = None;
        let seat_lines = splitted.get(2..first_section).ok_or_else(|| {
            ParseError::structural("seats", "seat section missing")
        })?;
        for &line in seat_lines {
            if let Some(caps) = SEAT_RE.captures(line) {
                let seat: u8 = caps["seat"]
                    .parse()
                    .map_err(|_| ParseError::structural("seats", "bad seat number"))?;
                if seat == 0 || seat > max_players {
                    return Err(ParseError::structural(
                        "seats",
                        format!("seat {seat} out of range 1..={max_players}"),
                    ));
                }
                players[usize::from(seat) - 1] = Player {
                    name: caps["name"].to_string(),
                    stack: parse_amount(&caps["stack"])?,
                    seat,
                    combo: None,
                };
            } else if line.contains("posts small blind") {
                small_blind_line = Some(line);
            } else if line.contains("posts big blind") {
                big_blind_line = Some(line);
            }
            // anything else here is table chatter
        }
        debug!(
            "seated {} of {max_players} players",
            players.iter().filter(|p| !p.is_empty_seat()).count()
        );

        // BUTTON is a seat-list index, so the hero combo reveal below
        // stays visible through it
        let button = usize::from(button_seat) - 1;

        // HERO
        let hero_line = splitted.get(first_section + 2).copied().ok_or_else(|| {
            ParseError::structural("hero", "hole cards section missing")
        })?;
        let caps = HERO_RE.captures(hero_line).ok_or_else(|| {
            ParseError::structural("hero", format!("unmatched hero line {hero_line:?}"))
        })?;
        let hero_name = &caps["name"];
        let hero = players
            .iter()
            .position(|p| p.name == hero_name)
            .ok_or_else(|| {
                ParseError::structural("hero", format!("hero {hero_name:?} is not seated"))
            })?;
        let combo = Combo::from_cards(Card::parse(&caps["first"])?, Card::parse(&caps["second"])?)?;
        players[hero].combo = Some(combo);

        // PREFLOP: captured blind posts prepended to the lines between
        // the hero line and the next section boundary
        let mut preflop_lines: Vec<&str> = Vec::new();
        preflop_lines.extend(small_blind_line);
        preflop_lines.extend(big_blind_line);
        preflop_lines.extend_from_slice(
            splitted
                .get(first_section + 3..sections[1])
                .ok_or_else(|| ParseError::structural("preflop", "preflop section missing"))?,
        );
        let preflop = Some(Street::parse(&preflop_lines)?);

        // FLOP / TURN / RIVER: a missing marker means the street was
        // never reached, which is distinct from reached-but-empty
        let flop = parse_named_street(&splitted, "FLOP")?;
        let turn = parse_named_street(&splitted, "TURN")?;
        let river = parse_named_street(&splitted, "RIVER")?;
        check_street_continuity(&flop, &turn, &river)?;

        // SHOW DOWN
        let show_down = match splitted.iter().position(|l| *l == "SHOW DOWN") {
            Some(start) => {
                let stop = splitted
                    .iter()
                    .position(|l| *l == "SUMMARY")
                    .ok_or_else(|| ParseError::structural("summary", "SUMMARY marker missing"))?;
                let lines = splitted.get(start + 1..stop.saturating_sub(1)).ok_or_else(
                    || ParseError::structural("showdown", "malformed showdown section"),
                )?;
                Some(Street::parse(lines)?)
            }
            None => None,
        };

        // SUMMARY: pot line, board consistency check, winners
        let last_section = sections[sections.len() - 1];
        if splitted.get(last_section + 1).copied() != Some("SUMMARY") {
            return Err(ParseError::structural(
                "summary",
                "summary section not found after last marker",
            ));
        }
        let board: Vec<Card> = match [&river, &turn, &flop]
            .into_iter()
            .find_map(|s| s.as_ref().and_then(|s| s.cards.clone()))
        {
            Some(cards) => cards,
            None => Vec::new(),
        };
        let mut total_pot = None;
        let mut rake = None;
        let mut winners: Vec<String> = Vec::new();
        for &line in splitted.get(last_section + 2..).unwrap_or(&[]) {
            if let Some(caps) = POT_RE.captures(line) {
                total_pot = Some(parse_amount(&caps["pot"])?);
                rake = Some(parse_amount(&caps["rake"])?);
            } else if line.starts_with("Board") {
                check_board(line, &board)?;
            } else if show_down.is_none() && line.contains("collected") {
                let caps = WINNER_RE.captures(line).ok_or_else(|| {
                    ParseError::structural("winners", format!("unmatched winner line {line:?}"))
                })?;
                push_winner(&mut winners, clean_name(&caps["name"]));
            } else if show_down.is_some() && line.contains("won") && line.contains("showed") {
                let caps = SHOWDOWN_RE.captures(line).ok_or_else(|| {
                    ParseError::structural("winners", format!("unmatched showdown line {line:?}"))
                })?;
                let seat: u8 = caps["seat"]
                    .parse()
                    .map_err(|_| ParseError::structural("winners", "bad seat number"))?;
                if seat == 0 || seat > max_players {
                    return Err(ParseError::structural(
                        "winners",
                        format!("seat {seat} out of range 1..={max_players}"),
                    ));
                }
                let mut tokens = caps["cards"].split(' ');
                let (Some(first), Some(second)) = (tokens.next(), tokens.next()) else {
                    return Err(ParseError::structural(
                        "winners",
                        format!("bad showdown cards in {line:?}"),
                    ));
                };
                let shown = Combo::from_cards(Card::parse(first)?, Card::parse(second)?)?;
                players[usize::from(seat) - 1].combo = Some(shown);
                push_winner(&mut winners, clean_name(&caps["name"]));
            }
        }

        // EARNINGS
        let hero_name = players[hero].name.clone();
        let mut earnings = 0.0;
        for street in [&preflop, &flop, &turn, &river, &show_down]
            .into_iter()
            .flatten()
        {
            for action in street.actions.iter().flatten() {
                if action.name != hero_name {
                    continue;
                }
                let amount = action.amount.unwrap_or(0.0);
                if action.action.is_outflow() {
                    earnings -= amount;
                } else if action.action.is_inflow() {
                    earnings += amount;
                }
            }
        }

        Ok(HandHistory {
            ident: header.ident,
            date: header.date,
            table_name,
            max_players,
            sb: header.sb,
            bb: header.bb,
            game: header.game,
            game_type: header.game_type,
            limit: header.limit,
            tournament_ident: header.tournament_ident,
            tournament_level: header.tournament_level,
            buyin: header.buyin,
            buyin_rake: header.buyin_rake,
            currency: header.currency,
            money_type: header.money_type,
            players,
            button,
            hero,
            preflop,
            flop,
            turn,
            river,
            show_down,
            total_pot,
            rake,
            winners,
            earnings: Some(earnings),
        })
    }
}

/// Splits the raw text on `***` markers and newlines. Section
/// boundaries are the indices of the empty fragments the split leaves
/// behind (every marker follows a newline, so each contributes one).
fn split_raw(raw: &str) -> (Vec<&str>, Vec<usize>) {
    let splitted: Vec<&str> = SPLIT_RE.split(raw).collect();
    let sections = splitted
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_empty())
        .map(|(index, _)| index)
        .collect();
    (splitted, sections)
}

fn parse_header_line(line: &str) -> Result<Header, ParseError> {
    let caps = HEADER_RE.captures(line).ok_or_else(|| {
        ParseError::structural("header", format!("unmatched header line {line:?}"))
    })?;

    let ident: u64 = caps["ident"]
        .parse()
        .map_err(|_| ParseError::structural("header", "bad hand id"))?;

    // A play-money cash blind looks exactly like a tournament blind, so
    // the game type cannot disambiguate the two captures; take whichever
    // branch of the alternation matched.
    let sb = match caps.name("sb").or_else(|| caps.name("cash_sb")) {
        Some(m) => parse_amount(m.as_str())?,
        None => return Err(ParseError::structural("header", "missing small blind")),
    };
    let bb = match caps.name("bb").or_else(|| caps.name("cash_bb")) {
        Some(m) => parse_amount(m.as_str())?,
        None => return Err(ParseError::structural("header", "missing big blind")),
    };

    let (game_type, tournament_ident, tournament_level, buyin, buyin_rake, currency_code) =
        match caps.name("tournament_ident") {
            Some(tid) => {
                let tournament_id: u64 = tid
                    .as_str()
                    .parse()
                    .map_err(|_| ParseError::structural("header", "bad tournament id"))?;
                let buyin = match caps.name("buyin") {
                    Some(m) => parse_amount(m.as_str())?,
                    None => 0.0,
                };
                let buyin_rake = match caps.name("rake") {
                    Some(m) => parse_amount(m.as_str())?,
                    None => 0.0,
                };
                (
                    GameType::Tour,
                    Some(tournament_id),
                    caps.name("tournament_level").map(|m| m.as_str().to_string()),
                    Some(buyin),
                    Some(buyin_rake),
                    caps.name("currency").map(|m| m.as_str()),
                )
            }
            None => (
                GameType::Cash,
                None,
                None,
                None,
                None,
                caps.name("cash_currency").map(|m| m.as_str()),
            ),
        };

    // Freerolls are real money even without an explicit currency
    let currency_code = match currency_code {
        None if caps.name("freeroll").is_some() => Some("USD"),
        other => other,
    };
    let (money_type, currency) = match currency_code {
        None => (Some(MoneyType::Play), None),
        Some(code) => {
            let currency = Currency::from_code(code).ok_or_else(|| {
                ParseError::structural("header", format!("unknown currency {code:?}"))
            })?;
            (Some(MoneyType::Real), Some(currency))
        }
    };

    let game_text = &caps["game"];
    let game = Game::from_header(game_text).ok_or_else(|| {
        ParseError::structural("header", format!("unknown game {game_text:?}"))
    })?;
    let limit_text = &caps["limit"];
    let limit = Limit::from_header(limit_text).ok_or_else(|| {
        ParseError::structural("header", format!("unknown limit {limit_text:?}"))
    })?;

    let date = parse_date(&caps["date"])?;

    Ok(Header {
        ident,
        game,
        limit,
        game_type,
        sb,
        bb,
        tournament_ident,
        tournament_level,
        buyin,
        buyin_rake,
        currency,
        money_type,
        date,
    })
}

/// Parses the localized header date and normalizes it to an absolute
/// instant with its UTC offset.
fn parse_date(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let naive = NaiveDateTime::parse_from_str(text.trim(), DATE_FORMAT).map_err(|e| {
        ParseError::structural("header", format!("bad date {text:?}: {e}"))
    })?;
    let local = New_York
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| {
            ParseError::structural("header", format!("ambiguous local date {text:?}"))
        })?;
    Ok(local.fixed_offset())
}

/// Locates a named street marker and parses the lines up to the next
/// section boundary. A missing marker yields `None`.
fn parse_named_street(splitted: &[&str], name: &str) -> Result<Option<Street>, ParseError> {
    let Some(position) = splitted.iter().position(|l| *l == name) else {
        return Ok(None);
    };
    let start = position + 1;
    let stop = splitted[start..]
        .iter()
        .position(|l| l.is_empty())
        .map(|offset| start + offset)
        .ok_or_else(|| {
            ParseError::structural("street", format!("unterminated {name} section"))
        })?;
    Ok(Some(Street::parse(&splitted[start..stop])?))
}

/// Each street's card list must extend the previous street's.
fn check_street_continuity(
    flop: &Option<Street>,
    turn: &Option<Street>,
    river: &Option<Street>,
) -> Result<(), ParseError> {
    let pairs = [("flop", flop, "turn", turn), ("turn", turn, "river", river)];
    for (earlier_name, earlier, later_name, later) in pairs {
        let (Some(Some(earlier_cards)), Some(Some(later_cards))) = (
            earlier.as_ref().map(|s| s.cards.as_ref()),
            later.as_ref().map(|s| s.cards.as_ref()),
        ) else {
            continue;
        };
        if later_cards.len() <= earlier_cards.len()
            || later_cards[..earlier_cards.len()] != earlier_cards[..]
        {
            return Err(ParseError::Consistency(format!(
                "{later_name} cards {} do not extend {earlier_name} cards {}",
                join_cards(later_cards),
                join_cards(earlier_cards),
            )));
        }
    }
    Ok(())
}

/// The summary's Board line must equal, card for card, the cards
/// accumulated on the streets; a mismatch is corrupt input or a parser
/// bug and is never silently reconciled.
fn check_board(line: &str, board: &[Card]) -> Result<(), ParseError> {
    let bracket = line.find('[').ok_or_else(|| {
        ParseError::structural("summary", format!("unmatched board line {line:?}"))
    })?;
    let listed = parse_card_tokens(&line[bracket..])?;
    if listed != board {
        return Err(ParseError::Consistency(format!(
            "summary board [{}] does not match street cards [{}]",
            join_cards(&listed),
            join_cards(board),
        )));
    }
    Ok(())
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips positional annotations from a summary name and trims the
/// leftovers; the cleaned name is the winner-set key.
fn clean_name(name: &str) -> String {
    name.replace("(button)", "")
        .replace("(small blind)", "")
        .replace("(big blind)", "")
        .trim()
        .to_string()
}

/// Split pots are reported per seat; duplicates collapse to one entry.
fn push_winner(winners: &mut Vec<String>, name: String) {
    if !winners.iter().any(|w| *w == name) {
        winners.push(name);
    }
}
