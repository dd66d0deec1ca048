//! Maps the parsed aggregate into the nested, key-ordered JSON shape
//! consumed by downstream tooling. Optional fields are omitted
//! entirely when unset, never emitted as null.

use serde_json::{json, Map, Value};

use crate::cards::{Card, Combo};
use crate::handhistory::{HandHistory, Player};
use crate::street::{PlayerAction, Street};

pub fn card_to_json(card: &Card) -> Value {
    json!({
        "rank": card.rank.to_char().to_string(),
        "suit": card.suit.name(),
    })
}

pub fn combo_to_json(combo: &Combo) -> Value {
    json!({
        "1": card_to_json(&combo.first),
        "2": card_to_json(&combo.second),
    })
}

pub fn player_to_json(player: &Player) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), json!(player.name));
    map.insert("stack".into(), json!(player.stack));
    map.insert("seat".into(), json!(player.seat));
    if let Some(combo) = &player.combo {
        map.insert("hand".into(), combo_to_json(combo));
    }
    Value::Object(map)
}

pub fn action_to_json(action: &PlayerAction) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), json!(action.name));
    map.insert("action".into(), json!(action.action.as_str()));
    if let Some(amount) = action.amount {
        map.insert("amount".into(), json!(amount));
    }
    Value::Object(map)
}

pub fn street_to_json(street: &Street) -> Value {
    let mut map = Map::new();
    if let Some(actions) = &street.actions {
        map.insert(
            "actions".into(),
            Value::Array(actions.iter().map(action_to_json).collect()),
        );
    }
    if let Some(cards) = &street.cards {
        map.insert(
            "cards".into(),
            Value::Array(cards.iter().map(card_to_json).collect()),
        );
        map.insert("flushdraw".into(), json!(street.has_flushdraw()));
        map.insert("gutshot".into(), json!(street.has_gutshot()));
        map.insert("paired".into(), json!(street.has_pair()));
        map.insert("straightdraw".into(), json!(street.has_straightdraw()));
        map.insert("monotone".into(), json!(street.is_monotone()));
        map.insert("triplet".into(), json!(street.is_triplet()));
    }
    Value::Object(map)
}

pub fn hand_to_json(hand: &HandHistory) -> Value {
    let mut map = Map::new();
    map.insert(
        "timestamp".into(),
        json!(hand.date.format("%Y-%m-%d %H:%M:%S%:z").to_string()),
    );
    map.insert("id".into(), json!(hand.ident));
    map.insert("tablename".into(), json!(hand.table_name));
    map.insert("bb".into(), json!(hand.bb));
    map.insert("sb".into(), json!(hand.sb));
    map.insert("game".into(), json!(hand.game.as_str()));
    map.insert("gametype".into(), json!(hand.game_type.as_str()));
    map.insert("limit".into(), json!(hand.limit.as_str()));
    map.insert("max-players".into(), json!(hand.max_players));
    map.insert("hero".into(), json!(hand.hero().name));
    map.insert("button".into(), json!(hand.button().name));
    if let Some(total_pot) = hand.total_pot {
        map.insert("total_pot".into(), json!(total_pot));
    }
    if let Some(rake) = hand.rake {
        map.insert("rake".into(), json!(rake));
    }
    if let Some(tournament_ident) = hand.tournament_ident {
        map.insert("tournament-id".into(), json!(tournament_ident));
    }
    if let Some(level) = &hand.tournament_level {
        map.insert("tournament-level".into(), json!(level));
    }
    if let Some(currency) = hand.currency {
        map.insert("currency".into(), json!(currency.as_str()));
    }
    if let Some(money_type) = hand.money_type {
        map.insert("moneytype".into(), json!(money_type.as_str()));
    }
    map.insert(
        "players".into(),
        Value::Array(hand.players.iter().map(player_to_json).collect()),
    );
    for (key, street) in [
        ("preflop", &hand.preflop),
        ("flop", &hand.flop),
        ("turn", &hand.turn),
        ("river", &hand.river),
        ("show_down", &hand.show_down),
    ] {
        if let Some(street) = street {
            map.insert(key.into(), street_to_json(street));
        }
    }
    let board = hand.board();
    if !board.is_empty() {
        map.insert(
            "board".into(),
            Value::Array(board.iter().map(card_to_json).collect()),
        );
    }
    map.insert("winners".into(), json!(hand.winners));
    if let Some(earnings) = hand.earnings {
        map.insert("earnings".into(), json!(earnings));
    }
    Value::Object(map)
}

/// Thin encoder over [`hand_to_json`] for callers that want the wire
/// string directly.
#[derive(Debug, Default)]
pub struct JsonEncoder;

impl JsonEncoder {
    pub fn new() -> JsonEncoder {
        JsonEncoder
    }

    pub fn encode(&self, hand: &HandHistory) -> String {
        hand_to_json(hand).to_string()
    }
}
