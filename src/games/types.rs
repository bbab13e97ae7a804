use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Supported game modes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Slot,
    Roulette,
    Card,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Slot, GameMode::Roulette, GameMode::Card];

    /// The bet action offered while this mode is active
    pub fn action(&self) -> ActionKind {
        match self {
            GameMode::Slot | GameMode::Roulette => ActionKind::Spin,
            GameMode::Card => ActionKind::Deal,
        }
    }

    /// Heading drawn on the placeholder surface
    pub fn title(&self) -> &'static str {
        match self {
            GameMode::Slot => "SLOT MACHINE",
            GameMode::Roulette => "ROULETTE",
            GameMode::Card => "CARD GAME",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Slot => write!(f, "slot"),
            GameMode::Roulette => write!(f, "roulette"),
            GameMode::Card => write!(f, "card"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slot" => Ok(GameMode::Slot),
            "roulette" => Ok(GameMode::Roulette),
            "card" => Ok(GameMode::Card),
            other => Err(format!("unknown game '{}'", other)),
        }
    }
}

/// Bet actions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Spin,
    Deal,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Spin => write!(f, "spin"),
            ActionKind::Deal => write!(f, "deal"),
        }
    }
}

/// Game outcome
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win,
    Loss,
}

/// Symbols a slot reel can display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SlotSymbol {
    Seven,
    Diamond,
    Heart,
    Club,
    Spade,
    Bar,
}

impl SlotSymbol {
    /// Symbols shown on a freshly built machine, left to right
    pub const INITIAL: [SlotSymbol; 3] = [SlotSymbol::Seven, SlotSymbol::Diamond, SlotSymbol::Heart];

    /// Every symbol a spin can land on
    pub const REEL: [SlotSymbol; 6] = [
        SlotSymbol::Seven,
        SlotSymbol::Diamond,
        SlotSymbol::Heart,
        SlotSymbol::Club,
        SlotSymbol::Spade,
        SlotSymbol::Bar,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            SlotSymbol::Seven => "7",
            SlotSymbol::Diamond => "♦",
            SlotSymbol::Heart => "♥",
            SlotSymbol::Club => "♣",
            SlotSymbol::Spade => "♠",
            SlotSymbol::Bar => "BAR",
        }
    }
}

impl fmt::Display for SlotSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn glyph(&self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardValue {
    Ace,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
}

impl CardValue {
    pub const ALL: [CardValue; 6] = [
        CardValue::Ace,
        CardValue::King,
        CardValue::Queen,
        CardValue::Jack,
        CardValue::Ten,
        CardValue::Nine,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardValue::Ace => "A",
            CardValue::King => "K",
            CardValue::Queen => "Q",
            CardValue::Jack => "J",
            CardValue::Ten => "10",
            CardValue::Nine => "9",
        }
    }
}

/// Face printed on the front of a card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardFace {
    pub value: CardValue,
    pub suit: Suit,
}

impl CardFace {
    /// Faces dealt onto a freshly built table, left to right
    pub const INITIAL: [CardFace; 3] = [
        CardFace { value: CardValue::Ace, suit: Suit::Spades },
        CardFace { value: CardValue::King, suit: Suit::Hearts },
        CardFace { value: CardValue::Queen, suit: Suit::Diamonds },
    ];
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.label(), self.suit.glyph())
    }
}

/// What the overlay elements showed when a round settled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayedSymbols {
    Reels { symbols: Vec<SlotSymbol> },
    Cards { faces: Vec<CardFace> },
    Wheel,
    Nothing,
}

/// A settled spin or deal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRecord {
    pub round_id: Uuid,
    pub game: GameMode,
    pub action: ActionKind,
    pub bet: u64,
    pub payout: u64,
    /// Drawn multiplier; `None` on a loss
    pub multiplier: Option<f64>,
    pub outcome: GameOutcome,
    /// Balance before the bet was taken
    pub balance_before: u64,
    /// Equals `balance_before - bet + payout` unless `reset_mid_round`
    pub balance_after: u64,
    /// A reset landed while the round was animating, so the payout was
    /// credited to the restored starting balance
    #[serde(default)]
    pub reset_mid_round: bool,
    pub displayed: DisplayedSymbols,
    pub settled_at: chrono::DateTime<chrono::Utc>,
}

impl RoundRecord {
    /// Net effect on the balance
    pub fn net(&self) -> i64 {
        self.payout as i64 - self.bet as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in GameMode::ALL {
            assert_eq!(mode.to_string().parse::<GameMode>().unwrap(), mode);
        }
        assert!("poker".parse::<GameMode>().is_err());
        assert_eq!(" Card ".parse::<GameMode>().unwrap(), GameMode::Card);
    }

    #[test]
    fn test_mode_actions() {
        assert_eq!(GameMode::Slot.action(), ActionKind::Spin);
        assert_eq!(GameMode::Roulette.action(), ActionKind::Spin);
        assert_eq!(GameMode::Card.action(), ActionKind::Deal);
    }

    #[test]
    fn test_card_labels() {
        let faces: Vec<String> = CardFace::INITIAL.iter().map(|f| f.to_string()).collect();
        assert_eq!(faces, vec!["A♠", "K♥", "Q♦"]);
    }

    #[test]
    fn test_record_serializes_lowercase_tags() {
        let record = RoundRecord {
            round_id: Uuid::nil(),
            game: GameMode::Roulette,
            action: ActionKind::Spin,
            bet: 10,
            payout: 0,
            multiplier: None,
            outcome: GameOutcome::Loss,
            balance_before: 1000,
            balance_after: 990,
            reset_mid_round: false,
            displayed: DisplayedSymbols::Wheel,
            settled_at: chrono::Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["game"], "roulette");
        assert_eq!(json["outcome"], "loss");
        assert_eq!(json["displayed"]["kind"], "wheel");
        assert_eq!(record.net(), -10);
    }
}
