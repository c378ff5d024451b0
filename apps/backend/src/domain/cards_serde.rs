//! Text and serde representations for card types.
//!
//! Cards travel as compact tokens: rank then suit letter, e.g. `"7R"`,
//! `"13B"`, `"JG"` (Jester) and `"WY"` (Witch).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl Suit {
    fn letter(self) -> char {
        match self {
            Suit::Red => 'R',
            Suit::Yellow => 'Y',
            Suit::Green => 'G',
            Suit::Blue => 'B',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Suit::Red => "RED",
            Suit::Yellow => "YELLOW",
            Suit::Green => "GREEN",
            Suit::Blue => "BLUE",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Rank::Jester => write!(f, "J{}", self.suit.letter()),
            Rank::Witch => write!(f, "W{}", self.suit.letter()),
            Rank::Number(n) => write!(f, "{n}{}", self.suit.letter()),
        }
    }
}

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_ch = chars.next_back().ok_or_else(|| parse_error(s))?;
        let rank_str = chars.as_str();

        let suit = match suit_ch {
            'R' => Suit::Red,
            'Y' => Suit::Yellow,
            'G' => Suit::Green,
            'B' => Suit::Blue,
            _ => return Err(parse_error(s)),
        };
        let rank = match rank_str {
            "J" => Rank::Jester,
            "W" => Rank::Witch,
            digits => {
                // Reject signs and leading zeros so every card has one token.
                if digits.is_empty()
                    || digits.starts_with('0')
                    || !digits.chars().all(|c| c.is_ascii_digit())
                {
                    return Err(parse_error(s));
                }
                let n: u8 = digits.parse().map_err(|_| parse_error(s))?;
                if !(Rank::MIN_NUMBER..=Rank::MAX_NUMBER).contains(&n) {
                    return Err(parse_error(s));
                }
                Rank::Number(n)
            }
        };
        Ok(Card { suit, rank })
    }
}

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid suit: {s}")))
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

/// Parse a list of card tokens; test helper.
#[cfg(test)]
pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|s| s.parse::<Card>().expect("valid card token"))
        .collect()
}
