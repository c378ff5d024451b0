//! Core card-related types: Card, Rank, Suit

/// The four suits, in the order clients address them by index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Red, Suit::Yellow, Suit::Green, Suit::Blue];

    /// Suit for a client-supplied index (0..4).
    pub fn from_index(index: usize) -> Option<Suit> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Suit::Red => 0,
            Suit::Yellow => 1,
            Suit::Green => 2,
            Suit::Blue => 3,
        }
    }
}

/// Jester is the lowest card, Witch the highest; numbers run 1..=13.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Jester,
    Number(u8),
    Witch,
}

impl Rank {
    pub const MIN_NUMBER: u8 = 1;
    pub const MAX_NUMBER: u8 = 13;

    /// All 15 ranks of one suit, lowest first.
    pub fn all() -> impl Iterator<Item = Rank> {
        std::iter::once(Rank::Jester)
            .chain((Self::MIN_NUMBER..=Self::MAX_NUMBER).map(Rank::Number))
            .chain(std::iter::once(Rank::Witch))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn number(suit: Suit, n: u8) -> Self {
        Self {
            suit,
            rank: Rank::Number(n),
        }
    }

    pub const fn jester(suit: Suit) -> Self {
        Self {
            suit,
            rank: Rank::Jester,
        }
    }

    pub const fn witch(suit: Suit) -> Self {
        Self {
            suit,
            rank: Rank::Witch,
        }
    }

    pub fn is_jester(&self) -> bool {
        self.rank == Rank::Jester
    }

    pub fn is_witch(&self) -> bool {
        self.rank == Rank::Witch
    }

    /// Jesters and Witches are never bound by the follow-suit rule.
    pub fn is_wild(&self) -> bool {
        self.is_jester() || self.is_witch()
    }
}

// Note: Ord on Card is only for stable sorting: suit order R<Y<G<B then rank order.
// Do not use for trick resolution; see `tricks::resolve_trick`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
