//! Card identity and the victory-point table.
//!
//! Cards live in a single per-round arena (`Vec<Card>` on `Round`) and are
//! referred to everywhere else by `CardId` — hands, decks, jails, positions
//! and stake slots store ids only, so no two structures ever hold aliased
//! card state.
//!
//! Identity (color, suit, rank, victory points) is fixed at the deal; only
//! the `played` flag and `owner` mutate during a round.

use serde::{Deserialize, Serialize};

use super::color::PlayerColor;

/// Lowest rank in the deck.
pub const RANK_MIN: u8 = 2;
/// Highest rank; the ace plays high by default.
pub const ACE: u8 = 14;

/// Index into the per-round card arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Arena slot for this ID.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card suit. Clubs and Spades are black, Diamonds and Hearts red.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// The side that plays this suit.
    #[must_use]
    pub const fn color(self) -> PlayerColor {
        match self {
            Suit::Clubs | Suit::Spades => PlayerColor::Black,
            Suit::Diamonds | Suit::Hearts => PlayerColor::Red,
        }
    }

    /// Poison suits carry the 70-point king. One per color.
    #[must_use]
    pub const fn is_poison(self) -> bool {
        matches!(self, Suit::Spades | Suit::Hearts)
    }
}

/// Victory points awarded for capturing a card of the given suit and rank.
///
/// Face value, except court cards (11–13) are worth 10 and the poison-suit
/// kings are worth 70 — enough to end a match on their own.
#[must_use]
pub const fn victory_points(suit: Suit, rank: u8) -> u32 {
    match rank {
        13 if suit.is_poison() => 70,
        11..=13 => 10,
        r => r as u32,
    }
}

/// A single card in the round arena.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Arena id.
    pub id: CardId,

    /// Side the card belongs to (derived from suit).
    pub color: PlayerColor,

    pub suit: Suit,

    /// 2..=14, where 14 is the ace.
    pub rank: u8,

    /// Points banked by whoever jails this card.
    pub victory_points: u32,

    /// True once the card has left a hand (or was staked from the deck).
    pub played: bool,

    /// Who put the card on the board. `None` while in a hand or deck.
    pub owner: Option<PlayerColor>,
}

impl Card {
    /// Create an unplayed card. Color and victory points derive from the
    /// suit and rank.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: u8) -> Self {
        debug_assert!((RANK_MIN..=ACE).contains(&rank));
        Self {
            id,
            color: suit.color(),
            suit,
            rank,
            victory_points: victory_points(suit, rank),
            played: false,
            owner: None,
        }
    }
}
