//! Core card and player model: identities, victory points, decks, RNG.
//!
//! Everything here is board-independent. Cards are arena entries referred to
//! by `CardId`; players track ids plus their cumulative score.

pub mod card;
pub mod color;
pub mod deck;
pub mod player;
pub mod rng;

pub use card::{victory_points, Card, CardId, Suit, ACE, RANK_MIN};
pub use color::{ColorMap, PlayerColor};
pub use deck::{fresh_decks, DECK_SIZE};
pub use player::{Player, HAND_SIZE};
pub use rng::GameRng;
