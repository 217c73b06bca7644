//! Deck construction.
//!
//! Each round is played with a fresh 52-card arena: 26 black cards (clubs
//! and spades) and 26 red (diamonds and hearts), ranks 2 through 14.

use super::card::{Card, CardId, ACE, RANK_MIN};
use super::color::{ColorMap, PlayerColor};
use super::rng::GameRng;

/// Cards per color.
pub const DECK_SIZE: usize = 26;

/// Build the round's card arena and one shuffled deck of ids per color.
///
/// Arena slots match card ids; the id lists are what get dealt.
pub fn fresh_decks(rng: &mut GameRng) -> (Vec<Card>, ColorMap<Vec<CardId>>) {
    let mut cards = Vec::with_capacity(DECK_SIZE * 2);
    for suit in super::card::Suit::ALL {
        for rank in RANK_MIN..=ACE {
            let id = CardId::new(cards.len() as u8);
            cards.push(Card::new(id, suit, rank));
        }
    }

    let mut decks = ColorMap::from_fn(|color| {
        cards
            .iter()
            .filter(|c| c.color == color)
            .map(|c| c.id)
            .collect::<Vec<_>>()
    });
    for color in PlayerColor::BOTH {
        rng.shuffle(&mut decks[color]);
    }

    (cards, decks)
}
