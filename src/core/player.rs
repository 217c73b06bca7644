//! Per-player round state: hand, deck, jail, stake territory.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::CardId;
use super::color::PlayerColor;
use crate::board::staking_territory;

/// Active hand limit.
pub const HAND_SIZE: usize = 5;

/// One side's cards and score.
///
/// Holds ids only; the cards themselves live in the round arena. The deck is
/// ordered and drawn from the front. `victory_points` accumulates across
/// rounds within a match; everything else is rebuilt each round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: PlayerColor,

    /// Active cards, at most [`HAND_SIZE`] except transiently.
    pub hand: SmallVec<[CardId; HAND_SIZE]>,

    /// Remaining cards, front = next draw.
    pub deck: Vector<CardId>,

    /// Captured opponent cards.
    pub jail: Vector<CardId>,

    /// Cumulative match score.
    pub victory_points: u32,

    /// Columns this player may still stake this round.
    pub available_stakes: SmallVec<[u8; 5]>,
}

impl Player {
    /// Create a player with an empty hand and deck and a full stake
    /// territory.
    #[must_use]
    pub fn new(color: PlayerColor) -> Self {
        Self {
            color,
            hand: SmallVec::new(),
            deck: Vector::new(),
            jail: Vector::new(),
            victory_points: 0,
            available_stakes: staking_territory(color).collect(),
        }
    }

    /// Draw one card from the deck front into the hand.
    pub fn draw(&mut self) -> Option<CardId> {
        let id = self.deck.pop_front()?;
        self.hand.push(id);
        Some(id)
    }

    /// Draw until the hand holds [`HAND_SIZE`] cards or the deck runs out.
    pub fn fill_hand(&mut self) {
        while self.hand.len() < HAND_SIZE && self.draw().is_some() {}
    }

    /// Check hand membership.
    #[must_use]
    pub fn has_in_hand(&self, id: CardId) -> bool {
        self.hand.contains(&id)
    }

    /// Remove a card from the hand. Returns true if it was present.
    pub fn remove_from_hand(&mut self, id: CardId) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == id) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    /// The column this player's next stake must go to.
    ///
    /// Black stakes spread outward from the center by taking the highest
    /// remaining column, Red by taking the lowest.
    #[must_use]
    pub fn next_stake_column(&self) -> Option<u8> {
        match self.color {
            PlayerColor::Black => self.available_stakes.iter().copied().max(),
            PlayerColor::Red => self.available_stakes.iter().copied().min(),
        }
    }

    /// Mark a column as staked, removing it from the territory.
    pub fn remove_stake_column(&mut self, column: u8) {
        self.available_stakes.retain(|&mut c| c != column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with_deck(color: PlayerColor, ids: &[u8]) -> Player {
        let mut player = Player::new(color);
        player.deck = ids.iter().map(|&i| CardId::new(i)).collect();
        player
    }

    #[test]
    fn test_new_player_territory() {
        let black = Player::new(PlayerColor::Black);
        let red = Player::new(PlayerColor::Red);

        assert_eq!(black.available_stakes.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(red.available_stakes.as_slice(), &[5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_draw_from_front() {
        let mut player = player_with_deck(PlayerColor::Black, &[3, 1, 2]);

        assert_eq!(player.draw(), Some(CardId::new(3)));
        assert_eq!(player.hand.as_slice(), &[CardId::new(3)]);
        assert_eq!(player.deck.len(), 2);
    }

    #[test]
    fn test_fill_hand_stops_at_limit() {
        let mut player = player_with_deck(PlayerColor::Red, &[0, 1, 2, 3, 4, 5, 6]);
        player.fill_hand();

        assert_eq!(player.hand.len(), HAND_SIZE);
        assert_eq!(player.deck.len(), 2);
    }

    #[test]
    fn test_fill_hand_exhausts_short_deck() {
        let mut player = player_with_deck(PlayerColor::Red, &[0, 1]);
        player.fill_hand();

        assert_eq!(player.hand.len(), 2);
        assert!(player.deck.is_empty());
    }

    #[test]
    fn test_remove_from_hand() {
        let mut player = player_with_deck(PlayerColor::Black, &[0, 1]);
        player.fill_hand();

        assert!(player.remove_from_hand(CardId::new(0)));
        assert!(!player.remove_from_hand(CardId::new(0)));
        assert_eq!(player.hand.as_slice(), &[CardId::new(1)]);
    }

    #[test]
    fn test_stake_columns_spread_outward() {
        let mut black = Player::new(PlayerColor::Black);
        let mut red = Player::new(PlayerColor::Red);

        assert_eq!(black.next_stake_column(), Some(4));
        black.remove_stake_column(4);
        assert_eq!(black.next_stake_column(), Some(3));

        assert_eq!(red.next_stake_column(), Some(5));
        red.remove_stake_column(5);
        assert_eq!(red.next_stake_column(), Some(6));

        for c in 0..=9 {
            black.remove_stake_column(c);
            red.remove_stake_column(c);
        }
        assert_eq!(black.next_stake_column(), None);
        assert_eq!(red.next_stake_column(), None);
    }
}
