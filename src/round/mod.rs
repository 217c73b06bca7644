//! Round state and lifecycle.
//!
//! A `Round` owns the card arena, both players, the board, and the round
//! state machine (`Running → LastPlay → Complete`). Rounds are created by
//! [`Round::deal`], mutated only through [`moves::apply_move`], and scored
//! synchronously when they complete. Player victory points persist across
//! rounds via [`Round::next_round`]; everything else is rebuilt fresh.
//!
//! The whole structure serializes with serde; [`Round::to_bytes`] /
//! [`Round::from_bytes`] give persistence and transport collaborators a
//! compact snapshot codec, with invariants re-validated on decode.

pub mod moves;
pub mod scorer;

pub use moves::{apply_move, Move};
pub use scorer::{RoundSummary, MATCH_TARGET};

use serde::{Deserialize, Serialize};

use crate::board::{Board, COLUMN_COUNT, ROWS_PER_PLAYER};
use crate::core::{Card, CardId, ColorMap, GameRng, Player, PlayerColor, HAND_SIZE};
use crate::error::StateError;

/// Round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// Normal play.
    Running,
    /// A hand has emptied; one final turn remains.
    LastPlay,
    /// Terminal. Scored; no further moves are legal.
    Complete,
}

/// One round of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Card arena; slot index equals `CardId`.
    cards: Vec<Card>,

    pub players: ColorMap<Player>,

    pub board: Board,

    /// Player to move.
    pub active: PlayerColor,

    pub state: RoundState,

    /// Moves applied so far.
    pub turn: u32,

    /// Victory points captured this round only.
    pub score: ColorMap<u32>,

    /// Cards moved to jail by this round's scoring.
    pub cards_jailed: u32,

    /// The stakes dealt at setup, which decided the starting player.
    pub first_stakes: ColorMap<CardId>,
}

impl Round {
    /// Deal a fresh round: build and shuffle both decks, place each side's
    /// first stake on its innermost column, draw the opening hands, and
    /// pick the starting player (higher first stake moves first, Black on
    /// a tie).
    #[must_use]
    pub fn deal(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let (cards, deck_ids) = crate::core::fresh_decks(&mut rng);

        let mut players = ColorMap::from_fn(Player::new);
        for color in PlayerColor::BOTH {
            players[color].deck = deck_ids[color].iter().copied().collect();
        }

        let mut round = Self {
            cards,
            players,
            board: Board::new(),
            active: PlayerColor::Black,
            state: RoundState::Running,
            turn: 0,
            score: ColorMap::with_value(0),
            cards_jailed: 0,
            first_stakes: ColorMap::with_value(CardId::new(0)),
        };

        // First stakes come straight off each deck front, before hands are
        // drawn.
        for color in PlayerColor::BOTH {
            let id = round.players[color]
                .deck
                .pop_front()
                .expect("a fresh deck is never empty");
            let column = round.players[color]
                .next_stake_column()
                .expect("a fresh territory is never empty");
            round.board.columns_mut()[column as usize].stake = Some(id);
            round.players[color].remove_stake_column(column);
            round.set_played(id, color);
            round.first_stakes[color] = id;
        }

        for color in PlayerColor::BOTH {
            round.players[color].fill_hand();
        }

        let black_rank = round.card(round.first_stakes[PlayerColor::Black]).rank;
        let red_rank = round.card(round.first_stakes[PlayerColor::Red]).rank;
        round.active = if red_rank > black_rank {
            PlayerColor::Red
        } else {
            PlayerColor::Black
        };

        round
    }

    /// Deal the next round of the same match, carrying both players'
    /// victory points forward.
    #[must_use]
    pub fn next_round(&self, seed: u64) -> Self {
        let mut next = Self::deal(seed);
        for color in PlayerColor::BOTH {
            next.players[color].victory_points = self.players[color].victory_points;
        }
        next
    }

    /// The card arena.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    pub(crate) fn set_played(&mut self, id: CardId, owner: PlayerColor) {
        let card = &mut self.cards[id.index()];
        card.played = true;
        card.owner = Some(owner);
    }

    pub(crate) fn clear_played(&mut self, id: CardId) {
        let card = &mut self.cards[id.index()];
        card.played = false;
        card.owner = None;
    }

    /// First player at or over [`MATCH_TARGET`] victory points. Red's
    /// threshold is evaluated before Black's when both cross in the same
    /// scoring pass.
    #[must_use]
    pub fn match_winner(&self) -> Option<PlayerColor> {
        if self.players[PlayerColor::Red].victory_points >= MATCH_TARGET {
            Some(PlayerColor::Red)
        } else if self.players[PlayerColor::Black].victory_points >= MATCH_TARGET {
            Some(PlayerColor::Black)
        } else {
            None
        }
    }

    /// Run the state machine after a move, swap the active player, and
    /// score the round if it completed. `was_last_play` is the state at
    /// the start of the move that was just applied.
    pub(crate) fn advance(&mut self, was_last_play: bool) -> Option<RoundSummary> {
        let inactive = self.active.opponent();

        match self.state {
            RoundState::Running => {
                // The inactive hand is checked before the active one.
                if self.players[inactive].hand.is_empty()
                    || self.players[self.active].hand.is_empty()
                {
                    self.state = RoundState::LastPlay;
                }
            }
            RoundState::LastPlay if was_last_play => {
                // The final turn has been taken.
                self.state = RoundState::Complete;
            }
            _ => {}
        }

        self.turn += 1;

        if self.state == RoundState::Complete {
            return Some(scorer::score_round(self));
        }

        self.active = inactive;

        // A final turn granted to an empty hand has no legal move; the
        // round ends now rather than stalling.
        if self.state == RoundState::LastPlay && self.players[self.active].hand.is_empty() {
            self.state = RoundState::Complete;
            return Some(scorer::score_round(self));
        }

        None
    }

    /// Serialize a snapshot of the full round state.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot and re-validate its invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        let round: Self = bincode::deserialize(bytes)?;
        round.validate()?;
        Ok(round)
    }

    /// Check the structural invariants: board shape, arena/slot agreement,
    /// every card in exactly one place, `played` consistent with location,
    /// hands within the limit.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.board.columns().len() != COLUMN_COUNT {
            return Err(StateError::BadColumnCount(self.board.columns().len()));
        }
        for column in self.board.columns() {
            if column.positions.len() != ROWS_PER_PLAYER * 2 {
                return Err(StateError::BadColumnShape {
                    column: column.index,
                    positions: column.positions.len(),
                });
            }
        }

        for (slot, card) in self.cards.iter().enumerate() {
            if card.id.index() != slot {
                return Err(StateError::CardIdMismatch(card.id));
            }
        }

        // Each card must be tracked in exactly one location.
        let mut counts = vec![0usize; self.cards.len()];
        let mut unplayed: Vec<CardId> = Vec::new();
        let mut played: Vec<CardId> = Vec::new();

        for color in PlayerColor::BOTH {
            let player = &self.players[color];
            if player.hand.len() > HAND_SIZE {
                return Err(StateError::HandOverflow(color, player.hand.len()));
            }
            unplayed.extend(player.hand.iter().copied());
            unplayed.extend(player.deck.iter().copied());
            played.extend(player.jail.iter().copied());
        }
        for column in self.board.columns() {
            played.extend(column.played_ids());
            played.extend(column.stake);
        }

        for &id in unplayed.iter().chain(played.iter()) {
            match counts.get_mut(id.index()) {
                Some(count) => *count += 1,
                None => return Err(StateError::CardMissing(id)),
            }
        }
        for (slot, &count) in counts.iter().enumerate() {
            let id = CardId::new(slot as u8);
            match count {
                1 => {}
                0 => return Err(StateError::CardMissing(id)),
                n => return Err(StateError::CardAliased(id, n)),
            }
        }

        for &id in &unplayed {
            if self.card(id).played {
                return Err(StateError::PlayedFlagMismatch(id));
            }
        }
        for &id in &played {
            if !self.card(id).played {
                return Err(StateError::PlayedFlagMismatch(id));
            }
        }

        Ok(())
    }
}
