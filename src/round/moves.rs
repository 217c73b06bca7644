//! Move validation and application.
//!
//! `Move` is the closed command type consumed at the crate boundary: a
//! stake or a wager, always attributed to the current active player by the
//! caller. [`apply_move`] validates before touching anything, so a rejected
//! move leaves the round exactly as it was.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Round, RoundState, RoundSummary};
use crate::core::{CardId, PlayerColor, HAND_SIZE};
use crate::error::MoveError;

/// A player move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Stake one hand card on the player's next stake column.
    Stake { card: CardId },

    /// Wager one or more hand cards into a staked column.
    Wager {
        cards: SmallVec<[CardId; HAND_SIZE]>,
        column: u8,
    },
}

impl Move {
    /// Number of cards a wager commits; zero for a stake.
    #[must_use]
    pub fn wagered_cards(&self) -> usize {
        match self {
            Move::Stake { .. } => 0,
            Move::Wager { cards, .. } => cards.len(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Stake { card } => write!(f, "stake {card}"),
            Move::Wager { cards, column } => {
                write!(f, "wager {} card(s) on column {column}", cards.len())
            }
        }
    }
}

/// Validate and apply a move for `color`, advance the state machine, and
/// swap the active player.
///
/// Returns the scoring summary when this move completed the round.
pub fn apply_move(
    round: &mut Round,
    color: PlayerColor,
    mv: &Move,
) -> Result<Option<RoundSummary>, MoveError> {
    if round.state == RoundState::Complete {
        return Err(MoveError::RoundComplete);
    }
    if color != round.active {
        return Err(MoveError::OutOfTurn(color));
    }

    let was_last_play = round.state == RoundState::LastPlay;
    match mv {
        Move::Stake { card } => stake_card(round, color, *card)?,
        Move::Wager { cards, column } => wager_cards(round, color, cards, *column)?,
    }

    Ok(round.advance(was_last_play))
}

/// Place a hand card on the player's next stake column and draw a
/// replacement (no draw during last play).
fn stake_card(round: &mut Round, color: PlayerColor, card: CardId) -> Result<(), MoveError> {
    if !round.players[color].has_in_hand(card) {
        return Err(MoveError::CardNotInHand(card));
    }
    let column = round.players[color]
        .next_stake_column()
        .ok_or(MoveError::NoStakeAvailable(color))?;
    let target = round
        .board
        .column(column)
        .ok_or(MoveError::NoSuchColumn(column))?;
    if target.stake.is_some() {
        return Err(MoveError::ColumnAlreadyStaked(column));
    }

    round.players[color].remove_from_hand(card);
    round.board.columns_mut()[column as usize].stake = Some(card);
    round.set_played(card, color);
    round.players[color].remove_stake_column(column);

    if round.state != RoundState::LastPlay {
        round.players[color].draw();
    }

    Ok(())
}

/// Wager hand cards into a staked column, filling the player's open
/// positions closest to the stake row first. All-or-nothing: the whole
/// wager fails if any card lacks a position. Wagers never draw.
fn wager_cards(
    round: &mut Round,
    color: PlayerColor,
    cards: &[CardId],
    column: u8,
) -> Result<(), MoveError> {
    if cards.is_empty() {
        return Err(MoveError::EmptyWager);
    }
    for (i, &card) in cards.iter().enumerate() {
        if cards[..i].contains(&card) {
            return Err(MoveError::DuplicateWager(card));
        }
        if !round.players[color].has_in_hand(card) {
            return Err(MoveError::CardNotInHand(card));
        }
    }

    let target = round
        .board
        .column(column)
        .ok_or(MoveError::NoSuchColumn(column))?;
    if target.stake.is_none() {
        return Err(MoveError::ColumnNotStaked(column));
    }
    let slots = target.open_slots(color);
    if slots.len() < cards.len() {
        return Err(MoveError::InsufficientPositions {
            column,
            open: slots.len(),
            wanted: cards.len(),
        });
    }

    for (i, &card) in cards.iter().enumerate() {
        round.players[color].remove_from_hand(card);
        round.board.columns_mut()[column as usize].positions[slots[i]].card = Some(card);
        round.set_played(card, color);
    }

    Ok(())
}
