//! Error taxonomy: recoverable move rejection vs. fatal state corruption.
//!
//! `MoveError` reports a rejected move; the round is left untouched and the
//! caller may submit another move. `StateError` means the round state itself
//! violates a structural invariant — a bug in whoever constructed the state —
//! and should abort rather than be repaired.

use thiserror::Error;

use crate::core::{CardId, PlayerColor};

/// A move that cannot be applied. Always recoverable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("it is not {0}'s turn")]
    OutOfTurn(PlayerColor),

    #[error("the round is complete; no further moves are legal")]
    RoundComplete,

    #[error("{0} is not in hand")]
    CardNotInHand(CardId),

    #[error("{0} appears twice in the same wager")]
    DuplicateWager(CardId),

    #[error("a wager needs at least one card")]
    EmptyWager,

    #[error("no stake columns remain for {0}")]
    NoStakeAvailable(PlayerColor),

    #[error("column {0} already holds a stake")]
    ColumnAlreadyStaked(u8),

    #[error("column {0} holds no stake")]
    ColumnNotStaked(u8),

    #[error("no such column: {0}")]
    NoSuchColumn(u8),

    #[error("column {column} has {open} open positions for {wanted} wagered cards")]
    InsufficientPositions { column: u8, open: usize, wanted: usize },
}

/// A structural invariant violation in a `Round`. Fatal.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("board has {0} columns, expected 10")]
    BadColumnCount(usize),

    #[error("column {column} has {positions} positions, expected 10")]
    BadColumnShape { column: u8, positions: usize },

    #[error("{0} is tracked in {1} locations, expected exactly one")]
    CardAliased(CardId, usize),

    #[error("{0} is not tracked in any location")]
    CardMissing(CardId),

    #[error("{0} id does not match its arena slot")]
    CardIdMismatch(CardId),

    #[error("{0} played flag disagrees with its location")]
    PlayedFlagMismatch(CardId),

    #[error("{0}'s hand holds {1} cards, limit 5")]
    HandOverflow(PlayerColor, usize),

    #[error("snapshot codec failed: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for StateError {
    fn from(value: bincode::Error) -> Self {
        Self::Snapshot(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::CardNotInHand(CardId::new(3));
        assert_eq!(err.to_string(), "Card(3) is not in hand");

        let err = MoveError::InsufficientPositions {
            column: 7,
            open: 2,
            wanted: 3,
        };
        assert_eq!(
            err.to_string(),
            "column 7 has 2 open positions for 3 wagered cards"
        );
    }

    #[test]
    fn test_state_error_from_bincode() {
        let bad: Result<crate::round::Round, _> = bincode::deserialize(&[0xFF, 0xFF]);
        let err = StateError::from(bad.unwrap_err());
        assert!(matches!(err, StateError::Snapshot(_)));
    }
}
