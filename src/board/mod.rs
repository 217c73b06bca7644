//! Board topology: columns, positions, stake slots.
//!
//! Ten columns side by side. Each column stacks five black positions (rows
//! 0–4), the stake row (row 5), and five red positions (rows 6–10). Columns
//! 0–4 are Black's staking territory, 5–9 Red's; each side fills its
//! territory outward from the center.
//!
//! Positions hold card ids only. The cards live in the round arena.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, PlayerColor};

/// Number of columns on the board.
pub const COLUMN_COUNT: usize = 10;

/// Positions per player per column.
pub const ROWS_PER_PLAYER: usize = 5;

/// Row index of the stake slots.
pub const STAKE_ROW: u8 = 5;

/// Columns a color may stake in.
#[must_use]
pub fn staking_territory(color: PlayerColor) -> std::ops::RangeInclusive<u8> {
    match color {
        PlayerColor::Black => 0..=4,
        PlayerColor::Red => 5..=9,
    }
}

/// One board cell. Belongs to exactly one column and one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// (row, column) coordinate.
    pub coord: (u8, u8),

    pub owner: PlayerColor,

    /// At most one card.
    pub card: Option<CardId>,
}

impl Position {
    /// Rows between this position and the stake row.
    #[must_use]
    pub fn distance_from_stake(&self) -> u8 {
        self.coord.0.abs_diff(STAKE_ROW)
    }
}

/// A column of positions plus its stake slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub index: u8,

    /// Five black positions (rows 0–4) then five red (rows 6–10).
    pub positions: Vec<Position>,

    /// The card staked on this column, if any.
    pub stake: Option<CardId>,
}

impl Column {
    fn new(index: u8) -> Self {
        let mut positions = Vec::with_capacity(ROWS_PER_PLAYER * 2);
        for row in 0..ROWS_PER_PLAYER as u8 {
            positions.push(Position {
                coord: (row, index),
                owner: PlayerColor::Black,
                card: None,
            });
        }
        for row in STAKE_ROW + 1..=STAKE_ROW + ROWS_PER_PLAYER as u8 {
            positions.push(Position {
                coord: (row, index),
                owner: PlayerColor::Red,
                card: None,
            });
        }
        Self {
            index,
            positions,
            stake: None,
        }
    }

    /// Indices of a player's empty positions, closest to the stake row
    /// first.
    #[must_use]
    pub fn open_slots(&self, color: PlayerColor) -> SmallVec<[usize; ROWS_PER_PLAYER]> {
        let mut slots: SmallVec<[usize; ROWS_PER_PLAYER]> = self
            .positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.owner == color && p.card.is_none())
            .map(|(i, _)| i)
            .collect();
        slots.sort_by_key(|&i| self.positions[i].distance_from_stake());
        slots
    }

    /// Ids of all cards wagered into this column (the stake excluded).
    pub fn played_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.positions.iter().filter_map(|p| p.card)
    }
}

/// The ten-column board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: (0..COLUMN_COUNT as u8).map(Column::new).collect(),
        }
    }

    /// All columns in index order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to all columns.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Bounds-checked column lookup.
    #[must_use]
    pub fn column(&self, index: u8) -> Option<&Column> {
        self.columns.get(index as usize)
    }

    /// Bounds-checked mutable column lookup.
    pub fn column_mut(&mut self, index: u8) -> Option<&mut Column> {
        self.columns.get_mut(index as usize)
    }

    /// Columns currently holding a stake.
    pub fn staked_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.stake.is_some())
    }
}
