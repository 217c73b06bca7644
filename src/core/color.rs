//! Player colors and per-color data storage.
//!
//! Cozen is strictly two-player: one side plays the black cards, the other
//! the red. `ColorMap` gives O(1) per-color storage with indexing by
//! `PlayerColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Black,
    Red,
}

impl PlayerColor {
    /// Both colors, Black first.
    pub const BOTH: [PlayerColor; 2] = [PlayerColor::Black, PlayerColor::Red];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerColor::Black => PlayerColor::Red,
            PlayerColor::Red => PlayerColor::Black,
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Black => write!(f, "Black"),
            PlayerColor::Red => write!(f, "Red"),
        }
    }
}

/// Per-color data storage.
///
/// ## Example
///
/// ```
/// use cozen::core::{ColorMap, PlayerColor};
///
/// let mut points: ColorMap<u32> = ColorMap::with_value(0);
/// points[PlayerColor::Red] += 10;
///
/// assert_eq!(points[PlayerColor::Red], 10);
/// assert_eq!(points[PlayerColor::Black], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    black: T,
    red: T,
}

impl<T> ColorMap<T> {
    /// Create a map from explicit per-color values.
    #[must_use]
    pub fn new(black: T, red: T) -> Self {
        Self { black, red }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(PlayerColor) -> T) -> Self {
        Self {
            black: factory(PlayerColor::Black),
            red: factory(PlayerColor::Red),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            black: value.clone(),
            red: value,
        }
    }

    /// Get a reference to one color's data.
    #[must_use]
    pub fn get(&self, color: PlayerColor) -> &T {
        match color {
            PlayerColor::Black => &self.black,
            PlayerColor::Red => &self.red,
        }
    }

    /// Get a mutable reference to one color's data.
    pub fn get_mut(&mut self, color: PlayerColor) -> &mut T {
        match color {
            PlayerColor::Black => &mut self.black,
            PlayerColor::Red => &mut self.red,
        }
    }

    /// Iterate over (color, &T) pairs, Black first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        PlayerColor::BOTH.iter().map(move |&c| (c, self.get(c)))
    }
}

impl<T> Index<PlayerColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: PlayerColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<PlayerColor> for ColorMap<T> {
    fn index_mut(&mut self, color: PlayerColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}
