//! Hand-strength evaluation.
//!
//! Pure functions over rank lists; nothing here knows about the board. The
//! board scorer feeds each contested column's wagered ranks (plus the stake)
//! through [`winning_hand`] to decide captures.

pub mod hand;

pub use hand::{evaluate_hand, winning_hand, HandResult, HandScore, PAIR_STRENGTH};
