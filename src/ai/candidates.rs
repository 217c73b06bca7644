//! Candidate move enumeration for the player to move.
//!
//! Candidates are legal by construction: stakes only while territory
//! remains, wagers only against staked columns, combinations only from
//! cards actually in hand. The search trusts this and never expects a
//! rejected move.

use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};

use crate::core::{CardId, PlayerColor, ACE, HAND_SIZE};
use crate::eval::evaluate_hand;
use crate::round::{Move, Round};

type Cards = SmallVec<[CardId; HAND_SIZE]>;

/// A legal move with a provisional value for move ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub mv: Move,

    /// Combination strength for wagers, card rank for stakes. Ordering
    /// heuristic only; the search scores the move properly.
    pub strength: u32,
}

/// Enumerate every stake and wager candidate for `color`.
///
/// Wager combinations cover all singles, same-rank pairs, and straight
/// runs of length 2–5 (ace high or low), each offered against every
/// staked column. A three-card hand can yield single, pair, and straight
/// candidates over the same cards.
#[must_use]
pub fn candidate_moves(round: &Round, color: PlayerColor) -> Vec<Candidate> {
    let player = &round.players[color];
    let mut out = Vec::new();

    if player.next_stake_column().is_some() {
        for &card in &player.hand {
            out.push(Candidate {
                mv: Move::Stake { card },
                strength: u32::from(round.card(card).rank),
            });
        }
    }

    let staked: SmallVec<[u8; 10]> = round.board.staked_columns().map(|c| c.index).collect();
    if staked.is_empty() || player.hand.is_empty() {
        return out;
    }

    for cards in hand_combinations(round, &player.hand) {
        let ranks: SmallVec<[u8; HAND_SIZE]> =
            cards.iter().map(|&id| round.card(id).rank).collect();
        let strength = evaluate_hand(&ranks, None).strength;
        for &column in &staked {
            out.push(Candidate {
                mv: Move::Wager {
                    cards: cards.clone(),
                    column,
                },
                strength,
            });
        }
    }

    out
}

/// All playable combinations in a hand: singles, same-rank pairs, and
/// straight windows.
fn hand_combinations(round: &Round, hand: &[CardId]) -> Vec<Cards> {
    let mut combos: Vec<Cards> = Vec::new();

    for &card in hand {
        combos.push(smallvec![card]);
    }

    for (i, &a) in hand.iter().enumerate() {
        for &b in &hand[i + 1..] {
            if round.card(a).rank == round.card(b).rank {
                combos.push(smallvec![a, b]);
            }
        }
    }

    straight_combinations(round, hand, &mut combos);
    combos
}

/// Push every consecutive window of length 2–5, trying the ace both high
/// and low. Windows that pick the same card set either way are emitted
/// once.
fn straight_combinations(round: &Round, hand: &[CardId], combos: &mut Vec<Cards>) {
    // One card per rank is enough for a straight.
    let mut by_rank: Vec<(u8, CardId)> = hand.iter().map(|&id| (round.card(id).rank, id)).collect();
    by_rank.sort_by_key(|&(rank, _)| rank);
    by_rank.dedup_by_key(|&mut (rank, _)| rank);

    let mut variants: Vec<Vec<(u8, CardId)>> = vec![by_rank.clone()];
    if let Some(&(_, ace)) = by_rank.iter().find(|&&(rank, _)| rank == ACE) {
        let mut low = vec![(1u8, ace)];
        low.extend(by_rank.iter().copied().filter(|&(rank, _)| rank != ACE));
        variants.push(low);
    }

    let mut seen: FxHashSet<Vec<u8>> = FxHashSet::default();
    for variant in variants {
        for start in 0..variant.len() {
            for end in start + 1..variant.len() {
                if variant[end].0 != variant[end - 1].0 + 1 {
                    break;
                }
                let window = &variant[start..=end];
                if window.len() > HAND_SIZE {
                    break;
                }

                let mut key: Vec<u8> = window.iter().map(|&(_, id)| id.0).collect();
                key.sort_unstable();
                if seen.insert(key) {
                    combos.push(window.iter().map(|&(_, id)| id).collect());
                }
            }
        }
    }
}
