//! Combinatorial hand scoring: pairs, runs, stake inclusion.
//!
//! A hand's strength is the sum of its pair and run components:
//!
//! - every distinct rank appearing at least twice contributes
//!   [`PAIR_STRENGTH`] once;
//! - the single longest strictly-consecutive run of distinct ranks (length
//!   ≥ 2) contributes its length. Shorter runs never score, even when
//!   disjoint from the longest.
//!
//! The ace plays high (14) or low (1), never both in one evaluation.
//!
//! A stake card may join its owner's hand as a pair-former **or** a
//! run-extender, never both; inclusion is chosen to maximize total
//! strength.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::ACE;

/// Strength contributed by each paired rank.
pub const PAIR_STRENGTH: u32 = 3;

/// Result of evaluating one hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandScore {
    /// Combined pair and run strength.
    pub strength: u32,

    /// Hand ranks (plus the stake when it scored), sorted descending.
    /// Used for tie-breaking.
    pub high_cards: Vec<u8>,

    /// True iff the stake participated in a scored combination.
    pub includes_stake: bool,
}

/// Outcome of comparing two hands over a stake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand1_wins: bool,

    /// True iff the stake's owner lost and the stake is captured.
    pub stake_goes_to_jail: bool,

    /// The winner's deciding high card.
    pub winning_rank: Option<u8>,
}

/// Score a set of hand ranks, optionally with that side's stake.
///
/// An empty hand scores zero and never uses the stake. A one-card hand has
/// no combination of its own, but the stake may still pair with it or form
/// a two-card run.
#[must_use]
pub fn evaluate_hand(ranks: &[u8], stake: Option<u8>) -> HandScore {
    if ranks.is_empty() {
        return HandScore {
            strength: 0,
            high_cards: Vec::new(),
            includes_stake: false,
        };
    }

    let mut counts: FxHashMap<u8, u32> = FxHashMap::default();
    for &rank in ranks {
        *counts.entry(rank).or_insert(0) += 1;
    }
    let base_pairs = counts.values().filter(|&&c| c >= 2).count() as u32;
    let base_run = longest_run(ranks.iter().copied());
    let base = PAIR_STRENGTH * base_pairs + base_run;

    let (strength, includes_stake) = match stake {
        None => (base, false),
        Some(s) => {
            // The stake forms a new pair only when the hand holds exactly
            // one card of its rank; a rank already paired scores once.
            let stake_pairs = base_pairs + u32::from(counts.get(&s) == Some(&1));
            let stake_run = longest_run(ranks.iter().copied().chain(std::iter::once(s)));

            let as_pair = PAIR_STRENGTH * stake_pairs + base_run;
            let as_run = PAIR_STRENGTH * base_pairs + stake_run;
            let best = base.max(as_pair).max(as_run);
            (best, best > base)
        }
    };

    let mut high_cards = ranks.to_vec();
    if includes_stake {
        if let Some(s) = stake {
            high_cards.push(s);
        }
    }
    high_cards.sort_unstable_by(|a, b| b.cmp(a));

    HandScore {
        strength,
        high_cards,
        includes_stake,
    }
}

/// Compare two hands over a stake attributed to one of them.
///
/// Returns `None` on a perfect tie: equal strength and equal high cards.
/// On a decision, `stake_goes_to_jail` is true exactly when the stake's
/// owner lost — a stake survives capture only while its owner wins.
#[must_use]
pub fn winning_hand(
    hand1: &[u8],
    hand2: &[u8],
    stake: u8,
    stake_is_hand1: bool,
) -> Option<HandResult> {
    let score1 = evaluate_hand(hand1, stake_is_hand1.then_some(stake));
    let score2 = evaluate_hand(hand2, (!stake_is_hand1).then_some(stake));

    let hand1_wins = match score1.strength.cmp(&score2.strength) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => match compare_high_cards(&score1.high_cards, &score2.high_cards) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => return None,
        },
    };

    let winner = if hand1_wins { &score1 } else { &score2 };
    Some(HandResult {
        hand1_wins,
        stake_goes_to_jail: stake_is_hand1 != hand1_wins,
        winning_rank: winner.high_cards.first().copied(),
    })
}

/// Element-wise comparison of descending high-card lists. A side that runs
/// out of cards loses; both exhausted is a tie.
fn compare_high_cards(a: &[u8], b: &[u8]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Length of the longest strictly-consecutive run of distinct ranks, with
/// the ace tried high and low. Runs shorter than two score zero.
fn longest_run(ranks: impl Iterator<Item = u8>) -> u32 {
    let mut distinct: Vec<u8> = ranks.collect();
    distinct.sort_unstable();
    distinct.dedup();

    let mut best = run_length(&distinct);
    if distinct.last() == Some(&ACE) {
        let mut low: Vec<u8> = Vec::with_capacity(distinct.len());
        low.push(1);
        low.extend(distinct.iter().copied().filter(|&r| r != ACE));
        best = best.max(run_length(&low));
    }
    best
}

fn run_length(sorted_distinct: &[u8]) -> u32 {
    let mut best = 0u32;
    let mut current = 1u32;
    for window in sorted_distinct.windows(2) {
        if window[1] == window[0] + 1 {
            current += 1;
        } else {
            best = best.max(current);
            current = 1;
        }
    }
    best = best.max(current);
    if best >= 2 {
        best
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hand_scores_zero() {
        let score = evaluate_hand(&[], Some(10));
        assert_eq!(score.strength, 0);
        assert!(!score.includes_stake);
        assert!(score.high_cards.is_empty());
    }

    #[test]
    fn test_pair_scores_three() {
        assert_eq!(evaluate_hand(&[5, 5], Some(10)).strength, 3);
        assert_eq!(evaluate_hand(&[5, 5], None).strength, 3);
    }

    #[test]
    fn test_run_scores_length() {
        assert_eq!(evaluate_hand(&[3, 4, 5], Some(10)).strength, 3);
        assert_eq!(evaluate_hand(&[3, 4], None).strength, 2);
    }

    #[test]
    fn test_only_longest_run_counts() {
        assert_eq!(evaluate_hand(&[2, 3, 4, 7, 8], Some(10)).strength, 3);
    }

    #[test]
    fn test_pairs_and_run_stack() {
        // Pair of threes plus the 3-4-5 run.
        assert_eq!(evaluate_hand(&[3, 3, 4, 5], None).strength, 6);
    }

    #[test]
    fn test_triple_counts_once() {
        // Two copies exist per color, but a stake can supply a third.
        assert_eq!(evaluate_hand(&[5, 5], Some(5)).strength, 3);
        assert!(!evaluate_hand(&[5, 5], Some(5)).includes_stake);
    }

    #[test]
    fn test_ace_high_run() {
        assert_eq!(evaluate_hand(&[12, 13, 14], None).strength, 3);
    }

    #[test]
    fn test_ace_low_run() {
        assert_eq!(evaluate_hand(&[14, 2, 3], None).strength, 3);
    }

    #[test]
    fn test_ace_never_counts_both_ways() {
        // 13-14 or 1-2, never 13-14-1-2.
        assert_eq!(evaluate_hand(&[13, 14, 2], None).strength, 2);
        assert_eq!(evaluate_hand(&[12, 13, 14, 2, 3], None).strength, 3);
    }

    #[test]
    fn test_stake_extends_run() {
        let score = evaluate_hand(&[4, 6, 6], Some(5));
        // 4-5-6 run plus the pair of sixes.
        assert_eq!(score.strength, 6);
        assert!(score.includes_stake);
    }

    #[test]
    fn test_stake_forms_pair() {
        let score = evaluate_hand(&[2, 2, 9], Some(9));
        assert_eq!(score.strength, 6);
        assert!(score.includes_stake);
    }

    #[test]
    fn test_stake_single_use_takes_better_option() {
        // Stake 8 either pairs with the hand's 8 (which stays in the 8-9-10
        // run) or re-extends the run for nothing. Pairing wins: 3 + 3.
        let score = evaluate_hand(&[8, 9, 10], Some(8));
        assert_eq!(score.strength, 6);
        assert!(score.includes_stake);

        // Here the stake cannot pair; it can only join the run.
        let score = evaluate_hand(&[9, 10], Some(8));
        assert_eq!(score.strength, 3);
        assert!(score.includes_stake);
    }

    #[test]
    fn test_unused_stake_excluded_from_high_cards() {
        let score = evaluate_hand(&[5, 9], Some(12));
        assert_eq!(score.strength, 0);
        assert!(!score.includes_stake);
        assert_eq!(score.high_cards, vec![9, 5]);

        let score = evaluate_hand(&[5, 9], Some(9));
        assert!(score.includes_stake);
        assert_eq!(score.high_cards, vec![9, 9, 5]);
    }

    #[test]
    fn test_winning_hand_empty_loses() {
        let result = winning_hand(&[], &[2], 10, true).unwrap();
        assert!(!result.hand1_wins);
        assert_eq!(result.winning_rank, Some(2));
    }

    #[test]
    fn test_winning_hand_perfect_tie() {
        assert_eq!(winning_hand(&[5], &[5], 10, true), None);
        assert_eq!(winning_hand(&[], &[], 10, true), None);
    }

    #[test]
    fn test_stake_of_loser_captured_even_when_unused() {
        let result = winning_hand(&[5, 5], &[2], 2, false).unwrap();
        assert!(result.hand1_wins);
        assert!(result.stake_goes_to_jail);
    }

    #[test]
    fn test_stake_pairs_with_singleton_owner_wins() {
        let result = winning_hand(&[5], &[6], 5, true).unwrap();
        assert!(result.hand1_wins);
        assert!(!result.stake_goes_to_jail);
    }

    #[test]
    fn test_loser_stake_used_in_combination_still_captured() {
        // Hand 2 pairs its own stake but loses on high card.
        let result = winning_hand(&[5, 5], &[2], 2, false).unwrap();
        assert!(result.hand1_wins);
        assert!(result.stake_goes_to_jail);
        assert_eq!(result.winning_rank, Some(5));
    }

    #[test]
    fn test_tie_break_ignores_unused_stake() {
        // Both hands hold a two-card run; hand 1's stake 14 did not score,
        // so the 9 decides the tie, not the ace.
        let result = winning_hand(&[4, 5, 9], &[6, 7], 14, true).unwrap();
        assert!(result.hand1_wins);
        assert_eq!(result.winning_rank, Some(9));
    }
}
