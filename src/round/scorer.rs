//! Round-end resolution: contested columns, capture, victory accounting.
//!
//! Runs synchronously when a round completes. Every staked column is
//! resolved independently: a column wagered by both colors is contested
//! and decided by the hand evaluator; anything else returns home without
//! capture. Captured cards land in the winner's jail and bank their
//! victory points; all other cards go back to their owners' decks.

use serde::{Deserialize, Serialize};

use super::Round;
use crate::core::{CardId, ColorMap, PlayerColor};
use crate::eval::winning_hand;

/// Victory points needed to win the match.
pub const MATCH_TARGET: u32 = 70;

/// Scoring signal produced when a round completes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Points captured this round, per color.
    pub victory_point_scores: ColorMap<u32>,

    /// Cards jailed this round.
    pub cards_jailed: u32,

    /// Match winner, if this round pushed someone over [`MATCH_TARGET`].
    pub winner: Option<PlayerColor>,
}

/// Resolve every staked column, then check for a match winner.
pub(crate) fn score_round(round: &mut Round) -> RoundSummary {
    for index in 0..round.board.columns().len() {
        resolve_column(round, index);
    }

    RoundSummary {
        victory_point_scores: round.score.clone(),
        cards_jailed: round.cards_jailed,
        winner: round.match_winner(),
    }
}

fn resolve_column(round: &mut Round, index: usize) {
    // Sweep the column clear before deciding where its cards go.
    let column = &mut round.board.columns_mut()[index];
    let Some(stake) = column.stake.take() else {
        return;
    };
    let mut played: Vec<CardId> = Vec::new();
    for position in &mut column.positions {
        if let Some(id) = position.card.take() {
            played.push(id);
        }
    }

    let mut black_ids: Vec<CardId> = Vec::new();
    let mut red_ids: Vec<CardId> = Vec::new();
    for &id in &played {
        match round.card(id).color {
            PlayerColor::Black => black_ids.push(id),
            PlayerColor::Red => red_ids.push(id),
        }
    }

    // Contested only when both colors wagered into the column.
    if black_ids.is_empty() || red_ids.is_empty() {
        for id in played {
            return_to_deck(round, id);
        }
        return_to_deck(round, stake);
        return;
    }

    let black_ranks: Vec<u8> = black_ids.iter().map(|&id| round.card(id).rank).collect();
    let red_ranks: Vec<u8> = red_ids.iter().map(|&id| round.card(id).rank).collect();
    let stake_rank = round.card(stake).rank;
    let stake_is_black = round.card(stake).color == PlayerColor::Black;

    match winning_hand(&black_ranks, &red_ranks, stake_rank, stake_is_black) {
        None => {
            // A dead tie captures nothing.
            for id in played {
                return_to_deck(round, id);
            }
            return_to_deck(round, stake);
        }
        Some(result) => {
            let winner = if result.hand1_wins {
                PlayerColor::Black
            } else {
                PlayerColor::Red
            };
            let (winner_ids, loser_ids) = if result.hand1_wins {
                (black_ids, red_ids)
            } else {
                (red_ids, black_ids)
            };

            let mut jailed = loser_ids;
            if result.stake_goes_to_jail {
                jailed.push(stake);
            } else {
                return_to_deck(round, stake);
            }

            let points: u32 = jailed.iter().map(|&id| round.card(id).victory_points).sum();
            for &id in &jailed {
                round.players[winner].jail.push_back(id);
            }
            round.cards_jailed += jailed.len() as u32;
            round.score[winner] += points;
            round.players[winner].victory_points += points;

            for id in winner_ids {
                return_to_deck(round, id);
            }
        }
    }
}

/// Send a card back to its color's deck, unplayed and unowned.
fn return_to_deck(round: &mut Round, id: CardId) {
    let color = round.card(id).color;
    round.clear_played(id);
    round.players[color].deck.push_back(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;
    use crate::round::test_support::{bare_round, stake_at, wager_at};

    fn in_deck(round: &Round, id: CardId) -> bool {
        let color = round.card(id).color;
        round.players[color].deck.contains(&id)
    }

    #[test]
    fn test_single_color_column_is_uncontested() {
        let mut round = bare_round(7);
        let black_stake = stake_at(&mut round, 4, Suit::Spades, 7);
        let red_stake = stake_at(&mut round, 5, Suit::Hearts, 9);
        let wagered = wager_at(&mut round, 4, Suit::Spades, 6);

        let summary = score_round(&mut round);

        assert_eq!(summary.cards_jailed, 0);
        assert_eq!(summary.victory_point_scores, ColorMap::with_value(0));
        assert_eq!(summary.winner, None);
        assert_eq!(round.board.staked_columns().count(), 0);
        for id in [black_stake, red_stake, wagered] {
            assert!(!round.card(id).played);
            assert!(in_deck(&round, id));
        }
        round.validate().unwrap();
    }

    #[test]
    fn test_contested_capture_awards_points() {
        let mut round = bare_round(7);
        let black_stake = stake_at(&mut round, 4, Suit::Clubs, 2);
        let five_c = wager_at(&mut round, 4, Suit::Clubs, 5);
        let five_s = wager_at(&mut round, 4, Suit::Spades, 5);
        let four_h = wager_at(&mut round, 4, Suit::Hearts, 4);

        let summary = score_round(&mut round);

        // The pair of fives beats the lone four.
        assert_eq!(round.score[PlayerColor::Black], 4);
        assert_eq!(round.players[PlayerColor::Black].victory_points, 4);
        assert_eq!(summary.cards_jailed, 1);
        assert_eq!(summary.winner, None);
        assert!(round.players[PlayerColor::Black].jail.contains(&four_h));
        // The winner's own cards and stake go home, not to jail.
        for id in [black_stake, five_c, five_s] {
            assert!(in_deck(&round, id));
        }
        round.validate().unwrap();
    }

    #[test]
    fn test_losers_stake_is_captured_even_if_unused() {
        let mut round = bare_round(7);
        let red_stake = stake_at(&mut round, 5, Suit::Hearts, 2);
        wager_at(&mut round, 5, Suit::Clubs, 5);
        wager_at(&mut round, 5, Suit::Spades, 5);
        let four_d = wager_at(&mut round, 5, Suit::Diamonds, 4);

        let summary = score_round(&mut round);

        // Red loses the column, so the stake is jailed with the wager.
        assert_eq!(round.score[PlayerColor::Black], 6);
        assert_eq!(summary.cards_jailed, 2);
        assert!(round.players[PlayerColor::Black].jail.contains(&red_stake));
        assert!(round.players[PlayerColor::Black].jail.contains(&four_d));
        round.validate().unwrap();
    }

    #[test]
    fn test_dead_tie_captures_nothing() {
        let mut round = bare_round(7);
        let black_stake = stake_at(&mut round, 4, Suit::Clubs, 9);
        let five_c = wager_at(&mut round, 4, Suit::Clubs, 5);
        let five_h = wager_at(&mut round, 4, Suit::Hearts, 5);

        let summary = score_round(&mut round);

        assert_eq!(summary.cards_jailed, 0);
        assert_eq!(summary.victory_point_scores, ColorMap::with_value(0));
        for id in [black_stake, five_c, five_h] {
            assert!(in_deck(&round, id));
        }
        round.validate().unwrap();
    }

    #[test]
    fn test_poison_king_capture_ends_match() {
        let mut round = bare_round(7);
        stake_at(&mut round, 5, Suit::Hearts, 2);
        let king_h = wager_at(&mut round, 5, Suit::Hearts, 13);
        wager_at(&mut round, 5, Suit::Clubs, 5);
        wager_at(&mut round, 5, Suit::Spades, 5);

        let summary = score_round(&mut round);

        // King of hearts (70) plus the stake (2).
        assert_eq!(round.score[PlayerColor::Black], 72);
        assert_eq!(round.players[PlayerColor::Black].victory_points, 72);
        assert!(round.players[PlayerColor::Black].jail.contains(&king_h));
        assert_eq!(summary.winner, Some(PlayerColor::Black));
    }

    #[test]
    fn test_red_threshold_evaluated_first_when_both_cross() {
        let mut round = bare_round(7);

        // Column 4: Red's pair captures Black's poison king and stake.
        stake_at(&mut round, 4, Suit::Clubs, 2);
        wager_at(&mut round, 4, Suit::Spades, 13);
        wager_at(&mut round, 4, Suit::Hearts, 5);
        wager_at(&mut round, 4, Suit::Diamonds, 5);

        // Column 5: Black's pair captures Red's poison king and stake.
        stake_at(&mut round, 5, Suit::Hearts, 2);
        wager_at(&mut round, 5, Suit::Hearts, 13);
        wager_at(&mut round, 5, Suit::Clubs, 6);
        wager_at(&mut round, 5, Suit::Spades, 6);

        let summary = score_round(&mut round);

        assert_eq!(round.players[PlayerColor::Red].victory_points, 72);
        assert_eq!(round.players[PlayerColor::Black].victory_points, 72);
        assert_eq!(summary.winner, Some(PlayerColor::Red));
        round.validate().unwrap();
    }
}
