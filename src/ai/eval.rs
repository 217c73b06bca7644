//! Heuristic position evaluation.
//!
//! Scores a round from one color's perspective: positive favors that
//! color. Terminal rounds score their banked points plus a decisive bonus
//! for winning the match; running rounds add hand potential and the
//! capture swing of contested columns. Antisymmetric by construction:
//! `evaluate_round(r, Black) == -evaluate_round(r, Red)`.

use crate::core::PlayerColor;
use crate::eval::{evaluate_hand, winning_hand};
use crate::round::{Round, RoundState};

/// Dominates every material term once a match is decided.
const MATCH_WIN_BONUS: f64 = 1_000.0;

/// Discount on capture swings that are not banked yet.
const CONTROL_WEIGHT: f64 = 0.6;

/// Weight of raw hand strength still in hand.
const HAND_WEIGHT: f64 = 0.5;

/// Static evaluation of `round` from `perspective`.
#[must_use]
pub fn evaluate_round(round: &Round, perspective: PlayerColor) -> f64 {
    let rival = perspective.opponent();
    let mut score = f64::from(round.players[perspective].victory_points)
        - f64::from(round.players[rival].victory_points);

    if round.state == RoundState::Complete {
        if let Some(winner) = round.match_winner() {
            score += if winner == perspective {
                MATCH_WIN_BONUS
            } else {
                -MATCH_WIN_BONUS
            };
        }
        return score;
    }

    score += HAND_WEIGHT * (hand_potential(round, perspective) - hand_potential(round, rival));
    score += CONTROL_WEIGHT * contested_swing(round, perspective);
    score
}

fn hand_potential(round: &Round, color: PlayerColor) -> f64 {
    let ranks: Vec<u8> = round.players[color]
        .hand
        .iter()
        .map(|&id| round.card(id).rank)
        .collect();
    f64::from(evaluate_hand(&ranks, None).strength)
}

/// Net victory points that would change hands if every contested column
/// resolved right now, positive when `perspective` holds the lead.
fn contested_swing(round: &Round, perspective: PlayerColor) -> f64 {
    let mut swing = 0.0;

    for column in round.board.staked_columns() {
        let Some(stake) = column.stake else { continue };

        let mut black_ranks: Vec<u8> = Vec::new();
        let mut red_ranks: Vec<u8> = Vec::new();
        let mut black_pot = 0u32;
        let mut red_pot = 0u32;
        for id in column.played_ids() {
            let card = round.card(id);
            match card.color {
                PlayerColor::Black => {
                    black_ranks.push(card.rank);
                    black_pot += card.victory_points;
                }
                PlayerColor::Red => {
                    red_ranks.push(card.rank);
                    red_pot += card.victory_points;
                }
            }
        }
        // Uncontested columns return their cards; no swing.
        if black_ranks.is_empty() || red_ranks.is_empty() {
            continue;
        }

        let stake_card = round.card(stake);
        let stake_is_black = stake_card.color == PlayerColor::Black;
        let Some(result) = winning_hand(&black_ranks, &red_ranks, stake_card.rank, stake_is_black)
        else {
            continue;
        };

        let winner = if result.hand1_wins {
            PlayerColor::Black
        } else {
            PlayerColor::Red
        };
        let mut pot = if result.hand1_wins { red_pot } else { black_pot };
        if result.stake_goes_to_jail {
            pot += stake_card.victory_points;
        }

        swing += if winner == perspective {
            f64::from(pot)
        } else {
            -f64::from(pot)
        };
    }

    swing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::test_support::{bare_round, stake_at, wager_at};
    use crate::core::Suit;

    #[test]
    fn test_banked_points_dominate_running_rounds() {
        let mut round = bare_round(5);
        round.players[PlayerColor::Black].victory_points = 20;

        assert!(evaluate_round(&round, PlayerColor::Black) > 0.0);
        assert!(evaluate_round(&round, PlayerColor::Red) < 0.0);
    }

    #[test]
    fn test_terminal_winner_gets_decisive_bonus() {
        let mut round = bare_round(5);
        round.state = RoundState::Complete;
        round.players[PlayerColor::Red].victory_points = 72;

        assert!(evaluate_round(&round, PlayerColor::Red) > 900.0);
        assert!(evaluate_round(&round, PlayerColor::Black) < -900.0);
    }

    #[test]
    fn test_contested_column_leader_scores_positive() {
        let mut round = bare_round(5);
        stake_at(&mut round, 5, Suit::Hearts, 2);
        wager_at(&mut round, 5, Suit::Clubs, 5);
        wager_at(&mut round, 5, Suit::Spades, 5);
        wager_at(&mut round, 5, Suit::Hearts, 9);

        // Black's pair leads the column; the nine and the stake are at
        // risk, discounted by the control weight.
        let score = evaluate_round(&round, PlayerColor::Black);
        assert!(score > 0.0);
        assert!(evaluate_round(&round, PlayerColor::Red) < 0.0);
    }

    #[test]
    fn test_evaluation_is_antisymmetric() {
        let mut round = bare_round(5);
        stake_at(&mut round, 4, Suit::Clubs, 8);
        wager_at(&mut round, 4, Suit::Diamonds, 7);
        wager_at(&mut round, 4, Suit::Clubs, 3);
        round.players[PlayerColor::Red].victory_points = 10;

        let black = evaluate_round(&round, PlayerColor::Black);
        let red = evaluate_round(&round, PlayerColor::Red);
        assert!((black + red).abs() < 1e-9);
    }
}
