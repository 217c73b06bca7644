//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search is a pure function of a cloned round: every explored branch
//! applies candidate moves to its own copy, and the live state is never
//! touched. Layers alternate between maximizing (the AI color) and
//! minimizing (the opponent); leaves are scored by the static evaluator.
//! Effort is governed by the configured depth and the difficulty-scaled
//! node budget — there is no mid-search cancellation.

use std::cmp::Ordering;
use std::time::Instant;

use super::candidates::{candidate_moves, Candidate};
use super::config::{Difficulty, SearchConfig};
use super::eval::evaluate_round;
use super::stats::SearchStats;
use super::trace::{SearchTrace, TraceNode};
use crate::core::{GameRng, PlayerColor};
use crate::round::{apply_move, Move, Round, RoundState};

/// Search context: configuration, statistics, noise stream, and the trace
/// of the last call when tracing is enabled.
pub struct Search {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
    trace: Option<SearchTrace>,
    budget: u32,
}

impl Search {
    /// Create a search context.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
            trace: None,
            budget: 0,
        }
    }

    /// Pick the best move for `ai_color`, or `None` when the round is
    /// over, it is not the AI's turn, or no candidate exists.
    pub fn best_move(&mut self, round: &Round, ai_color: PlayerColor) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();
        self.budget = self.config.node_budget();
        self.trace = None;

        if round.state == RoundState::Complete || round.active != ai_color {
            return None;
        }

        let mut candidates = candidate_moves(round, ai_color);
        if candidates.is_empty() {
            return None;
        }
        order_candidates(&mut candidates);

        let noise = self.config.difficulty.noise();
        let collecting = self.config.trace;
        let mut root_nodes: Vec<TraceNode> = Vec::new();

        let mut best: Option<(f64, Candidate)> = None;
        let mut alpha = f64::NEG_INFINITY;

        for candidate in candidates {
            let mut next = round.clone();
            if apply_move(&mut next, ai_color, &candidate.mv).is_err() {
                debug_assert!(false, "generator produced an illegal candidate");
                continue;
            }

            let mut children: Vec<TraceNode> = Vec::new();
            let mut score = self.minimax(
                &next,
                ai_color,
                self.config.depth.saturating_sub(1),
                alpha,
                f64::INFINITY,
                if collecting { Some(&mut children) } else { None },
            );
            if noise > 0.0 {
                score += self.rng.gen_signed_unit() * noise;
            }

            if collecting {
                root_nodes.push(TraceNode {
                    mv: candidate.mv.clone(),
                    score,
                    caused_cutoff: false,
                    children,
                });
            }

            let replace = match &best {
                None => true,
                Some((best_score, best_candidate)) => {
                    prefer(score, &candidate, *best_score, best_candidate)
                }
            };
            if replace {
                alpha = alpha.max(score);
                best = Some((score, candidate));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if collecting {
            self.trace = Some(SearchTrace { root: root_nodes });
        }

        best.map(|(_, candidate)| candidate.mv)
    }

    fn minimax(
        &mut self,
        round: &Round,
        ai: PlayerColor,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        mut sink: Option<&mut Vec<TraceNode>>,
    ) -> f64 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.config.depth - depth);
        self.budget = self.budget.saturating_sub(1);

        if round.state == RoundState::Complete || depth == 0 || self.budget == 0 {
            self.stats.leaves += 1;
            return evaluate_round(round, ai);
        }

        let mover = round.active;
        let maximizing = mover == ai;
        let mut candidates = candidate_moves(round, mover);
        if candidates.is_empty() {
            // No legal continuation to explore.
            self.stats.leaves += 1;
            return evaluate_round(round, ai);
        }
        order_candidates(&mut candidates);

        let collecting = sink.is_some();
        let mut value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for candidate in candidates {
            let mut next = round.clone();
            if apply_move(&mut next, mover, &candidate.mv).is_err() {
                debug_assert!(false, "generator produced an illegal candidate");
                continue;
            }

            let mut children: Vec<TraceNode> = Vec::new();
            let score = self.minimax(
                &next,
                ai,
                depth - 1,
                alpha,
                beta,
                if collecting { Some(&mut children) } else { None },
            );

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            let cutoff = beta <= alpha;
            if let Some(nodes) = sink.as_mut() {
                nodes.push(TraceNode {
                    mv: candidate.mv.clone(),
                    score,
                    caused_cutoff: cutoff,
                    children,
                });
            }
            if cutoff {
                self.stats.cutoffs += 1;
                break;
            }
        }

        value
    }

    /// Statistics from the last `best_move` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Trace of the last `best_move` call, when tracing was enabled.
    #[must_use]
    pub fn trace(&self) -> Option<&SearchTrace> {
        self.trace.as_ref()
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Deterministic move ordering: strongest combinations first, stable for
/// equal strengths.
fn order_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.strength.cmp(&a.strength));
}

/// Root preference: higher score, then more wagered cards, then lower raw
/// strength (don't over-commit cards a cheaper move would win with).
fn prefer(score: f64, candidate: &Candidate, best_score: f64, best: &Candidate) -> bool {
    if score != best_score {
        return score > best_score;
    }
    match candidate
        .mv
        .wagered_cards()
        .cmp(&best.mv.wagered_cards())
    {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => candidate.strength < best.strength,
    }
}

/// One-call entry point: search `round` for `ai_color` at the given
/// difficulty and depth.
#[must_use]
pub fn calculate_move(
    round: &Round,
    ai_color: PlayerColor,
    difficulty: Difficulty,
    depth: u32,
) -> Option<Move> {
    let config = SearchConfig::default()
        .with_difficulty(difficulty)
        .with_depth(depth);
    Search::new(config).best_move(round, ai_color)
}
