//! Search configuration and difficulty scaling.
//!
//! All knobs are explicit values handed to the search; nothing is read
//! from ambient state.

use serde::{Deserialize, Serialize};

/// AI difficulty levels.
///
/// Each level applies a fixed multiplier to the base node budget and an
/// amplitude of noise to root scores — low levels search less and blunder
/// more, `Nightmare` searches the full budget exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Novice,
    Apprentice,
    Veteran,
    Master,
    Nightmare,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Novice,
        Difficulty::Apprentice,
        Difficulty::Veteran,
        Difficulty::Master,
        Difficulty::Nightmare,
    ];

    /// Node-budget multiplier over [`SearchConfig::base_iterations`].
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Difficulty::Novice => 1,
            Difficulty::Apprentice => 2,
            Difficulty::Veteran => 4,
            Difficulty::Master => 8,
            Difficulty::Nightmare => 16,
        }
    }

    /// Amplitude of the uniform noise mixed into root scores.
    #[must_use]
    pub const fn noise(self) -> f64 {
        match self {
            Difficulty::Novice => 8.0,
            Difficulty::Apprentice => 4.0,
            Difficulty::Veteran => 2.0,
            Difficulty::Master => 0.5,
            Difficulty::Nightmare => 0.0,
        }
    }
}

/// Search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum plies explored from the root.
    pub depth: u32,

    pub difficulty: Difficulty,

    /// Base node budget, scaled by the difficulty multiplier.
    pub base_iterations: u32,

    /// Seed for root noise. Same seed, same blunders.
    pub seed: u64,

    /// Record a [`super::SearchTrace`] while searching.
    pub trace: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            difficulty: Difficulty::Veteran,
            base_iterations: 1_500,
            seed: 42,
            trace: false,
        }
    }
}

impl SearchConfig {
    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the difficulty level.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the noise seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable trace recording.
    #[must_use]
    pub fn with_trace(mut self) -> Self {
        self.trace = true;
        self
    }

    /// Total node budget for one search call.
    #[must_use]
    pub fn node_budget(&self) -> u32 {
        self.base_iterations.saturating_mul(self.difficulty.multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_scales_budget() {
        let budgets: Vec<u32> = Difficulty::ALL
            .iter()
            .map(|&d| SearchConfig::default().with_difficulty(d).node_budget())
            .collect();

        assert!(budgets.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(budgets[0], 1_500);
        assert_eq!(budgets[4], 24_000);
    }

    #[test]
    fn test_noise_shrinks_with_difficulty() {
        let noise: Vec<f64> = Difficulty::ALL.iter().map(|d| d.noise()).collect();
        assert!(noise.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(noise[4], 0.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(5)
            .with_difficulty(Difficulty::Nightmare)
            .with_seed(123)
            .with_trace();

        assert_eq!(config.depth, 5);
        assert_eq!(config.difficulty, Difficulty::Nightmare);
        assert_eq!(config.seed, 123);
        assert!(config.trace);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
