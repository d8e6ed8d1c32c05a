//! Session configuration.
//!
//! Callers configure a `DeckSession` at construction by providing a
//! `SessionConfig`:
//! - `seed`: fixed seed for reproducible sessions, or entropy
//! - `shuffle_passes`: how many Fisher-Yates passes one shuffle performs
//! - `draw_strategy`: how cards are picked out of the remaining deck
//!
//! The draw strategy is fixed for the lifetime of a session so the two
//! selection models are never mixed.

use serde::{Deserialize, Serialize};

/// Passes per shuffle. Seven riffles is the traditional tarot count.
pub const DEFAULT_SHUFFLE_PASSES: u32 = 7;

/// How the draw engine picks cards from the remaining deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawStrategy {
    /// Pick a uniformly random remaining card at each step.
    ///
    /// Selection is uniform whatever the current deck order, so a draw from
    /// an unshuffled deck is still fair.
    #[default]
    RandomIndex,

    /// Take cards from the top (front) of the deck in order.
    ///
    /// Fairness rests entirely on the preceding shuffle.
    TopOfDeck,
}

impl std::fmt::Display for DrawStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawStrategy::RandomIndex => write!(f, "random-index"),
            DrawStrategy::TopOfDeck => write!(f, "top-of-deck"),
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// RNG seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Fisher-Yates passes per shuffle (0 is treated as 1).
    #[serde(default = "default_shuffle_passes")]
    pub shuffle_passes: u32,

    /// Card selection model for draws.
    #[serde(default)]
    pub draw_strategy: DrawStrategy,
}

fn default_shuffle_passes() -> u32 {
    DEFAULT_SHUFFLE_PASSES
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_passes: DEFAULT_SHUFFLE_PASSES,
            draw_strategy: DrawStrategy::default(),
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of shuffle passes.
    #[must_use]
    pub fn with_shuffle_passes(mut self, passes: u32) -> Self {
        self.shuffle_passes = passes;
        self
    }

    /// Set the draw strategy.
    #[must_use]
    pub fn with_draw_strategy(mut self, strategy: DrawStrategy) -> Self {
        self.draw_strategy = strategy;
        self
    }

    /// Passes actually performed per shuffle.
    #[must_use]
    pub fn effective_passes(&self) -> u32 {
        self.shuffle_passes.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new();

        assert_eq!(config.seed, None);
        assert_eq!(config.shuffle_passes, 7);
        assert_eq!(config.draw_strategy, DrawStrategy::RandomIndex);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_seed(9)
            .with_shuffle_passes(1)
            .with_draw_strategy(DrawStrategy::TopOfDeck);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.shuffle_passes, 1);
        assert_eq!(config.draw_strategy, DrawStrategy::TopOfDeck);
    }

    #[test]
    fn test_zero_passes_still_shuffles_once() {
        let config = SessionConfig::new().with_shuffle_passes(0);
        assert_eq!(config.effective_passes(), 1);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();

        assert_eq!(config.seed, Some(3));
        assert_eq!(config.shuffle_passes, DEFAULT_SHUFFLE_PASSES);
        assert_eq!(config.draw_strategy, DrawStrategy::RandomIndex);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(DrawStrategy::RandomIndex.to_string(), "random-index");
        assert_eq!(format!("{}", DrawStrategy::TopOfDeck), "top-of-deck");
    }
}
