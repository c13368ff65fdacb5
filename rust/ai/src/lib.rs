//! # fivedraw-ai: Discard Strategies for Computer Players
//!
//! Provides discard-selection heuristics for five-card draw. Each strategy
//! looks at a hand and decides which cards are worth keeping; the
//! [`Discarder`] wrapper turns that into a concrete, capped discard list.
//!
//! ## Core Components
//!
//! - [`DiscardStrategy`] - Trait defining the keep/discard interface
//! - [`strategies`] - Frequency, flush and straight strategies
//! - [`create_strategy`] - Factory function for creating strategies by name
//! - [`random_strategy`] - Random strategy pick for computer players
//!
//! ## Quick Start
//!
//! ```rust
//! use fivedraw_ai::{create_strategy, Discarder};
//! use fivedraw_engine::cards::{Card, Face, Suit};
//! use fivedraw_engine::engine::MAX_DISCARDS;
//!
//! let discarder = Discarder::new(MAX_DISCARDS, create_strategy("frequency"));
//!
//! let cards = [
//!     Card::new(Face::King, Suit::Spades),
//!     Card::new(Face::King, Suit::Hearts),
//!     Card::new(Face::Two, Suit::Clovers),
//!     Card::new(Face::Seven, Suit::Diamonds),
//!     Card::new(Face::Nine, Suit::Spades),
//! ];
//!
//! // keeps the kings, lets the rest go
//! let discards = discarder.discards(&cards);
//! assert_eq!(discards.len(), 3);
//! ```

use fivedraw_engine::cards::Card;
use rand::Rng;

pub mod strategies;

pub use strategies::{
    Discarder, FlushStrategy, FrequencyStrategy, StraightStrategy, Threshold,
};

/// A discard-selection heuristic: given the cards a player holds, decide
/// which are worth keeping. Anything not kept is a discard candidate.
pub trait DiscardStrategy: Send + Sync {
    /// The cards worth keeping, in strategy-defined order.
    fn keepers(&self, cards: &[Card]) -> Vec<Card>;

    /// The name/identifier of this strategy.
    fn name(&self) -> &str;
}

/// Strategy names accepted by [`create_strategy`].
pub const STRATEGY_NAMES: [&str; 3] = ["frequency", "flush", "straight"];

/// Factory function to create a discard strategy by name.
///
/// # Panics
///
/// Panics if an unknown strategy name is requested. See [`STRATEGY_NAMES`].
pub fn create_strategy(kind: &str) -> Box<dyn DiscardStrategy> {
    match kind {
        "frequency" => Box::new(FrequencyStrategy::keep_pairs()),
        "flush" => Box::new(FlushStrategy),
        "straight" => Box::new(StraightStrategy::standard()),
        _ => panic!("Unknown strategy: {}", kind),
    }
}

/// Picks one of the standard strategies at random; this is how computer
/// players get their personalities at the start of a game.
pub fn random_strategy<R: Rng>(rng: &mut R) -> Box<dyn DiscardStrategy> {
    let kind = STRATEGY_NAMES[rng.random_range(0..STRATEGY_NAMES.len())];
    create_strategy(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn factory_creates_each_named_strategy() {
        for name in STRATEGY_NAMES {
            let strategy = create_strategy(name);
            assert_eq!(strategy.name(), name);
        }
    }

    #[test]
    #[should_panic(expected = "Unknown strategy")]
    fn factory_rejects_unknown_names() {
        let _ = create_strategy("bluff");
    }

    #[test]
    fn random_strategy_is_one_of_the_standard_set() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let strategy = random_strategy(&mut rng);
            assert!(STRATEGY_NAMES.contains(&strategy.name()));
        }
    }
}
