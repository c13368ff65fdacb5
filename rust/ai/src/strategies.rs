//! The standard discard strategies for computer players.
//!
//! Each strategy chases one rank family: `FrequencyStrategy` builds pairs
//! and better, `FlushStrategy` chases a single suit, `StraightStrategy`
//! chases the densest run of faces. They all delegate the actual analysis
//! to the engine's grouping and sequence utilities.

use std::fmt;

use fivedraw_engine::cards::{Card, Face};
use fivedraw_engine::hand::{self, Hand};
use fivedraw_engine::rank::{HAND_SIZE, INVALID_STRAIGHT_STARTERS};
use fivedraw_engine::sequence;

use crate::DiscardStrategy;

/// Smallest face group worth holding on to by default.
pub const MIN_FREQUENCY_TO_KEEP: usize = 2;

/// A group-size threshold that is either a constant or computed from the
/// cards at hand, resolved explicitly at each call site.
#[derive(Debug, Clone, Copy)]
pub enum Threshold {
    Fixed(usize),
    Computed(fn(&[Card]) -> usize),
}

impl Threshold {
    pub fn resolve(&self, cards: &[Card]) -> usize {
        match self {
            Threshold::Fixed(n) => *n,
            Threshold::Computed(f) => f(cards),
        }
    }
}

/// Keeps face groups at or above a size threshold, walking the groups in
/// canonical descending (size, value) order and stopping at the first group
/// that falls short.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyStrategy {
    threshold: Threshold,
}

impl FrequencyStrategy {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    /// The default computer player: keep pairs and better.
    pub fn keep_pairs() -> Self {
        Self::new(Threshold::Fixed(MIN_FREQUENCY_TO_KEEP))
    }
}

impl DiscardStrategy for FrequencyStrategy {
    fn keepers(&self, cards: &[Card]) -> Vec<Card> {
        let hand: Hand = cards.iter().copied().collect();
        let min = self.threshold.resolve(cards);
        let mut keep = Vec::new();
        for (_, group) in hand::groups_by_size_and_value(&hand.groups_by_face()) {
            if group.len() >= min {
                keep.extend(group);
            } else {
                break;
            }
        }
        keep
    }

    fn name(&self) -> &str {
        "frequency"
    }
}

/// Keeps the largest suit group.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlushStrategy;

impl DiscardStrategy for FlushStrategy {
    fn keepers(&self, cards: &[Card]) -> Vec<Card> {
        let hand: Hand = cards.iter().copied().collect();
        hand::groups_by_size_and_value(&hand.groups_by_suit())
            .into_iter()
            .next()
            .map(|(_, group)| group)
            .unwrap_or_default()
    }

    fn name(&self) -> &str {
        "flush"
    }
}

/// Keeps one card per face of the sequence window covering the most of the
/// hand's faces.
#[derive(Debug, Clone)]
pub struct StraightStrategy {
    sequence_length: usize,
    invalid_starters: Vec<Face>,
}

impl StraightStrategy {
    pub fn new(sequence_length: usize, invalid_starters: Vec<Face>) -> Self {
        Self {
            sequence_length,
            invalid_starters,
        }
    }

    /// Standard 5-card straights with the usual J/Q/K starter exclusion.
    pub fn standard() -> Self {
        Self::new(HAND_SIZE, INVALID_STRAIGHT_STARTERS.to_vec())
    }
}

impl DiscardStrategy for StraightStrategy {
    fn keepers(&self, cards: &[Card]) -> Vec<Card> {
        let hand: Hand = cards.iter().copied().collect();
        let targets = sequence::sequence_including_most_faces(
            &hand.faces(),
            self.sequence_length,
            &self.invalid_starters,
        );
        hand::first_cards_with_faces(cards, &targets)
    }

    fn name(&self) -> &str {
        "straight"
    }
}

/// Wraps a strategy with the table's discard cap and derives the actual
/// discard list: whatever the strategy does not keep, in dealt order,
/// truncated to the cap.
pub struct Discarder {
    max_discards: usize,
    strategy: Box<dyn DiscardStrategy>,
}

impl Discarder {
    pub fn new(max_discards: usize, strategy: Box<dyn DiscardStrategy>) -> Self {
        Self {
            max_discards,
            strategy,
        }
    }

    pub fn max_discards(&self) -> usize {
        self.max_discards
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// The cards the strategy wants, chosen from a strongest-first view of
    /// the hand.
    pub fn targets(&self, cards: &[Card]) -> Vec<Card> {
        let mut sorted: Vec<Card> = cards.to_vec();
        sorted.sort_by(|a, b| b.value().cmp(&a.value()));
        self.strategy.keepers(&sorted)
    }

    /// The cards to let go: everything the strategy does not keep, in
    /// dealt order, capped at `max_discards`.
    pub fn discards(&self, cards: &[Card]) -> Vec<Card> {
        let keep = self.strategy.keepers(cards);
        cards
            .iter()
            .copied()
            .filter(|card| !keep.contains(card))
            .take(self.max_discards)
            .collect()
    }
}

impl fmt::Debug for Discarder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discarder")
            .field("max_discards", &self.max_discards)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
