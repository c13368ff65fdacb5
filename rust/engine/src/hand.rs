//! Hand container and frequency analysis.
//!
//! A [`Hand`] is an ordered, mutable multiset of cards: order reflects the
//! dealing/insertion history, never a rank. The grouping helpers here
//! underlie both rank classification ([`crate::rank`]) and tie-breaking
//! ([`crate::compare`]), as well as the discard heuristics built on top of
//! this crate.

use std::collections::BTreeMap;

use crate::cards::{Card, Face, Suit};

/// An ordered, mutable collection of cards.
///
/// Duplicates are representable (a standard deck never produces them) and
/// no ordering invariant is maintained; cards sit in insertion order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first occurrence of `card`. Returns whether a card was
    /// removed.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn faces(&self) -> Vec<Face> {
        self.cards.iter().map(|c| c.face).collect()
    }

    pub fn suits(&self) -> Vec<Suit> {
        self.cards.iter().map(|c| c.suit).collect()
    }

    pub fn cards_with_face(&self, face: Face) -> Vec<Card> {
        self.cards.iter().copied().filter(|c| c.face == face).collect()
    }

    pub fn cards_with_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards.iter().copied().filter(|c| c.suit == suit).collect()
    }

    /// Partitions the hand by face. Cards keep their original order within
    /// each group.
    pub fn groups_by_face(&self) -> BTreeMap<Face, Vec<Card>> {
        let mut groups: BTreeMap<Face, Vec<Card>> = BTreeMap::new();
        for &card in &self.cards {
            groups.entry(card.face).or_default().push(card);
        }
        groups
    }

    /// Partitions the hand by suit. Cards keep their original order within
    /// each group.
    pub fn groups_by_suit(&self) -> BTreeMap<Suit, Vec<Card>> {
        let mut groups: BTreeMap<Suit, Vec<Card>> = BTreeMap::new();
        for &card in &self.cards {
            groups.entry(card.suit).or_default().push(card);
        }
        groups
    }

    /// Faces whose group size equals `frequency`.
    pub fn faces_with_frequency(&self, frequency: usize) -> Vec<Face> {
        self.groups_by_face()
            .into_iter()
            .filter(|(_, group)| group.len() == frequency)
            .map(|(face, _)| face)
            .collect()
    }

    /// Suits whose group size equals `frequency`.
    pub fn suits_with_frequency(&self, frequency: usize) -> Vec<Suit> {
        self.groups_by_suit()
            .into_iter()
            .filter(|(_, group)| group.len() == frequency)
            .map(|(suit, _)| suit)
            .collect()
    }

    /// Size of the largest face group; 0 for an empty hand.
    pub fn max_face_frequency(&self) -> usize {
        self.groups_by_face().values().map(Vec::len).max().unwrap_or(0)
    }

    /// Size of the smallest face group; 0 for an empty hand.
    pub fn min_face_frequency(&self) -> usize {
        self.groups_by_face().values().map(Vec::len).min().unwrap_or(0)
    }

    /// Size of the largest suit group; 0 for an empty hand.
    pub fn max_suit_frequency(&self) -> usize {
        self.groups_by_suit().values().map(Vec::len).max().unwrap_or(0)
    }

    /// Size of the smallest suit group; 0 for an empty hand.
    pub fn min_suit_frequency(&self) -> usize {
        self.groups_by_suit().values().map(Vec::len).min().unwrap_or(0)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Hand {
        Hand { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Hand {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Orders (key, group) pairs descending by group size, then by the value of
/// the highest card in the group.
///
/// This is the canonical ordering behind face-frequency tie-breaks: equal
/// sizes resolve toward the higher face. For a face group the highest card
/// value equals the key's own value; for suit groups it is the strongest
/// card of that suit.
pub fn groups_by_size_and_value<K: Copy + Ord>(
    groups: &BTreeMap<K, Vec<Card>>,
) -> Vec<(K, Vec<Card>)> {
    let mut items: Vec<(K, Vec<Card>)> =
        groups.iter().map(|(k, v)| (*k, v.clone())).collect();
    items.sort_by(|a, b| {
        b.1.len()
            .cmp(&a.1.len())
            .then_with(|| highest_value(&b.1).cmp(&highest_value(&a.1)))
    });
    items
}

fn highest_value(cards: &[Card]) -> u8 {
    cards.iter().map(|c| c.value()).max().unwrap_or(0)
}

/// Scans `cards` in order and returns at most one card per requested face,
/// first occurrence wins.
pub fn first_cards_with_faces(cards: &[Card], faces: &[Face]) -> Vec<Card> {
    let mut first = Vec::new();
    let mut used: Vec<Face> = Vec::new();
    for &card in cards {
        if faces.contains(&card.face) && !used.contains(&card.face) {
            first.push(card);
            used.push(card.face);
        }
    }
    first
}

/// Scans `cards` in order and returns at most one card per requested suit,
/// first occurrence wins.
pub fn first_cards_with_suits(cards: &[Card], suits: &[Suit]) -> Vec<Card> {
    let mut first = Vec::new();
    let mut used: Vec<Suit> = Vec::new();
    for &card in cards {
        if suits.contains(&card.suit) && !used.contains(&card.suit) {
            first.push(card);
            used.push(card.suit);
        }
    }
    first
}
