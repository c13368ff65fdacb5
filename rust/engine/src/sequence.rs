//! Sequence (straight) analysis.
//!
//! Straights are ranked by their STARTER (the lowest face of the run)
//! under a precedence that is distinct from raw face value: Ace sits below
//! Two, so A-2-3-4-5 is the weakest straight while 10-J-Q-K-A is the
//! strongest. Raw value ordering ([`Face::value`]) and starter precedence
//! ([`starter_precedence`]) coexist and must not be conflated; mixing them
//! silently breaks ace-low straight recognition.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::cards::Face;

/// Ordering key for sequence starters: Ace maps below Two, every other
/// face keeps its natural value.
pub fn starter_precedence(face: Face) -> u8 {
    match face {
        Face::Ace => Face::Two.value() - 1,
        _ => face.value(),
    }
}

/// Compares two starters by precedence (least A, 2, 3, ..., Q, K greatest).
pub fn compare_starters(a: Face, b: Face) -> Ordering {
    starter_precedence(a).cmp(&starter_precedence(b))
}

/// The starter with the greatest precedence, `None` for empty input.
pub fn max_starter<I: IntoIterator<Item = Face>>(starters: I) -> Option<Face> {
    starters.into_iter().max_by(|a, b| compare_starters(*a, *b))
}

/// The faces of the `length`-long sequence beginning at `starter`, walking
/// forward through the cyclic face order.
pub fn sequence_of_starter(starter: Face, length: usize) -> Vec<Face> {
    let mut sequence = Vec::with_capacity(length);
    let mut face = starter;
    for _ in 0..length {
        sequence.push(face);
        face = face.next();
    }
    sequence
}

/// Starters whose `length`-long sequence would include `face`.
///
/// Walks backward `length` times through the cyclic face order, skipping
/// faces in `invalid`, stopping early once a starter repeats (only possible
/// when `length` reaches the full face cycle).
pub fn starters_including_face(face: Face, length: usize, invalid: &[Face]) -> BTreeSet<Face> {
    let mut starters = BTreeSet::new();
    let mut starter = face;
    for _ in 0..length {
        if starters.contains(&starter) {
            break;
        }
        if !invalid.contains(&starter) {
            starters.insert(starter);
        }
        starter = starter.previous();
    }
    starters
}

/// For the DISTINCT faces in `faces`, tallies how many of them each
/// candidate starter's `length`-long sequence would cover.
pub fn starter_tallies(faces: &[Face], length: usize, invalid: &[Face]) -> BTreeMap<Face, usize> {
    let distinct: BTreeSet<Face> = faces.iter().copied().collect();
    let mut tallies = BTreeMap::new();
    for face in distinct {
        for starter in starters_including_face(face, length, invalid) {
            *tallies.entry(starter).or_insert(0) += 1;
        }
    }
    tallies
}

/// The starter whose sequence covers the most of the given faces; ties
/// resolve toward the greatest starter precedence. `None` for empty input.
pub fn most_frequent_starter(faces: &[Face], length: usize, invalid: &[Face]) -> Option<Face> {
    let tallies = starter_tallies(faces, length, invalid);
    let best = tallies.values().copied().max()?;
    max_starter(
        tallies
            .iter()
            .filter(|(_, &count)| count == best)
            .map(|(&face, _)| face),
    )
}

/// The `length`-long sequence covering the most of the given faces; empty
/// when no starter exists.
pub fn sequence_including_most_faces(faces: &[Face], length: usize, invalid: &[Face]) -> Vec<Face> {
    match most_frequent_starter(faces, length, invalid) {
        Some(starter) => sequence_of_starter(starter, length),
        None => Vec::new(),
    }
}
