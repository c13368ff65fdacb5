//! Hand comparison: rank value first, then rank-category tie-breaks.

use std::cmp::Ordering;

use crate::cards::{Card, Face};
use crate::hand::{self, Hand};
use crate::rank::{RankCatalog, TieBreak, HAND_SIZE, INVALID_STRAIGHT_STARTERS};
use crate::sequence;

/// Three-valued result of comparing two hands (or groups, or lengths):
/// the first operand is greater than, equal to, or lesser than the second.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Comparison {
    Greater,
    Equal,
    Lesser,
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Comparison {
        match ord {
            Ordering::Greater => Comparison::Greater,
            Ordering::Equal => Comparison::Equal,
            Ordering::Less => Comparison::Lesser,
        }
    }
}

/// Compares two hands.
///
/// The higher-classified hand wins outright; hands of equal rank dispatch
/// to the rank's tie-break category:
/// frequency ranks compare face groups in canonical descending order,
/// sequential ranks compare straight starters by precedence, and the flush
/// compares raw card values pairwise.
pub fn compare_hands(incumbent: &Hand, challenger: &Hand, catalog: &RankCatalog) -> Comparison {
    let incumbent_rank = catalog.classify(incumbent);
    let challenger_rank = catalog.classify(challenger);

    match incumbent_rank.value().cmp(&challenger_rank.value()) {
        Ordering::Greater => return Comparison::Greater,
        Ordering::Less => return Comparison::Lesser,
        Ordering::Equal => {}
    }

    match incumbent_rank.tiebreak() {
        TieBreak::FaceFrequency => compare_by_face_frequency(incumbent, challenger),
        TieBreak::Sequence => compare_by_starter(incumbent, challenger),
        TieBreak::CardValue => compare_by_value(incumbent, challenger),
    }
}

/// Compares face groups pairwise in descending (size, value) order; the
/// first differing pair decides. Exhausting all pairs falls back to the
/// group counts.
fn compare_by_face_frequency(incumbent: &Hand, challenger: &Hand) -> Comparison {
    let incumbent_groups = hand::groups_by_size_and_value(&incumbent.groups_by_face());
    let challenger_groups = hand::groups_by_size_and_value(&challenger.groups_by_face());

    for ((inc_face, inc_group), (cha_face, cha_group)) in
        incumbent_groups.iter().zip(&challenger_groups)
    {
        let result =
            compare_group_items((*inc_face, inc_group.as_slice()), (*cha_face, cha_group.as_slice()));
        if result != Comparison::Equal {
            return result;
        }
    }

    compare_length(incumbent_groups.len(), challenger_groups.len())
}

/// Compares a pair of face groups: primarily by group size, secondarily by
/// face value.
fn compare_group_items(a: (Face, &[Card]), b: (Face, &[Card])) -> Comparison {
    let (face_a, group_a) = a;
    let (face_b, group_b) = b;
    group_a
        .len()
        .cmp(&group_b.len())
        .then_with(|| face_a.value().cmp(&face_b.value()))
        .into()
}

/// Compares the hands' most-frequent sequence starters by starter
/// precedence. A hand without a starter (degenerate input) loses to one
/// with a starter.
fn compare_by_starter(incumbent: &Hand, challenger: &Hand) -> Comparison {
    let inc = sequence::most_frequent_starter(
        &incumbent.faces(),
        HAND_SIZE,
        &INVALID_STRAIGHT_STARTERS,
    );
    let cha = sequence::most_frequent_starter(
        &challenger.faces(),
        HAND_SIZE,
        &INVALID_STRAIGHT_STARTERS,
    );

    match (inc, cha) {
        (Some(a), Some(b)) => sequence::compare_starters(a, b).into(),
        (Some(_), None) => Comparison::Greater,
        (None, Some(_)) => Comparison::Lesser,
        (None, None) => Comparison::Equal,
    }
}

/// Compares card values pairwise after sorting both hands descending; the
/// first differing pair decides, exhaustion falls back to card counts.
fn compare_by_value(incumbent: &Hand, challenger: &Hand) -> Comparison {
    let mut inc: Vec<u8> = incumbent.iter().map(|c| c.value()).collect();
    let mut cha: Vec<u8> = challenger.iter().map(|c| c.value()).collect();
    inc.sort_unstable_by(|a, b| b.cmp(a));
    cha.sort_unstable_by(|a, b| b.cmp(a));

    for (a, b) in inc.iter().zip(&cha) {
        match a.cmp(b) {
            Ordering::Equal => {}
            ord => return ord.into(),
        }
    }

    compare_length(incumbent.len(), challenger.len())
}

fn compare_length(a: usize, b: usize) -> Comparison {
    a.cmp(&b).into()
}
