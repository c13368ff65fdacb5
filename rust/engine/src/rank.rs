//! Rank catalog: the ordered set of poker ranks and their validators.
//!
//! A rank is data: a name, a strict value, a tie-break category and a
//! conjunction of declarative [`Validator`]s interpreted by one generic
//! `matches` routine. The catalog is built once (usually via
//! [`RankCatalog::standard`]), never mutated, and passed explicitly to
//! classification and comparison so tests can inject custom rank subsets.

use crate::cards::Face;
use crate::hand::Hand;
use crate::sequence;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Faces a straight may not start on: a 5-run starting on J, Q or K would
/// wrap past the Ace.
pub const INVALID_STRAIGHT_STARTERS: [Face; 3] = [Face::Jack, Face::Queen, Face::King];

/// The faces a royal flush must contain.
pub const ROYAL_FACES: [Face; 5] = [Face::Ten, Face::Jack, Face::Queen, Face::King, Face::Ace];

/// A single declarative condition a hand must satisfy to qualify for a
/// rank.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Validator {
    /// The hand must hold exactly this many cards.
    LengthEquals(usize),
    /// For each (group size, count) pair, exactly `count` face groups of
    /// exactly `group size` cards must exist (e.g. `[(3, 1), (2, 1)]` for
    /// a full house).
    FaceFrequency(Vec<(usize, usize)>),
    /// Same shape as `FaceFrequency`, applied to suit groups (e.g.
    /// `[(5, 1)]` for a flush).
    SuitFrequency(Vec<(usize, usize)>),
    /// The faces must form an unbroken run of the hand's length under the
    /// most-frequent-starter algorithm.
    Sequence { invalid_starters: Vec<Face> },
    /// Every listed face must be present (royal flush).
    FaceSetContains(Vec<Face>),
}

impl Validator {
    pub fn matches(&self, hand: &Hand) -> bool {
        match self {
            Validator::LengthEquals(length) => hand.len() == *length,
            Validator::FaceFrequency(required) => {
                let groups = hand.groups_by_face();
                required.iter().all(|&(size, count)| {
                    groups.values().filter(|g| g.len() == size).count() == count
                })
            }
            Validator::SuitFrequency(required) => {
                let groups = hand.groups_by_suit();
                required.iter().all(|&(size, count)| {
                    groups.values().filter(|g| g.len() == size).count() == count
                })
            }
            Validator::Sequence { invalid_starters } => {
                let faces = hand.faces();
                let Some(starter) =
                    sequence::most_frequent_starter(&faces, hand.len(), invalid_starters)
                else {
                    return false;
                };
                let mut face = starter;
                for _ in 0..hand.len() {
                    if !faces.contains(&face) {
                        return false;
                    }
                    face = face.next();
                }
                true
            }
            Validator::FaceSetContains(required) => {
                let faces = hand.faces();
                required.iter().all(|face| faces.contains(face))
            }
        }
    }
}

/// How ties between two hands of this rank are broken.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TieBreak {
    /// Compare face groups pairwise in descending (size, value) order.
    FaceFrequency,
    /// Compare most-frequent sequence starters by starter precedence.
    Sequence,
    /// Compare cards pairwise after sorting descending by raw value.
    CardValue,
}

/// A named poker rank with a strict total-order value.
#[derive(Debug, Clone)]
pub struct Rank {
    name: &'static str,
    value: u8,
    tiebreak: TieBreak,
    validators: Vec<Validator>,
}

impl Rank {
    pub fn new(
        name: &'static str,
        value: u8,
        tiebreak: TieBreak,
        validators: Vec<Validator>,
    ) -> Rank {
        Rank {
            name,
            value,
            tiebreak,
            validators,
        }
    }

    /// The null rank: value 0, satisfied by nothing the catalog tests for,
    /// returned when classification falls through.
    pub fn none() -> Rank {
        Rank::new("None", 0, TieBreak::CardValue, Vec::new())
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn tiebreak(&self) -> TieBreak {
        self.tiebreak
    }

    /// True when the hand satisfies every validator of this rank.
    pub fn matches(&self, hand: &Hand) -> bool {
        self.validators.iter().all(|v| v.matches(hand))
    }
}

/// The immutable, descending-ordered set of ranks used for classification.
#[derive(Debug, Clone)]
pub struct RankCatalog {
    ranks: Vec<Rank>,
    null_rank: Rank,
}

impl RankCatalog {
    /// Builds a catalog from arbitrary ranks; they are tested in
    /// descending value order regardless of input order.
    pub fn new(mut ranks: Vec<Rank>) -> RankCatalog {
        ranks.sort_by(|a, b| b.value().cmp(&a.value()));
        RankCatalog {
            ranks,
            null_rank: Rank::none(),
        }
    }

    /// The ten standard poker ranks, High Card (1) through Royal Flush
    /// (10).
    pub fn standard() -> RankCatalog {
        let length = || Validator::LengthEquals(HAND_SIZE);
        let run = || Validator::Sequence {
            invalid_starters: INVALID_STRAIGHT_STARTERS.to_vec(),
        };
        let one_suit = || Validator::SuitFrequency(vec![(HAND_SIZE, 1)]);

        RankCatalog::new(vec![
            Rank::new("High Card", 1, TieBreak::FaceFrequency, vec![length()]),
            Rank::new(
                "Pair",
                2,
                TieBreak::FaceFrequency,
                vec![length(), Validator::FaceFrequency(vec![(2, 1)])],
            ),
            Rank::new(
                "Two Pair",
                3,
                TieBreak::FaceFrequency,
                vec![length(), Validator::FaceFrequency(vec![(2, 2)])],
            ),
            Rank::new(
                "Three of a Kind",
                4,
                TieBreak::FaceFrequency,
                vec![length(), Validator::FaceFrequency(vec![(3, 1)])],
            ),
            Rank::new("Straight", 5, TieBreak::Sequence, vec![length(), run()]),
            Rank::new(
                "Flush",
                6,
                TieBreak::CardValue,
                vec![length(), one_suit()],
            ),
            Rank::new(
                "Full House",
                7,
                TieBreak::FaceFrequency,
                vec![length(), Validator::FaceFrequency(vec![(3, 1), (2, 1)])],
            ),
            Rank::new(
                "Four of a Kind",
                8,
                TieBreak::FaceFrequency,
                vec![length(), Validator::FaceFrequency(vec![(4, 1)])],
            ),
            Rank::new(
                "Straight Flush",
                9,
                TieBreak::Sequence,
                vec![length(), run(), one_suit()],
            ),
            Rank::new(
                "Royal Flush",
                10,
                TieBreak::Sequence,
                vec![
                    length(),
                    run(),
                    one_suit(),
                    Validator::FaceSetContains(ROYAL_FACES.to_vec()),
                ],
            ),
        ])
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    pub fn null_rank(&self) -> &Rank {
        &self.null_rank
    }

    /// Tests the hand against each rank in descending value order and
    /// returns the first that matches, else the null rank. Descending
    /// order matters: a straight flush also satisfies the flush and
    /// straight validators individually.
    pub fn classify(&self, hand: &Hand) -> &Rank {
        self.ranks
            .iter()
            .find(|rank| rank.matches(hand))
            .unwrap_or(&self.null_rank)
    }
}

impl Default for RankCatalog {
    fn default() -> RankCatalog {
        RankCatalog::standard()
    }
}
