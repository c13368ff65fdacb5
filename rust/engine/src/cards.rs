use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits are categorical: they carry no game-level ordering and are never
/// used to break ties between cards. The `Ord` derive exists only so suits
/// can key ordered maps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Clovers suit (♣)
    Clovers,
    /// Diamonds suit (♦)
    Diamonds,
}

/// Represents the face of a playing card from Two through Ace.
/// Numeric values run 2..=14; Ace is highest by raw value but can anchor
/// the low end of a straight (see [`crate::sequence`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Face {
    /// Face 2
    Two = 2,
    /// Face 3
    Three,
    /// Face 4
    Four,
    /// Face 5
    Five,
    /// Face 6
    Six,
    /// Face 7
    Seven,
    /// Face 8
    Eight,
    /// Face 9
    Nine,
    /// Face 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

/// Lowest face value (Two).
pub const MIN_FACE_VALUE: u8 = 2;
/// Highest face value (Ace).
pub const MAX_FACE_VALUE: u8 = 14;

impl Face {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Face> {
        match v {
            2 => Some(Face::Two),
            3 => Some(Face::Three),
            4 => Some(Face::Four),
            5 => Some(Face::Five),
            6 => Some(Face::Six),
            7 => Some(Face::Seven),
            8 => Some(Face::Eight),
            9 => Some(Face::Nine),
            10 => Some(Face::Ten),
            11 => Some(Face::Jack),
            12 => Some(Face::Queen),
            13 => Some(Face::King),
            14 => Some(Face::Ace),
            _ => None,
        }
    }

    /// Cyclic successor: Ace wraps around to Two.
    pub fn next(self) -> Face {
        Face::from_value(self.value() + 1).unwrap_or(Face::Two)
    }

    /// Cyclic predecessor: Two wraps around to Ace.
    pub fn previous(self) -> Face {
        Face::from_value(self.value() - 1).unwrap_or(Face::Ace)
    }
}

/// Represents a single playing card with a face and suit.
///
/// Cards are immutable value objects; equality and hashing cover the full
/// (face, suit) pair. Game-level ordering is by face value ONLY, which is
/// inconsistent with `Eq` (two cards of equal face but different suit are
/// unequal), so no `Ord` impl is provided. Callers sort with
/// [`Card::value`] as an explicit key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The face of the card (Two through Ace)
    pub face: Face,
    /// The suit of the card (Spades, Hearts, Clovers, or Diamonds)
    pub suit: Suit,
}

impl Card {
    pub fn new(face: Face, suit: Suit) -> Card {
        Card { face, suit }
    }

    pub fn value(self) -> u8 {
        self.face.value()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Two => "Two",
            Face::Three => "Three",
            Face::Four => "Four",
            Face::Five => "Five",
            Face::Six => "Six",
            Face::Seven => "Seven",
            Face::Eight => "Eight",
            Face::Nine => "Nine",
            Face::Ten => "Ten",
            Face::Jack => "Jack",
            Face::Queen => "Queen",
            Face::King => "King",
            Face::Ace => "Ace",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clovers => "Clovers",
            Suit::Diamonds => "Diamonds",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Clovers, Suit::Diamonds]
}

pub fn all_faces() -> [Face; 13] {
    [
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
        Face::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &f in &all_faces() {
            v.push(Card { face: f, suit: s });
        }
    }
    v
}
