use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Card not in hand: {0}")]
    CardNotInHand(Card),
    #[error("Too many discards: {requested}, maximum: {max}")]
    TooManyDiscards { requested: usize, max: usize },
    #[error("No players at the table")]
    NoPlayers,
    #[error("No player with index {0}")]
    UnknownPlayer(usize),
}
