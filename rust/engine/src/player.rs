use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;

/// A player at the table: a name and the cards currently held.
/// Hands hold no identity beyond their current contents; membership
/// changes as cards are dealt, discarded and drawn.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn add_cards(&mut self, cards: &[Card]) {
        for &card in cards {
            self.hand.push(card);
        }
    }

    pub fn remove_card(&mut self, card: Card) -> Result<(), GameError> {
        if self.hand.remove(card) {
            Ok(())
        } else {
            Err(GameError::CardNotInHand(card))
        }
    }

    pub fn clear_cards(&mut self) {
        self.hand.clear();
    }
}
