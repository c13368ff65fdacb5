use crate::cards::Card;
use crate::compare::{compare_hands, Comparison};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::Player;
use crate::rank::{Rank, RankCatalog, HAND_SIZE};

/// Draw rounds per game: each player discards and redraws this many times.
pub const DRAW_ROUNDS: u32 = 2;

/// Maximum cards a player may discard per draw round.
pub const MAX_DISCARDS: usize = 3;

/// Orchestrates a game of five-card draw: owns the deck, the players and
/// the rank catalog, and runs the deal/discard/draw cycle.
///
/// # Examples
///
/// ```
/// use fivedraw_engine::engine::Engine;
///
/// let mut engine = Engine::new(Some(42));
/// engine.add_player("Player 1");
/// engine.add_player("Player 2");
/// engine.shuffle();
/// engine.fill_hands().expect("two players fit in one deck");
///
/// let rank = engine.classify(0).expect("player 0 exists");
/// assert!(rank.value() >= 1);
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    players: Vec<Player>,
    catalog: RankCatalog,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_catalog(seed, RankCatalog::standard())
    }

    pub fn with_catalog(seed: Option<u64>, catalog: RankCatalog) -> Self {
        let seed = seed.unwrap_or(0xF1_5ED4A8);
        Self {
            deck: Deck::new_with_seed(seed),
            players: Vec::new(),
            catalog,
        }
    }

    /// Seats a new player and returns their index.
    pub fn add_player(&mut self, name: impl Into<String>) -> usize {
        self.players.push(Player::new(name));
        self.players.len() - 1
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player(&self, idx: usize) -> Result<&Player, GameError> {
        self.players.get(idx).ok_or(GameError::UnknownPlayer(idx))
    }

    pub fn catalog(&self) -> &RankCatalog {
        &self.catalog
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle();
    }

    /// Deals until the player holds [`HAND_SIZE`] cards.
    pub fn fill_hand(&mut self, idx: usize) -> Result<(), GameError> {
        let player = self
            .players
            .get_mut(idx)
            .ok_or(GameError::UnknownPlayer(idx))?;
        while player.hand().len() < HAND_SIZE {
            let card = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
            player.add_card(card);
        }
        Ok(())
    }

    pub fn fill_hands(&mut self) -> Result<(), GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        for idx in 0..self.players.len() {
            self.fill_hand(idx)?;
        }
        Ok(())
    }

    /// Removes the given cards from the player's hand. Every card must be
    /// held by the player, and at most [`MAX_DISCARDS`] may go at once.
    /// Returns the number of cards discarded.
    pub fn apply_discards(&mut self, idx: usize, discards: &[Card]) -> Result<usize, GameError> {
        if discards.len() > MAX_DISCARDS {
            return Err(GameError::TooManyDiscards {
                requested: discards.len(),
                max: MAX_DISCARDS,
            });
        }
        let player = self
            .players
            .get_mut(idx)
            .ok_or(GameError::UnknownPlayer(idx))?;
        for &card in discards {
            player.remove_card(card)?;
        }
        Ok(discards.len())
    }

    /// Classifies the player's current hand against the catalog.
    pub fn classify(&self, idx: usize) -> Result<&Rank, GameError> {
        let player = self.players.get(idx).ok_or(GameError::UnknownPlayer(idx))?;
        Ok(self.catalog.classify(player.hand()))
    }

    /// Indices of the winning players; ties produce multiple winners.
    pub fn find_winners(&self) -> Vec<usize> {
        if self.players.is_empty() {
            return Vec::new();
        }

        let mut key_incumbent = 0;
        let mut incumbents = vec![0];

        for (idx, challenger) in self.players.iter().enumerate().skip(1) {
            match compare_hands(
                self.players[key_incumbent].hand(),
                challenger.hand(),
                &self.catalog,
            ) {
                Comparison::Equal => incumbents.push(idx),
                Comparison::Lesser => {
                    key_incumbent = idx;
                    incumbents = vec![idx];
                }
                Comparison::Greater => {}
            }
        }

        incumbents
    }

    /// Clears every hand and reshuffles for the next game.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.clear_cards();
        }
        self.deck.shuffle();
    }
}
