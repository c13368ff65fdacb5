//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface
//! output across CLI commands: error messages, warnings, and the indexed
//! card displays used during play.

use std::io::Write;

use fivedraw_engine::cards::Card;

use crate::formatters::format_card;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Display a formatted list of cards indexed from top to bottom.
pub fn display_cards(out: &mut dyn Write, cards: &[Card]) -> std::io::Result<()> {
    for (idx, card) in cards.iter().enumerate() {
        writeln!(out, "{}) {}", idx + 1, format_card(card))?;
    }
    writeln!(out)
}

/// Display a player's name, cards and current rank.
pub fn display_player(
    out: &mut dyn Write,
    name: &str,
    cards: &[Card],
    rank: &str,
) -> std::io::Result<()> {
    writeln!(out, "{}", name)?;
    display_cards(out, cards)?;
    writeln!(out, "They have a {}", rank)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivedraw_engine::cards::{Face, Suit};

    #[test]
    fn cards_are_indexed_from_one() {
        let mut out = Vec::new();
        let cards = [
            Card::new(Face::Ace, Suit::Spades),
            Card::new(Face::Two, Suit::Hearts),
        ];
        display_cards(&mut out, &cards).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("1) "));
        assert!(text.contains("2) "));
    }

    #[test]
    fn player_display_includes_rank() {
        let mut out = Vec::new();
        let cards = [Card::new(Face::Ace, Suit::Spades)];
        display_player(&mut out, "Player 1", &cards, "High Card").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Player 1"));
        assert!(text.contains("They have a High Card"));
    }
}
