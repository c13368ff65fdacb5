//! Deal command handler: deal one hand and show what it is worth.

use crate::error::CliError;
use crate::formatters::format_cards;
use fivedraw_engine::engine::Engine;
use std::io::Write;

/// Handle the deal command.
///
/// Deals a single 5-card hand and prints the cards with the rank the hand
/// classifies to. A fixed seed makes the deal deterministic.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);

    let mut engine = Engine::new(Some(seed));
    let idx = engine.add_player("Dealer");
    engine.shuffle();
    engine.fill_hand(idx)?;

    let hand = engine.players()[idx].hand();
    writeln!(out, "Hand: {}", format_cards(hand.cards()))?;
    let rank = engine.classify(idx)?;
    writeln!(out, "Rank: {}", rank.name())?;
    Ok(())
}
