//! Input parsing and validation for interactive commands.
//!
//! The play command reads one line per draw round describing which cards
//! to discard. Parsing returns a structured [`ParseResult`] so the command
//! loop can re-prompt with a clear message on bad input.

/// Result type for parsing a discard-selection line.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Zero-based indices of the cards to discard (empty = keep all)
    Discards(Vec<usize>),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a discard-selection line into card indices.
///
/// Accepts the following input formats:
/// - "" (empty) → keep every card
/// - "1 3 5" → discard the cards at those 1-based display indices
/// - "q" or "quit" → quit the game
///
/// Indices must fall within `1..=hand_size`; duplicates collapse; at most
/// `max_discards` cards may be selected.
pub fn parse_discard_selection(input: &str, hand_size: usize, max_discards: usize) -> ParseResult {
    let input = input.trim();

    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return ParseResult::Quit;
    }
    if input.is_empty() {
        return ParseResult::Discards(Vec::new());
    }

    let mut indices: Vec<usize> = Vec::new();
    for part in input.split_whitespace() {
        match part.parse::<usize>() {
            Ok(display_idx) if (1..=hand_size).contains(&display_idx) => {
                let idx = display_idx - 1;
                if !indices.contains(&idx) {
                    indices.push(idx);
                }
            }
            Ok(display_idx) => {
                return ParseResult::Invalid(format!("No card at index {}", display_idx));
            }
            Err(_) => {
                return ParseResult::Invalid(format!("Not a card index: '{}'", part));
            }
        }
    }

    if indices.len() > max_discards {
        return ParseResult::Invalid(format!("At most {} discards allowed", max_discards));
    }

    ParseResult::Discards(indices)
}
