//! Card and hand formatters for terminal display.
//!
//! Pure functions turning cards into short terminal strings. Suit symbols
//! use Unicode with an ASCII fallback for terminals that cannot render
//! them.

use fivedraw_engine::cards::{Card, Face, Suit};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a suit as a Unicode symbol (♠ ♥ ♣ ♦) with ASCII fallback
/// (s h c d).
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Clovers => "♣",
            Suit::Diamonds => "♦",
        }
        .to_string()
    } else {
        match suit {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Clovers => "c",
            Suit::Diamonds => "d",
        }
        .to_string()
    }
}

/// Format a face compactly: numbered faces as digits, court cards and the
/// ace as letters.
pub fn format_face(face: &Face) -> String {
    match face {
        Face::Jack => "J".to_string(),
        Face::Queen => "Q".to_string(),
        Face::King => "K".to_string(),
        Face::Ace => "A".to_string(),
        other => other.value().to_string(),
    }
}

/// Format a card compactly, e.g. "A♠" or "10♥".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_face(&card.face), format_suit(&card.suit))
}

/// Format a list of cards, e.g. "[A♠ K♥ 9♦]".
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivedraw_engine::cards::{Face as F, Suit as S};

    #[test]
    fn faces_format_compactly() {
        assert_eq!(format_face(&F::Two), "2");
        assert_eq!(format_face(&F::Ten), "10");
        assert_eq!(format_face(&F::Queen), "Q");
        assert_eq!(format_face(&F::Ace), "A");
    }

    #[test]
    fn card_combines_face_and_suit() {
        let card = Card::new(F::Ace, S::Spades);
        let formatted = format_card(&card);
        assert!(formatted == "A♠" || formatted == "As");
    }

    #[test]
    fn card_list_is_bracketed() {
        let cards = [Card::new(F::Ace, S::Spades), Card::new(F::Two, S::Hearts)];
        let formatted = format_cards(&cards);
        assert!(formatted.starts_with("[A"));
        assert!(formatted.ends_with(']'));
    }
}
