//! Card, hand, and evaluation formatters for terminal display.
//!
//! Pure functions turning engine values into text. Suits print as letters by
//! default (the same form the parser accepts) or as ♥ ♦ ♣ ♠ glyphs when the
//! `unicode` option is on.
//!
//! ## Example
//!
//! ```rust
//! use handrank_engine::cards::{Card, Rank, Suit};
//! use handrank_cli::formatters::format_card;
//!
//! let ten_spades = Card::new(Rank::Ten, Suit::Spades);
//! assert_eq!(format_card(&ten_spades, false), "10S");
//! assert_eq!(format_card(&ten_spades, true), "10♠");
//! ```

use handrank_engine::cards::{Card, Hand, Rank, Suit};
use handrank_engine::hand::EvaluationResult;
use serde::Serialize;

pub fn format_suit(suit: &Suit, unicode: bool) -> String {
    if unicode {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.to_string()
    }
}

/// Rank as printed in reports: 2-10, J, Q, K, A.
pub fn format_rank(rank: &Rank) -> String {
    rank.to_string()
}

pub fn format_card(card: &Card, unicode: bool) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit, unicode))
}

/// Cards in input order, space separated.
pub fn format_hand(hand: &Hand, unicode: bool) -> String {
    hand.iter()
        .map(|c| format_card(c, unicode))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space-separated ranks, or `none` for an empty list.
pub fn format_ranks(ranks: &[Rank]) -> String {
    if ranks.is_empty() {
        "none".to_string()
    } else {
        ranks.iter().map(format_rank).collect::<Vec<_>>().join(" ")
    }
}

/// Four-line text report for one evaluated hand.
///
/// ```rust
/// use handrank_engine::cards::parse_hand_str;
/// use handrank_engine::hand::evaluate;
/// use handrank_cli::formatters::format_report;
///
/// let hand = parse_hand_str("KC KH JS QD QH").unwrap();
/// let report = format_report(&hand, &evaluate(&hand), false);
/// assert!(report.contains("Category: Two Pair"));
/// assert!(report.contains("Cards Used: Q Q K K"));
/// assert!(report.contains("Kickers: J"));
/// ```
pub fn format_report(hand: &Hand, result: &EvaluationResult, unicode: bool) -> String {
    format!(
        "Input Hand: {}\nCategory: {}\nCards Used: {}\nKickers: {}\n",
        format_hand(hand, unicode),
        result.category,
        format_ranks(&result.cards_used),
        format_ranks(&result.kickers),
    )
}

/// JSON shape of a report; ranks are numeric (2-14).
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub hand: Vec<String>,
    pub category: String,
    pub cards_used: Vec<u8>,
    pub kickers: Vec<u8>,
}

impl JsonReport {
    pub fn new(hand: &Hand, result: &EvaluationResult) -> Self {
        Self {
            hand: hand.iter().map(|c| c.to_string()).collect(),
            category: result.category.to_string(),
            cards_used: result.cards_used.iter().map(|r| r.value()).collect(),
            kickers: result.kickers.iter().map(|r| r.value()).collect(),
        }
    }
}
