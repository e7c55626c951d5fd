use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, Hand, Rank};
use crate::errors::EvalError;
use crate::flush::detect_flush;
use crate::multiples::detect_multiples;
use crate::straight::detect_straight;

/// Hand strength classification, weakest first.
///
/// The ordinal is only used to order results of different categories; which
/// category a hand lands in is decided by [`evaluate`]'s precedence table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Number of rank slots the category's combination occupies in `cards_used`.
    pub fn arity(self) -> usize {
        match self {
            Category::HighCard => 0,
            Category::OnePair => 2,
            Category::ThreeOfAKind => 3,
            Category::TwoPair | Category::FourOfAKind => 4,
            Category::Straight
            | Category::Flush
            | Category::FullHouse
            | Category::StraightFlush
            | Category::RoyalFlush => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Outcome of evaluating one hand.
///
/// Both rank lists are ascending. `cards_used` holds the ranks forming the
/// combination; `kickers` holds every remaining rank and is empty for
/// straights, flushes and full houses.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub category: Category,
    pub cards_used: Vec<Rank>,
    pub kickers: Vec<Rank>,
}

impl EvaluationResult {
    pub(crate) fn new(category: Category, cards_used: Vec<Rank>, kickers: Vec<Rank>) -> Self {
        Self {
            category,
            cards_used,
            kickers,
        }
    }

    /// Highest rank of the combination, if the category has one.
    pub fn high_card(&self) -> Option<Rank> {
        self.cards_used.last().copied()
    }
}

/// Classifies a hand and collects its tie-break ranks.
///
/// Each detector runs on its own; the first matching row of this table wins:
///
/// 1. straight flush / royal flush from the flush detector
/// 2. four of a kind / full house from the multiplicity detector
/// 3. plain flush
/// 4. straight
/// 5. whatever the multiplicity detector found
///
/// ```rust
/// use handrank_engine::cards::parse_hand_str;
/// use handrank_engine::hand::{evaluate, Category};
///
/// let hand = parse_hand_str("9C 10D JH QS KH").unwrap();
/// let result = evaluate(&hand);
/// assert_eq!(result.category, Category::Straight);
/// assert_eq!(result.high_card().map(|r| r.value()), Some(13));
/// ```
pub fn evaluate(hand: &Hand) -> EvaluationResult {
    let ranks = hand.ranks_sorted();

    let straight = detect_straight(&ranks);
    let flush = detect_flush(hand.cards());
    let multiples = detect_multiples(&ranks);
    trace!(
        straight = straight.is_some(),
        flush = ?flush.as_ref().map(|r| r.category),
        multiples = ?multiples.category,
        "detectors finished"
    );

    let result = match (flush, straight) {
        (Some(f), _) if matches!(f.category, Category::RoyalFlush | Category::StraightFlush) => f,
        _ if matches!(
            multiples.category,
            Category::FourOfAKind | Category::FullHouse
        ) =>
        {
            multiples
        }
        (Some(f), _) => f,
        (None, Some(s)) => s,
        (None, None) => multiples,
    };

    debug!(cards = hand.len(), category = %result.category, "evaluated hand");
    result
}

/// Validates the hand size and evaluates.
pub fn evaluate_cards(cards: &[Card]) -> Result<EvaluationResult, EvalError> {
    let hand = Hand::new(cards.to_vec())?;
    Ok(evaluate(&hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_hand_str;

    fn eval(s: &str) -> EvaluationResult {
        evaluate(&parse_hand_str(s).unwrap())
    }

    fn ranks(v: &[u8]) -> Vec<Rank> {
        v.iter().map(|&r| Rank::from_u8(r).unwrap()).collect()
    }

    #[test]
    fn category_order_is_ascending() {
        for pair in Category::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn arity_matches_cards_used_len() {
        for s in [
            "4H 6D QH JC 5C",
            "4H 6D KH KC 5C",
            "KC KH JS QD QH",
            "JC 10H JS JD QH",
            "9C 10H KS JD QH",
            "2H 4H 6H 5H 7H",
            "3D 9H 3S 3H 9D",
            "7D 8H 7S 7H 7C",
            "8C 4C 6C 5C 7C",
            "KS AS JS 10S QS",
        ] {
            let r = eval(s);
            assert_eq!(r.cards_used.len(), r.category.arity(), "{}", s);
        }
    }

    #[test]
    fn straight_flush_beats_quads_in_same_hand() {
        let r = eval("5H 6H 7H 8H 9H 9C 9D 9S");
        assert_eq!(r.category, Category::StraightFlush);
        assert_eq!(r.cards_used, ranks(&[5, 6, 7, 8, 9]));
        assert!(r.kickers.is_empty());
    }

    #[test]
    fn full_house_beats_flush_in_same_hand() {
        let r = eval("2H 5H 9H JH KH KC KD 2S");
        assert_eq!(r.category, Category::FullHouse);
        assert_eq!(r.cards_used, ranks(&[2, 2, 13, 13, 13]));
    }

    #[test]
    fn flush_beats_straight_in_same_hand() {
        let r = eval("2H 5H 9H JH KH 10C QD");
        assert_eq!(r.category, Category::Flush);
        assert_eq!(r.cards_used, ranks(&[2, 5, 9, 11, 13]));
    }

    #[test]
    fn straight_beats_trips_in_same_hand() {
        let r = eval("5C 6D 7H 8S 9C 9D 9H");
        assert_eq!(r.category, Category::Straight);
        assert!(r.kickers.is_empty());
    }

    #[test]
    fn evaluate_cards_rejects_short_hands() {
        let hand = parse_hand_str("2C 3C 4C 5C 6C").unwrap();
        let err = evaluate_cards(&hand.cards()[..4]).unwrap_err();
        assert_eq!(
            err,
            EvalError::InvalidHandSize {
                size: 4,
                minimum: 5
            }
        );
        assert_eq!(
            evaluate_cards(hand.cards()).unwrap().category,
            Category::StraightFlush
        );
    }
}
