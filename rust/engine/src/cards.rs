use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{EvalError, MIN_HAND_SIZE};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits only matter for flush detection; once a category is fixed they are dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Dense index used by the flush detector to bucket cards by suit.
    pub(crate) fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the numeric value used for straights and tie-breaks; Ace is always high.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
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

impl Rank {
    /// Numeric value in `2..=14`.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    fn from_token(s: &str) -> Option<Rank> {
        match s {
            "J" | "j" => Some(Rank::Jack),
            "Q" | "q" => Some(Rank::Queen),
            "K" | "k" => Some(Rank::King),
            "A" | "a" => Some(Rank::Ace),
            "10" => Some(Rank::Ten),
            _ if s.len() == 1 => s.parse::<u8>().ok().filter(|v| *v >= 2).and_then(Rank::from_u8),
            _ => None,
        }
    }
}

/// Represents a single playing card with a suit and rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { suit, rank }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            Rank::Ace => f.write_str("A"),
            r => write!(f, "{}", r.value()),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        };
        f.write_str(c)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses a `<rank><suit>` token such as `"QH"` or `"10S"`.
///
/// ```rust
/// use handrank_engine::cards::{Card, Rank, Suit};
///
/// let card: Card = "10S".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Spades));
/// assert!("1S".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = EvalError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let malformed = || EvalError::MalformedCardToken {
            token: token.to_string(),
        };
        if !token.is_ascii() || !(2..=3).contains(&token.len()) {
            return Err(malformed());
        }
        let (rank_part, suit_part) = token.split_at(token.len() - 1);
        let rank = Rank::from_token(rank_part).ok_or_else(malformed)?;
        let suit = suit_part
            .chars()
            .next()
            .and_then(Suit::from_symbol)
            .ok_or_else(malformed)?;
        Ok(Card { suit, rank })
    }
}

/// A sequence of at least [`MIN_HAND_SIZE`] cards, kept in the order it was built from.
///
/// Duplicate cards are accepted; the evaluator does not check deck integrity.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Result<Hand, EvalError> {
        if cards.len() < MIN_HAND_SIZE {
            return Err(EvalError::InvalidHandSize {
                size: cards.len(),
                minimum: MIN_HAND_SIZE,
            });
        }
        Ok(Hand { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed hand; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ranks of every card, ascending, in a freshly allocated vector.
    pub fn ranks_sorted(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.cards.iter().map(|c| c.rank).collect();
        ranks.sort_unstable();
        ranks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = EvalError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
            first = false;
        }
        Ok(())
    }
}

/// Parses every token and validates the hand size.
pub fn parse_hand<S: AsRef<str>>(tokens: &[S]) -> Result<Hand, EvalError> {
    let cards = tokens
        .iter()
        .map(|t| t.as_ref().parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;
    Hand::new(cards)
}

/// Parses a hand written as one string, tokens separated by whitespace or commas.
pub fn parse_hand_str(s: &str) -> Result<Hand, EvalError> {
    let tokens: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    parse_hand(&tokens)
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}
