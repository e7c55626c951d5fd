//! # handrank-engine: Poker Hand Classification Core
//!
//! Classifies a hand of five or more cards into one of ten categories and
//! provides a total order over evaluated hands, kickers included.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card, Hand) and token parsing
//! - [`straight`] - Highest five-rank run in a rank sequence
//! - [`flush`] - Straight flush, royal flush and plain flush detection
//! - [`multiples`] - Quads, full house, trips, two pair and pair detection
//! - [`hand`] - Category precedence and the [`hand::EvaluationResult`] record
//! - [`compare`] - Ordering of results and ranking of many hands
//! - [`errors`] - Error types for parsing and hand validation
//!
//! ## Quick Start
//!
//! ```rust
//! use handrank_engine::cards::{Card, Hand, Rank, Suit};
//! use handrank_engine::hand::{evaluate, Category};
//!
//! let hand = Hand::new(vec![
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ])
//! .unwrap();
//!
//! assert_eq!(evaluate(&hand).category, Category::RoyalFlush);
//! ```
//!
//! ## Ranking Hands
//!
//! ```rust
//! use handrank_engine::cards::parse_hand_str;
//! use handrank_engine::compare::rank_all;
//!
//! let hands = vec![
//!     parse_hand_str("KC KH QS QD 5H").unwrap(),
//!     parse_hand_str("2H 4H 6H 5H 7H").unwrap(),
//!     parse_hand_str("4H 6D QH JC 5C").unwrap(),
//! ];
//! let ranked = rank_all(hands.clone());
//! assert_eq!(ranked.last(), Some(&hands[1]));
//! ```

pub mod cards;
pub mod compare;
pub mod errors;
pub mod flush;
pub mod hand;
pub mod multiples;
pub mod straight;

pub use cards::{Card, Hand, Rank, Suit};
pub use compare::{best_hand, compare_hands, compare_results, rank_all};
pub use errors::EvalError;
pub use hand::{evaluate, Category, EvaluationResult};
