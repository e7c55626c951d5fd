use thiserror::Error;

/// Fewest cards a hand may hold before it can be evaluated.
pub const MIN_HAND_SIZE: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Malformed card token: {token:?}")]
    MalformedCardToken { token: String },
    #[error("Invalid hand size: {size} cards, minimum: {minimum}")]
    InvalidHandSize { size: usize, minimum: usize },
}
