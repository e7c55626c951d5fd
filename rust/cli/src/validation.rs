//! Parsing of hands supplied on the command line or in a hands file.
//!
//! A hand is either a JSON array of card tokens (`["KS", "AS", "JS", "10S", "QS"]`)
//! or the tokens themselves separated by whitespace or commas. In a hands file
//! each non-blank line that does not start with `#` is one hand.

use handrank_engine::cards::{Hand, parse_hand, parse_hand_str};
use handrank_engine::EvalError;

use crate::error::{BatchValidationError, CliError};

/// Parse one hand written in either supported notation.
///
/// # Example
///
/// ```rust
/// # use handrank_cli::validation::parse_hand_spec;
/// let a = parse_hand_spec(r#"["KS", "AS", "JS", "10S", "QS"]"#).unwrap();
/// let b = parse_hand_spec("KS AS JS 10S QS").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_hand_spec(spec: &str) -> Result<Hand, CliError> {
    let trimmed = spec.trim();
    if trimmed.starts_with('[') {
        let tokens: Vec<String> = serde_json::from_str(trimmed)
            .map_err(|e| CliError::InvalidInput(format!("bad JSON hand {}: {}", trimmed, e)))?;
        return Ok(parse_hand(&tokens)?);
    }
    Ok(parse_hand_str(trimmed)?)
}

/// Parse every hand line of a file body.
///
/// Line numbers in errors are 1-based. All lines are parsed so every bad line
/// is reported, not just the first.
pub fn parse_hand_lines(content: &str) -> Result<Vec<Hand>, Vec<BatchValidationError<usize>>> {
    let mut hands = Vec::new();
    let mut errors = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_hand_spec(line) {
            Ok(hand) => hands.push(hand),
            Err(e) => errors.push(BatchValidationError {
                item_context: i + 1,
                message: e.to_string(),
            }),
        }
    }
    if errors.is_empty() {
        Ok(hands)
    } else {
        Err(errors)
    }
}

/// True when the error came from a card token rather than the hand size.
pub fn is_token_error(err: &CliError) -> bool {
    matches!(err, CliError::Engine(EvalError::MalformedCardToken { .. }))
}
