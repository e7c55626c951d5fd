//! Single-hand evaluation command.

use std::io::Write;

use handrank_engine::hand::evaluate;

use super::RenderOptions;
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{JsonReport, format_report};
use crate::validation::parse_hand_spec;

/// Parses the tokens as one hand, evaluates it and prints the report.
///
/// # Errors
///
/// `CliError::Engine` for a malformed token or fewer than five cards.
pub fn handle_eval_command(
    tokens: &[String],
    opts: RenderOptions,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = parse_hand_spec(&tokens.join(" "))?;
    let result = evaluate(&hand);

    match opts.format {
        OutputFormat::Text => write!(out, "{}", format_report(&hand, &result, opts.unicode))?,
        OutputFormat::Json => {
            let json = serde_json::to_string(&JsonReport::new(&hand, &result))?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
