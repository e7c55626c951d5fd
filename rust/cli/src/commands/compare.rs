//! Head-to-head comparison of two hands.

use std::io::Write;

use handrank_engine::compare::compare_results;
use handrank_engine::hand::evaluate;

use super::RenderOptions;
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{JsonReport, format_report};
use crate::validation::parse_hand_spec;

/// Evaluates both hands and prints `-1`, `0` or `1` (first hand loses, ties, wins).
pub fn handle_compare_command(
    first: &str,
    second: &str,
    opts: RenderOptions,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let a = parse_hand_spec(first)?;
    let b = parse_hand_spec(second)?;
    let ra = evaluate(&a);
    let rb = evaluate(&b);
    let outcome = compare_results(&ra, &rb) as i8;

    match opts.format {
        OutputFormat::Text => {
            write!(out, "{}", format_report(&a, &ra, opts.unicode))?;
            writeln!(out)?;
            write!(out, "{}", format_report(&b, &rb, opts.unicode))?;
            writeln!(out)?;
            let verdict = match outcome {
                1 => "first hand wins",
                -1 => "second hand wins",
                _ => "tie",
            };
            writeln!(out, "Result: {} ({})", outcome, verdict)?;
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "result": outcome,
                "first": JsonReport::new(&a, &ra),
                "second": JsonReport::new(&b, &rb),
            });
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
        }
    }
    Ok(())
}
