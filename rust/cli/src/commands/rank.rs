//! Ranking command: orders many hands and reports the winner.

use std::io::Write;

use handrank_engine::cards::Hand;
use handrank_engine::compare::{compare_results, rank_all_with_results};
use std::cmp::Ordering;

use super::RenderOptions;
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{JsonReport, format_report};
use crate::io_utils::read_text;
use crate::ui;
use crate::validation::{parse_hand_lines, parse_hand_spec};

/// Handle the rank command.
///
/// Hands come from every `--hand` argument first, then from the `--input`
/// file. They are sorted weakest first with a stable sort; the last one is
/// the best hand. With `show_all` every hand is printed in that order.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when no hands were given or when any line
/// of the input file is invalid (each bad line is also written to `err`).
pub fn handle_rank_command(
    hand_specs: &[String],
    input: Option<&str>,
    show_all: bool,
    opts: RenderOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut hands: Vec<Hand> = hand_specs
        .iter()
        .map(|s| parse_hand_spec(s))
        .collect::<Result<_, _>>()?;

    if let Some(path) = input {
        let content = read_text(path).map_err(CliError::InvalidInput)?;
        match parse_hand_lines(&content) {
            Ok(from_file) => hands.extend(from_file),
            Err(errors) => {
                for e in &errors {
                    ui::write_error(err, &format!("{}:{}", path, e))?;
                }
                return Err(CliError::InvalidInput(format!(
                    "{} invalid line(s) in {}",
                    errors.len(),
                    path
                )));
            }
        }
    }

    if hands.is_empty() {
        return Err(CliError::InvalidInput(
            "no hands given; use --hand or --input".into(),
        ));
    }

    let ranked = rank_all_with_results(hands);
    let shown = if show_all {
        &ranked[..]
    } else {
        &ranked[ranked.len() - 1..]
    };

    match opts.format {
        OutputFormat::Text => {
            for (i, (hand, result)) in shown.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", format_report(hand, result, opts.unicode))?;
            }
            if !show_all {
                let (_, best) = &ranked[ranked.len() - 1];
                let tied = ranked[..ranked.len() - 1]
                    .iter()
                    .filter(|(_, r)| compare_results(r, best) == Ordering::Equal)
                    .count();
                if tied > 0 {
                    ui::display_warning(
                        err,
                        &format!("{} other hand(s) tie with the best hand", tied),
                    )?;
                }
            }
        }
        OutputFormat::Json => {
            let reports: Vec<JsonReport> = shown
                .iter()
                .map(|(hand, result)| JsonReport::new(hand, result))
                .collect();
            let json = if show_all {
                serde_json::to_string(&reports)?
            } else {
                serde_json::to_string(&reports[0])?
            };
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const TEXT: RenderOptions = RenderOptions {
        format: OutputFormat::Text,
        unicode: false,
    };

    fn specs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_prints_only_the_best() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let hands = specs(&["KC KH 10S QD QH", "2S 8S 6S 5S 3S", "3H 6D QH JC 5C"]);
        handle_rank_command(&hands, None, false, TEXT, &mut out, &mut err).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.starts_with("Input Hand: 2S 8S 6S 5S 3S"));
        assert_eq!(s.matches("Input Hand").count(), 1);
        assert!(err.is_empty());
    }

    #[test]
    fn test_rank_all_is_weakest_first() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let hands = specs(&["2S 8S 6S 5S 3S", "3H 6D QH JC 5C", "KC KH 10S QD QH"]);
        handle_rank_command(&hands, None, true, TEXT, &mut out, &mut err).unwrap();
        let s = String::from_utf8(out).unwrap();
        let categories: Vec<&str> = s
            .lines()
            .filter_map(|l| l.strip_prefix("Category: "))
            .collect();
        assert_eq!(categories, vec!["High Card", "Two Pair", "Flush"]);
    }

    #[test]
    fn test_rank_warns_about_ties() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let hands = specs(&["10S JS QS KS AS", "10H JH QH KH AH"]);
        handle_rank_command(&hands, None, false, TEXT, &mut out, &mut err).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("Input Hand: 10H JH QH KH AH"));
        let e = String::from_utf8(err).unwrap();
        assert!(e.contains("WARNING: 1 other hand(s) tie"));
    }

    #[test]
    fn test_rank_reads_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# table 1").unwrap();
        writeln!(file, "[\"7D\", \"8H\", \"7S\", \"7H\", \"7C\"]").unwrap();
        writeln!(file, "3D 9H 3S 3H 9D").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let opts = RenderOptions {
            format: OutputFormat::Json,
            unicode: false,
        };
        handle_rank_command(&[], Some(&path), false, opts, &mut out, &mut err).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["category"], "Four of a Kind");
    }

    #[test]
    fn test_rank_reports_bad_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "3D 9H 3S 3H 9D\nZZ 9H 3S 3H 9D").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_rank_command(&[], Some(&path), false, TEXT, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        let e = String::from_utf8(err).unwrap();
        assert!(e.contains(":2: Malformed card token"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_rank_without_hands_is_an_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_rank_command(&[], None, false, TEXT, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
