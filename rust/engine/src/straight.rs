use crate::cards::Rank;
use crate::hand::{Category, EvaluationResult};

/// Number of consecutive ranks that make a straight.
pub const STRAIGHT_LEN: usize = 5;

/// Finds the highest five-rank run in `sorted_ranks` (ascending, duplicates allowed).
///
/// The scan walks down from the top card and stops at the first run of five,
/// which is therefore the best one. Ace only counts high.
pub fn detect_straight(sorted_ranks: &[Rank]) -> Option<EvaluationResult> {
    let mut scan = sorted_ranks.iter().rev().copied();
    let mut run: Vec<Rank> = Vec::with_capacity(STRAIGHT_LEN);
    run.push(scan.next()?);

    for rank in scan {
        // run is never empty here
        let prev = run[run.len() - 1];
        match i16::from(prev.value()) - i16::from(rank.value()) {
            0 => continue,
            1 => run.push(rank),
            _ => {
                run.clear();
                run.push(rank);
            }
        }
        if run.len() == STRAIGHT_LEN {
            run.reverse();
            return Some(EvaluationResult::new(Category::Straight, run, Vec::new()));
        }
    }
    None
}
