use std::cmp::Ordering;

use tracing::debug;

use crate::cards::{Hand, Rank};
use crate::hand::{evaluate, Category, EvaluationResult};

/// Orders two evaluation results.
///
/// Different categories compare by category. Within a category only the ranks
/// that category's tie-break rule looks at are considered, so two results can
/// compare `Equal` while their kicker lists differ. `ordering as i8` gives the
/// conventional `-1 / 0 / 1`.
pub fn compare_results(a: &EvaluationResult, b: &EvaluationResult) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => {}
        ord => return ord,
    }

    match a.category {
        Category::RoyalFlush => Ordering::Equal,
        Category::StraightFlush | Category::Straight => a.high_card().cmp(&b.high_card()),
        Category::FullHouse => full_house_key(a).cmp(&full_house_key(b)),
        Category::TwoPair => used_at(a, 3)
            .cmp(&used_at(b, 3))
            .then_with(|| used_at(a, 0).cmp(&used_at(b, 0)))
            // lowest remaining rank, which is the fifth card of a five-card hand
            .then_with(|| a.kickers.first().cmp(&b.kickers.first())),
        Category::FourOfAKind => one_rank_with_kickers(a, b, 1),
        Category::ThreeOfAKind => one_rank_with_kickers(a, b, 2),
        Category::OnePair => one_rank_with_kickers(a, b, 3),
        Category::Flush => five_down(&a.cards_used).cmp(five_down(&b.cards_used)),
        Category::HighCard => five_down(&a.kickers).cmp(five_down(&b.kickers)),
    }
}

fn used_at(r: &EvaluationResult, i: usize) -> Option<Rank> {
    r.cards_used.get(i).copied()
}

/// (triple rank, pair rank). Index 2 sits inside the triple whichever way round
/// the combination was laid out.
fn full_house_key(r: &EvaluationResult) -> (Option<Rank>, Option<Rank>) {
    let three = used_at(r, 2);
    let pair = r.cards_used.iter().copied().find(|&x| Some(x) != three);
    (three, pair)
}

fn one_rank_with_kickers(a: &EvaluationResult, b: &EvaluationResult, budget: usize) -> Ordering {
    used_at(a, 0)
        .cmp(&used_at(b, 0))
        .then_with(|| top_kickers(a, budget).cmp(top_kickers(b, budget)))
}

/// Up to `budget` kickers, highest first.
fn top_kickers(r: &EvaluationResult, budget: usize) -> impl Iterator<Item = Rank> + '_ {
    r.kickers.iter().rev().take(budget).copied()
}

/// Positions 4 down to 0.
fn five_down(ranks: &[Rank]) -> impl Iterator<Item = Rank> + '_ {
    ranks[..ranks.len().min(5)].iter().rev().copied()
}

/// Evaluates both hands and orders them.
///
/// ```rust
/// use handrank_engine::cards::parse_hand_str;
/// use handrank_engine::compare::compare_hands;
///
/// let weaker = parse_hand_str("KC KH QC QD 2S").unwrap();
/// let stronger = parse_hand_str("KD KS QH QS 5S").unwrap();
/// assert_eq!(compare_hands(&stronger, &weaker) as i8, 1);
/// ```
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    compare_results(&evaluate(a), &evaluate(b))
}

/// Sorts hands weakest first. The sort is stable, so equal hands keep their
/// input order. Each hand is evaluated once.
pub fn rank_all(hands: Vec<Hand>) -> Vec<Hand> {
    rank_all_with_results(hands)
        .into_iter()
        .map(|(h, _)| h)
        .collect()
}

/// Like [`rank_all`] but keeps each hand's evaluation alongside it.
pub fn rank_all_with_results(hands: Vec<Hand>) -> Vec<(Hand, EvaluationResult)> {
    let mut scored: Vec<(Hand, EvaluationResult)> = hands
        .into_iter()
        .map(|h| {
            let result = evaluate(&h);
            (h, result)
        })
        .collect();
    scored.sort_by(|(_, a), (_, b)| compare_results(a, b));
    debug!(hands = scored.len(), "ranked hands");
    scored
}

/// The last hand after ranking: the strongest, and among equally strong hands
/// the one that came last in the input.
pub fn best_hand(hands: &[Hand]) -> Option<&Hand> {
    let mut best: Option<(&Hand, EvaluationResult)> = None;
    for hand in hands {
        let result = evaluate(hand);
        let replace = match &best {
            Some((_, current)) => compare_results(&result, current) != Ordering::Less,
            None => true,
        };
        if replace {
            best = Some((hand, result));
        }
    }
    best.map(|(h, _)| h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_hand_str;

    fn h(s: &str) -> Hand {
        parse_hand_str(s).unwrap()
    }

    #[test]
    fn royal_flushes_are_always_equal() {
        assert_eq!(
            compare_hands(&h("10S JS QS KS AS"), &h("10H JH QH KH AH")),
            Ordering::Equal
        );
    }

    #[test]
    fn straights_compare_on_high_card() {
        assert_eq!(
            compare_hands(&h("9C 10H KS JD QH"), &h("QH 10H 9S JH 8H")),
            Ordering::Greater
        );
    }

    #[test]
    fn one_pair_kickers_compare_from_the_top() {
        assert_eq!(
            compare_hands(&h("KH KC 9D 5C 2S"), &h("KD KS 9H 4C 3S")),
            Ordering::Greater
        );
        assert_eq!(
            compare_hands(&h("KH KC 9D 5C 2S"), &h("KD KS 9H 5D 2C")),
            Ordering::Equal
        );
    }

    #[test]
    fn three_of_a_kind_stops_after_two_kickers() {
        // third kicker differs but is outside the budget
        assert_eq!(
            compare_hands(&h("7D 7H 7S KC QC 3D"), &h("7C 7H 7S KD QD 2D")),
            Ordering::Equal
        );
    }

    #[test]
    fn four_of_a_kind_uses_one_kicker() {
        assert_eq!(
            compare_hands(&h("9C 9D 9H 9S 4C"), &h("9C 9D 9H 9S 3C")),
            Ordering::Greater
        );
    }

    #[test]
    fn flushes_compare_all_five() {
        assert_eq!(
            compare_hands(&h("2S 8S 6S 5S 3S"), &h("4S 8S 6S 5S 3S")),
            Ordering::Less
        );
    }

    #[test]
    fn high_card_compares_positions_four_to_zero() {
        assert_eq!(
            compare_hands(&h("3H 6D QH JC 5C"), &h("4H 6D QH JC 5C")),
            Ordering::Less
        );
    }

    #[test]
    fn best_hand_prefers_later_ties() {
        let hands = vec![
            h("10S JS QS KS AS"),
            h("2C 3D 5H 7S 9C"),
            h("10H JH QH KH AH"),
        ];
        assert_eq!(best_hand(&hands), Some(&hands[2]));
        assert_eq!(rank_all(hands.clone()).last(), Some(&hands[2]));
        assert_eq!(best_hand(&[]), None);
    }
}
