use crate::cards::{Card, Rank};
use crate::hand::{Category, EvaluationResult};
use crate::straight::detect_straight;

/// Cards of one suit needed for a flush.
pub const FLUSH_LEN: usize = 5;

/// Looks for straight flushes, royal flushes and plain flushes.
///
/// Every suit holding at least five cards is a candidate. A straight inside a
/// candidate always wins over a plain flush; between candidates the higher
/// straight (or the higher five-card flush) is kept.
pub fn detect_flush(cards: &[Card]) -> Option<EvaluationResult> {
    if cards.len() == FLUSH_LEN {
        return detect_five_card_flush(cards);
    }

    let groups = suited_groups(cards);
    if groups.is_empty() {
        return None;
    }

    if let Some(result) = best_straight_flush(&groups) {
        return Some(result);
    }

    let trimmed: Vec<&[Rank]> = groups
        .iter()
        .map(|g| &g[g.len() - FLUSH_LEN..])
        .collect();
    let best = best_plain_flush(&trimmed);
    Some(EvaluationResult::new(
        Category::Flush,
        best.to_vec(),
        Vec::new(),
    ))
}

fn detect_five_card_flush(cards: &[Card]) -> Option<EvaluationResult> {
    let suit = cards[0].suit;
    if cards.iter().any(|c| c.suit != suit) {
        return None;
    }
    let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable();
    match detect_straight(&ranks) {
        Some(straight) => Some(classify_straight_flush(straight.cards_used)),
        None => Some(EvaluationResult::new(Category::Flush, ranks, Vec::new())),
    }
}

/// Ranks of each suit with at least five members, each ascending.
fn suited_groups(cards: &[Card]) -> Vec<Vec<Rank>> {
    let mut by_suit: [Vec<Rank>; 4] = [vec![], vec![], vec![], vec![]];
    for card in cards {
        by_suit[card.suit.index()].push(card.rank);
    }
    by_suit
        .into_iter()
        .filter(|g| g.len() >= FLUSH_LEN)
        .map(|mut g| {
            g.sort_unstable();
            g
        })
        .collect()
}

fn best_straight_flush(groups: &[Vec<Rank>]) -> Option<EvaluationResult> {
    let mut best: Option<Vec<Rank>> = None;
    for group in groups {
        let Some(straight) = detect_straight(group) else {
            continue;
        };
        let better = match &best {
            Some(current) => straight.high_card() > current.last().copied(),
            None => true,
        };
        if better {
            best = Some(straight.cards_used);
        }
    }
    best.map(classify_straight_flush)
}

fn classify_straight_flush(cards_used: Vec<Rank>) -> EvaluationResult {
    let category = if cards_used.last() == Some(&Rank::Ace) {
        Category::RoyalFlush
    } else {
        Category::StraightFlush
    };
    EvaluationResult::new(category, cards_used, Vec::new())
}

/// Picks the strongest of several five-card flushes by eliminating, from the
/// top index down, every group that is not at the maximum for that index.
fn best_plain_flush<'a>(groups: &[&'a [Rank]]) -> &'a [Rank] {
    let mut alive: Vec<&'a [Rank]> = groups.to_vec();
    for i in (0..FLUSH_LEN).rev() {
        if alive.len() == 1 {
            break;
        }
        let Some(max) = alive.iter().map(|g| g[i]).max() else {
            break;
        };
        alive.retain(|g| g[i] == max);
    }
    // identical survivors carry the same ranks, any of them will do
    alive[0]
}
