use crate::cards::Rank;
use crate::hand::{Category, EvaluationResult};

/// Rank multiplicities found in one scan over the count table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Multiplicity {
    four: Option<Rank>,
    three: Option<Rank>,
    pair: Option<Rank>,
    second_pair: Option<Rank>,
    two_pair: bool,
}

impl Multiplicity {
    fn scan(sorted_ranks: &[Rank]) -> Self {
        let mut counts = [0usize; 15]; // 2..=14 used
        for r in sorted_ranks {
            counts[r.value() as usize] += 1;
        }

        let mut m = Multiplicity::default();
        for v in 2..=14u8 {
            let Some(rank) = Rank::from_u8(v) else {
                continue;
            };
            let count = counts[v as usize];
            if count >= 2 {
                if m.pair.is_some() {
                    m.two_pair = true;
                }
                // replace whichever slot is lower so both end up on the two highest pairs
                if m.pair <= m.second_pair {
                    m.pair = Some(rank);
                } else {
                    m.second_pair = Some(rank);
                }
            }
            if count >= 3 {
                m.three = Some(rank);
            }
            if count >= 4 {
                m.four = Some(rank);
            }
        }
        m
    }

    fn full_house(&self) -> bool {
        self.three.is_some() && self.two_pair
    }

    fn high_pair(&self) -> Option<Rank> {
        self.pair.max(self.second_pair)
    }

    fn low_pair(&self) -> Option<Rank> {
        match (self.pair, self.second_pair) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Classifies a hand by rank multiplicity: quads, full house, trips, two pair,
/// one pair, or high card, in that order of precedence.
///
/// `sorted_ranks` must be ascending; kickers come back ascending too.
pub fn detect_multiples(sorted_ranks: &[Rank]) -> EvaluationResult {
    let m = Multiplicity::scan(sorted_ranks);

    if let Some(four) = m.four {
        return EvaluationResult::new(
            Category::FourOfAKind,
            vec![four; 4],
            remove_up_to(sorted_ranks, four, usize::MAX),
        );
    }

    if m.full_house() {
        if let (Some(three), Some(high), Some(low)) = (m.three, m.high_pair(), m.low_pair()) {
            let twos = if high == three { low } else { high };
            let mut cards_used = Vec::with_capacity(5);
            if twos < three {
                cards_used.extend([twos; 2]);
                cards_used.extend([three; 3]);
            } else {
                cards_used.extend([three; 3]);
                cards_used.extend([twos; 2]);
            }
            return EvaluationResult::new(Category::FullHouse, cards_used, Vec::new());
        }
    }

    if let Some(three) = m.three {
        return EvaluationResult::new(
            Category::ThreeOfAKind,
            vec![three; 3],
            remove_up_to(sorted_ranks, three, 3),
        );
    }

    if m.two_pair {
        if let (Some(high), Some(low)) = (m.high_pair(), m.low_pair()) {
            let kickers = remove_up_to(
                &remove_up_to(sorted_ranks, high, usize::MAX),
                low,
                usize::MAX,
            );
            return EvaluationResult::new(
                Category::TwoPair,
                vec![low, low, high, high],
                kickers,
            );
        }
    }

    if let Some(pair) = m.high_pair() {
        return EvaluationResult::new(
            Category::OnePair,
            vec![pair; 2],
            remove_up_to(sorted_ranks, pair, 2),
        );
    }

    EvaluationResult::new(Category::HighCard, Vec::new(), sorted_ranks.to_vec())
}

/// Copy of `ranks` with at most `limit` occurrences of `rank` dropped.
fn remove_up_to(ranks: &[Rank], rank: Rank, limit: usize) -> Vec<Rank> {
    let mut removed = 0;
    ranks
        .iter()
        .copied()
        .filter(|&r| {
            if r == rank && removed < limit {
                removed += 1;
                false
            } else {
                true
            }
        })
        .collect()
}
