// Result aggregation: final dedup, ordering, tier partitioning, and
// summary statistics.

use serde::Serialize;

use hashbrown::HashMap;

use rankbuddy_core::{Candidate, Tier, TierBoundaries};

/// Summary statistics over a scored result set, for presentation
/// collaborators. Difficulty fields are zero when the set is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub short_tail: usize,
    pub long_tail: usize,
    pub mean_difficulty: f64,
    pub min_difficulty: u8,
    pub max_difficulty: u8,
}

/// An ordered, deduplicated, tier-partitioned set of scored candidates.
///
/// Candidates are sorted ascending by difficulty, ties broken by shorter
/// text and then lexicographic order. The tier partition is derived from
/// the stored boundaries, so it is total and exhaustive by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    pub candidates: Vec<Candidate>,
    pub boundaries: TierBoundaries,
    pub summary: Summary,
}

impl ResultSet {
    /// Candidates in the given tier, in result-set order.
    pub fn tier(&self, tier: Tier) -> impl Iterator<Item = &Candidate> {
        self.candidates
            .iter()
            .filter(move |c| self.boundaries.tier_for(c.difficulty.unwrap_or(0)) == tier)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Aggregate scored candidates into a [`ResultSet`].
///
/// Performs a final dedup pass keyed on the (already normalized) candidate
/// text -- external sources still win over offline ones -- then sorts and
/// computes summary statistics. Unscored candidates sort as difficulty 0.
pub fn aggregate(candidates: Vec<Candidate>, boundaries: TierBoundaries) -> ResultSet {
    let mut deduped: Vec<Candidate> = Vec::with_capacity(candidates.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    for candidate in candidates {
        match index.get(&candidate.text) {
            Some(&i) => {
                if !candidate.source.is_offline() && deduped[i].source.is_offline() {
                    deduped[i].source = candidate.source;
                }
            }
            None => {
                index.insert(candidate.text.clone(), deduped.len());
                deduped.push(candidate);
            }
        }
    }

    deduped.sort_by(|a, b| {
        a.difficulty
            .unwrap_or(0)
            .cmp(&b.difficulty.unwrap_or(0))
            .then_with(|| a.text.chars().count().cmp(&b.text.chars().count()))
            .then_with(|| a.text.cmp(&b.text))
    });

    let summary = summarize(&deduped, boundaries);
    ResultSet {
        candidates: deduped,
        boundaries,
        summary,
    }
}

fn summarize(candidates: &[Candidate], boundaries: TierBoundaries) -> Summary {
    let mut summary = Summary {
        total: candidates.len(),
        easy: 0,
        medium: 0,
        hard: 0,
        short_tail: 0,
        long_tail: 0,
        mean_difficulty: 0.0,
        min_difficulty: 0,
        max_difficulty: 0,
    };
    if candidates.is_empty() {
        return summary;
    }

    let mut sum = 0u32;
    let mut min = u8::MAX;
    let mut max = 0u8;
    for candidate in candidates {
        let difficulty = candidate.difficulty.unwrap_or(0);
        match boundaries.tier_for(difficulty) {
            Tier::Easy => summary.easy += 1,
            Tier::Medium => summary.medium += 1,
            Tier::Hard => summary.hard += 1,
        }
        if candidate.is_long_tail() {
            summary.long_tail += 1;
        } else {
            summary.short_tail += 1;
        }
        sum += u32::from(difficulty);
        min = min.min(difficulty);
        max = max.max(difficulty);
    }
    summary.mean_difficulty = f64::from(sum) / candidates.len() as f64;
    summary.min_difficulty = min;
    summary.max_difficulty = max;
    summary
}
