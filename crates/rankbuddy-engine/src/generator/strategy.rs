// Offline generation strategy: composes the individual expanders.

use super::expanders::{
    CandidateExpander, ListPatternExpander, LongTailExpander, PrefixExpander, SeedEcho,
    SuffixExpander, table,
};
use super::modifiers::{LIST_PATTERNS, LONG_TAIL_PHRASES, PREFIX_MODIFIERS, SUFFIX_MODIFIERS};
use super::status::GenerationStatus;

/// An ordered list of expanders run against the seed. Order matters for
/// determinism and for dedup outcomes: earlier expanders claim a slot
/// first, and later near-duplicates are dropped.
pub struct GenerationStrategy {
    expanders: Vec<Box<dyn CandidateExpander + Send + Sync>>,
}

impl GenerationStrategy {
    pub fn new(expanders: Vec<Box<dyn CandidateExpander + Send + Sync>>) -> Self {
        Self { expanders }
    }

    /// Run every expander in order against the (normalized) seed.
    pub fn run(&self, seed: &str, status: &mut GenerationStatus) {
        for expander in &self.expanders {
            expander.expand(seed, status);
        }
    }

    pub fn expander_count(&self) -> usize {
        self.expanders.len()
    }
}

/// The default offline strategy: the seed itself, prefix and suffix
/// modifier combinations, numeric list patterns, and long-tail phrase
/// expansion, in that order.
pub fn offline_strategy() -> GenerationStrategy {
    GenerationStrategy::new(vec![
        Box::new(SeedEcho),
        Box::new(PrefixExpander {
            words: table(PREFIX_MODIFIERS),
        }),
        Box::new(SuffixExpander {
            words: table(SUFFIX_MODIFIERS),
        }),
        Box::new(ListPatternExpander {
            patterns: table(LIST_PATTERNS),
        }),
        Box::new(LongTailExpander {
            phrases: table(LONG_TAIL_PHRASES),
        }),
    ])
}
