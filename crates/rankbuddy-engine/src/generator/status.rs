// Generation status tracking: deduplication and acceptance caps.

use hashbrown::HashMap;

use rankbuddy_core::{Candidate, KeywordSource, normalize};

use super::GenerationOptions;
use crate::similarity::similarity;

/// Tracks the state of one generation pass: accepted candidates, an exact
/// dedup index keyed on normalized text, and per-class acceptance caps for
/// the offline generators.
///
/// Duplicate handling implements the source-preference invariant: when an
/// external candidate collides with an accepted offline one -- exactly or as
/// a near-duplicate above the similarity threshold -- the external source
/// wins. Offline-vs-offline and external-vs-external collisions keep the
/// earlier candidate.
pub struct GenerationStatus {
    accepted: Vec<Candidate>,
    /// Normalized text -> index into `accepted`.
    index: HashMap<String, usize>,
    similarity_threshold: f64,
    max_related: usize,
    related_count: usize,
    max_long_tail: usize,
    long_tail_count: usize,
}

impl GenerationStatus {
    pub fn new(options: &GenerationOptions) -> Self {
        Self {
            accepted: Vec::with_capacity(options.max_related + options.max_long_tail),
            index: HashMap::new(),
            similarity_threshold: options.similarity_threshold,
            max_related: options.max_related,
            related_count: 0,
            max_long_tail: options.max_long_tail,
            long_tail_count: 0,
        }
    }

    /// Normalize and try to accept one candidate. Returns `true` if the
    /// candidate entered the accepted list (including by replacing an
    /// offline near-duplicate).
    pub fn add_candidate(&mut self, raw: &str, source: KeywordSource) -> bool {
        let text = normalize(raw);
        if text.is_empty() {
            return false;
        }
        if self.class_is_full(&source) {
            return false;
        }

        // Exact duplicate: at most the source tag changes.
        if let Some(&i) = self.index.get(&text) {
            if !source.is_offline() && self.accepted[i].source.is_offline() {
                let old_source = self.accepted[i].source.clone();
                self.decrement_class(&old_source);
                self.accepted[i].source = source;
            }
            return false;
        }

        // Near-duplicate scan against everything accepted so far.
        for i in 0..self.accepted.len() {
            if similarity(&text, &self.accepted[i].text) > self.similarity_threshold {
                if !source.is_offline() && self.accepted[i].source.is_offline() {
                    self.replace(i, text, source);
                    return true;
                }
                return false;
            }
        }

        self.increment_class(&source);
        self.index.insert(text.clone(), self.accepted.len());
        self.accepted.push(Candidate::new(text, source));
        true
    }

    /// Replace the offline candidate at `i` with an external near-duplicate.
    fn replace(&mut self, i: usize, text: String, source: KeywordSource) {
        let old_source = self.accepted[i].source.clone();
        let old_text = self.accepted[i].text.clone();
        self.decrement_class(&old_source);
        self.index.remove(&old_text);
        self.index.insert(text.clone(), i);
        self.accepted[i] = Candidate::new(text, source);
    }

    /// External candidates are never capped; the offline classes stop
    /// accepting once their target count is reached.
    fn class_is_full(&self, source: &KeywordSource) -> bool {
        match source {
            KeywordSource::OfflineNgram => self.related_count >= self.max_related,
            KeywordSource::LongTail => self.long_tail_count >= self.max_long_tail,
            KeywordSource::External(_) => false,
        }
    }

    fn increment_class(&mut self, source: &KeywordSource) {
        match source {
            KeywordSource::OfflineNgram => self.related_count += 1,
            KeywordSource::LongTail => self.long_tail_count += 1,
            KeywordSource::External(_) => {}
        }
    }

    fn decrement_class(&mut self, source: &KeywordSource) {
        match source {
            KeywordSource::OfflineNgram => self.related_count -= 1,
            KeywordSource::LongTail => self.long_tail_count -= 1,
            KeywordSource::External(_) => {}
        }
    }

    /// Accepted offline n-gram candidate count.
    pub fn related_count(&self) -> usize {
        self.related_count
    }

    /// Accepted offline long-tail candidate count.
    pub fn long_tail_count(&self) -> usize {
        self.long_tail_count
    }

    /// Total accepted candidate count.
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Accepted candidates, in acceptance order.
    pub fn accepted(&self) -> &[Candidate] {
        &self.accepted
    }

    /// Consume the status and return the accepted candidates.
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.accepted
    }
}
