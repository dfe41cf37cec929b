// Individual candidate expanders: each applies one class of combination
// to the seed keyword and offers the results to the generation status,
// which owns deduplication and acceptance caps.

use rankbuddy_core::KeywordSource;

use super::status::GenerationStatus;

/// Trait for individual offline candidate expanders.
///
/// Each expander produces candidate keywords by applying one class of
/// combination to the normalized seed, then offers each candidate to the
/// status tracker. Expanders never bypass the status: all dedup and cap
/// decisions happen there.
pub trait CandidateExpander {
    fn expand(&self, seed: &str, status: &mut GenerationStatus);
}

/// Convert a static modifier table into owned strings for an expander.
pub fn table(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ---------------------------------------------------------------------------
// SeedEcho
// ---------------------------------------------------------------------------

/// Emits the seed itself, guaranteeing a non-empty result for every valid
/// seed regardless of what the other expanders contribute.
pub struct SeedEcho;

impl CandidateExpander for SeedEcho {
    fn expand(&self, seed: &str, status: &mut GenerationStatus) {
        status.add_candidate(seed, KeywordSource::OfflineNgram);
    }
}

// ---------------------------------------------------------------------------
// PrefixExpander
// ---------------------------------------------------------------------------

/// Emits `<word> <seed>` for each modifier word.
pub struct PrefixExpander {
    pub words: Vec<String>,
}

impl CandidateExpander for PrefixExpander {
    fn expand(&self, seed: &str, status: &mut GenerationStatus) {
        for word in &self.words {
            status.add_candidate(&format!("{word} {seed}"), KeywordSource::OfflineNgram);
        }
    }
}

// ---------------------------------------------------------------------------
// SuffixExpander
// ---------------------------------------------------------------------------

/// Emits `<seed> <word>` for each modifier word.
pub struct SuffixExpander {
    pub words: Vec<String>,
}

impl CandidateExpander for SuffixExpander {
    fn expand(&self, seed: &str, status: &mut GenerationStatus) {
        for word in &self.words {
            status.add_candidate(&format!("{seed} {word}"), KeywordSource::OfflineNgram);
        }
    }
}

// ---------------------------------------------------------------------------
// ListPatternExpander
// ---------------------------------------------------------------------------

/// Emits `<pattern> <seed>` for each numeric list pattern ("7 tips for").
pub struct ListPatternExpander {
    pub patterns: Vec<String>,
}

impl CandidateExpander for ListPatternExpander {
    fn expand(&self, seed: &str, status: &mut GenerationStatus) {
        for pattern in &self.patterns {
            status.add_candidate(&format!("{pattern} {seed}"), KeywordSource::OfflineNgram);
        }
    }
}

// ---------------------------------------------------------------------------
// LongTailExpander
// ---------------------------------------------------------------------------

/// Emits `<seed> <phrase>` for each long-tail phrase, tagged as long-tail.
pub struct LongTailExpander {
    pub phrases: Vec<String>,
}

impl CandidateExpander for LongTailExpander {
    fn expand(&self, seed: &str, status: &mut GenerationStatus) {
        for phrase in &self.phrases {
            status.add_candidate(&format!("{seed} {phrase}"), KeywordSource::LongTail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GenerationOptions;

    fn status() -> GenerationStatus {
        GenerationStatus::new(&GenerationOptions::default())
    }

    #[test]
    fn seed_echo_emits_the_seed() {
        let mut status = status();
        SeedEcho.expand("content marketing", &mut status);
        assert_eq!(status.accepted()[0].text, "content marketing");
        assert_eq!(status.accepted()[0].source, KeywordSource::OfflineNgram);
    }

    #[test]
    fn prefix_expander_prepends_each_word() {
        let mut status = status();
        let expander = PrefixExpander {
            words: table(&["best", "why"]),
        };
        expander.expand("seo", &mut status);
        let texts: Vec<_> = status.accepted().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["best seo", "why seo"]);
    }

    #[test]
    fn suffix_expander_appends_each_word() {
        let mut status = status();
        let expander = SuffixExpander {
            words: table(&["guide", "checklist"]),
        };
        expander.expand("seo", &mut status);
        let texts: Vec<_> = status.accepted().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["seo guide", "seo checklist"]);
    }

    #[test]
    fn list_pattern_expander_prepends_patterns() {
        let mut status = status();
        let expander = ListPatternExpander {
            patterns: table(&["10 best"]),
        };
        expander.expand("seo tools", &mut status);
        assert_eq!(status.accepted()[0].text, "10 best seo tools");
    }

    #[test]
    fn long_tail_expander_tags_long_tail() {
        let mut status = status();
        let expander = LongTailExpander {
            phrases: table(&["for beginners", "step by step"]),
        };
        expander.expand("seo", &mut status);
        for c in status.accepted() {
            assert_eq!(c.source, KeywordSource::LongTail);
            assert!(c.is_long_tail(), "{:?}", c.text);
        }
        assert_eq!(status.long_tail_count(), 2);
    }
}
