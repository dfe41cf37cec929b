// Lexical statistics table: an immutable word -> frequency mapping used as
// a competition prior by the difficulty estimator. High-frequency words are
// assumed to carry more ranking competition.
//
// The embedded table is approximate English web-search frequency data,
// rescaled into [0, 1]. It is constructed once and never mutated, so a
// `LexicalTable` can be shared freely across concurrent requests.

use hashbrown::HashMap;

/// Frequency assigned to words missing from the table.
pub const UNKNOWN_WORD_FREQUENCY: f64 = 0.01;

/// Embedded frequency data, highest first. Values are relative magnitudes
/// on a [0, 1] scale, not measured probabilities.
const WORD_FREQUENCIES: &[(&str, f64)] = &[
    ("how", 0.85),
    ("what", 0.75),
    ("best", 0.68),
    ("top", 0.62),
    ("guide", 0.45),
    ("tips", 0.38),
    ("review", 0.32),
    ("free", 0.28),
    ("tutorial", 0.24),
    ("business", 0.22),
    ("marketing", 0.18),
    ("seo", 0.16),
    ("growth", 0.14),
    ("startup", 0.12),
    ("tools", 0.11),
    ("strategy", 0.095),
    ("success", 0.085),
    ("online", 0.075),
    ("digital", 0.065),
    ("beginner", 0.055),
    ("advanced", 0.045),
    ("complete", 0.04),
    ("ultimate", 0.035),
    ("simple", 0.03),
    ("easy", 0.028),
    ("quick", 0.025),
    ("step", 0.022),
    ("effective", 0.02),
    ("proven", 0.018),
    ("examples", 0.016),
    ("case", 0.015),
    ("study", 0.014),
    ("method", 0.013),
    ("technique", 0.012),
    ("approach", 0.011),
    ("framework", 0.01),
    ("process", 0.0095),
    ("system", 0.009),
    ("hack", 0.0085),
    ("secret", 0.008),
    ("trick", 0.0075),
    ("mistake", 0.007),
    ("common", 0.0065),
    ("popular", 0.006),
    ("trending", 0.0055),
    ("latest", 0.005),
    ("new", 0.0048),
    ("updated", 0.0046),
    ("modern", 0.0044),
    ("profitable", 0.0042),
    ("money", 0.004),
    ("entrepreneur", 0.0038),
    ("founder", 0.0036),
    ("indie", 0.0034),
    ("solo", 0.0032),
    ("small", 0.003),
    ("website", 0.0028),
    ("blog", 0.0026),
    ("content", 0.0024),
    ("optimization", 0.0022),
    ("rank", 0.002),
    ("ranking", 0.0018),
    ("google", 0.0016),
    ("search", 0.0014),
    ("traffic", 0.0012),
    ("conversion", 0.001),
    ("funnel", 0.0009),
    ("leads", 0.0008),
    ("sales", 0.0007),
    ("revenue", 0.0006),
    ("profit", 0.0005),
];

/// Immutable word-frequency lookup table.
pub struct LexicalTable {
    frequencies: HashMap<String, f64>,
}

impl LexicalTable {
    /// Build the table from the embedded frequency data.
    pub fn embedded() -> Self {
        Self::from_entries(WORD_FREQUENCIES.iter().map(|&(w, f)| (w.to_string(), f)))
    }

    /// Build a table from caller-supplied entries. Frequencies are clamped
    /// to [0, 1]; later duplicates overwrite earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        let frequencies = entries
            .into_iter()
            .map(|(word, freq)| (word, freq.clamp(0.0, 1.0)))
            .collect();
        Self { frequencies }
    }

    /// Frequency for a single word, flooring unknown words to
    /// [`UNKNOWN_WORD_FREQUENCY`].
    pub fn frequency(&self, word: &str) -> f64 {
        self.frequencies
            .get(word)
            .copied()
            .unwrap_or(UNKNOWN_WORD_FREQUENCY)
    }

    /// `true` if the word has an explicit entry.
    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// Mean frequency over the whitespace-separated tokens of a keyword.
    /// Returns [`UNKNOWN_WORD_FREQUENCY`] for text with no tokens rather
    /// than dividing by zero.
    pub fn mean_frequency(&self, text: &str) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for token in text.split_whitespace() {
            sum += self.frequency(token);
            count += 1;
        }
        if count == 0 {
            UNKNOWN_WORD_FREQUENCY
        } else {
            sum / count as f64
        }
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// `true` if the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl Default for LexicalTable {
    fn default() -> Self {
        Self::embedded()
    }
}
