// Difficulty estimation: a weighted multi-signal heuristic mapping a
// keyword to a 0-100 competitiveness score.
//
// Three signals, each on a [0, 100] scale, combined by a weighted sum:
//
//     difficulty = 0.5 * frequency + 0.3 * length + 0.2 * competition
//
// - frequency: mean per-word frequency from the lexical table, scaled x100.
//   Common words imply more competition, so higher frequency -> harder.
// - length: non-increasing in token count, flat past 5 tokens. Long-tail
//   phrases are more specific, so more tokens -> easier.
// - competition: +20 per high-commercial-intent term present, capped.
//
// The result is rounded and clamped to [0, 100]. The formula is
// deterministic: same text and table, same score.

use crate::lexicon::LexicalTable;

/// Terms that signal commercial intent and therefore paid competition.
pub const COMMERCIAL_TERMS: &[&str] = &[
    "best", "buy", "cheap", "free", "price", "review", "top", "vs",
];

/// Bonus added to the competition signal per matched commercial term.
pub const COMPETITION_BONUS_PER_TERM: f64 = 20.0;

/// Length signal by token count: 1 token is hardest, flattening at 5.
const LENGTH_SIGNAL: [f64; 5] = [100.0, 75.0, 55.0, 40.0, 30.0];

/// Weights of the three difficulty signals. They are expected to sum to
/// 1.0 so the result naturally stays within [0, 100]; the final clamp
/// keeps the score in range for unusual custom weights too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyWeights {
    pub frequency: f64,
    pub length: f64,
    pub competition: f64,
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            frequency: 0.5,
            length: 0.3,
            competition: 0.2,
        }
    }
}

/// Scores keywords against an immutable lexical table.
pub struct DifficultyEstimator<'a> {
    lexicon: &'a LexicalTable,
    weights: DifficultyWeights,
}

impl<'a> DifficultyEstimator<'a> {
    pub fn new(lexicon: &'a LexicalTable) -> Self {
        Self::with_weights(lexicon, DifficultyWeights::default())
    }

    pub fn with_weights(lexicon: &'a LexicalTable, weights: DifficultyWeights) -> Self {
        Self { lexicon, weights }
    }

    /// Difficulty score for a keyword, always within [0, 100].
    ///
    /// The text is expected to be normalized; zero-token text cannot reach
    /// this point through the generator, but the computation is total over
    /// any input anyway.
    pub fn score(&self, text: &str) -> u8 {
        let frequency = self.lexicon.mean_frequency(text) * 100.0;
        let length = length_signal(rankbuddy_core::token_count(text));
        let competition = competition_signal(text);

        let combined = self.weights.frequency * frequency
            + self.weights.length * length
            + self.weights.competition * competition;
        combined.round().clamp(0.0, 100.0) as u8
    }
}

/// Length signal for a token count. Zero tokens score like a single word;
/// that case is rejected upstream and only kept total here.
fn length_signal(tokens: usize) -> f64 {
    match tokens {
        0 | 1 => LENGTH_SIGNAL[0],
        n if n >= LENGTH_SIGNAL.len() => LENGTH_SIGNAL[LENGTH_SIGNAL.len() - 1],
        n => LENGTH_SIGNAL[n - 1],
    }
}

/// Competition signal: bonus per commercial-intent token, capped at 100.
fn competition_signal(text: &str) -> f64 {
    let matches = text
        .split_whitespace()
        .filter(|token| COMMERCIAL_TERMS.contains(token))
        .count();
    (matches as f64 * COMPETITION_BONUS_PER_TERM).min(100.0)
}
