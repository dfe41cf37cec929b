// Keyword candidate type and source tags.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::normalize::token_count;

/// Minimum token count for a keyword to be considered long-tail.
pub const LONG_TAIL_MIN_TOKENS: usize = 3;

/// Where a keyword candidate came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeywordSource {
    /// Produced by offline n-gram expansion of the seed.
    OfflineNgram,
    /// Produced by offline long-tail phrase expansion.
    LongTail,
    /// Supplied by an external suggestion provider, identified by name.
    External(String),
}

impl KeywordSource {
    /// `true` for the two offline source classes.
    pub fn is_offline(&self) -> bool {
        !matches!(self, KeywordSource::External(_))
    }
}

impl fmt::Display for KeywordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordSource::OfflineNgram => f.write_str("offline-ngram"),
            KeywordSource::LongTail => f.write_str("long-tail"),
            KeywordSource::External(provider) => write!(f, "external:{provider}"),
        }
    }
}

impl Serialize for KeywordSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single keyword candidate flowing through the pipeline.
///
/// `text` is always in normalized form (lowercase, trimmed, single spaces)
/// and non-empty; the generator rejects anything that normalizes to empty.
/// `difficulty` is `None` until the estimator has scored the candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub text: String,
    pub source: KeywordSource,
    pub difficulty: Option<u8>,
}

impl Candidate {
    /// Create an unscored candidate. `text` must already be normalized.
    pub fn new(text: impl Into<String>, source: KeywordSource) -> Self {
        Self {
            text: text.into(),
            source,
            difficulty: None,
        }
    }

    /// Number of tokens in the candidate text.
    pub fn token_count(&self) -> usize {
        token_count(&self.text)
    }

    /// `true` if the candidate has at least [`LONG_TAIL_MIN_TOKENS`] tokens.
    pub fn is_long_tail(&self) -> bool {
        self.token_count() >= LONG_TAIL_MIN_TOKENS
    }
}
