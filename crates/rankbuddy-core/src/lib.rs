// Shared leaf types for RankBuddy keyword research: keyword candidates,
// text normalization, and difficulty tiers. This crate has no knowledge of
// generation strategies or scoring formulas; it only defines the vocabulary
// the engine and its callers share.

pub mod candidate;
pub mod normalize;
pub mod tier;

pub use candidate::{Candidate, KeywordSource};
pub use normalize::{normalize, token_count};
pub use tier::{Tier, TierBoundaries};

/// Error type for keyword inputs that cannot enter the pipeline.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeywordError {
    /// The seed keyword normalized to an empty string.
    #[error("seed keyword is empty after normalization")]
    EmptySeed,
}
