//! Keyword research engine: related-keyword generation and difficulty
//! estimation over a seed keyword, with optional externally supplied
//! suggestion lists.
//!
//! The pipeline is a single synchronous pass with no I/O and no hidden
//! state: generation, scoring, and aggregation are pure functions of their
//! inputs plus an immutable lexical statistics table.
//!
//! # Architecture
//!
//! - [`lexicon`] -- immutable word-frequency table used as a competition prior
//! - [`similarity`] -- longest-common-subsequence similarity for dedup
//! - [`generator`] -- composable candidate expanders and the generation strategy
//! - [`difficulty`] -- weighted multi-signal difficulty estimator
//! - [`aggregate`] -- ordering, tier partitioning, and summary statistics
//! - [`content`] -- templated content-structure briefs and URL slugs
//! - [`handle`] -- [`handle::RankBuddy`], the top-level integration point

pub mod aggregate;
pub mod content;
pub mod difficulty;
pub mod generator;
pub mod handle;
pub mod lexicon;
pub mod similarity;

pub use aggregate::{ResultSet, Summary, aggregate};
pub use content::{ContentBrief, content_brief, url_slug};
pub use difficulty::{DifficultyEstimator, DifficultyWeights};
pub use generator::{
    GenerationOptions, GenerationStrategy, ProviderSuggestions, generate, offline_strategy,
};
pub use handle::{EngineOptions, RankBuddy, ResearchReport};
pub use lexicon::LexicalTable;
pub use rankbuddy_core::KeywordError;
pub use similarity::similarity;
