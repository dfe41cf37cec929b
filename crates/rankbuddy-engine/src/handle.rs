// RankBuddy: top-level integration point for keyword research.
//
// Owns the immutable lexical table, the offline generation strategy, and
// the engine options, and runs the generate -> score -> aggregate pipeline
// for each request. The handle holds no per-request state, so one instance
// serves any number of independent requests; concurrent callers share only
// the read-only table.

use serde::Serialize;

use rankbuddy_core::{KeywordError, TierBoundaries, normalize};

use crate::aggregate::{ResultSet, aggregate};
use crate::content::{ContentBrief, content_brief};
use crate::difficulty::{DifficultyEstimator, DifficultyWeights};
use crate::generator::{
    GenerationOptions, GenerationStrategy, ProviderSuggestions, generate, offline_strategy,
};
use crate::lexicon::LexicalTable;

/// Every configurable default of the engine, gathered in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    pub generation: GenerationOptions,
    pub weights: DifficultyWeights,
    pub tier_boundaries: TierBoundaries,
    /// How many related keywords a content brief weaves into its headings.
    pub max_brief_related: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            generation: GenerationOptions::default(),
            weights: DifficultyWeights::default(),
            tier_boundaries: TierBoundaries::default(),
            max_brief_related: 4,
        }
    }
}

/// The structured result of one research request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResearchReport {
    /// The seed keyword in normalized form.
    pub seed: String,
    pub results: ResultSet,
}

/// Top-level handle owning the lexical table, generation strategy, and
/// options.
pub struct RankBuddy {
    lexicon: LexicalTable,
    strategy: GenerationStrategy,
    options: EngineOptions,
}

impl RankBuddy {
    /// Handle with the embedded lexical table and default options.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Handle with the embedded lexical table and custom options.
    pub fn with_options(options: EngineOptions) -> Self {
        Self::with_table(LexicalTable::embedded(), options)
    }

    /// Handle with a caller-supplied lexical table.
    pub fn with_table(lexicon: LexicalTable, options: EngineOptions) -> Self {
        Self {
            lexicon,
            strategy: offline_strategy(),
            options,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Run the full pipeline for one seed keyword: generation (offline
    /// expansion plus any external batches), difficulty scoring, and
    /// aggregation into an ordered, tier-partitioned result set.
    ///
    /// Empty external batches are normal input and produce an offline-only
    /// result; a seed that normalizes to empty fails with
    /// [`KeywordError::EmptySeed`] before any work is done.
    pub fn research(
        &self,
        seed: &str,
        external: &[ProviderSuggestions],
        offline_only: bool,
    ) -> Result<ResearchReport, KeywordError> {
        let candidates = generate(
            &self.strategy,
            seed,
            external,
            offline_only,
            &self.options.generation,
        )?;

        let estimator = DifficultyEstimator::with_weights(&self.lexicon, self.options.weights);
        let scored = candidates
            .into_iter()
            .map(|mut candidate| {
                candidate.difficulty = Some(estimator.score(&candidate.text));
                candidate
            })
            .collect();

        Ok(ResearchReport {
            seed: normalize(seed),
            results: aggregate(scored, self.options.tier_boundaries),
        })
    }

    /// Difficulty score for a single keyword.
    pub fn score(&self, keyword: &str) -> Result<u8, KeywordError> {
        let keyword = normalize(keyword);
        if keyword.is_empty() {
            return Err(KeywordError::EmptySeed);
        }
        let estimator = DifficultyEstimator::with_weights(&self.lexicon, self.options.weights);
        Ok(estimator.score(&keyword))
    }

    /// Content brief for a keyword, weaving in the easiest related
    /// keywords from an offline research pass.
    pub fn content_brief(&self, keyword: &str) -> Result<ContentBrief, KeywordError> {
        let report = self.research(keyword, &[], true)?;
        let related: Vec<&str> = report
            .results
            .candidates
            .iter()
            .map(|c| c.text.as_str())
            .filter(|text| *text != report.seed)
            .take(self.options.max_brief_related)
            .collect();
        Ok(content_brief(&report.seed, &related))
    }
}

impl Default for RankBuddy {
    fn default() -> Self {
        Self::new()
    }
}
