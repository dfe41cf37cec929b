// Candidate generation module.
//
// Produces related and long-tail keyword candidates for a seed keyword by
// combining it with fixed modifier tables, optionally augmented with
// already-fetched external suggestion lists.
//
// Architecture:
//   - `modifiers`: the fixed modifier-word and phrase tables
//   - `expanders`: individual expansion generators (CandidateExpander trait)
//   - `status`: tracking object for deduplication and acceptance caps
//   - `strategy`: orchestrator that composes expanders into the offline pass

pub mod expanders;
pub mod modifiers;
pub mod status;
pub mod strategy;

pub use expanders::CandidateExpander;
pub use status::GenerationStatus;
pub use strategy::{GenerationStrategy, offline_strategy};

use rankbuddy_core::{Candidate, KeywordError, KeywordSource, normalize};

/// A batch of raw suggestion strings fetched by one external provider.
///
/// Providers are opaque to the engine: whatever collaborator performed the
/// lookup passes the strings in here, already fetched. An empty batch is
/// normal input, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSuggestions {
    pub provider: String,
    pub suggestions: Vec<String>,
}

impl ProviderSuggestions {
    pub fn new(provider: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            provider: provider.into(),
            suggestions,
        }
    }
}

/// Tunable knobs for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    /// Candidates more similar than this to an accepted candidate are
    /// treated as near-duplicates.
    pub similarity_threshold: f64,
    /// Acceptance cap for offline n-gram candidates.
    pub max_related: usize,
    /// Acceptance cap for offline long-tail candidates.
    pub max_long_tail: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.92,
            max_related: 30,
            max_long_tail: 20,
        }
    }
}

/// Run one generation pass: the offline strategy always runs; external
/// batches are folded in afterwards unless `offline_only` is set.
///
/// Fails only when the seed normalizes to an empty string. External
/// suggestions are trusted for topical relevance and are only normalized
/// and deduplicated; offline candidates yield to external ones on
/// duplicate conflicts.
pub fn generate(
    strategy: &GenerationStrategy,
    seed: &str,
    external: &[ProviderSuggestions],
    offline_only: bool,
    options: &GenerationOptions,
) -> Result<Vec<Candidate>, KeywordError> {
    let seed = normalize(seed);
    if seed.is_empty() {
        return Err(KeywordError::EmptySeed);
    }

    let mut status = GenerationStatus::new(options);
    strategy.run(&seed, &mut status);

    if !offline_only {
        for batch in external {
            for raw in &batch.suggestions {
                status.add_candidate(raw, KeywordSource::External(batch.provider.clone()));
            }
        }
    }

    Ok(status.into_candidates())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_seed_is_rejected() {
        let strategy = offline_strategy();
        let err = generate(&strategy, "   \t ", &[], true, &GenerationOptions::default());
        assert_eq!(err.unwrap_err(), KeywordError::EmptySeed);
    }

    #[test]
    fn offline_generation_is_nonempty_for_any_seed() {
        let strategy = offline_strategy();
        let options = GenerationOptions::default();
        for seed in ["seo", "content marketing", "q", "indie hacker growth"] {
            let candidates = generate(&strategy, seed, &[], true, &options).unwrap();
            assert!(!candidates.is_empty(), "no candidates for {seed:?}");
        }
    }

    #[test]
    fn offline_counts_stay_within_targets() {
        let strategy = offline_strategy();
        let options = GenerationOptions::default();
        let candidates = generate(&strategy, "content marketing", &[], true, &options).unwrap();

        let related = candidates
            .iter()
            .filter(|c| c.source == KeywordSource::OfflineNgram)
            .count();
        let long_tail = candidates
            .iter()
            .filter(|c| c.source == KeywordSource::LongTail)
            .count();
        assert!((15..=30).contains(&related), "related count {related}");
        assert!((10..=20).contains(&long_tail), "long-tail count {long_tail}");
    }

    #[test]
    fn long_tail_candidates_have_three_or_more_tokens() {
        let strategy = offline_strategy();
        let candidates = generate(
            &strategy,
            "seo",
            &[],
            true,
            &GenerationOptions::default(),
        )
        .unwrap();
        for c in candidates.iter().filter(|c| c.source == KeywordSource::LongTail) {
            assert!(c.is_long_tail(), "{:?} is not long-tail", c.text);
        }
    }

    #[test]
    fn external_suggestions_are_tagged_with_provider() {
        let strategy = offline_strategy();
        let external = vec![ProviderSuggestions::new(
            "datamuse",
            vec!["seo keyword research automation tools".to_string()],
        )];
        let candidates = generate(
            &strategy,
            "seo",
            &external,
            false,
            &GenerationOptions::default(),
        )
        .unwrap();
        let tagged: Vec<_> = candidates
            .iter()
            .filter(|c| c.source == KeywordSource::External("datamuse".to_string()))
            .collect();
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].text, "seo keyword research automation tools");
    }

    #[test]
    fn offline_only_ignores_external_batches() {
        let strategy = offline_strategy();
        let external = vec![ProviderSuggestions::new(
            "google",
            vec!["completely unrelated xylophone repair".to_string()],
        )];
        let candidates = generate(
            &strategy,
            "seo",
            &external,
            true,
            &GenerationOptions::default(),
        )
        .unwrap();
        assert!(candidates.iter().all(|c| c.source.is_offline()));
    }

    #[test]
    fn empty_external_batches_fall_back_to_offline_result() {
        let strategy = offline_strategy();
        let options = GenerationOptions::default();
        let offline = generate(&strategy, "seo", &[], true, &options).unwrap();
        let with_empty = generate(
            &strategy,
            "seo",
            &[ProviderSuggestions::new("google", vec![])],
            false,
            &options,
        )
        .unwrap();
        assert_eq!(offline, with_empty);
    }

    #[test]
    fn external_duplicate_of_seed_upgrades_source() {
        let strategy = offline_strategy();
        let external = vec![ProviderSuggestions::new(
            "google",
            vec!["Content   Marketing".to_string()],
        )];
        let candidates = generate(
            &strategy,
            "content marketing",
            &external,
            false,
            &GenerationOptions::default(),
        )
        .unwrap();
        let seed_candidates: Vec<_> = candidates
            .iter()
            .filter(|c| c.text == "content marketing")
            .collect();
        assert_eq!(seed_candidates.len(), 1);
        assert_eq!(
            seed_candidates[0].source,
            KeywordSource::External("google".to_string())
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let strategy = offline_strategy();
        let options = GenerationOptions::default();
        let external = vec![ProviderSuggestions::new(
            "datamuse",
            vec!["seo for saas founders".to_string()],
        )];
        let a = generate(&strategy, "seo", &external, false, &options).unwrap();
        let b = generate(&strategy, "seo", &external, false, &options).unwrap();
        assert_eq!(a, b);
    }
}
