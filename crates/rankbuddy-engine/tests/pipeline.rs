//! End-to-end pipeline tests: generation -> scoring -> aggregation through
//! the public `RankBuddy` handle, covering the documented research
//! scenarios and the result-set invariants.

use rankbuddy_core::{KeywordSource, Tier};
use rankbuddy_engine::{KeywordError, ProviderSuggestions, RankBuddy, ResearchReport};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn research_offline(seed: &str) -> ResearchReport {
    RankBuddy::new()
        .research(seed, &[], true)
        .expect("offline research should succeed")
}

fn tier_counts(report: &ResearchReport) -> (usize, usize, usize) {
    (
        report.results.tier(Tier::Easy).count(),
        report.results.tier(Tier::Medium).count(),
        report.results.tier(Tier::Hard).count(),
    )
}

// ---------------------------------------------------------------------------
// Scenario 1: offline-only research
// ---------------------------------------------------------------------------

#[test]
fn offline_research_produces_scored_result_set() {
    let report = research_offline("content marketing");

    assert!(!report.results.is_empty());
    for candidate in &report.results.candidates {
        let difficulty = candidate.difficulty.expect("candidate must be scored");
        assert!(difficulty <= 100, "{:?} scored {difficulty}", candidate.text);
    }
}

#[test]
fn offline_research_contains_a_long_tail_candidate() {
    let report = research_offline("content marketing");
    assert!(
        report
            .results
            .candidates
            .iter()
            .any(|c| c.token_count() >= 3),
        "no long-tail candidate generated"
    );
}

#[test]
fn offline_research_contains_the_seed() {
    let report = research_offline("content marketing");
    assert!(
        report
            .results
            .candidates
            .iter()
            .any(|c| c.text == "content marketing")
    );
}

// ---------------------------------------------------------------------------
// Scenario 2: external suggestions
// ---------------------------------------------------------------------------

fn external_batch() -> Vec<ProviderSuggestions> {
    vec![ProviderSuggestions::new(
        "google",
        vec![
            "content marketing strategy for tech startups".to_string(),
            "content marketing".to_string(),
        ],
    )]
}

#[test]
fn external_duplicate_of_seed_collapses_to_one_candidate() {
    let engine = RankBuddy::new();
    let report = engine
        .research("content marketing", &external_batch(), false)
        .unwrap();

    let seed_matches: Vec<_> = report
        .results
        .candidates
        .iter()
        .filter(|c| c.text == "content marketing")
        .collect();
    assert_eq!(seed_matches.len(), 1);
    // The surviving candidate carries the external source tag.
    assert_eq!(
        seed_matches[0].source,
        KeywordSource::External("google".to_string())
    );
}

#[test]
fn external_long_tail_suggestion_is_retained_and_scored_lower() {
    let engine = RankBuddy::new();
    let report = engine
        .research("content marketing", &external_batch(), false)
        .unwrap();

    let long = report
        .results
        .candidates
        .iter()
        .find(|c| c.text == "content marketing strategy for tech startups")
        .expect("external suggestion should be retained");
    assert_eq!(long.source, KeywordSource::External("google".to_string()));

    let seed = report
        .results
        .candidates
        .iter()
        .find(|c| c.text == "content marketing")
        .unwrap();
    assert!(
        long.difficulty.unwrap() < seed.difficulty.unwrap(),
        "length discount should make the six-token suggestion easier"
    );
}

#[test]
fn empty_external_list_is_a_normal_offline_result() {
    let engine = RankBuddy::new();
    let offline = engine.research("content marketing", &[], true).unwrap();
    let degraded = engine
        .research(
            "content marketing",
            &[ProviderSuggestions::new("google", vec![])],
            false,
        )
        .unwrap();
    assert_eq!(offline, degraded);
}

// ---------------------------------------------------------------------------
// Scenario 3: invalid seed
// ---------------------------------------------------------------------------

#[test]
fn whitespace_seed_fails_with_empty_seed_error() {
    let engine = RankBuddy::new();
    assert_eq!(
        engine.research("  \t \n ", &[], true).unwrap_err(),
        KeywordError::EmptySeed
    );
    assert_eq!(
        engine.research("", &external_batch(), false).unwrap_err(),
        KeywordError::EmptySeed
    );
}

// ---------------------------------------------------------------------------
// Result-set invariants
// ---------------------------------------------------------------------------

#[test]
fn tier_partition_is_exhaustive_over_the_result_set() {
    for seed in ["seo", "content marketing", "indie hacker growth"] {
        let report = research_offline(seed);
        let (easy, medium, hard) = tier_counts(&report);
        assert_eq!(
            easy + medium + hard,
            report.results.len(),
            "partition not exhaustive for {seed:?}"
        );
        assert_eq!(report.results.summary.total, report.results.len());
    }
}

#[test]
fn result_set_is_sorted_by_difficulty_then_length_then_text() {
    let report = research_offline("content marketing");
    let candidates = &report.results.candidates;
    for pair in candidates.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let key_a = (a.difficulty, a.text.chars().count(), a.text.clone());
        let key_b = (b.difficulty, b.text.chars().count(), b.text.clone());
        assert!(key_a <= key_b, "{key_a:?} > {key_b:?}");
    }
}

#[test]
fn case_and_whitespace_variants_collapse() {
    let engine = RankBuddy::new();
    let external = vec![ProviderSuggestions::new(
        "google",
        vec![
            "Content Marketing".to_string(),
            "content   marketing".to_string(),
        ],
    )];
    let report = engine.research("content marketing", &external, false).unwrap();
    let matches = report
        .results
        .candidates
        .iter()
        .filter(|c| c.text == "content marketing")
        .count();
    assert_eq!(matches, 1);
}

#[test]
fn research_is_idempotent() {
    let engine = RankBuddy::new();
    let a = engine
        .research("content marketing", &external_batch(), false)
        .unwrap();
    let b = engine
        .research("content marketing", &external_batch(), false)
        .unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn report_serializes_to_json() {
    let report = research_offline("seo");
    let json = serde_json::to_value(&report).expect("report should serialize");
    assert_eq!(json["seed"], "seo");
    assert!(json["results"]["candidates"].as_array().is_some());
    // Source tags use the documented string form.
    let sources: Vec<_> = json["results"]["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["source"].as_str().unwrap().to_string())
        .collect();
    assert!(
        sources
            .iter()
            .all(|s| s == "offline-ngram" || s == "long-tail" || s.starts_with("external:"))
    );
}
