// rankbuddy-research: generate and score related keywords for a seed.
//
// The seed keyword is taken from the command-line arguments (joined with
// spaces). External suggestions can be supplied from a file, one per line,
// standing in for whatever provider fetched them.
//
// Usage:
//   rankbuddy-research [OPTIONS] SEED...
//
// Options:
//   --offline            Ignore any supplied suggestions file
//   --suggestions FILE   File with external suggestions, one per line
//   --provider NAME      Provider tag for the suggestions file (default: file)
//   --json               Print the full report as JSON
//   -h, --help           Print help

use rankbuddy_engine::{ProviderSuggestions, RankBuddy, ResearchReport};
use rankbuddy_core::Tier;

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if rankbuddy_cli::wants_help(&args) || args.is_empty() {
        println!("rankbuddy-research: generate and score related keywords.");
        println!();
        println!("Usage: rankbuddy-research [OPTIONS] SEED...");
        println!();
        println!("Options:");
        println!("  --offline            Ignore any supplied suggestions file");
        println!("  --suggestions FILE   File with external suggestions, one per line");
        println!("  --provider NAME      Provider tag for the suggestions file (default: file)");
        println!("  --json               Print the full report as JSON");
        println!("  -h, --help           Print this help");
        return;
    }

    let json = rankbuddy_cli::take_flag(&mut args, "--json");
    let offline = rankbuddy_cli::take_flag(&mut args, "--offline");
    let suggestions_file = rankbuddy_cli::take_value(&mut args, "--suggestions");
    let provider = rankbuddy_cli::take_value(&mut args, "--provider")
        .unwrap_or_else(|| "file".to_string());

    let seed = args.join(" ");
    let external = match suggestions_file {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| rankbuddy_cli::fatal(&format!("cannot read {path}: {e}")));
            let suggestions = contents
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| line.to_string())
                .collect();
            vec![ProviderSuggestions::new(provider, suggestions)]
        }
        None => Vec::new(),
    };

    let engine = RankBuddy::new();
    let report = engine
        .research(&seed, &external, offline)
        .unwrap_or_else(|e| rankbuddy_cli::fatal(&e.to_string()));

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(e) => rankbuddy_cli::fatal(&format!("serialization failed: {e}")),
        }
    } else {
        print_report(&report);
    }
}

fn print_report(report: &ResearchReport) {
    let summary = &report.results.summary;
    println!("seed: {}", report.seed);
    println!(
        "keywords: {}  (short-tail: {}, long-tail: {})  mean difficulty: {:.1}",
        summary.total, summary.short_tail, summary.long_tail, summary.mean_difficulty
    );

    for tier in [Tier::Easy, Tier::Medium, Tier::Hard] {
        let in_tier: Vec<_> = report.results.tier(tier).collect();
        println!();
        println!("{} ({})", tier.to_string().to_uppercase(), in_tier.len());
        for candidate in in_tier {
            println!(
                "  {:>3}  {}  [{}]",
                candidate.difficulty.unwrap_or(0),
                candidate.text,
                candidate.source
            );
        }
    }
}
