// rankbuddy-brief: print a templated content-structure brief for a keyword.
//
// Usage:
//   rankbuddy-brief [--json] KEYWORD...
//
// The arguments are joined into one keyword phrase.

use rankbuddy_engine::{RankBuddy, url_slug};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if rankbuddy_cli::wants_help(&args) || args.is_empty() {
        println!("rankbuddy-brief: suggest a content structure for a keyword.");
        println!();
        println!("Usage: rankbuddy-brief [--json] KEYWORD...");
        return;
    }

    let json = rankbuddy_cli::take_flag(&mut args, "--json");
    let keyword = args.join(" ");

    let engine = RankBuddy::new();
    let brief = engine
        .content_brief(&keyword)
        .unwrap_or_else(|e| rankbuddy_cli::fatal(&e.to_string()));

    if json {
        match serde_json::to_string_pretty(&brief) {
            Ok(out) => println!("{out}"),
            Err(e) => rankbuddy_cli::fatal(&format!("serialization failed: {e}")),
        }
        return;
    }

    println!("keyword: {}", brief.keyword);
    println!("slug: {}", url_slug(&brief.keyword));
    println!();
    println!("titles:");
    for title in &brief.titles {
        println!("  - {title}");
    }
    println!();
    println!("headings:");
    for heading in &brief.headings {
        println!("  - {heading}");
    }
    println!();
    println!("meta description: {}", brief.meta_description);
    println!(
        "target length: {} words at {:.1}% keyword density",
        brief.target_word_count,
        brief.keyword_density * 100.0
    );
}
