// rankbuddy-score: print difficulty scores for keywords.
//
// Reads keywords from the command-line arguments (one keyword per
// argument, quote multi-word keywords) or, with no arguments, from stdin
// one per line.
//
// Usage:
//   rankbuddy-score [--json] [KEYWORD...]

use rankbuddy_engine::RankBuddy;

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if rankbuddy_cli::wants_help(&args) {
        println!("rankbuddy-score: estimate keyword difficulty (0-100).");
        println!();
        println!("Usage: rankbuddy-score [--json] [KEYWORD...]");
        println!();
        println!("If KEYWORD arguments are given, scores each one.");
        println!("Otherwise reads keywords from stdin (one per line).");
        return;
    }

    let json = rankbuddy_cli::take_flag(&mut args, "--json");
    let keywords = if args.is_empty() {
        rankbuddy_cli::read_stdin_lines()
    } else {
        args
    };

    let engine = RankBuddy::new();
    let mut scored = Vec::with_capacity(keywords.len());
    for keyword in &keywords {
        match engine.score(keyword) {
            Ok(difficulty) => scored.push((keyword.clone(), difficulty)),
            Err(e) => rankbuddy_cli::fatal(&format!("{keyword:?}: {e}")),
        }
    }

    if json {
        let entries: Vec<_> = scored
            .iter()
            .map(|(keyword, difficulty)| {
                serde_json::json!({ "keyword": keyword, "difficulty": difficulty })
            })
            .collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(out) => println!("{out}"),
            Err(e) => rankbuddy_cli::fatal(&format!("serialization failed: {e}")),
        }
    } else {
        for (keyword, difficulty) in scored {
            println!("{difficulty:>3}  {keyword}");
        }
    }
}
