// Content-structure templating: title suggestions, section headings, meta
// description, and URL slug for a target keyword. Pure string templating,
// no I/O; rendering to Markdown or HTML belongs to presentation
// collaborators.

use serde::Serialize;

/// Recommended article length in words.
const TARGET_WORD_COUNT: u32 = 2000;

/// Recommended keyword density (1.5%).
const KEYWORD_DENSITY: f64 = 0.015;

/// A templated content-structure suggestion for one keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBrief {
    pub keyword: String,
    pub titles: Vec<String>,
    pub headings: Vec<String>,
    pub meta_description: String,
    pub target_word_count: u32,
    pub keyword_density: f64,
}

/// Build a content brief for a normalized keyword, weaving the given
/// related keywords into the heading list.
pub fn content_brief(keyword: &str, related: &[&str]) -> ContentBrief {
    let t = title_case(keyword);

    let titles = vec![
        format!("Complete Guide to {t}"),
        format!("How to Master {t}: Expert Tips"),
        format!("{t}: Everything You Need to Know"),
        format!("Ultimate {t} Tutorial for Beginners"),
        format!("Advanced {t}: Best Practices"),
    ];

    let mut headings = vec![
        format!("What Is {t}?"),
        format!("Why {t} Matters"),
        format!("Getting Started with {t}"),
        format!("Advanced {t} Strategies"),
        format!("Common {t} Mistakes to Avoid"),
        format!("Best {t} Tools and Resources"),
    ];
    for rel in related {
        headings.push(title_case(rel));
    }

    ContentBrief {
        keyword: keyword.to_string(),
        titles,
        headings,
        meta_description: format!(
            "Master {keyword} with our comprehensive guide. Learn proven strategies, \
             avoid common mistakes, and get expert tips for success."
        ),
        target_word_count: TARGET_WORD_COUNT,
        keyword_density: KEYWORD_DENSITY,
    }
}

/// URL slug for a keyword: lowercase alphanumeric runs joined by single
/// hyphens, with no leading or trailing hyphen.
pub fn url_slug(keyword: &str) -> String {
    let mut slug = String::with_capacity(keyword.len());
    let mut pending_hyphen = false;
    for ch in keyword.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
