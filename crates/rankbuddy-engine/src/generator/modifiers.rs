// Fixed modifier tables for offline candidate expansion.
//
// The tables are deliberately static: generation must be deterministic for
// identical inputs, so nothing here is sampled or time-dependent. Numeric
// list patterns use fixed numerals for the same reason.

/// Modifier words placed before the seed ("best content marketing").
pub const PREFIX_MODIFIERS: &[&str] = &[
    "best",
    "how to",
    "what is",
    "why",
    "top",
    "free",
    "easy",
    "ultimate",
    "complete",
    "quick",
    "proven",
    "advanced",
];

/// Modifier words placed after the seed ("content marketing guide").
pub const SUFFIX_MODIFIERS: &[&str] = &[
    "guide",
    "tutorial",
    "tips",
    "checklist",
    "examples",
    "tools",
    "review",
    "vs",
    "strategy",
    "ideas",
    "online",
    "framework",
];

/// Numeric list patterns placed before the seed ("7 tips for content
/// marketing").
pub const LIST_PATTERNS: &[&str] = &["5 ways to", "7 tips for", "10 best"];

/// Long-tail phrases appended to the seed. Each phrase has at least two
/// tokens so every expansion meets the three-token long-tail minimum.
pub const LONG_TAIL_PHRASES: &[&str] = &[
    "for beginners",
    "step by step",
    "complete guide",
    "best practices",
    "mistakes to avoid",
    "tips and tricks",
    "case study",
    "for small business",
    "with no experience",
    "that actually work",
    "you need to know",
    "for advanced users",
];
