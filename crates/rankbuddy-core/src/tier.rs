// Difficulty tiers and their boundaries.

use std::fmt;

use serde::Serialize;

/// Presentation bucket for a difficulty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Easy => f.write_str("easy"),
            Tier::Medium => f.write_str("medium"),
            Tier::Hard => f.write_str("hard"),
        }
    }
}

/// Inclusive upper bounds of the Easy and Medium tiers.
///
/// With the defaults, Easy covers [0, 34], Medium [35, 64], and Hard takes
/// the rest up to 100. Any pair with `easy_max < medium_max` yields a total,
/// exhaustive partition of [0, 100]: every score lands in exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierBoundaries {
    pub easy_max: u8,
    pub medium_max: u8,
}

impl Default for TierBoundaries {
    fn default() -> Self {
        Self {
            easy_max: 34,
            medium_max: 64,
        }
    }
}

impl TierBoundaries {
    /// The tier a difficulty score falls into.
    pub fn tier_for(&self, difficulty: u8) -> Tier {
        if difficulty <= self.easy_max {
            Tier::Easy
        } else if difficulty <= self.medium_max {
            Tier::Medium
        } else {
            Tier::Hard
        }
    }
}
