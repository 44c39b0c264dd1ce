//! Bounded scores and their display bands

use serde::{Serialize, Serializer};
use std::fmt;

/// Lowest score the analysis will ever report.
pub const MIN_SCORE: f64 = 0.1;
/// Highest score the analysis will ever report.
pub const MAX_SCORE: f64 = 0.9;

/// A score in `[MIN_SCORE, MAX_SCORE]`.
///
/// The analysis never claims absolute truth or falsehood, so both ends of the
/// unit interval are cut off.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// Clamp an arbitrary value into range. NaN lands on the floor.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Score(MIN_SCORE);
        }
        Score(value.clamp(MIN_SCORE, MAX_SCORE))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole-number percentage used for display and banding.
    pub fn percentage(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }

    pub fn band(self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage())
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Three-way categorical banding of a score: `< 40%`, `40-70%`, `>= 70%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    LikelyMisleading,
    PotentiallyMisleading,
    LikelyTruthful,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 70 {
            ScoreBand::LikelyTruthful
        } else if percentage >= 40 {
            ScoreBand::PotentiallyMisleading
        } else {
            ScoreBand::LikelyMisleading
        }
    }

    /// Label shown next to the truth meter
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::LikelyTruthful => "Likely Truthful",
            ScoreBand::PotentiallyMisleading => "Potentially Misleading",
            ScoreBand::LikelyMisleading => "Likely Misleading",
        }
    }

    /// Short badge used in history listings
    pub fn badge(self) -> &'static str {
        match self {
            ScoreBand::LikelyTruthful => "Truthful",
            ScoreBand::PotentiallyMisleading => "Ambiguous",
            ScoreBand::LikelyMisleading => "Misleading",
        }
    }

    /// One-line notice printed when an analysis completes
    pub fn notice(self) -> &'static str {
        match self {
            ScoreBand::LikelyTruthful => "Likely truthful content",
            ScoreBand::PotentiallyMisleading => "Content contains potentially misleading elements",
            ScoreBand::LikelyMisleading => "Content appears highly misleading",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            ScoreBand::LikelyTruthful => "✅",
            ScoreBand::PotentiallyMisleading => "⚠️",
            ScoreBand::LikelyMisleading => "❌",
        }
    }
}
