//! Scored dimensions and tier classification.
//!
//! Every company carries a total score and three sub-scores. Each dimension has
//! a fixed ceiling, and a score is classified into a [`ScoreTier`] by the share
//! of its ceiling it reaches. Tiers only drive display styling.

use std::fmt;

/// Percentage at or above which a score is classified as [`ScoreTier::High`].
pub const HIGH_TIER_PERCENT: f64 = 75.0;

/// Percentage at or above which a score is classified as [`ScoreTier::Medium`].
pub const MEDIUM_TIER_PERCENT: f64 = 50.0;

/// A scored dimension of a warranty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreDimension {
    /// Overall rating, out of 20.
    Total,
    /// How clearly the warranty terms are written, out of 3.
    Clarity,
    /// What the warranty actually covers, out of 10.
    Coverage,
    /// How easy the claim process is, out of 7.
    Process,
}

impl ScoreDimension {
    /// The three sub-dimensions shown on each card, in display order.
    pub const BREAKDOWN: [Self; 3] = [Self::Clarity, Self::Coverage, Self::Process];

    /// Returns the fixed ceiling for this dimension.
    #[must_use]
    pub const fn max(self) -> u8 {
        match self {
            Self::Total => 20,
            Self::Clarity => 3,
            Self::Coverage => 10,
            Self::Process => 7,
        }
    }

    /// Returns the display label for this dimension.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Clarity => "Clarity",
            Self::Coverage => "Coverage",
            Self::Process => "Process",
        }
    }
}

/// High/medium/low classification of a score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    /// 75% of the ceiling or more.
    High,
    /// At least 50% and below 75%.
    Medium,
    /// Below 50%.
    Low,
}

/// A score paired with the ceiling of its dimension.
///
/// # Example
///
/// ```rust
/// use warranty_ratings::domain::{ScoreDisplay, ScoreTier};
///
/// let display = ScoreDisplay::new(5, 10);
/// assert_eq!(display.label(), "5/10");
/// assert_eq!(display.tier(), ScoreTier::Medium);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDisplay {
    pub score: u8,
    pub max: u8,
}

impl ScoreDisplay {
    #[must_use]
    pub const fn new(score: u8, max: u8) -> Self {
        Self { score, max }
    }

    /// Returns `score / max * 100`, or `0.0` when `max` is zero.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max) * 100.0
    }

    /// Classifies the score into a tier. Both thresholds are inclusive.
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        let percentage = self.percentage();
        if percentage >= HIGH_TIER_PERCENT {
            ScoreTier::High
        } else if percentage >= MEDIUM_TIER_PERCENT {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    /// Returns the `"score/max"` label.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_score_is_high() {
        assert_eq!(ScoreDisplay::new(3, 3).tier(), ScoreTier::High);
    }

    #[test]
    fn twenty_percent_is_low() {
        assert_eq!(ScoreDisplay::new(2, 10).tier(), ScoreTier::Low);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(ScoreDisplay::new(5, 10).tier(), ScoreTier::Medium);
        assert_eq!(ScoreDisplay::new(15, 20).tier(), ScoreTier::High);
        assert_eq!(ScoreDisplay::new(14, 20).tier(), ScoreTier::Medium);
        assert_eq!(ScoreDisplay::new(4, 10).tier(), ScoreTier::Low);
    }

    #[test]
    fn process_ceiling_of_seven_classifies_by_fraction() {
        // 5/7 is about 71%, 6/7 about 86%.
        assert_eq!(ScoreDisplay::new(5, 7).tier(), ScoreTier::Medium);
        assert_eq!(ScoreDisplay::new(6, 7).tier(), ScoreTier::High);
        assert_eq!(ScoreDisplay::new(3, 7).tier(), ScoreTier::Low);
    }

    #[test]
    fn zero_ceiling_does_not_divide() {
        let display = ScoreDisplay::new(4, 0);
        assert!(display.percentage().abs() < f64::EPSILON);
        assert_eq!(display.tier(), ScoreTier::Low);
    }

    #[test]
    fn label_is_score_over_max() {
        assert_eq!(ScoreDisplay::new(14, 20).label(), "14/20");
    }

    #[test]
    fn dimension_maxima() {
        assert_eq!(ScoreDimension::Total.max(), 20);
        assert_eq!(ScoreDimension::Clarity.max(), 3);
        assert_eq!(ScoreDimension::Coverage.max(), 10);
        assert_eq!(ScoreDimension::Process.max(), 7);
    }
}
