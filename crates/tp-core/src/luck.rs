//! Luck scoring over a die's recent rolls.
//!
//! A die's luck is the z-score of the sum of its most recent rolls under the
//! null hypothesis of a fair die: how many standard deviations the observed
//! total sits above or below the expected total. The score is then bucketed
//! into one of five [`LuckTier`]s.

use serde::{Deserialize, Serialize};

/// Number of trailing rolls examined when scoring luck.
pub const LUCK_WINDOW: usize = 10;

/// Scores strictly above this (and at or below [`VERY_LUCKY_THRESHOLD`]) are lucky.
pub const LUCKY_THRESHOLD: f64 = 2.0;

/// Scores strictly above this are very lucky.
pub const VERY_LUCKY_THRESHOLD: f64 = 3.0;

/// Expected value of a single roll of a fair die: `(sides + 1) / 2`.
pub fn expected_mean(sides: u32) -> f64 {
    (f64::from(sides) + 1.0) / 2.0
}

/// Variance of a single roll of a fair die: `(sides² - 1) / 12`.
pub fn variance(sides: u32) -> f64 {
    let s = f64::from(sides);
    (s * s - 1.0) / 12.0
}

/// Standard deviation of a single roll of a fair die.
pub fn std_dev(sides: u32) -> f64 {
    variance(sides).max(0.0).sqrt()
}

/// Sum of a run of rolls.
pub fn sum(rolls: &[u32]) -> u64 {
    rolls.iter().map(|&r| u64::from(r)).sum()
}

/// Mean of a run of rolls. An empty run reports the expected mean.
pub fn mean(rolls: &[u32], sides: u32) -> f64 {
    if rolls.is_empty() {
        return expected_mean(sides);
    }
    sum(rolls) as f64 / rolls.len() as f64
}

/// Z-score of the sum of `rolls` against a fair `sides`-sided die.
///
/// Returns `0.0` for an empty run or a die with fewer than two sides,
/// where the variance is zero and no deviation can be measured.
pub fn z_score(rolls: &[u32], sides: u32) -> f64 {
    if rolls.is_empty() || sides <= 1 {
        return 0.0;
    }
    let n = rolls.len() as f64;
    let expected_total = n * expected_mean(sides);
    let total_std_dev = (n * variance(sides)).sqrt();
    (sum(rolls) as f64 - expected_total) / total_std_dev
}

/// Luck score of a history using the default [`LuckModel`].
pub fn luck_score(history: &[u32], sides: u32) -> f64 {
    LuckModel::default().score(history, sides)
}

/// Window and minimum-sample parameters for luck scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckModel {
    /// How many of the most recent rolls are scored.
    pub window: usize,
    /// Histories shorter than this score as neutral.
    pub min_history: usize,
}

impl Default for LuckModel {
    fn default() -> Self {
        Self {
            window: LUCK_WINDOW,
            min_history: LUCK_WINDOW,
        }
    }
}

impl LuckModel {
    /// Set the scoring window (at least one roll).
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Set the minimum history length needed before luck is measured.
    pub fn with_min_history(mut self, min_history: usize) -> Self {
        self.min_history = min_history;
        self
    }

    /// Score the trailing window of `history` for a `sides`-sided die.
    pub fn score(&self, history: &[u32], sides: u32) -> f64 {
        if history.len() < self.min_history {
            return 0.0;
        }
        let n = history.len().min(self.window);
        z_score(&history[history.len() - n..], sides)
    }

    /// Score `history` and bucket the result into a tier.
    pub fn tier(&self, history: &[u32], sides: u32) -> LuckTier {
        LuckTier::from_score(self.score(history, sides))
    }
}

/// A die's luck, bucketed from its score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LuckTier {
    /// Score below -3.
    VeryUnlucky,
    /// Score in [-3, -2).
    Unlucky,
    /// Score in [-2, 2].
    #[default]
    Neutral,
    /// Score in (2, 3].
    Lucky,
    /// Score above 3.
    VeryLucky,
}

impl LuckTier {
    /// Bucket a luck score. Non-finite scores are neutral.
    pub fn from_score(score: f64) -> Self {
        if score > VERY_LUCKY_THRESHOLD {
            Self::VeryLucky
        } else if score > LUCKY_THRESHOLD {
            Self::Lucky
        } else if score < -VERY_LUCKY_THRESHOLD {
            Self::VeryUnlucky
        } else if score < -LUCKY_THRESHOLD {
            Self::Unlucky
        } else {
            Self::Neutral
        }
    }

    /// True for the two lucky tiers.
    pub fn is_lucky(self) -> bool {
        matches!(self, Self::Lucky | Self::VeryLucky)
    }

    /// True for the two unlucky tiers.
    pub fn is_unlucky(self) -> bool {
        matches!(self, Self::Unlucky | Self::VeryUnlucky)
    }
}

impl std::fmt::Display for LuckTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VeryUnlucky => write!(f, "very unlucky"),
            Self::Unlucky => write!(f, "unlucky"),
            Self::Neutral => write!(f, "neutral"),
            Self::Lucky => write!(f, "lucky"),
            Self::VeryLucky => write!(f, "very lucky"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.001;

    fn window_of(value: u32) -> Vec<u32> {
        vec![value; LUCK_WINDOW]
    }

    #[test]
    fn expected_mean_per_die() {
        assert!((expected_mean(4) - 2.5).abs() < EPS);
        assert!((expected_mean(6) - 3.5).abs() < EPS);
        assert!((expected_mean(20) - 10.5).abs() < EPS);
    }

    #[test]
    fn variance_and_std_dev_d6() {
        assert!((variance(6) - 2.9167).abs() < EPS);
        assert!((std_dev(6) - 1.7078).abs() < EPS);
    }

    #[test]
    fn std_dev_degenerate_die_is_zero() {
        assert_eq!(std_dev(1), 0.0);
        assert_eq!(std_dev(0), 0.0);
    }

    #[test]
    fn mean_of_rolls() {
        assert!((mean(&[1, 2, 3, 4, 5], 6) - 3.0).abs() < EPS);
        assert!((mean(&[], 6) - 3.5).abs() < EPS);
    }

    #[test]
    fn z_score_direction() {
        assert!(z_score(&[1, 2, 3, 4, 5, 6], 6).abs() < 0.1);
        assert!(z_score(&[6, 6, 5, 6, 6], 6) > 0.0);
        assert!(z_score(&[1, 1, 2, 1, 1], 6) < 0.0);
    }

    #[test]
    fn z_score_guards() {
        assert_eq!(z_score(&[], 6), 0.0);
        assert_eq!(z_score(&[1, 1, 1], 1), 0.0);
    }

    #[test]
    fn short_history_is_neutral() {
        let history = vec![10; LUCK_WINDOW - 1];
        assert_eq!(luck_score(&history, 10), 0.0);
        assert_eq!(LuckModel::default().tier(&history, 10), LuckTier::Neutral);
    }

    #[test]
    fn all_nines_on_d10_is_very_lucky() {
        let score = luck_score(&window_of(9), 10);
        assert!((score - 3.853).abs() < EPS, "score was {score}");
        assert_eq!(LuckTier::from_score(score), LuckTier::VeryLucky);
    }

    #[test]
    fn all_eights_on_d10_is_lucky() {
        let model = LuckModel::default();
        assert_eq!(model.tier(&window_of(8), 10), LuckTier::Lucky);
    }

    #[test]
    fn all_threes_on_d10_is_unlucky() {
        let model = LuckModel::default();
        assert_eq!(model.tier(&window_of(3), 10), LuckTier::Unlucky);
    }

    #[test]
    fn all_twos_on_d10_is_very_unlucky() {
        let model = LuckModel::default();
        assert_eq!(model.tier(&window_of(2), 10), LuckTier::VeryUnlucky);
    }

    #[test]
    fn centred_window_is_neutral() {
        let model = LuckModel::default();
        let centred: Vec<u32> = [5, 6].iter().copied().cycle().take(LUCK_WINDOW).collect();
        assert_eq!(model.score(&centred, 10), 0.0);
        assert_eq!(model.tier(&window_of(5), 10), LuckTier::Neutral);
    }

    #[test]
    fn only_the_trailing_window_counts() {
        let mut history = vec![1; 25];
        history.extend(window_of(9));
        assert_eq!(LuckModel::default().tier(&history, 10), LuckTier::VeryLucky);
    }

    #[test]
    fn degenerate_die_scores_neutral() {
        assert_eq!(luck_score(&window_of(1), 1), 0.0);
    }

    #[test]
    fn custom_model_scores_partial_window() {
        let model = LuckModel::default().with_window(4).with_min_history(3);
        // (30 - 16.5) / sqrt(3 * 8.25) = 2.71
        assert_eq!(model.tier(&[10, 10, 10], 10), LuckTier::Lucky);
        assert_eq!(model.score(&[10, 10], 10), 0.0);
    }

    #[test]
    fn window_is_at_least_one() {
        assert_eq!(LuckModel::default().with_window(0).window, 1);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(LuckTier::from_score(3.0), LuckTier::Lucky);
        assert_eq!(LuckTier::from_score(3.0001), LuckTier::VeryLucky);
        assert_eq!(LuckTier::from_score(2.0), LuckTier::Neutral);
        assert_eq!(LuckTier::from_score(-2.0), LuckTier::Neutral);
        assert_eq!(LuckTier::from_score(-2.0001), LuckTier::Unlucky);
        assert_eq!(LuckTier::from_score(-3.0), LuckTier::Unlucky);
        assert_eq!(LuckTier::from_score(-3.0001), LuckTier::VeryUnlucky);
        assert_eq!(LuckTier::from_score(f64::NAN), LuckTier::Neutral);
    }

    #[test]
    fn tier_ordering_and_helpers() {
        assert!(LuckTier::VeryUnlucky < LuckTier::Unlucky);
        assert!(LuckTier::Neutral < LuckTier::Lucky);
        assert!(LuckTier::VeryLucky.is_lucky());
        assert!(LuckTier::Unlucky.is_unlucky());
        assert!(!LuckTier::Neutral.is_lucky());
        assert!(!LuckTier::Neutral.is_unlucky());
    }

    #[test]
    fn tier_display() {
        assert_eq!(LuckTier::VeryLucky.to_string(), "very lucky");
        assert_eq!(LuckTier::Neutral.to_string(), "neutral");
        assert_eq!(LuckTier::VeryUnlucky.to_string(), "very unlucky");
    }

    #[test]
    fn tier_serde_roundtrip() {
        let json = serde_json::to_string(&LuckTier::VeryUnlucky).unwrap();
        assert_eq!(json, "\"very_unlucky\"");
        let tier: LuckTier = serde_json::from_str(&json).unwrap();
        assert_eq!(tier, LuckTier::VeryUnlucky);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tier_is_monotonic_in_score(a in -10.0f64..10.0, b in -10.0f64..10.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(LuckTier::from_score(lo) <= LuckTier::from_score(hi));
            }

            #[test]
            fn extreme_windows_score_on_the_right_side(sides in 2u32..=100) {
                let high = vec![sides; LUCK_WINDOW];
                let low = vec![1; LUCK_WINDOW];
                prop_assert!(luck_score(&high, sides) > 0.0);
                prop_assert!(luck_score(&low, sides) < 0.0);
            }
        }
    }
}
