//! Goal progress and tier classification.
//!
//! A zero goal never produces NaN or infinity: the ratio is undefined, the
//! progress reads as 0% and the tier is [`ProgressTier::Danger`].

use serde::{Deserialize, Serialize};

/// Progress at or above this value is on track
pub const SUCCESS_THRESHOLD: i64 = 85;
/// Progress at or above this value (and below success) is close
pub const WARNING_THRESHOLD: i64 = 60;

/// Visual tier of a progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTier {
    Success,
    Warning,
    Danger,
}

impl ProgressTier {
    pub fn from_progress(progress: i64) -> Self {
        if progress >= SUCCESS_THRESHOLD {
            ProgressTier::Success
        } else if progress >= WARNING_THRESHOLD {
            ProgressTier::Warning
        } else {
            ProgressTier::Danger
        }
    }

    /// Modifier used in css classes (`status--success`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressTier::Success => "success",
            ProgressTier::Warning => "warning",
            ProgressTier::Danger => "danger",
        }
    }
}

/// `current / goal`, or `None` when the goal is zero or an input is not finite
pub fn ratio(current: f64, goal: f64) -> Option<f64> {
    if goal == 0.0 || !goal.is_finite() || !current.is_finite() {
        return None;
    }
    Some(current / goal)
}

/// `round(current / goal * 100)`, not clamped
pub fn progress_percent(current: f64, goal: f64) -> i64 {
    ratio(current, goal)
        .map(|r| (r * 100.0).round() as i64)
        .unwrap_or(0)
}

/// Progress limited to `0..=100`, used for bar widths
pub fn clamped_progress(current: f64, goal: f64) -> i64 {
    progress_percent(current, goal).clamp(0, 100)
}

/// Amount still missing to reach the goal, never negative
pub fn remaining_to_goal(commission: f64, goal: f64) -> f64 {
    let remaining = goal - commission;
    if remaining > 0.0 {
        remaining
    } else {
        0.0
    }
}

/// Snapshot of a goal used by the summary cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub progress: i64,
    pub clamped: i64,
    pub tier: ProgressTier,
    pub remaining: f64,
    pub reached: bool,
}

impl GoalProgress {
    pub fn new(current: f64, goal: f64) -> Self {
        let progress = progress_percent(current, goal);
        let clamped = clamped_progress(current, goal);
        Self {
            progress,
            clamped,
            // Summary cards classify the clamped value
            tier: ProgressTier::from_progress(clamped),
            remaining: remaining_to_goal(current, goal),
            reached: clamped >= 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_rounds() {
        assert_eq!(progress_percent(35000.0, 48000.0), 73);
        assert_eq!(progress_percent(12.0, 15.0), 80);
        assert_eq!(progress_percent(92.0, 95.0), 97);
        assert_eq!(progress_percent(50000.0, 50000.0), 100);
        assert_eq!(progress_percent(48000.0, 45000.0), 107);
    }

    #[test]
    fn test_progress_stays_in_range_when_current_below_goal() {
        for goal in [1.0, 7.0, 15.0, 999.0, 50000.0] {
            let mut current = 0.0;
            while current <= goal {
                let p = progress_percent(current, goal);
                assert!((0..=100).contains(&p), "{current}/{goal} -> {p}");
                assert_eq!(p, (current / goal * 100.0).round() as i64);
                current += goal / 13.0;
            }
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ProgressTier::from_progress(85), ProgressTier::Success);
        assert_eq!(ProgressTier::from_progress(84), ProgressTier::Warning);
        assert_eq!(ProgressTier::from_progress(60), ProgressTier::Warning);
        assert_eq!(ProgressTier::from_progress(59), ProgressTier::Danger);
        assert_eq!(ProgressTier::from_progress(0), ProgressTier::Danger);
    }

    #[test]
    fn test_zero_goal_is_danger_not_nan() {
        assert_eq!(ratio(10.0, 0.0), None);
        assert_eq!(progress_percent(10.0, 0.0), 0);
        assert_eq!(clamped_progress(10.0, 0.0), 0);
        assert_eq!(GoalProgress::new(10.0, 0.0).tier, ProgressTier::Danger);
        assert_eq!(ratio(f64::NAN, 10.0), None);
    }

    #[test]
    fn test_clamped_progress() {
        assert_eq!(clamped_progress(48000.0, 45000.0), 100);
        assert_eq!(clamped_progress(-10.0, 100.0), 0);
    }

    #[test]
    fn test_remaining_to_goal() {
        assert_eq!(remaining_to_goal(42500.0, 50000.0), 7500.0);
        assert_eq!(remaining_to_goal(48000.0, 45000.0), 0.0);
    }

    #[test]
    fn test_goal_progress_snapshot() {
        let summary = GoalProgress::new(42500.0, 50000.0);
        assert_eq!(summary.progress, 85);
        assert_eq!(summary.tier, ProgressTier::Success);
        assert!(!summary.reached);

        let reached = GoalProgress::new(48000.0, 45000.0);
        assert_eq!(reached.progress, 107);
        assert_eq!(reached.clamped, 100);
        assert!(reached.reached);
        assert_eq!(reached.remaining, 0.0);
    }
}
