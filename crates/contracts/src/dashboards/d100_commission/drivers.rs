use super::dto::{CommissionDriver, TrendPoint};
use super::progress::{progress_percent, ProgressTier};

/// Direction of the last step of a trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

/// Increasing iff there are at least two points and the last one is strictly higher
pub fn trend_direction(trend: &[TrendPoint]) -> TrendDirection {
    match trend {
        [.., previous, last] if last.value > previous.value => TrendDirection::Increasing,
        _ => TrendDirection::Decreasing,
    }
}

/// Progress and tier computed from a driver's current value and goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverStatus {
    pub progress: i64,
    pub tier: ProgressTier,
    pub direction: TrendDirection,
}

impl DriverStatus {
    pub fn of(driver: &CommissionDriver) -> Self {
        let progress = progress_percent(driver.current_value, driver.goal);
        Self {
            progress,
            tier: ProgressTier::from_progress(progress),
            direction: trend_direction(&driver.trend),
        }
    }
}

/// Tier of the progress value supplied with the driver (driver cards use it as-is)
pub fn reported_tier(driver: &CommissionDriver) -> ProgressTier {
    ProgressTier::from_progress(driver.progress.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_commission::dto::DriverIcon;

    fn point(period: &str, value: f64) -> TrendPoint {
        TrendPoint {
            period: period.to_string(),
            value,
        }
    }

    #[test]
    fn test_trend_direction() {
        assert_eq!(
            trend_direction(&[point("Jan", 10.0), point("Feb", 15.0)]),
            TrendDirection::Increasing
        );
        assert_eq!(
            trend_direction(&[point("Mar", 91.0), point("Apr", 90.0)]),
            TrendDirection::Decreasing
        );
        assert_eq!(
            trend_direction(&[point("Mar", 90.0), point("Apr", 90.0)]),
            TrendDirection::Decreasing
        );
        assert_eq!(trend_direction(&[point("Jan", 1.0)]), TrendDirection::Decreasing);
        assert_eq!(trend_direction(&[]), TrendDirection::Decreasing);
    }

    #[test]
    fn test_driver_status() {
        let driver = CommissionDriver {
            id: 1,
            name: "Sales Growth".to_string(),
            current_value: 35000.0,
            goal: 48000.0,
            commission: 2500.0,
            next_threshold: 39000.0,
            next_commission: 500.0,
            progress: 73.0,
            icon: DriverIcon::TrendingUp,
            badge_earned: true,
            trend: vec![point("Apr", 28000.0), point("May", 35000.0)],
            tip: String::new(),
        };
        let status = DriverStatus::of(&driver);
        assert_eq!(status.progress, 73);
        assert_eq!(status.tier, ProgressTier::Warning);
        assert_eq!(status.direction, TrendDirection::Increasing);
        assert_eq!(reported_tier(&driver), ProgressTier::Warning);
    }
}
