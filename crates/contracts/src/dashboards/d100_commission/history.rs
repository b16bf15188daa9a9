use super::dto::HistoricalPeriod;
use super::progress::ratio;

/// A period together with its `actual / target` ratio
#[derive(Debug, Clone, PartialEq)]
pub struct RatedPeriod<'a> {
    pub period: &'a HistoricalPeriod,
    pub ratio: f64,
}

impl RatedPeriod<'_> {
    /// Ratio rounded to whole percent ("107% of target")
    pub fn percent_of_target(&self) -> i64 {
        (self.ratio * 100.0).round() as i64
    }
}

/// Best and worst periods by attainment
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodExtremes<'a> {
    pub best: RatedPeriod<'a>,
    pub worst: RatedPeriod<'a>,
}

/// Scans the series once; ties keep the first occurrence.
///
/// Periods with a zero target have no ratio and are skipped. Returns `None`
/// when no period can be rated.
pub fn find_extremes(periods: &[HistoricalPeriod]) -> Option<PeriodExtremes<'_>> {
    let mut rated = periods.iter().filter_map(|period| {
        ratio(period.actual, period.target).map(|ratio| RatedPeriod { period, ratio })
    });

    let first = rated.next()?;
    let mut extremes = PeriodExtremes {
        best: first.clone(),
        worst: first,
    };

    for candidate in rated {
        if candidate.ratio > extremes.best.ratio {
            extremes.best = candidate.clone();
        }
        if candidate.ratio < extremes.worst.ratio {
            extremes.worst = candidate;
        }
    }

    Some(extremes)
}

/// Largest value on either series, used to scale the bar chart
pub fn chart_max(periods: &[HistoricalPeriod]) -> f64 {
    periods
        .iter()
        .flat_map(|p| [p.actual, p.target])
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(label: &str, actual: f64, target: f64) -> HistoricalPeriod {
        HistoricalPeriod {
            period: label.to_string(),
            actual,
            target,
        }
    }

    fn sample() -> Vec<HistoricalPeriod> {
        vec![
            period("Jan", 30000.0, 35000.0),
            period("Feb", 38000.0, 40000.0),
            period("Mar", 42000.0, 45000.0),
            period("Apr", 48000.0, 45000.0),
            period("May", 42500.0, 50000.0),
        ]
    }

    #[test]
    fn test_best_and_worst_of_sample_series() {
        let series = sample();
        let extremes = find_extremes(&series).unwrap();
        assert_eq!(extremes.best.period.period, "Apr");
        assert_eq!(extremes.worst.period.period, "May");
        assert_eq!(extremes.best.percent_of_target(), 107);
        assert_eq!(extremes.worst.percent_of_target(), 85);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let series = vec![
            period("A", 50.0, 100.0),
            period("B", 100.0, 100.0),
            period("C", 10.0, 20.0),
            period("D", 2.0, 2.0),
        ];
        let extremes = find_extremes(&series).unwrap();
        assert_eq!(extremes.best.period.period, "B");
        assert_eq!(extremes.worst.period.period, "A");
    }

    #[test]
    fn test_zero_targets_are_skipped() {
        let series = vec![period("X", 10.0, 0.0), period("Y", 5.0, 10.0)];
        let extremes = find_extremes(&series).unwrap();
        assert_eq!(extremes.best.period.period, "Y");
        assert_eq!(extremes.worst.period.period, "Y");

        assert!(find_extremes(&[period("X", 10.0, 0.0)]).is_none());
        assert!(find_extremes(&[]).is_none());
    }

    #[test]
    fn test_chart_max() {
        assert_eq!(chart_max(&sample()), 50000.0);
        assert_eq!(chart_max(&[]), 0.0);
    }
}
