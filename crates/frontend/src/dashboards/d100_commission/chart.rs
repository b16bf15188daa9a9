//! SVG geometry for the driver trend line and the history bar chart.
//!
//! Coordinates are in viewBox units; the y axis grows downwards.

use contracts::dashboards::d100_commission::history::chart_max;
use contracts::dashboards::d100_commission::{HistoricalPeriod, TrendPoint};

pub const VIEW_WIDTH: f64 = 320.0;
pub const VIEW_HEIGHT: f64 = 180.0;
/// Space kept free for axis labels
pub const PADDING: f64 = 24.0;

/// A plotted point of the trend line
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub points: Vec<PlotPoint>,
    /// `d` attribute of the polyline path
    pub path: String,
}

impl LineChart {
    pub fn new(trend: &[TrendPoint]) -> Self {
        let min = trend.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
        let max = trend.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
        // Flat series are drawn through the middle
        let span = if max > min { max - min } else { 0.0 };

        let plot_width = VIEW_WIDTH - 2.0 * PADDING;
        let plot_height = VIEW_HEIGHT - 2.0 * PADDING;
        let step = if trend.len() > 1 {
            plot_width / (trend.len() - 1) as f64
        } else {
            0.0
        };

        let points: Vec<PlotPoint> = trend
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x = if trend.len() > 1 {
                    PADDING + step * i as f64
                } else {
                    VIEW_WIDTH / 2.0
                };
                let y = if span > 0.0 {
                    PADDING + plot_height * (1.0 - (point.value - min) / span)
                } else {
                    VIEW_HEIGHT / 2.0
                };
                PlotPoint {
                    x,
                    y,
                    label: point.period.clone(),
                }
            })
            .collect();

        let path = points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}{:.1},{:.1}", if i == 0 { "M" } else { "L" }, p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        Self { points, path }
    }
}

/// One bar of the history chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Actual and target bars of one period
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    /// Center of the group, used for the axis label
    pub center: f64,
    pub actual: Bar,
    pub target: Bar,
}

pub fn bar_groups(periods: &[HistoricalPeriod]) -> Vec<BarGroup> {
    if periods.is_empty() {
        return Vec::new();
    }

    let max = chart_max(periods);
    let plot_width = VIEW_WIDTH - 2.0 * PADDING;
    let plot_height = VIEW_HEIGHT - 2.0 * PADDING;
    let baseline = VIEW_HEIGHT - PADDING;
    let group_width = plot_width / periods.len() as f64;
    let bar_width = group_width * 0.35;

    let bar = |x: f64, value: f64| {
        let height = if max > 0.0 {
            (value.max(0.0) / max) * plot_height
        } else {
            0.0
        };
        Bar {
            x,
            y: baseline - height,
            width: bar_width,
            height,
        }
    };

    periods
        .iter()
        .enumerate()
        .map(|(i, period)| {
            let center = PADDING + group_width * (i as f64 + 0.5);
            BarGroup {
                label: period.period.clone(),
                center,
                actual: bar(center - bar_width, period.actual),
                target: bar(center, period.target),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(period: &str, value: f64) -> TrendPoint {
        TrendPoint {
            period: period.to_string(),
            value,
        }
    }

    #[test]
    fn test_line_chart_spans_plot_area() {
        let chart = LineChart::new(&[point("Jan", 10.0), point("Feb", 20.0), point("Mar", 15.0)]);
        assert_eq!(chart.points.len(), 3);
        assert_eq!(chart.points[0].x, PADDING);
        assert_eq!(chart.points[2].x, VIEW_WIDTH - PADDING);
        // Lowest value at the bottom, highest at the top
        assert_eq!(chart.points[0].y, VIEW_HEIGHT - PADDING);
        assert_eq!(chart.points[1].y, PADDING);
        assert!(chart.path.starts_with("M24.0,156.0 L"));
    }

    #[test]
    fn test_flat_and_single_point_series() {
        let flat = LineChart::new(&[point("Jan", 5.0), point("Feb", 5.0)]);
        assert!(flat.points.iter().all(|p| p.y == VIEW_HEIGHT / 2.0));

        let single = LineChart::new(&[point("Jan", 5.0)]);
        assert_eq!(single.points[0].x, VIEW_WIDTH / 2.0);
        assert!(single.path.starts_with('M'));

        let empty = LineChart::new(&[]);
        assert!(empty.points.is_empty());
        assert!(empty.path.is_empty());
    }

    #[test]
    fn test_bar_groups_scale_to_max() {
        let periods = vec![
            HistoricalPeriod {
                period: "Apr".to_string(),
                actual: 48000.0,
                target: 45000.0,
            },
            HistoricalPeriod {
                period: "May".to_string(),
                actual: 25000.0,
                target: 50000.0,
            },
        ];
        let groups = bar_groups(&periods);
        assert_eq!(groups.len(), 2);
        let plot_height = VIEW_HEIGHT - 2.0 * PADDING;
        assert_eq!(groups[1].target.height, plot_height);
        assert_eq!(groups[1].actual.height, plot_height / 2.0);
        assert_eq!(groups[1].target.y, PADDING);
        assert!(groups[0].center < groups[1].center);
    }

    #[test]
    fn test_bar_groups_all_zero() {
        let periods = vec![HistoricalPeriod {
            period: "Jan".to_string(),
            actual: 0.0,
            target: 0.0,
        }];
        let groups = bar_groups(&periods);
        assert_eq!(groups[0].actual.height, 0.0);
        assert!(bar_groups(&[]).is_empty());
    }
}
