//! In-memory sales rep dataset.
//!
//! Four reps with different performance levels. The first rep carries the
//! base figures; the others scale the driver and history series from it.

use contracts::dashboards::d100_commission::{
    CommissionDriver, DriverIcon, GrowthVolumeData, HistoricalPeriod, PaymentCollectionData,
    Penalty, PerformanceLevel, SalesRepDashboard, SalesRepData, SalesRepListItem, TrendPoint,
    WeeklyCommissionData,
};
use once_cell::sync::Lazy;

/// One entry of the dataset
#[derive(Debug, Clone)]
pub struct SalesRepRecord {
    pub id: String,
    pub performance_level: PerformanceLevel,
    pub dashboard: SalesRepDashboard,
}

impl SalesRepRecord {
    pub fn list_item(&self) -> SalesRepListItem {
        SalesRepListItem {
            id: self.id.clone(),
            name: self.dashboard.sales_rep_data.name.clone(),
            route_number: self.dashboard.sales_rep_data.route_number.clone(),
            performance_level: self.performance_level,
        }
    }
}

static SALES_REPS: Lazy<Vec<SalesRepRecord>> = Lazy::new(build_dataset);

/// All records, in roster order
pub fn all() -> &'static [SalesRepRecord] {
    &SALES_REPS
}

pub fn find_by_id(id: &str) -> Option<&'static SalesRepRecord> {
    SALES_REPS.iter().find(|record| record.id == id)
}

fn trend(values: [f64; 5]) -> Vec<TrendPoint> {
    ["Jan", "Feb", "Mar", "Apr", "May"]
        .iter()
        .zip(values)
        .map(|(period, value)| TrendPoint {
            period: period.to_string(),
            value,
        })
        .collect()
}

fn base_sales_rep() -> SalesRepData {
    SalesRepData {
        name: "Maria Rodriguez".to_string(),
        avatar_url: Some("https://randomuser.me/api/portraits/women/44.jpg".to_string()),
        route_number: "42".to_string(),
        currency: "Q".to_string(),
        commission: 42500.0,
        goal: 50000.0,
        level: "Silver Seller".to_string(),
        next_level: "Gold Seller".to_string(),
        level_progress: 85.0,
    }
}

fn base_weekly() -> WeeklyCommissionData {
    WeeklyCommissionData {
        date_range: "May 19, 2025 – May 25, 2025".to_string(),
        commission: 1644.17,
    }
}

fn base_drivers() -> Vec<CommissionDriver> {
    vec![
        CommissionDriver {
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
            trend: trend([10000.0, 15000.0, 20000.0, 28000.0, 35000.0]),
            tip: "Focus on existing customers to upsell premium packages for faster growth."
                .to_string(),
        },
        CommissionDriver {
            id: 2,
            name: "New Clients".to_string(),
            current_value: 12.0,
            goal: 15.0,
            commission: 1800.0,
            next_threshold: 13.0,
            next_commission: 300.0,
            progress: 80.0,
            icon: DriverIcon::Flag,
            badge_earned: true,
            trend: trend([3.0, 5.0, 7.0, 10.0, 12.0]),
            tip: "Leverage referrals from your existing client base to reach your goal faster."
                .to_string(),
        },
        CommissionDriver {
            id: 3,
            name: "Retention Rate".to_string(),
            current_value: 92.0,
            goal: 95.0,
            commission: 2000.0,
            next_threshold: 93.0,
            next_commission: 500.0,
            progress: 97.0,
            icon: DriverIcon::Star,
            badge_earned: false,
            trend: trend([89.0, 91.0, 90.0, 91.0, 92.0]),
            tip: "Schedule quarterly review meetings with clients to address concerns early."
                .to_string(),
        },
    ]
}

fn base_penalties() -> Vec<Penalty> {
    vec![
        Penalty {
            id: 1,
            reason: "Missing documentation".to_string(),
            amount: 350.0,
            date: "May 10, 2025".to_string(),
        },
        Penalty {
            id: 2,
            reason: "Late submission".to_string(),
            amount: 200.0,
            date: "May 15, 2025".to_string(),
        },
    ]
}

fn base_history() -> Vec<HistoricalPeriod> {
    [
        ("Jan", 30000.0, 35000.0),
        ("Feb", 38000.0, 40000.0),
        ("Mar", 42000.0, 45000.0),
        ("Apr", 48000.0, 45000.0),
        ("May", 42500.0, 50000.0),
    ]
    .into_iter()
    .map(|(period, actual, target)| HistoricalPeriod {
        period: period.to_string(),
        actual,
        target,
    })
    .collect()
}

/// How the base drivers are adjusted for a rep
struct DriverScaling {
    factor: f64,
    /// Fixed progress instead of the scaled one
    progress: Option<f64>,
    badge_earned: Option<bool>,
}

fn scale_drivers(drivers: Vec<CommissionDriver>, scaling: &DriverScaling) -> Vec<CommissionDriver> {
    drivers
        .into_iter()
        .map(|driver| CommissionDriver {
            current_value: (driver.current_value * scaling.factor).round(),
            commission: (driver.commission * scaling.factor).round(),
            progress: scaling
                .progress
                .unwrap_or_else(|| (driver.progress * scaling.factor).round().min(100.0)),
            badge_earned: scaling.badge_earned.unwrap_or(driver.badge_earned),
            ..driver
        })
        .collect()
}

fn scale_history(history: Vec<HistoricalPeriod>, factor: f64) -> Vec<HistoricalPeriod> {
    history
        .into_iter()
        .map(|period| HistoricalPeriod {
            actual: (period.actual * factor).round(),
            ..period
        })
        .collect()
}

fn rep_data(name: &str, route: &str, commission: f64, goal: f64, level_progress: f64) -> SalesRepData {
    SalesRepData {
        name: name.to_string(),
        route_number: route.to_string(),
        commission,
        goal,
        level_progress,
        ..base_sales_rep()
    }
}

fn weekly(commission: f64) -> WeeklyCommissionData {
    WeeklyCommissionData {
        commission,
        ..base_weekly()
    }
}

fn build_dataset() -> Vec<SalesRepRecord> {
    vec![
        SalesRepRecord {
            id: "rep1".to_string(),
            performance_level: PerformanceLevel::High,
            dashboard: SalesRepDashboard {
                sales_rep_data: base_sales_rep(),
                weekly_commission_data: base_weekly(),
                growth_volume_data: GrowthVolumeData {
                    total_sales: 135000.0,
                    growth_percentage: 18.0,
                    growth_target: 150000.0,
                    target_growth_percentage: 13.0,
                    current_month_sales: 50000.0,
                    remaining_sales_needed: 0.0,
                    commission_earned: 2224.17,
                },
                payment_collection_data: PaymentCollectionData {
                    total_payments: 10,
                    payments_collected: 8,
                    overdue_payments: 2,
                    upcoming_payments: 1,
                    total_collected: 40000.0,
                    commission_earned: 200.0,
                },
                commission_drivers: base_drivers(),
                penalties: base_penalties(),
                historical_data: base_history(),
            },
        },
        SalesRepRecord {
            id: "rep2".to_string(),
            performance_level: PerformanceLevel::Medium,
            dashboard: SalesRepDashboard {
                sales_rep_data: rep_data("Carlos Mendez", "17", 32500.0, 50000.0, 65.0),
                weekly_commission_data: weekly(2150.0),
                growth_volume_data: GrowthVolumeData {
                    total_sales: 125000.0,
                    growth_percentage: 10.0,
                    growth_target: 150000.0,
                    target_growth_percentage: 13.0,
                    current_month_sales: 25000.0,
                    remaining_sales_needed: 25000.0,
                    commission_earned: 0.0,
                },
                payment_collection_data: PaymentCollectionData {
                    total_payments: 12,
                    payments_collected: 6,
                    overdue_payments: 1,
                    upcoming_payments: 1,
                    total_collected: 130000.0,
                    commission_earned: 650.0,
                },
                commission_drivers: scale_drivers(
                    base_drivers(),
                    &DriverScaling {
                        factor: 0.8,
                        progress: None,
                        badge_earned: None,
                    },
                ),
                penalties: base_penalties(),
                historical_data: scale_history(base_history(), 0.8),
            },
        },
        SalesRepRecord {
            id: "rep3".to_string(),
            performance_level: PerformanceLevel::Low,
            dashboard: SalesRepDashboard {
                sales_rep_data: rep_data("Ana Gutierrez", "29", 21500.0, 45000.0, 48.0),
                weekly_commission_data: weekly(1350.0),
                growth_volume_data: GrowthVolumeData {
                    total_sales: 95000.0,
                    growth_percentage: -5.0,
                    growth_target: 135000.0,
                    target_growth_percentage: 13.0,
                    current_month_sales: 22000.0,
                    remaining_sales_needed: 40000.0,
                    commission_earned: 0.0,
                },
                payment_collection_data: PaymentCollectionData {
                    total_payments: 10,
                    payments_collected: 4,
                    overdue_payments: 1,
                    upcoming_payments: 0,
                    total_collected: 90000.0,
                    commission_earned: 450.0,
                },
                commission_drivers: scale_drivers(
                    base_drivers(),
                    &DriverScaling {
                        factor: 0.6,
                        progress: None,
                        badge_earned: Some(false),
                    },
                ),
                penalties: {
                    let mut penalties = base_penalties();
                    penalties.push(Penalty {
                        id: 3,
                        reason: "Producto caducado".to_string(),
                        amount: 450.0,
                        date: "May 12, 2025".to_string(),
                    });
                    penalties
                },
                historical_data: scale_history(base_history(), 0.6),
            },
        },
        SalesRepRecord {
            id: "rep4".to_string(),
            performance_level: PerformanceLevel::High,
            dashboard: SalesRepDashboard {
                sales_rep_data: rep_data("Luis Fernandez", "33", 48000.0, 45000.0, 100.0),
                weekly_commission_data: weekly(3750.0),
                growth_volume_data: GrowthVolumeData {
                    total_sales: 160000.0,
                    growth_percentage: 18.0,
                    growth_target: 150000.0,
                    target_growth_percentage: 13.0,
                    current_month_sales: 32000.0,
                    remaining_sales_needed: 0.0,
                    commission_earned: 2250.0,
                },
                payment_collection_data: PaymentCollectionData {
                    total_payments: 15,
                    payments_collected: 14,
                    overdue_payments: 3,
                    upcoming_payments: 2,
                    total_collected: 240000.0,
                    commission_earned: 1200.0,
                },
                commission_drivers: scale_drivers(
                    base_drivers(),
                    &DriverScaling {
                        factor: 1.2,
                        progress: Some(100.0),
                        badge_earned: Some(true),
                    },
                ),
                penalties: Vec::new(),
                historical_data: scale_history(base_history(), 1.2),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_commission::payments::collection_commission;

    #[test]
    fn test_roster_order_and_ids() {
        let ids: Vec<&str> = all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rep1", "rep2", "rep3", "rep4"]);
        assert!(find_by_id("rep3").is_some());
        assert!(find_by_id("rep9").is_none());
    }

    #[test]
    fn test_list_item_mirrors_profile() {
        let item = find_by_id("rep2").unwrap().list_item();
        assert_eq!(item.name, "Carlos Mendez");
        assert_eq!(item.route_number, "17");
        assert_eq!(item.performance_level, PerformanceLevel::Medium);
    }

    #[test]
    fn test_scaled_drivers() {
        let rep2 = &find_by_id("rep2").unwrap().dashboard.commission_drivers;
        assert_eq!(rep2[0].current_value, 28000.0);
        assert_eq!(rep2[0].commission, 2000.0);
        assert_eq!(rep2[0].progress, 58.0);
        assert_eq!(rep2[1].current_value, 10.0);
        assert_eq!(rep2[2].progress, 78.0);
        assert!(rep2[0].badge_earned);

        let rep3 = &find_by_id("rep3").unwrap().dashboard.commission_drivers;
        assert!(rep3.iter().all(|d| !d.badge_earned));
        assert_eq!(rep3[1].current_value, 7.0);

        let rep4 = &find_by_id("rep4").unwrap().dashboard.commission_drivers;
        assert!(rep4.iter().all(|d| d.progress == 100.0 && d.badge_earned));
        assert_eq!(rep4[0].current_value, 42000.0);
    }

    #[test]
    fn test_scaled_history_keeps_targets() {
        let history = &find_by_id("rep4").unwrap().dashboard.historical_data;
        assert_eq!(history[0].actual, 36000.0);
        assert_eq!(history[0].target, 35000.0);
    }

    #[test]
    fn test_collection_commission_matches_rate() {
        for record in all() {
            let payments = &record.dashboard.payment_collection_data;
            assert_eq!(
                payments.commission_earned,
                collection_commission(payments.total_collected),
                "{}",
                record.id
            );
            assert!(payments.payments_collected <= payments.total_payments);
        }
    }

    #[test]
    fn test_penalty_lists() {
        assert_eq!(find_by_id("rep3").unwrap().dashboard.penalties.len(), 3);
        assert!(find_by_id("rep4").unwrap().dashboard.penalties.is_empty());
    }
}
