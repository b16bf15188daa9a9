use serde::{Deserialize, Serialize};

/// Profile and goal data of a sales representative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRepData {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub route_number: String,
    /// Currency symbol used as prefix (e.g. "Q")
    pub currency: String,
    /// Total commission earned in the period
    pub commission: f64,
    /// Commission goal for the period
    pub goal: f64,
    /// Gamification level label (e.g. "Silver Seller")
    pub level: String,
    pub next_level: String,
    /// Progress to the next level, in percent
    pub level_progress: f64,
}

/// Commission earned during the current week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCommissionData {
    /// Human readable range, e.g. "May 19, 2025 – May 25, 2025"
    pub date_range: String,
    pub commission: f64,
}

/// Single point of a driver trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Period label ("Jan", "Feb", ...)
    #[serde(alias = "month")]
    pub period: String,
    pub value: f64,
}

/// Icon shown next to a commission driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DriverIcon {
    TrendingUp,
    Flag,
    Star,
    /// Unknown keys fall back to a check mark
    #[default]
    #[serde(other)]
    CircleCheck,
}

impl DriverIcon {
    /// Icon name understood by the frontend icon set
    pub fn icon_name(&self) -> &'static str {
        match self {
            DriverIcon::TrendingUp => "trending-up",
            DriverIcon::Flag => "flag",
            DriverIcon::Star => "star",
            DriverIcon::CircleCheck => "circle-check",
        }
    }
}

/// A named metric with its own goal, progress and reward tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionDriver {
    pub id: i64,
    pub name: String,
    pub current_value: f64,
    pub goal: f64,
    /// Commission earned through this driver
    pub commission: f64,
    pub next_threshold: f64,
    pub next_commission: f64,
    /// Progress percentage as supplied by the data source
    pub progress: f64,
    #[serde(default)]
    pub icon: DriverIcon,
    pub badge_earned: bool,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
    #[serde(default)]
    pub tip: String,
}

/// Growth-by-volume incentive data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthVolumeData {
    pub total_sales: f64,
    /// Growth against the comparison period, may be negative
    pub growth_percentage: f64,
    /// Sales amount that represents the target growth
    pub growth_target: f64,
    /// Activation threshold, in percent
    pub target_growth_percentage: f64,
    pub current_month_sales: f64,
    pub remaining_sales_needed: f64,
    pub commission_earned: f64,
}

/// Payment collection ("cobros") data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCollectionData {
    pub total_payments: u32,
    pub payments_collected: u32,
    pub overdue_payments: u32,
    pub upcoming_payments: u32,
    /// Amount collected during the period
    pub total_collected: f64,
    pub commission_earned: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    pub id: i64,
    pub reason: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPeriod {
    pub period: String,
    pub actual: f64,
    pub target: f64,
}

/// Overall performance bucket of a rep, used by the rep selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceLevel {
    Low,
    Medium,
    High,
}

/// Entry of the rep selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRepListItem {
    pub id: String,
    pub name: String,
    pub route_number: String,
    pub performance_level: PerformanceLevel,
}

/// Everything the dashboard page renders for one rep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRepDashboard {
    pub sales_rep_data: SalesRepData,
    pub weekly_commission_data: WeeklyCommissionData,
    pub growth_volume_data: GrowthVolumeData,
    pub payment_collection_data: PaymentCollectionData,
    pub commission_drivers: Vec<CommissionDriver>,
    pub penalties: Vec<Penalty>,
    pub historical_data: Vec<HistoricalPeriod>,
}

/// Option of the period selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodOption {
    /// Stable key, e.g. "may2025"
    pub value: String,
    /// Display label, e.g. "May 2025"
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_icon_from_json() {
        let icon: DriverIcon = serde_json::from_str("\"trending-up\"").unwrap();
        assert_eq!(icon, DriverIcon::TrendingUp);

        let unknown: DriverIcon = serde_json::from_str("\"rocket\"").unwrap();
        assert_eq!(unknown, DriverIcon::CircleCheck);
        assert_eq!(unknown.icon_name(), "circle-check");
    }

    #[test]
    fn test_trend_point_accepts_month_key() {
        let point: TrendPoint = serde_json::from_str(r#"{"month":"Jan","value":10000}"#).unwrap();
        assert_eq!(point.period, "Jan");
        assert_eq!(point.value, 10000.0);
    }

    #[test]
    fn test_penalty_uses_camel_case_shape() {
        let json = r#"{"id":1,"reason":"Late submission","amount":200,"date":"May 15, 2025"}"#;
        let penalty: Penalty = serde_json::from_str(json).unwrap();
        assert_eq!(penalty.amount, 200.0);

        let json = r#"{"name":"Maria Rodriguez","routeNumber":"42","currency":"Q","commission":42500,
            "goal":50000,"level":"Silver Seller","nextLevel":"Gold Seller","levelProgress":85}"#;
        let rep: SalesRepData = serde_json::from_str(json).unwrap();
        assert_eq!(rep.route_number, "42");
        assert_eq!(rep.avatar_url, None);
    }
}
