use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d100_commission::{PeriodOption, SalesRepDashboard, SalesRepListItem};

use super::repository;
use crate::shared::error::AppError;

/// First and last month offered by the period selector
const FIRST_PERIOD: (i32, u32) = (2025, 1);
const LAST_PERIOD: (i32, u32) = (2025, 5);

/// Roster for the rep selector
pub async fn get_sales_reps() -> Result<Vec<SalesRepListItem>, AppError> {
    Ok(repository::all()
        .iter()
        .map(|record| record.list_item())
        .collect())
}

/// Full dashboard of one rep
pub async fn get_dashboard(id: &str) -> Result<SalesRepDashboard, AppError> {
    repository::find_by_id(id)
        .map(|record| record.dashboard.clone())
        .ok_or_else(|| AppError::SalesRepNotFound(id.to_string()))
}

/// Selectable periods, most recent first. Keys look like `may2025`.
pub async fn get_periods() -> Result<Vec<PeriodOption>, AppError> {
    month_range(FIRST_PERIOD, LAST_PERIOD)
}

fn month_range(first: (i32, u32), last: (i32, u32)) -> Result<Vec<PeriodOption>, AppError> {
    let first_date = month_start(first)?;
    let mut current = month_start(last)?;

    if current < first_date {
        return Err(AppError::InvalidPeriod(format!(
            "{}-{:02} is after {}-{:02}",
            first.0, first.1, last.0, last.1
        )));
    }

    let mut periods = Vec::new();
    while current >= first_date {
        periods.push(PeriodOption {
            value: format!(
                "{}{}",
                current.format("%b").to_string().to_lowercase(),
                current.year()
            ),
            label: current.format("%B %Y").to_string(),
        });
        current = previous_month(current)?;
    }
    Ok(periods)
}

fn month_start((year, month): (i32, u32)) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidPeriod(format!("{}-{:02}", year, month)))
}

fn previous_month(date: NaiveDate) -> Result<NaiveDate, AppError> {
    if date.month() == 1 {
        month_start((date.year() - 1, 12))
    } else {
        month_start((date.year(), date.month() - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_sales_reps() {
        let reps = get_sales_reps().await.unwrap();
        assert_eq!(reps.len(), 4);
        assert_eq!(reps[0].name, "Maria Rodriguez");
    }

    #[tokio::test]
    async fn test_get_dashboard_unknown_rep() {
        let result = get_dashboard("nobody").await;
        assert!(matches!(result, Err(AppError::SalesRepNotFound(id)) if id == "nobody"));
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let dashboard = get_dashboard("rep1").await.unwrap();
        assert_eq!(dashboard.sales_rep_data.commission, 42500.0);
        assert_eq!(dashboard.commission_drivers.len(), 3);
    }

    #[tokio::test]
    async fn test_get_periods() {
        let periods = get_periods().await.unwrap();
        let values: Vec<&str> = periods.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["may2025", "apr2025", "mar2025", "feb2025", "jan2025"]);
        assert_eq!(periods[0].label, "May 2025");
    }

    #[test]
    fn test_month_range_crosses_year() {
        let periods = month_range((2024, 11), (2025, 2)).unwrap();
        let values: Vec<&str> = periods.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["feb2025", "jan2025", "dec2024", "nov2024"]);
    }

    #[test]
    fn test_month_range_rejects_bad_input() {
        assert!(matches!(
            month_range((2025, 5), (2025, 1)),
            Err(AppError::InvalidPeriod(_))
        ));
        assert!(matches!(
            month_range((2025, 13), (2025, 14)),
            Err(AppError::InvalidPeriod(_))
        ));
    }
}
