use axum::{extract::Path, http::StatusCode, Json};
use contracts::dashboards::d100_commission::{PeriodOption, SalesRepDashboard, SalesRepListItem};
use contracts::shared::format::DisplaySettings;

use crate::dashboards::d100_commission::service;
use crate::shared::config;

/// GET /api/d100/sales-reps
pub async fn list_sales_reps() -> Result<Json<Vec<SalesRepListItem>>, StatusCode> {
    match service::get_sales_reps().await {
        Ok(reps) => {
            tracing::info!("D100 Dashboard: Returning {} sales reps", reps.len());
            Ok(Json(reps))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to list sales reps: {}", e);
            Err(e.status_code())
        }
    }
}

/// GET /api/d100/sales-reps/:id/dashboard
pub async fn get_dashboard(Path(id): Path<String>) -> Result<Json<SalesRepDashboard>, StatusCode> {
    tracing::info!("D100 Dashboard: Getting dashboard for {}", id);

    match service::get_dashboard(&id).await {
        Ok(dashboard) => {
            tracing::info!(
                "D100 Dashboard: Returning {} drivers, {} penalties for {}",
                dashboard.commission_drivers.len(),
                dashboard.penalties.len(),
                id
            );
            Ok(Json(dashboard))
        }
        Err(e) => {
            tracing::warn!("D100 Dashboard: {}", e);
            Err(e.status_code())
        }
    }
}

/// GET /api/d100/periods
pub async fn get_periods() -> Result<Json<Vec<PeriodOption>>, StatusCode> {
    match service::get_periods().await {
        Ok(periods) => {
            tracing::info!("D100 Dashboard: Returning {} periods", periods.len());
            Ok(Json(periods))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to get periods: {}", e);
            Err(e.status_code())
        }
    }
}

/// GET /api/d100/settings
pub async fn get_display_settings() -> Json<DisplaySettings> {
    Json(config::display_settings())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_rep_is_404() {
        let result = get_dashboard(Path("rep404".to_string())).await;
        assert_eq!(result.err(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_dashboard_json_shape() {
        let Json(dashboard) = get_dashboard(Path("rep1".to_string())).await.unwrap();
        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["salesRepData"]["routeNumber"], "42");
        assert_eq!(json["commissionDrivers"][0]["icon"], "trending-up");
        assert_eq!(json["paymentCollectionData"]["totalCollected"], 40000.0);
    }

    #[tokio::test]
    async fn test_list_sales_reps_json_shape() {
        let Json(reps) = list_sales_reps().await.unwrap();
        let json = serde_json::to_value(&reps).unwrap();
        assert_eq!(json[2]["performanceLevel"], "low");
        assert_eq!(json[3]["id"], "rep4");
    }

    #[tokio::test]
    async fn test_settings_default_before_init() {
        let Json(settings) = get_display_settings().await;
        assert_eq!(settings.decimals, 2);
    }
}
