use contracts::dashboards::d100_commission::{PeriodOption, SalesRepDashboard, SalesRepListItem};
use contracts::shared::format::DisplaySettings;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api/d100";

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Roster for the rep selector
pub async fn get_sales_reps() -> Result<Vec<SalesRepListItem>, String> {
    get_json(&format!("{}/sales-reps", API_BASE)).await
}

/// Everything the dashboard renders for one rep
pub async fn get_dashboard(rep_id: &str) -> Result<SalesRepDashboard, String> {
    get_json(&format!(
        "{}/sales-reps/{}/dashboard",
        API_BASE,
        urlencoding::encode(rep_id)
    ))
    .await
}

/// Selectable periods, most recent first
pub async fn get_periods() -> Result<Vec<PeriodOption>, String> {
    get_json(&format!("{}/periods", API_BASE)).await
}

pub async fn get_display_settings() -> Result<DisplaySettings, String> {
    get_json(&format!("{}/settings", API_BASE)).await
}
