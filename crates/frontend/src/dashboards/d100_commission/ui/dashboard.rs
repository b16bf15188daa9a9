use crate::dashboards::d100_commission::api;
use crate::shared::display::use_display;
use crate::shared::i18n::use_i18n;
use contracts::dashboards::d100_commission::{PeriodOption, SalesRepDashboard, SalesRepListItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

use super::achievements::Achievements;
use super::commission_summary::CommissionSummary;
use super::dashboard_header::DashboardHeader;
use super::driver_cards::DriverCards;
use super::growth_volume::GrowthVolume;
use super::historical_performance::HistoricalPerformance;
use super::motivation_message::MotivationMessage;
use super::payment_collection::PaymentCollection;
use super::penalties::{PenaltiesSection, PenaltyBadges};
use super::profile_header::ProfileHeader;
use super::simulation_tool::SimulationTool;
use super::weekly_commission::WeeklyCommission;

/// Period selected when the page opens
const DEFAULT_PERIOD: &str = "may2025";

/// Id to show for `requested`: itself when it is on the roster, else the first rep
pub fn resolve_rep_id(reps: &[SalesRepListItem], requested: &str) -> Option<String> {
    reps.iter()
        .find(|rep| rep.id == requested)
        .or_else(|| reps.first())
        .map(|rep| rep.id.clone())
}

/// A dashboard response is applied only while its rep is still selected
pub fn is_current_response(selected: &str, rep_id: &str) -> bool {
    selected == rep_id
}

/// Sales commission dashboard
#[component]
pub fn SalesCommissionDashboard() -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let (reps, set_reps) = signal(Vec::<SalesRepListItem>::new());
    let (periods, set_periods) = signal(Vec::<PeriodOption>::new());
    let selected_rep = RwSignal::new(String::new());
    let selected_period = RwSignal::new(DEFAULT_PERIOD.to_string());

    let (data, set_data) = signal(None::<SalesRepDashboard>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Roster, periods and display settings on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_display_settings().await {
                Ok(settings) => display.settings.set(settings),
                Err(err) => log::warn!("D100: display settings unavailable, using defaults: {}", err),
            }

            match api::get_periods().await {
                Ok(list) => set_periods.set(list),
                Err(err) => log::error!("Failed to load D100 periods: {}", err),
            }

            match api::get_sales_reps().await {
                Ok(list) => {
                    let requested = selected_rep.get_untracked();
                    if let Some(id) = resolve_rep_id(&list, &requested) {
                        selected_rep.set(id);
                    }
                    set_reps.set(list);
                }
                Err(err) => {
                    log::error!("Failed to load D100 sales reps: {}", err);
                    set_error.set(Some(err));
                }
            }
        });
    });

    // Dashboard of the selected rep
    Effect::new(move |_| {
        let rep_id = selected_rep.get();
        if rep_id.is_empty() {
            return;
        }
        let roster = reps.get_untracked();
        if !roster.is_empty() && !roster.iter().any(|rep| rep.id == rep_id) {
            if let Some(first) = resolve_rep_id(&roster, &rep_id) {
                selected_rep.set(first);
            }
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_dashboard(&rep_id).await;
            if !is_current_response(&selected_rep.get_untracked(), &rep_id) {
                log::debug!("D100: dropping stale dashboard response for {}", rep_id);
                return;
            }
            match result {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load D100 dashboard for {}: {}", rep_id, e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let content = move || {
        if loading.get() && data.with(Option::is_none) {
            return view! {
                <div class="d100-loading">
                    <Spinner />
                    <span>{i18n.t().loading}</span>
                </div>
            }
            .into_any();
        }

        if let Some(err) = error.get() {
            return view! {
                <div class="d100-error">
                    <strong>{format!("⚠ {}: ", i18n.t().error)}</strong>
                    {err}
                </div>
            }
            .into_any();
        }

        let Some(dashboard) = data.get() else {
            return view! { <div class="d100-empty">{i18n.t().no_data}</div> }.into_any();
        };

        render_dashboard(dashboard, periods.into(), selected_period)
    };

    view! {
        <div id="d100_commission--dashboard" class="d100-dashboard">
            <DashboardHeader reps=reps selected_rep=selected_rep />
            {content}
        </div>
    }
}

fn render_dashboard(
    dashboard: SalesRepDashboard,
    periods: Signal<Vec<PeriodOption>>,
    selected_period: RwSignal<String>,
) -> AnyView {
    let SalesRepDashboard {
        sales_rep_data: rep,
        weekly_commission_data,
        growth_volume_data,
        payment_collection_data,
        commission_drivers,
        penalties,
        historical_data,
    } = dashboard;
    let currency = rep.currency.clone();

    view! {
        <div class="d100-dashboard__body">
            <ProfileHeader rep=rep.clone() periods=periods selected_period=selected_period />
            <MotivationMessage commission=rep.commission goal=rep.goal />
            <PenaltyBadges penalties=penalties.clone() currency=currency.clone() />

            <div class="d100-dashboard__grid">
                <WeeklyCommission data=weekly_commission_data currency=currency.clone() />
                <CommissionSummary rep=rep.clone() />
                <Achievements rep=rep.clone() drivers=commission_drivers.clone() />
            </div>

            <div class="d100-dashboard__grid d100-dashboard__grid--wide">
                <GrowthVolume data=growth_volume_data currency=currency.clone() />
                <PaymentCollection data=payment_collection_data currency=currency.clone() />
            </div>

            <DriverCards drivers=commission_drivers currency=currency.clone() />

            <div class="d100-dashboard__grid d100-dashboard__grid--wide">
                <PenaltiesSection penalties=penalties currency=currency.clone() />
                <SimulationTool current_commission=rep.commission currency=currency />
            </div>

            <HistoricalPerformance periods=historical_data />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_commission::PerformanceLevel;

    fn rep(id: &str) -> SalesRepListItem {
        SalesRepListItem {
            id: id.to_string(),
            name: format!("Rep {}", id),
            route_number: "1".to_string(),
            performance_level: PerformanceLevel::Medium,
        }
    }

    #[test]
    fn test_resolve_rep_id_falls_back_to_first() {
        let reps = vec![rep("rep1"), rep("rep2")];
        assert_eq!(resolve_rep_id(&reps, "rep2").as_deref(), Some("rep2"));
        assert_eq!(resolve_rep_id(&reps, "rep99").as_deref(), Some("rep1"));
        assert_eq!(resolve_rep_id(&reps, "").as_deref(), Some("rep1"));
        assert_eq!(resolve_rep_id(&[], "rep1"), None);
    }

    #[test]
    fn test_late_response_for_previous_rep_is_dropped() {
        // rep2 requested, then rep3 selected before rep2's response arrives
        let selected = "rep3";
        assert!(!is_current_response(selected, "rep2"));
        assert!(is_current_response(selected, "rep3"));
    }
}
