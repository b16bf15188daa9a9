//! Detail view of a single commission driver: status, trend chart and next threshold.

use contracts::dashboards::d100_commission::drivers::{DriverStatus, TrendDirection};
use contracts::dashboards::d100_commission::CommissionDriver;
use leptos::prelude::*;

use super::commission_summary::{tier_badge, tier_label};
use crate::dashboards::d100_commission::chart::{LineChart, PADDING, VIEW_HEIGHT, VIEW_WIDTH};
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::ui::Badge;
use crate::shared::display::use_display;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

#[component]
pub fn CommissionDriverDetail(driver: CommissionDriver, currency: String) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let status = DriverStatus::of(&driver);
    let chart = LineChart::new(&driver.trend);

    let (direction_icon, direction_class) = match status.direction {
        TrendDirection::Increasing => ("trending-up", "driver-detail__trend text-success"),
        TrendDirection::Decreasing => ("trending-down", "driver-detail__trend text-danger"),
    };
    let direction = status.direction;

    let current_value = driver.current_value;
    let goal = driver.goal;
    let next_threshold = driver.next_threshold;
    let next_commission = driver.next_commission;
    let c1 = currency.clone();
    let c2 = currency.clone();
    let c3 = currency.clone();
    let c4 = currency;

    let points = chart
        .points
        .iter()
        .map(|point| {
            view! {
                <g>
                    <circle class="trend-chart__point" cx=format!("{:.1}", point.x) cy=format!("{:.1}", point.y) r="4" />
                    <text class="trend-chart__label" x=format!("{:.1}", point.x) y=format!("{:.1}", VIEW_HEIGHT - 4.0) text-anchor="middle">
                        {point.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="driver-detail">
            <div class="driver-detail__header">
                <h4>{driver.name.clone()}</h4>
                <Badge variant=tier_badge(status.tier)>
                    {move || tier_label(i18n.t(), status.tier)}
                </Badge>
            </div>

            <div class="driver-detail__figures">
                <span>{move || i18n.t().current} ": " {move || display.driver_value(&c1, current_value)}</span>
                <span>{move || i18n.t().goal} ": " {move || display.driver_value(&c2, goal)}</span>
                <span class=direction_class>
                    {icon(direction_icon)}
                    {move || match direction {
                        TrendDirection::Increasing => i18n.t().increasing,
                        TrendDirection::Decreasing => i18n.t().decreasing,
                    }}
                </span>
            </div>

            <ProgressBar value=status.progress tier=Some(status.tier) />

            <svg
                class="trend-chart"
                viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                preserveAspectRatio="none"
            >
                <line
                    class="trend-chart__axis"
                    x1={PADDING.to_string()}
                    y1={(VIEW_HEIGHT - PADDING).to_string()}
                    x2={(VIEW_WIDTH - PADDING).to_string()}
                    y2={(VIEW_HEIGHT - PADDING).to_string()}
                />
                <path class="trend-chart__line" d=chart.path.clone() fill="none" />
                {points}
            </svg>

            <div class="driver-detail__threshold">
                {icon("target")}
                <span>
                    {move || i18n.t().next_threshold} ": "
                    {move || display.driver_value(&c3, next_threshold)}
                    " → +"
                    {move || display.money(&c4, next_commission)}
                </span>
            </div>
        </div>
    }
}
