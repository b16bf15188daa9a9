use contracts::dashboards::d100_commission::history::find_extremes;
use contracts::dashboards::d100_commission::HistoricalPeriod;
use leptos::prelude::*;

use crate::dashboards::d100_commission::chart::{bar_groups, Bar, PADDING, VIEW_HEIGHT, VIEW_WIDTH};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

fn rect(bar: &Bar, class: &'static str) -> impl IntoView {
    view! {
        <rect
            class=class
            x=format!("{:.1}", bar.x)
            y=format!("{:.1}", bar.y)
            width=format!("{:.1}", bar.width)
            height=format!("{:.1}", bar.height)
            rx="2"
        />
    }
}

/// Actual vs target bars per period, with the best and worst periods called out
#[component]
pub fn HistoricalPerformance(periods: Vec<HistoricalPeriod>) -> impl IntoView {
    let i18n = use_i18n();

    if periods.is_empty() {
        return view! {
            <CardAnimated delay_ms=320>
                <div class="history">
                    <div class="card-header">
                        <h3>{move || i18n.t().performance_history}</h3>
                    </div>
                    <p class="history__empty">{move || i18n.t().no_data}</p>
                </div>
            </CardAnimated>
        }
        .into_any();
    }

    let bars = bar_groups(&periods)
        .into_iter()
        .map(|group| {
            view! {
                <g>
                    {rect(&group.actual, "history-chart__actual")}
                    {rect(&group.target, "history-chart__target")}
                    <text
                        class="history-chart__label"
                        x=format!("{:.1}", group.center)
                        y=format!("{:.1}", VIEW_HEIGHT - PADDING / 3.0)
                        text-anchor="middle"
                    >
                        {group.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    let highlights = find_extremes(&periods).map(|extremes| {
        let best_label = format!(
            "{}: {}%",
            extremes.best.period.period,
            extremes.best.percent_of_target()
        );
        let worst_label = format!(
            "{}: {}%",
            extremes.worst.period.period,
            extremes.worst.percent_of_target()
        );
        view! {
            <div class="history__highlights">
                <div class="history__highlight history__highlight--best">
                    {icon("trophy")}
                    <div>
                        <div class="history__highlight-title">{move || i18n.t().best_performance}</div>
                        <div>{best_label}</div>
                    </div>
                </div>
                <div class="history__highlight history__highlight--worst">
                    {icon("alert-triangle")}
                    <div>
                        <div class="history__highlight-title">{move || i18n.t().area_for_improvement}</div>
                        <div>{worst_label}</div>
                    </div>
                </div>
            </div>
        }
    });

    view! {
        <CardAnimated delay_ms=320>
            <div class="history">
                <div class="card-header">
                    <h3>{move || i18n.t().performance_history}</h3>
                    <div class="history__legend">
                        <span class="history__legend-item history__legend-item--actual">{move || i18n.t().actual}</span>
                        <span class="history__legend-item history__legend-item--target">{move || i18n.t().target}</span>
                    </div>
                </div>
                <svg
                    class="history-chart"
                    viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                    role="img"
                    aria-label=move || i18n.t().historical_performance
                >
                    {bars}
                </svg>
                {highlights}
            </div>
        </CardAnimated>
    }
    .into_any()
}
