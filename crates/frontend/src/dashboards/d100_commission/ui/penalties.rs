use contracts::dashboards::d100_commission::penalties::PenaltySummary;
use contracts::dashboards::d100_commission::Penalty;
use leptos::prelude::*;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::display::use_display;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

/// Compact row of penalty amounts plus their total; empty when nothing was charged
#[component]
pub fn PenaltyBadges(penalties: Vec<Penalty>, currency: String) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let Some(total) = PenaltySummary::from_penalties(&penalties).charged_total() else {
        return ().into_any();
    };

    let badges = penalties
        .into_iter()
        .map(|penalty| {
            let currency = currency.clone();
            let amount = penalty.amount;
            view! {
                <span title=penalty.reason>
                    <Badge variant=BadgeVariant::DangerOutline>
                        {move || format!("-{}", display.money(&currency, amount))}
                    </Badge>
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="penalty-badges">
            {badges}
            <Badge variant=BadgeVariant::Danger>
                {move || format!("{}: -{}", i18n.t().total, display.money(&currency, total))}
            </Badge>
        </div>
    }
    .into_any()
}

/// Full penalties list, or the distinct "no penalties" state
#[component]
pub fn PenaltiesSection(penalties: Vec<Penalty>, currency: String) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let summary = PenaltySummary::from_penalties(&penalties);
    let heading = move || match summary {
        PenaltySummary::Clear => i18n.t().penalties.to_string(),
        PenaltySummary::Charged { count, .. } => format!("{} ({})", i18n.t().penalties, count),
    };

    let body = match summary {
        PenaltySummary::Clear => view! {
            <div class="penalties__empty">
                {icon("circle-check")}
                <div>
                    <strong>{move || i18n.t().no_penalties}</strong>
                    <p>{move || i18n.t().no_penalties_message}</p>
                </div>
            </div>
        }
        .into_any(),
        PenaltySummary::Charged { total, .. } => {
            let rows = penalties
                .into_iter()
                .map(|penalty| {
                    let currency = currency.clone();
                    let amount = penalty.amount;
                    view! {
                        <li class="penalties__item">
                            <div>
                                <div class="penalties__reason">{penalty.reason}</div>
                                <div class="penalties__date">{icon("calendar")} {penalty.date}</div>
                            </div>
                            <span class="penalties__amount text-danger">
                                {move || format!("-{}", display.money(&currency, amount))}
                            </span>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <ul class="penalties__list">{rows}</ul>
                <div class="penalties__total">
                    <span>{move || i18n.t().total_penalties}</span>
                    <strong class="text-danger">
                        {move || format!("-{}", display.money(&currency, total))}
                    </strong>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <CardAnimated delay_ms=240 accent="danger">
            <div class="penalties">
                <div class="card-header">
                    <h3>{icon("alert-triangle")} {heading}</h3>
                </div>
                {body}
            </div>
        </CardAnimated>
    }
}
