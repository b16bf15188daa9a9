use contracts::dashboards::d100_commission::progress::{GoalProgress, ProgressTier};
use contracts::dashboards::d100_commission::SalesRepData;
use leptos::prelude::*;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::display::use_display;
use crate::shared::i18n::{use_i18n, Labels};

pub(crate) fn tier_label(labels: &Labels, tier: ProgressTier) -> &'static str {
    match tier {
        ProgressTier::Success => labels.on_track,
        ProgressTier::Warning => labels.close,
        ProgressTier::Danger => labels.at_risk,
    }
}

pub(crate) fn tier_badge(tier: ProgressTier) -> BadgeVariant {
    match tier {
        ProgressTier::Success => BadgeVariant::Success,
        ProgressTier::Warning => BadgeVariant::Warning,
        ProgressTier::Danger => BadgeVariant::Danger,
    }
}

/// Total commission against the period goal
#[component]
pub fn CommissionSummary(rep: SalesRepData) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let summary = GoalProgress::new(rep.commission, rep.goal);
    let commission = rep.commission;
    let goal = rep.goal;
    let c1 = rep.currency.clone();
    let c2 = rep.currency.clone();
    let c3 = rep.currency;

    let remaining = move || {
        if summary.reached {
            view! { <p class="commission-summary__reached text-success">{i18n.t().goal_completed}</p> }
                .into_any()
        } else {
            view! {
                <p class="commission-summary__remaining">
                    <strong>{display.money(&c3, summary.remaining)}</strong>
                    " "
                    {i18n.t().to_goal}
                </p>
            }
            .into_any()
        }
    };

    view! {
        <CardAnimated delay_ms=40 accent=summary.tier.as_str()>
            <div class="commission-summary">
                <div class="card-header">
                    <h3>{move || i18n.t().commission_summary}</h3>
                    <Badge variant=tier_badge(summary.tier)>
                        {move || tier_label(i18n.t(), summary.tier)}
                    </Badge>
                </div>

                <div class="commission-summary__figures">
                    <div>
                        <div class="commission-summary__label">{move || i18n.t().total_commission}</div>
                        <div class="commission-summary__value">{move || display.money(&c1, commission)}</div>
                    </div>
                    <div>
                        <div class="commission-summary__label">{move || i18n.t().period_goal}</div>
                        <div class="commission-summary__value">{move || display.money(&c2, goal)}</div>
                    </div>
                </div>

                <ProgressBar
                    value=summary.clamped
                    tier=Some(summary.tier)
                    caption=Signal::derive(move || {
                        Some(format!("{}% {}", summary.progress, i18n.t().of_target))
                    })
                    large=true
                />

                {remaining}

                <div class="commission-summary__status">
                    {move || {
                        if summary.reached {
                            view! { <Badge variant=BadgeVariant::Success>{i18n.t().achieved}</Badge> }.into_any()
                        } else {
                            view! { <Badge variant=BadgeVariant::Neutral>{i18n.t().not_yet}</Badge> }.into_any()
                        }
                    }}
                </div>
            </div>
        </CardAnimated>
    }
}
