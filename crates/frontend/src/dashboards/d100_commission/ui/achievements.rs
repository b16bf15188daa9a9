use contracts::dashboards::d100_commission::{CommissionDriver, SalesRepData};
use leptos::prelude::*;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

/// Level, progress to the next level and one badge per driver
#[component]
pub fn Achievements(rep: SalesRepData, drivers: Vec<CommissionDriver>) -> impl IntoView {
    let i18n = use_i18n();
    let level_progress = rep.level_progress.round() as i64;
    let next_level = rep.next_level.clone();

    let badges = drivers
        .into_iter()
        .map(|driver| {
            let (variant, icon_name) = if driver.badge_earned {
                (BadgeVariant::Gold, "trophy")
            } else {
                (BadgeVariant::Neutral, "shield")
            };
            let earned = driver.badge_earned;
            view! {
                <div class="achievement">
                    <div class={if earned { "achievement__icon achievement__icon--earned" } else { "achievement__icon" }}>
                        {icon(icon_name)}
                    </div>
                    <div class="achievement__name">{driver.name}</div>
                    <Badge variant=variant>
                        {move || if earned { i18n.t().earned } else { i18n.t().locked }}
                    </Badge>
                </div>
            }
        })
        .collect_view();

    view! {
        <CardAnimated delay_ms=160>
            <div class="achievements">
                <div class="card-header">
                    <h3>{icon("award")} {move || i18n.t().achievement_progress}</h3>
                </div>

                <div class="achievements__level">
                    <div>
                        <div class="achievements__label">{move || i18n.t().current_level}</div>
                        <div class="achievements__value">{rep.level}</div>
                    </div>
                    <div class="achievements__next">
                        <div class="achievements__label">{move || i18n.t().next_level}</div>
                        <div class="achievements__value">{rep.next_level}</div>
                    </div>
                </div>

                <ProgressBar
                    value=level_progress
                    caption=Signal::derive(move || {
                        if level_progress >= 100 {
                            Some(i18n.t().complete.to_string())
                        } else {
                            Some(format!("{} {}: {}%", i18n.t().progress_to, next_level, level_progress))
                        }
                    })
                />

                <div class="achievements__badges">{badges}</div>
            </div>
        </CardAnimated>
    }
}
