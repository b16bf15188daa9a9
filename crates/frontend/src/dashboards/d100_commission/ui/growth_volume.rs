use contracts::dashboards::d100_commission::milestones::{growth_label, Milestone, ProgressBarLayout};
use contracts::dashboards::d100_commission::GrowthVolumeData;
use leptos::prelude::*;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::display::use_display;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

/// Growth-by-volume card: total sales, growth bar and the four volume stats
#[component]
pub fn GrowthVolume(data: GrowthVolumeData, currency: String) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let growth = data.growth_percentage;
    let indicator_class = if growth >= 0.0 {
        "growth-volume__indicator text-success"
    } else {
        "growth-volume__indicator text-danger"
    };
    let indicator_icon = if growth >= 0.0 { "trending-up" } else { "trending-down" };
    let total_sales = data.total_sales;
    let target = data.target_growth_percentage;
    let total_currency = currency.clone();

    view! {
        <CardAnimated delay_ms=80 accent="primary">
            <div class="growth-volume">
                <div class="card-header">
                    <h3>{move || i18n.t().growth_by_volume}</h3>
                    <span class=indicator_class>
                        {icon(indicator_icon)}
                        {growth_label(growth)}
                    </span>
                </div>

                <div class="growth-volume__total">
                    <div class="growth-volume__total-label">{move || i18n.t().total_sales_quarter}</div>
                    <div class="growth-volume__total-value">
                        {move || display.money(&total_currency, total_sales)}
                    </div>
                    <div class="growth-volume__target">
                        {move || i18n.t().target_growth}
                        " "
                        {growth_label(target)}
                    </div>
                </div>

                <GrowthProgressBar growth=growth target=target currency=currency.clone() />
                <VolumeStats data=data currency=currency />
            </div>
        </CardAnimated>
    }
}

/// Growth bar with zero, negative, activation and forward markers
#[component]
pub fn GrowthProgressBar(growth: f64, target: f64, currency: String) -> impl IntoView {
    let display = use_display();
    let layout = ProgressBarLayout::new(growth, target);

    let marker = move |milestone: Milestone, currency: String| {
        let class = format!("milestone {}", milestone.style.css_modifier());
        let reward = milestone.reward.map(|amount| {
            let currency = currency.clone();
            view! { <span class="milestone__reward">{move || format!("+{}", display.money(&currency, amount))}</span> }
        });
        view! {
            <div class=class style=format!("left: {:.2}%;", milestone.position)>
                <span class="milestone__tick"></span>
                <span class="milestone__label">{milestone.label}</span>
                {reward}
            </div>
        }
    };

    let negative = layout
        .negative
        .iter()
        .cloned()
        .map(|m| marker(m, currency.clone()))
        .collect_view();
    let forward = layout
        .forward
        .iter()
        .cloned()
        .map(|m| marker(m, currency.clone()))
        .collect_view();
    let zero = marker(layout.zero.clone(), currency.clone());
    let activation = marker(layout.activation.clone(), currency.clone());

    let unlocked = layout.unlocked_bonus;
    let unlocked_view = (unlocked > 0.0).then(|| {
        let currency = currency.clone();
        view! {
            <div class="growth-bar__unlocked">
                {icon("award")}
                {move || format!("+{}", display.money(&currency, unlocked))}
            </div>
        }
    });

    view! {
        <div class="growth-bar">
            <div class="growth-bar__track">
                <div
                    class=format!("growth-bar__fill growth-bar__fill--{}", layout.fill_tone.as_str())
                    style=format!("width: {:.2}%;", layout.fill_width.min(100.0))
                ></div>
                <div
                    class="growth-bar__current"
                    style=format!("left: {:.2}%;", layout.current_position)
                    title=growth_label(layout.growth)
                ></div>
            </div>
            <div class="growth-bar__markers">
                {negative}
                {zero}
                {activation}
                {forward}
            </div>
            {unlocked_view}
        </div>
    }
}

#[component]
fn VolumeStats(data: GrowthVolumeData, currency: String) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let c1 = currency.clone();
    let c2 = currency.clone();
    let c3 = currency.clone();
    let c4 = currency;

    view! {
        <div class="stats-grid">
            <StatCard
                label=Signal::derive(move || i18n.t().growth_target.to_string())
                icon_name="target"
                value=Signal::derive(move || display.money(&c1, data.growth_target))
                subtitle=Signal::derive(move || {
                    Some(format!("{} {}", i18n.t().target_growth, growth_label(data.target_growth_percentage)))
                })
            />
            <StatCard
                label=Signal::derive(move || i18n.t().current_month_sales.to_string())
                icon_name="calendar-days"
                value=Signal::derive(move || display.money(&c2, data.current_month_sales))
            />
            <StatCard
                label=Signal::derive(move || i18n.t().remaining_needed.to_string())
                icon_name="arrow-right"
                value=Signal::derive(move || display.money(&c3, data.remaining_sales_needed))
                tone=StatTone::Warning
            />
            <StatCard
                label=Signal::derive(move || i18n.t().commission_earned.to_string())
                icon_name="award"
                value=Signal::derive(move || display.money(&c4, data.commission_earned))
                tone=StatTone::for_amount(data.commission_earned)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use contracts::dashboards::d100_commission::milestones::MilestoneStyle;

    const STYLESHEET: &str = include_str!("../../../../styles/dashboard.css");

    fn rule(selector: &str) -> &'static str {
        STYLESHEET
            .lines()
            .find(|line| line.starts_with(&format!(".{} ", selector)))
            .unwrap_or_default()
    }

    #[test]
    fn test_milestone_colours() {
        let below = rule(MilestoneStyle::BelowTarget.css_modifier());
        assert!(below.contains("var(--color-danger)"), "{below}");

        let target = rule(MilestoneStyle::Target.css_modifier());
        assert!(target.contains("#111827"), "{target}");

        let unlocked = rule(MilestoneStyle::Unlocked.css_modifier());
        assert!(unlocked.contains("var(--color-success)"), "{unlocked}");
    }
}
