use contracts::dashboards::d100_commission::drivers::reported_tier;
use contracts::dashboards::d100_commission::CommissionDriver;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use super::commission_driver::CommissionDriverDetail;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::display::use_display;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

/// Grid of driver cards; one card at a time can expand its details
#[component]
pub fn DriverCards(drivers: Vec<CommissionDriver>, currency: String) -> impl IntoView {
    let i18n = use_i18n();
    let expanded = RwSignal::new(None::<i64>);

    let cards = drivers
        .into_iter()
        .map(|driver| view! { <DriverCard driver=driver currency=currency.clone() expanded=expanded /> })
        .collect_view();

    view! {
        <section class="driver-cards">
            <h3 class="section-title">{move || i18n.t().commission_drivers}</h3>
            <div class="driver-cards__grid">{cards}</div>
        </section>
    }
}

#[component]
fn DriverCard(
    driver: CommissionDriver,
    currency: String,
    expanded: RwSignal<Option<i64>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let id = driver.id;
    let tier = reported_tier(&driver);
    let progress = driver.progress.round() as i64;
    let badge_earned = driver.badge_earned;
    let current_value = driver.current_value;
    let goal = driver.goal;
    let commission = driver.commission;
    let next_threshold = driver.next_threshold;
    let next_commission = driver.next_commission;
    let tip = driver.tip.clone();

    let c1 = currency.clone();
    let c2 = currency.clone();
    let c3 = currency.clone();
    let c4 = currency.clone();
    let c5 = currency.clone();

    let is_open = move || expanded.get() == Some(id);
    let toggle = move |_| {
        expanded.update(|current| {
            *current = if *current == Some(id) { None } else { Some(id) };
        })
    };

    let detail_driver = driver.clone();
    let detail = move || {
        is_open().then(|| {
            view! { <CommissionDriverDetail driver=detail_driver.clone() currency=currency.clone() /> }
        })
    };

    view! {
        <CardAnimated delay_ms=200 accent=tier.as_str()>
            <div class="driver-card">
                <div class="driver-card__header">
                    <span class="driver-card__icon">{icon(driver.icon.icon_name())}</span>
                    <h4>{driver.name.clone()}</h4>
                    <Badge variant={if badge_earned { BadgeVariant::Gold } else { BadgeVariant::Neutral }}>
                        {move || i18n.t().badge}
                    </Badge>
                </div>

                <ProgressBar
                    value=progress
                    tier=Some(tier)
                    caption=Signal::derive(move || Some(format!("{} {}%", i18n.t().progress, progress)))
                />

                <div class="driver-card__figures">
                    <div>
                        <div class="driver-card__label">{move || i18n.t().current}</div>
                        <div class="driver-card__value">{move || display.driver_value(&c1, current_value)}</div>
                    </div>
                    <div>
                        <div class="driver-card__label">{move || i18n.t().goal}</div>
                        <div class="driver-card__value">{move || display.driver_value(&c2, goal)}</div>
                    </div>
                    <div>
                        <div class="driver-card__label">{move || i18n.t().commission_earned}</div>
                        <div class={if commission > 0.0 { "driver-card__value text-success" } else { "driver-card__value text-danger" }}>
                            {move || display.money(&c3, commission)}
                        </div>
                    </div>
                </div>

                <p class="driver-card__next">
                    {move || i18n.t().reach} " "
                    <strong>{move || display.driver_value(&c4, next_threshold)}</strong>
                    " " {move || i18n.t().to_earn} " "
                    <strong>"+" {move || display.money(&c5, next_commission)}</strong>
                    " " {move || i18n.t().more}
                </p>

                {(!tip.is_empty()).then(|| view! {
                    <p class="driver-card__tip">{icon("info")} {tip.clone()}</p>
                })}

                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=toggle
                >
                    {move || if is_open() { i18n.t().hide_details } else { i18n.t().show_details }}
                </Button>

                {detail}
            </div>
        </CardAnimated>
    }
}
