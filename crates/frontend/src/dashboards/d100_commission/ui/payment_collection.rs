use contracts::dashboards::d100_commission::payments::{
    collection_rate, segments, Segment, UPCOMING_SEGMENT_SCALE,
};
use contracts::dashboards::d100_commission::PaymentCollectionData;
use leptos::prelude::*;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::display::use_display;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

fn segment_bar(items: Vec<Segment>, modifier: &'static str) -> impl IntoView {
    view! {
        <div class="segment-bar">
            {items
                .into_iter()
                .map(|segment| {
                    let class = if segment.filled {
                        format!("segment-bar__item segment-bar__item--{}", modifier)
                    } else {
                        "segment-bar__item".to_string()
                    };
                    view! { <span class=class data-index={segment.index.to_string()}></span> }
                })
                .collect_view()}
        </div>
    }
}

/// Collections card
#[component]
pub fn PaymentCollection(data: PaymentCollectionData, currency: String) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let rate = collection_rate(&data);
    let overdue = segment_bar(segments(data.overdue_payments, data.total_payments), "danger");
    let upcoming = segment_bar(
        segments(data.upcoming_payments, UPCOMING_SEGMENT_SCALE),
        "primary",
    );

    let collected_currency = currency.clone();
    let total_collected = data.total_collected;
    let commission_earned = data.commission_earned;
    let collected = data.payments_collected;
    let total = data.total_payments;
    let overdue_count = data.overdue_payments;
    let upcoming_count = data.upcoming_payments;

    view! {
        <CardAnimated delay_ms=120 accent="success">
            <div class="payment-collection">
                <div class="card-header">
                    <h3>{icon("credit-card")} {move || i18n.t().payment_collection}</h3>
                    <Badge variant=BadgeVariant::Primary>{move || i18n.t().this_week}</Badge>
                </div>

                <div class="payment-collection__total">
                    <div class="payment-collection__label">{move || i18n.t().total_collected}</div>
                    <div class="payment-collection__value">
                        {move || display.money(&collected_currency, total_collected)}
                    </div>
                </div>

                <div class="payment-collection__invoices">
                    <div class="payment-collection__label">{move || i18n.t().invoices_to_collect}</div>
                    <div class="payment-collection__row">
                        <span>{move || i18n.t().overdue} " (" {overdue_count} ")"</span>
                        {overdue}
                    </div>
                    <div class="payment-collection__row">
                        <span>{move || i18n.t().upcoming} " (" {upcoming_count} ")"</span>
                        {upcoming}
                    </div>
                </div>

                <ProgressBar
                    value=rate
                    caption=Signal::derive(move || {
                        Some(format!(
                            "{} {} {} {}",
                            collected,
                            i18n.t().of_payments,
                            total,
                            i18n.t().payments_collected,
                        ))
                    })
                />

                <div class="payment-collection__description">
                    <div class="payment-collection__label">{move || i18n.t().commission_description}</div>
                    <p>{move || i18n.t().collection_rate_description}</p>
                </div>

                <div class="payment-collection__earned">
                    <span>{move || i18n.t().commission_earned}</span>
                    <strong class={if commission_earned > 0.0 { "text-success" } else { "text-danger" }}>
                        {move || display.money(&currency, commission_earned)}
                    </strong>
                </div>

                <p class="caption">{move || i18n.t().collection_caption}</p>
            </div>
        </CardAnimated>
    }
}
