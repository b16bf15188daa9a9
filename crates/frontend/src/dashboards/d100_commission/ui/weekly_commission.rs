use contracts::dashboards::d100_commission::WeeklyCommissionData;
use leptos::prelude::*;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::display::use_display;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

#[component]
pub fn WeeklyCommission(data: WeeklyCommissionData, currency: String) -> impl IntoView {
    let i18n = use_i18n();
    let display = use_display();

    let amount_class = if data.commission > 0.0 {
        "weekly-commission__amount text-success"
    } else {
        "weekly-commission__amount text-danger"
    };
    let commission = data.commission;

    view! {
        <CardAnimated delay_ms=0>
            <div class="weekly-commission">
                <div class="weekly-commission__range">
                    {icon("calendar")}
                    <span>{data.date_range.clone()}</span>
                </div>
                <div class="weekly-commission__label">{move || i18n.t().weekly_commission}</div>
                <div class=amount_class>{move || display.money(&currency, commission)}</div>
            </div>
        </CardAnimated>
    }
}
