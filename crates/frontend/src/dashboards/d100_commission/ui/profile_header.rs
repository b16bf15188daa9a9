use contracts::dashboards::d100_commission::profile::initials;
use contracts::dashboards::d100_commission::{PeriodOption, SalesRepData};
use leptos::prelude::*;
use thaw::*;

use crate::shared::i18n::use_i18n;

/// Avatar, name, route and the period selector
#[component]
pub fn ProfileHeader(
    rep: SalesRepData,
    #[prop(into)] periods: Signal<Vec<PeriodOption>>,
    selected_period: RwSignal<String>,
) -> impl IntoView {
    let i18n = use_i18n();
    let (image_failed, set_image_failed) = signal(false);

    let fallback = initials(&rep.name);
    let avatar_url = rep.avatar_url.clone();
    let alt = rep.name.clone();

    let avatar = move || match avatar_url.clone() {
        Some(url) if !image_failed.get() => view! {
            <img
                class="profile-header__avatar-image"
                src=url
                alt=alt.clone()
                on:error=move |_| set_image_failed.set(true)
            />
        }
        .into_any(),
        _ => view! { <span class="profile-header__initials">{fallback.clone()}</span> }.into_any(),
    };

    let route_number = rep.route_number.clone();

    view! {
        <div class="profile-header">
            <div class="profile-header__identity">
                <div class="profile-header__avatar">{avatar}</div>
                <div>
                    <h2 class="profile-header__name">{rep.name.clone()}</h2>
                    <p class="profile-header__role">
                        {move || i18n.t().sales_representative}
                        " · "
                        {move || i18n.t().route}
                        " "
                        {route_number.clone()}
                    </p>
                </div>
            </div>

            <div class="profile-header__period" title=move || i18n.t().select_period>
                <Select value=selected_period>
                    <For
                        each=move || periods.get()
                        key=|period| period.value.clone()
                        children=move |period: PeriodOption| {
                            let value = period.value.clone();
                            let label = move || {
                                i18n.t()
                                    .period_label(&period.value)
                                    .unwrap_or_else(|| period.label.clone())
                            };
                            view! { <option value=value>{label}</option> }
                        }
                    />
                </Select>
            </div>
        </div>
    }
}
