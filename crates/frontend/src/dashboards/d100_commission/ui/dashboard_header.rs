use contracts::dashboards::d100_commission::SalesRepListItem;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::i18n::{use_i18n, LanguageSelect};

/// Page title, language selector and rep selector
#[component]
pub fn DashboardHeader(
    #[prop(into)] reps: Signal<Vec<SalesRepListItem>>,
    selected_rep: RwSignal<String>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <PageHeader title=Signal::derive(move || i18n.t().dashboard_title.to_string())>
            <LanguageSelect />
            <div class="rep-select" title=move || i18n.t().select_seller>
                <Select value=selected_rep>
                    <For
                        each=move || reps.get()
                        key=|rep| rep.id.clone()
                        children=move |rep: SalesRepListItem| {
                            let id = rep.id.clone();
                            let label = move || {
                                format!("{} - {} {}", rep.name, i18n.t().route, rep.route_number)
                            };
                            view! { <option value=id>{label}</option> }
                        }
                    />
                </Select>
            </div>
        </PageHeader>
    }
}
