use crate::dashboards::d100_commission::ui::SalesCommissionDashboard;
use crate::shared::display::provide_display_context;
use crate::shared::i18n::I18nProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Number formatting, refreshed from the backend once the dashboard mounts
    provide_display_context();

    view! {
        <ConfigProvider>
            <I18nProvider>
                <SalesCommissionDashboard />
            </I18nProvider>
        </ConfigProvider>
    }
}
