use contracts::dashboards::d100_commission::profile::MotivationKind;
use contracts::dashboards::d100_commission::progress::GoalProgress;
use leptos::prelude::*;

use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

#[component]
pub fn MotivationMessage(commission: f64, goal: f64) -> impl IntoView {
    let i18n = use_i18n();
    let kind = MotivationKind::for_tier(GoalProgress::new(commission, goal).tier);

    let icon_name = match kind {
        MotivationKind::Success => "trophy",
        MotivationKind::Warning => "target",
        MotivationKind::Info => "info",
    };
    let text = move || match kind {
        MotivationKind::Success => i18n.t().motivation_success,
        MotivationKind::Warning => i18n.t().motivation_warning,
        MotivationKind::Info => i18n.t().motivation_info,
    };

    view! {
        <div class=format!("motivation motivation--{}", kind.as_str())>
            {icon(icon_name)}
            <p>{text}</p>
        </div>
    }
}
