use contracts::dashboards::d100_commission::progress::ProgressTier;
use leptos::prelude::*;

/// Horizontal bar; `value` is clamped to 0..=100 before drawing
#[component]
pub fn ProgressBar(
    #[prop(into)]
    value: Signal<i64>,
    /// Fill colour; `None` uses the primary colour
    #[prop(into, optional)]
    tier: Signal<Option<ProgressTier>>,
    /// Centered text drawn over the bar
    #[prop(into, optional)]
    caption: Signal<Option<String>>,
    #[prop(optional)]
    large: bool,
) -> impl IntoView {
    let fill_class = move || match tier.get() {
        Some(tier) => format!("progress-bar__fill progress-bar__fill--{}", tier.as_str()),
        None => "progress-bar__fill".to_string(),
    };

    view! {
        <div class={if large { "progress-bar progress-bar--large" } else { "progress-bar" }}>
            <div
                class=fill_class
                style=move || format!("width: {}%;", value.get().clamp(0, 100))
            ></div>
            {move || caption.get().map(|text| view! {
                <div class="progress-bar__caption">{text}</div>
            })}
        </div>
    }
}
