use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour of a stat card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
}

impl StatTone {
    /// Positive amounts are good news, zero and negative are not
    pub fn for_amount(amount: f64) -> Self {
        if amount > 0.0 {
            StatTone::Success
        } else {
            StatTone::Danger
        }
    }

    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Danger => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into, optional)]
    tone: Signal<StatTone>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=move || tone.get().class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_for_amount() {
        assert_eq!(StatTone::for_amount(200.0), StatTone::Success);
        assert_eq!(StatTone::for_amount(0.0), StatTone::Danger);
        assert_eq!(StatTone::for_amount(-780.0), StatTone::Danger);
        assert_eq!(StatTone::Danger.class(), "stat-card stat-card--error");
    }
}
