use leptos::prelude::*;

/// Colour scheme of a badge
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Danger,
    /// Bordered badge with danger text
    DangerOutline,
    /// Earned achievement
    Gold,
    #[default]
    Neutral,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Danger => "badge--error",
            BadgeVariant::DangerOutline => "badge--error-outline",
            BadgeVariant::Gold => "badge--gold",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: Signal<BadgeVariant>,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant.get().class(), additional_class())>
            {children()}
        </span>
    }
}
