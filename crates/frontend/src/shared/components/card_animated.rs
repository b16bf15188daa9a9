//! CardAnimated: thaw Card with the `card-appear` animation.
//!
//! Cards further down the page pass a growing `delay_ms` for a stagger effect.
//! An optional `accent` draws a coloured stripe along the top edge.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation
    #[prop(optional, into)]
    style: String,
    /// Extra css classes
    #[prop(optional, into)]
    class: String,
    /// Stripe modifier: "primary", "success", "warning", "danger"
    #[prop(optional, into)]
    accent: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    let accent_view = move || {
        accent.get().map(|modifier| {
            view! { <div class=format!("card-accent card-accent--{}", modifier)></div> }
        })
    };

    view! {
        <Card class=format!("dashboard-card {}", class) attr:style=full_style>
            {accent_view}
            {children()}
        </Card>
    }
}
