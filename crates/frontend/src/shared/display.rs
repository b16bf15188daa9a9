//! Display settings context: how amounts are printed across the dashboard.

use contracts::shared::format::{
    format_currency, format_driver_value, format_number_int, is_whole, DisplaySettings,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DisplayContext {
    pub settings: RwSignal<DisplaySettings>,
}

impl DisplayContext {
    /// `Q42,500.00` (reactive)
    pub fn money(&self, currency: &str, value: f64) -> String {
        self.settings
            .with(|settings| format_currency(currency, value, settings))
    }

    /// `35,000` (reactive)
    pub fn integer(&self, value: f64) -> String {
        self.settings.with(|settings| format_number_int(value, settings))
    }

    /// Counts print bare, fractional values as money
    pub fn driver_value(&self, currency: &str, value: f64) -> String {
        let text = self
            .settings
            .with(|settings| format_driver_value(value, settings));
        if is_whole(value) {
            text
        } else {
            format!("{}{}", currency, text)
        }
    }
}

/// Provides display settings, starting from the defaults
pub fn provide_display_context() -> DisplayContext {
    let context = DisplayContext {
        settings: RwSignal::new(DisplaySettings::default()),
    };
    provide_context(context);
    context
}

/// Hook to use the display context; defaults when not provided
pub fn use_display() -> DisplayContext {
    use_context::<DisplayContext>().unwrap_or_else(|| DisplayContext {
        settings: RwSignal::new(DisplaySettings::default()),
    })
}
