//! Label tables and the language context.
//!
//! Spanish is the default language. The selected language is persisted in
//! localStorage.

mod en;
mod es;

use leptos::prelude::*;
use thaw::*;
use web_sys::window;

/// Available UI languages
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Code used in localStorage and in the selector
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
        }
    }

    /// Unknown codes fall back to Spanish
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::En,
            _ => Language::Es,
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Es, Language::En]
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::Es => &es::LABELS,
            Language::En => &en::LABELS,
        }
    }
}

/// Every text shown by the dashboard
#[derive(Debug)]
pub struct Labels {
    // Page
    pub dashboard_title: &'static str,
    pub select_seller: &'static str,
    pub route: &'static str,
    pub sales_representative: &'static str,
    pub select_period: &'static str,
    pub language: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub no_data: &'static str,

    // Weekly commission
    pub weekly_commission: &'static str,
    pub this_week: &'static str,

    // Growth by volume
    pub growth_by_volume: &'static str,
    pub total_sales_quarter: &'static str,
    pub target_growth: &'static str,
    pub growth_target: &'static str,
    pub current_month_sales: &'static str,
    pub remaining_needed: &'static str,
    pub commission_earned: &'static str,

    // Payment collection
    pub payment_collection: &'static str,
    pub total_collected: &'static str,
    pub invoices_to_collect: &'static str,
    pub overdue: &'static str,
    pub upcoming: &'static str,
    pub commission_description: &'static str,
    pub collection_rate_description: &'static str,
    pub collection_caption: &'static str,
    pub payments_collected: &'static str,
    pub of_payments: &'static str,

    // Commission summary
    pub commission_summary: &'static str,
    pub total_commission: &'static str,
    pub period_goal: &'static str,
    pub of_target: &'static str,
    pub to_goal: &'static str,
    pub goal_completed: &'static str,
    pub achieved: &'static str,
    pub not_yet: &'static str,
    pub on_track: &'static str,
    pub close: &'static str,
    pub at_risk: &'static str,

    // Achievements
    pub achievement_progress: &'static str,
    pub current_level: &'static str,
    pub progress_to: &'static str,
    pub next_level: &'static str,
    pub earned: &'static str,
    pub locked: &'static str,
    pub complete: &'static str,

    // Drivers
    pub commission_drivers: &'static str,
    pub progress: &'static str,
    pub current: &'static str,
    pub goal: &'static str,
    pub badge: &'static str,
    pub reach: &'static str,
    pub to_earn: &'static str,
    pub more: &'static str,
    pub increasing: &'static str,
    pub decreasing: &'static str,
    pub next_threshold: &'static str,
    pub show_details: &'static str,
    pub hide_details: &'static str,

    // Penalties
    pub penalties: &'static str,
    pub no_penalties: &'static str,
    pub no_penalties_message: &'static str,
    pub total_penalties: &'static str,
    pub total: &'static str,

    // Simulator
    pub commission_simulator: &'static str,
    pub number_of_sales: &'static str,
    pub avg_sale_value: &'static str,
    pub calculate_earnings: &'static str,
    pub if_you_close: &'static str,
    pub more_sales: &'static str,
    pub at: &'static str,
    pub each: &'static str,
    pub additional_earnings: &'static str,
    pub total_potential: &'static str,

    // History
    pub performance_history: &'static str,
    pub historical_performance: &'static str,
    pub actual: &'static str,
    pub target: &'static str,
    pub best_performance: &'static str,
    pub area_for_improvement: &'static str,

    // Motivation
    pub motivation_success: &'static str,
    pub motivation_warning: &'static str,
    pub motivation_info: &'static str,

    pub months: [&'static str; 12],
}

/// Month keys used in period values ("may2025")
const MONTH_KEYS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

impl Labels {
    /// Localized label of a period key such as `may2025`; `None` for unknown keys
    pub fn period_label(&self, key: &str) -> Option<String> {
        let month = key.get(..3)?;
        let year = key.get(3..)?;
        let index = MONTH_KEYS.iter().position(|m| *m == month)?;
        if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(format!("{} {}", self.months[index], year))
    }
}

const LANGUAGE_STORAGE_KEY: &str = "app-language";

fn load_language_from_storage() -> Language {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .map(|s| Language::from_code(&s))
        .unwrap_or_default()
}

fn save_language_to_storage(language: Language) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.as_str());
    }
}

/// Language context type
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<Language>,
}

impl I18nContext {
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        save_language_to_storage(language);
    }

    /// Labels of the current language (reactive)
    pub fn t(&self) -> &'static Labels {
        self.language.get().labels()
    }
}

/// Provides the language context to children components
#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let language = RwSignal::new(load_language_from_storage());
    provide_context(I18nContext { language });

    children()
}

/// Hook to use the language context; outside a provider Spanish is used
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().unwrap_or_else(|| I18nContext {
        language: RwSignal::new(Language::default()),
    })
}

/// Language selector
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let ctx = use_i18n();
    let select_value = RwSignal::new(ctx.language.get_untracked().as_str().to_string());

    Effect::new(move |_| {
        let language = Language::from_code(&select_value.get());
        if language != ctx.language.get_untracked() {
            ctx.set_language(language);
        }
    });

    view! {
        <div class="language-select" title=move || ctx.t().language>
            <Select value=select_value size=SelectSize::Small>
                {Language::all()
                    .into_iter()
                    .map(|language| view! {
                        <option value=language.as_str()>{language.display_name()}</option>
                    })
                    .collect_view()}
            </Select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::default(), Language::Es);
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("fr"), Language::Es);
        for language in Language::all() {
            assert_eq!(Language::from_code(language.as_str()), language);
        }
    }

    #[test]
    fn test_period_label() {
        assert_eq!(Language::Es.labels().period_label("may2025").as_deref(), Some("Mayo 2025"));
        assert_eq!(Language::En.labels().period_label("jan2025").as_deref(), Some("January 2025"));
        assert_eq!(Language::Es.labels().period_label("q2-2025"), None);
        assert_eq!(Language::Es.labels().period_label("may"), None);
        assert_eq!(Language::Es.labels().period_label(""), None);
    }

    #[test]
    fn test_tables_differ() {
        let es = Language::Es.labels();
        let en = Language::En.labels();
        assert_eq!(es.total_commission, "Comisión Total");
        assert_eq!(en.total_commission, "Total Commission");
        assert_ne!(es.no_penalties_message, en.no_penalties_message);
    }
}
